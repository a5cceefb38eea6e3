//! Persistence seam for the inventory collection.
//!
//! The collection is always read and written wholesale; `ItemStore` is the
//! boundary behind which the flat-file backing can later be swapped for an
//! indexed store without touching the API layer.

mod file;

use std::path::PathBuf;

use thiserror::Error;

use crate::inventory::Item;

pub use file::FileStore;

/// Errors that can occur when loading or saving the collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read inventory file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write inventory file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse inventory file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize inventory: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Durable storage for the full record collection.
///
/// Both operations cover the whole collection; there is no per-record
/// access and no locking across a load/save pair.
pub trait ItemStore: Send + Sync {
    /// Read the full collection. A store that has never been written
    /// yields an empty collection.
    fn load(&self) -> Result<Vec<Item>, StoreError>;

    /// Overwrite the persisted collection with `items`.
    fn save(&self, items: &[Item]) -> Result<(), StoreError>;
}
