use std::fs;
use std::path::{Path, PathBuf};

use crate::inventory::Item;
use crate::store::{ItemStore, StoreError};

/// Flat-file JSON store: one pretty-printed document holding the full
/// record collection, read and rewritten in full on every mutation.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemStore for FileStore {
    /// Missing file is the first-run case and loads as an empty collection.
    /// An unreadable or corrupt file is surfaced as an error rather than
    /// silently treated as empty.
    fn load(&self) -> Result<Vec<Item>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        serde_json::from_str(&content).map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "inventory file is corrupt");
            StoreError::Parse {
                path: self.path.clone(),
                source: e,
            }
        })
    }

    fn save(&self, items: &[Item]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(items).map_err(StoreError::Serialize)?;
        fs::write(&self.path, content).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}
