use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::inventory::{Item, ItemPatch, NewItem};
use crate::store::{ItemStore, StoreError};

/// Errors from inventory operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("item '{id}' not found")]
    NotFound { id: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// CRUD operations over the record collection.
///
/// Owns the store behind its seam; every operation is an independent
/// load-modify-save cycle over the whole collection, with no in-memory
/// copy kept between calls. Concurrent mutations can interleave and lose
/// updates; callers that need serialization add it at this seam.
#[derive(Clone)]
pub struct InventoryService {
    store: Arc<dyn ItemStore>,
}

impl InventoryService {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// The full current collection, in insertion order.
    pub fn list(&self) -> Result<Vec<Item>, InventoryError> {
        Ok(self.store.load()?)
    }

    /// Append a new record with a freshly generated id and persist.
    pub fn create(&self, new: NewItem) -> Result<Item, InventoryError> {
        let mut items = self.store.load()?;
        let item = Item {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            quantity: new.quantity,
            price: new.price,
            category: new.category,
        };
        items.push(item.clone());
        self.store.save(&items)?;

        tracing::info!(id = %item.id, name = %item.name, "item created");
        Ok(item)
    }

    /// Shallow-merge `patch` over the record with `id` and persist.
    /// Other records are untouched.
    pub fn update(&self, id: &str, patch: ItemPatch) -> Result<Item, InventoryError> {
        let mut items = self.store.load()?;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| InventoryError::NotFound { id: id.to_string() })?;

        item.apply_patch(patch);
        let updated = item.clone();
        self.store.save(&items)?;

        tracing::info!(id = %updated.id, "item updated");
        Ok(updated)
    }

    /// Remove the record with `id` and persist.
    pub fn remove(&self, id: &str) -> Result<(), InventoryError> {
        let mut items = self.store.load()?;
        let before = items.len();
        items.retain(|item| item.id != id);

        if items.len() == before {
            return Err(InventoryError::NotFound { id: id.to_string() });
        }

        self.store.save(&items)?;
        tracing::info!(id = %id, "item deleted");
        Ok(())
    }
}
