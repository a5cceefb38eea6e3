//! Inventory domain: record types and CRUD service.

mod service;
mod types;

pub use service::{InventoryError, InventoryService};
pub use types::{
    Category, Item, ItemPatch, NewItem, ParseCategoryError, ParseSortFieldError, SortField,
    SortOrder,
};
