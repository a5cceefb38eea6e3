use axum::routing::get;
use axum::Router;

use crate::api::handlers::{create_item, delete_item, health, list_items, update_item};
use crate::inventory::InventoryService;

/// Shared state handed to every handler.
///
/// The service is an explicitly owned instance, not a module-level
/// singleton, so tests can run each router against its own store.
#[derive(Clone)]
pub struct AppState {
    pub service: InventoryService,
}

pub fn build_router(service: InventoryService) -> Router {
    let state = AppState { service };

    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", axum::routing::put(update_item).delete(delete_item))
        .route("/health", get(health))
        .with_state(state)
}
