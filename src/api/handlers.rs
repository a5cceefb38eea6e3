use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::router::AppState;
use crate::inventory::{Item, ItemPatch, NewItem};

/// Confirmation body for update/delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

/// GET /items: the full collection, no filtering or pagination.
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.service.list()?;
    Ok(Json(items))
}

/// POST /items: create a record; the id is always server-generated.
pub async fn create_item(
    State(state): State<AppState>,
    Json(new): Json<NewItem>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = state.service.create(new)?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /items/{id}: shallow-merge the patch over the stored record.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ItemPatch>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.service.update(&id, patch)?;
    Ok(Json(MessageResponse {
        message: "item updated".to_string(),
    }))
}

/// DELETE /items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.service.remove(&id)?;
    Ok(Json(MessageResponse {
        message: "item deleted".to_string(),
    }))
}

/// GET /health
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: "stockroom".to_string(),
    })
}
