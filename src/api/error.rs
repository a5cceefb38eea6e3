//! Error types and response mapping for the HTTP layer.
//!
//! Provides HTTP status code mapping and the JSON error response format
//! shared by all handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::inventory::InventoryError;
use crate::store::StoreError;

/// Errors surfaced by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The addressed item does not exist.
    #[error("item '{id}' not found")]
    ItemNotFound { id: String },

    /// The backing store failed to load or persist the collection.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::NotFound { id } => ApiError::ItemNotFound { id },
            InventoryError::Store(e) => ApiError::Storage(e),
        }
    }
}

impl ApiError {
    /// Map error variant to the response status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ItemNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error type string for JSON responses.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::ItemNotFound { .. } => "item_not_found",
            ApiError::Storage(_) => "storage_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, ApiError::Storage(_)) {
            tracing::error!(error = %self, "storage failure while handling request");
        }

        let body = serde_json::json!({
            "error": {
                "type": self.error_type(),
                "message": self.to_string(),
            }
        });

        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status_code() {
        let err = ApiError::ItemNotFound {
            id: "missing".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_type(), "item_not_found");
    }

    #[test]
    fn test_storage_error_status_code() {
        let err = ApiError::Storage(StoreError::Serialize(
            serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        ));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_type(), "storage_error");
    }

    #[test]
    fn test_inventory_not_found_maps_to_item_not_found() {
        let err: ApiError = InventoryError::NotFound {
            id: "abc".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::ItemNotFound { .. }));
    }
}
