//! Client-facing error type for the API surface.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use spindrift_core::StoreError;
use thiserror::Error;

/// Errors surfaced to API clients.
///
/// Every variant maps to a client-error status with a `{"message": ...}`
/// JSON body; no API error is fatal to the process.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested identifier has no corresponding live record.
    #[error("no torrent with id {id}")]
    NotFound {
        /// The identifier that failed to resolve
        id: u32,
    },

    /// The request could not be decoded into the expected shape.
    #[error("{reason}")]
    InvalidInput {
        /// What failed to decode
        reason: String,
    },
}

impl ApiError {
    /// Invalid-input error for an identifier path segment that is not a
    /// positive integer.
    pub fn invalid_id(raw: &str) -> Self {
        Self::InvalidInput {
            reason: format!("not a valid id: '{raw}'"),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ApiError::NotFound { id },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        };

        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
