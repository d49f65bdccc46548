//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use order_store::StoreError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The request body is not a valid order batch.
    InvalidInput,
    /// The batch holds more orders than one request may carry.
    BatchTooLarge { limit: usize },
    /// Resource not found.
    NotFound(String),
    /// The store failed; `message` is what the client sees.
    Internal {
        message: &'static str,
        source: StoreError,
    },
}

impl ApiError {
    /// Maps a store error, using `context` as the client-facing message for
    /// internal failures.
    pub fn from_store(err: StoreError, context: &'static str) -> Self {
        match err {
            StoreError::Validation(_) => ApiError::InvalidInput,
            StoreError::CustomerNotFound { .. } => ApiError::NotFound(err.to_string()),
            StoreError::LockPoisoned => ApiError::Internal {
                message: context,
                source: err,
            },
        }
    }

    /// Label used for the rejection metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            ApiError::InvalidInput => "invalid_input",
            ApiError::BatchTooLarge { .. } => "batch_too_large",
            ApiError::NotFound(_) => "not_found",
            ApiError::Internal { .. } => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidInput => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": "Invalid input" }),
            ),
            ApiError::BatchTooLarge { limit } => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "error": "Batch size exceeds the allowed limit",
                    "message": format!(
                        "The maximum allowed number of orders in a single request is {limit}. Please split your request and try again."
                    ),
                }),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, serde_json::json!({ "error": msg })),
            ApiError::Internal { message, source } => {
                tracing::error!(error = %source, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": message }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
