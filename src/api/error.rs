use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::models::ValidationError;

/// Request-scoped API failures. Every variant maps to one response; nothing
/// here is fatal to the process.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required field is missing or malformed; nothing was written.
    #[error("{0}")]
    Validation(#[from] ValidationError),
    /// The resource does not exist for this caller. Resources owned by other
    /// users surface identically, so existence never leaks.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// An upstream provider failed; the cause is logged, the caller gets a
    /// generic message.
    #[error("Upstream dependency failed")]
    Upstream(#[source] anyhow::Error),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn upstream(cause: anyhow::Error) -> Self {
        ApiError::Upstream(cause)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Validation failed",
                    "field": err.field,
                    "message": err.message,
                }),
            ),
            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "Not found",
                    "message": self.to_string(),
                }),
            ),
            ApiError::Upstream(cause) => {
                error!(error = %cause, "upstream dependency failure");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({
                        "error": "Upstream dependency failed",
                        "message": "External service is unavailable",
                    }),
                )
            }
            ApiError::Database(cause) => {
                error!(error = %cause, "database failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Database error",
                        "message": "Internal server error",
                    }),
                )
            }
            ApiError::Internal(cause) => {
                error!(error = %cause, "internal failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Internal server error",
                        "message": "Internal server error",
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
