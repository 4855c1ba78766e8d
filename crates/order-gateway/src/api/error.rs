use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt::Display;
use thiserror::Error;
use tracing::error;

/// Errors returned to HTTP callers as `{"error": message}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    /// Every business or downstream failure. Callers see the message, not the kind.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal(context: &str, error: impl Display) -> Self {
        ApiError::Internal(format!("{context}: {error}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(message) => {
                error!(%message, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Rejects ids below 1 before any downstream call.
pub fn require_id(raw: u32) -> Result<u32, ApiError> {
    if raw < 1 {
        return Err(ApiError::BadRequest(format!("Invalid id: {raw}")));
    }
    Ok(raw)
}
