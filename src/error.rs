//! Error types for the HTTP layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Transport-level error. Every rejection this service produces maps to
/// HTTP 400 with the message as a plain-text body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request rejected: unparseable parameter or failed domain validation.
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
        }
    }
}
