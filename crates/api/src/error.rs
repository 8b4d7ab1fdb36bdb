//! API error type and HTTP response mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The supplied continuation token is not syntactically a UUID.
    #[error("Invalid offset GUID")]
    InvalidOffset,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ApiError::InvalidOffset => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid offset GUID" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
