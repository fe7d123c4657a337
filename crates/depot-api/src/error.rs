//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use depot_core::DepotError;

/// Error payload returned to HTTP clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable description of what went wrong.
    pub message: String,
}

/// Errors surfaced by the HTTP layer.
///
/// Malformed requests map to 400, everything escaping the engine to a
/// generic 500. Per-entry batch failures are not errors at this level; they
/// ride in 200 responses.
#[derive(Debug)]
pub enum ApiError {
    /// The request body was missing or malformed.
    BadRequest(String),
    /// An error escaped the engine.
    Internal(String),
}

impl ApiError {
    /// Create a bad-request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<DepotError> for ApiError {
    fn from(err: DepotError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}
