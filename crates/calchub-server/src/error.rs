//! API error type with HTTP status mapping.
//!
//! Note that formula failures are not API errors: the dispatcher
//! contract is string-in/string-out, so `Error: ...` results travel in a
//! normal `200` response. These statuses cover the HTTP surface itself.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed request payloads (400 Bad Request)
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Resource not found (404 Not Found)
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Internal server errors (500 Internal Server Error)
    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
struct ApiErrorBody {
    error: String,
    code: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody { error: self.to_string(), code: self.error_code() };
        (self.status_code(), Json(body)).into_response()
    }
}
