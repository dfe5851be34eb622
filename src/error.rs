//! Error taxonomy and HTTP error rendering.
//!
//! Internally the service distinguishes why a request failed (malformed URL,
//! unresolvable host, unknown short id, backend trouble). At the HTTP boundary
//! every failure collapses into the same body:
//!
//! ```json
//! { "error": "invalid url" }
//! ```
//!
//! served with `200 OK`. Clients of the public API depend on that shape, so
//! the concrete variant is only visible in the logs.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Message returned to clients for every request-time failure.
pub const INVALID_URL: &str = "invalid url";

/// Reasons a submitted URL is rejected by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The string is not an absolute http/https URL of the accepted shape.
    #[error("malformed url")]
    BadFormat,

    /// The URL is well-formed but its host did not resolve (or timed out).
    #[error("host `{0}` could not be resolved")]
    UnresolvableHost(String),
}

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No mapping exists for the requested short id (or it is not an integer).
    #[error("short url `{0}` not found")]
    NotFound(String),

    /// The mapping store could not be reached or did not answer in time.
    #[error("storage backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(short_url: impl Into<String>) -> Self {
        Self::NotFound(short_url.into())
    }

    pub fn backend(reason: impl Into<String>) -> Self {
        Self::BackendUnavailable(reason.into())
    }

    pub fn internal(reason: impl Into<String>) -> Self {
        Self::Internal(reason.into())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => AppError::backend(e.to_string()),
            other => AppError::internal(format!("database error: {other}")),
        }
    }
}

/// JSON body used for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(e) => debug!("Rejected url: {}", e),
            AppError::NotFound(code) => debug!("Short url not found: {}", code),
            AppError::BackendUnavailable(e) => warn!("Store unavailable: {}", e),
            AppError::Internal(e) => error!("Internal error: {}", e),
        }

        (StatusCode::OK, Json(ErrorResponse { error: INVALID_URL })).into_response()
    }
}
