//! Handler for short url redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short url to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// # Request Flow
///
/// 1. Parse `short_url` as a positive integer
/// 2. Resolve it through the mapping service (cache, then store)
/// 3. Return `301 Moved Permanently` with a `Location` header
///
/// # Errors
///
/// Undecodable, non-integer or unknown ids produce `{"error": "invalid url"}`
/// with status 200.
pub async fn redirect_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let short_url = match path {
        Ok(Path(short_url)) => short_url,
        Err(rejection) => {
            debug!("Undecodable short url segment: {}", rejection);
            return Err(AppError::not_found(rejection.body_text()));
        }
    };

    let mapping = state.mapping_service.resolve(&short_url).await?;

    let location = HeaderValue::try_from(mapping.original_url.as_str()).map_err(|e| {
        AppError::internal(format!(
            "stored url for {} is not a valid header: {e}",
            mapping.short_id
        ))
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
