//! Handler for short url creation.

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
};
use tracing::debug;

use crate::api::dto::shorturl::{CreateShortUrlRequest, ShortUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short url for a submitted URL.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// URL-encoded form with a single field:
///
/// ```text
/// url=https://freecodecamp.org
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://freecodecamp.org", "short_url": 2 }
/// ```
///
/// Submitting the same URL again returns the same `short_url`.
///
/// # Errors
///
/// Malformed URLs, unresolvable hosts, undecodable bodies and store failures
/// all produce `{"error": "invalid url"}` with status 200.
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    form: Result<Form<CreateShortUrlRequest>, FormRejection>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    let request = match form {
        Ok(Form(request)) => request,
        Err(rejection) => {
            debug!("Undecodable shorturl form: {}", rejection);
            CreateShortUrlRequest::default()
        }
    };

    let candidate = request.url.unwrap_or_default();

    let valid_url = state.validator.validate(&candidate).await?;
    let mapping = state.mapping_service.get_or_create(&valid_url).await?;

    Ok(Json(mapping.into()))
}
