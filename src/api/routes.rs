//! API route configuration.
//!
//! All API endpoints are public; there is no authentication.

use crate::api::handlers::{create_short_url_handler, hello_handler, redirect_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All routes nested under `/api`.
///
/// # Endpoints
///
/// - `GET  /hello`                 - Diagnostic greeting
/// - `POST /shorturl`              - Create (or fetch) the short url for a URL
/// - `GET  /shorturl/{short_url}`  - Redirect to the original URL
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/shorturl", post(create_short_url_handler))
        .route("/shorturl/{short_url}", get(redirect_handler))
}
