//! Cross-origin resource sharing middleware.

use tower_http::cors::CorsLayer;

/// Creates a CORS layer allowing any origin, method and header.
///
/// The API is public and unauthenticated, and is consumed from pages served
/// on other origins (browser-based test suites included).
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
