//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Landing page (`views/index.html`)
//! - `GET  /public/*`  - Static assets
//! - `GET  /health`    - Health check: store and cache
//! - `/api/*`          - Public REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin may call the API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Locations of the static assets served next to the API.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    pub views_dir: String,
    pub public_dir: String,
}

impl Default for StaticAssets {
    fn default() -> Self {
        Self {
            views_dir: "views".to_string(),
            public_dir: "public".to_string(),
        }
    }
}

/// Builds the router with all routes and middleware, without path normalization.
///
/// Integration tests drive this router directly.
pub fn build_router(state: AppState, assets: &StaticAssets) -> Router {
    let index = Path::new(&assets.views_dir).join("index.html");

    Router::new()
        .route_service("/", ServeFile::new(index))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::public_routes())
        .nest_service("/public", ServeDir::new(&assets.public_dir))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the application router, trimming trailing slashes before routing.
pub fn app_router(state: AppState, assets: &StaticAssets) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, assets))
}
