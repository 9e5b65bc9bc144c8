//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`             - Resolve request without a code (400)
//! - `GET  /{code}`       - Short link redirect
//! - `GET  /health`       - Health check
//! - `POST /api/shorten`  - Create a short URL
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, missing_code_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// All routes with state and tracing applied, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(missing_code_handler))
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}
