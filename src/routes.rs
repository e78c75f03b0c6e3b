//! Top-level router.
//!
//! # Route Structure
//!
//! - `/users/*`, `/trips/*`, `/itineraries/*` - Resource API
//! - `GET /health`                          - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::trace;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Router with every route and middleware applied, ready to serve.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Router without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::resource_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(trace::layer())
}
