//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /{code}`  - Short link redirect (public)
//! - `GET /health`  - Health check: DB, hit queue (public)
//! - `GET /?url=…`  - Registration (whitelist-gated, optional password)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Access** - IP whitelist on the registration route
//! - **Path normalization** - Trailing slash handling

use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::{access, tracing};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let shorten = Router::new()
        .route("/", get(shorten_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), access::layer));

    let router = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(shorten)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
