//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                                - Landing page
//! - `GET  /health`                          - Health check
//! - `/api/*`                                - Public JSON API (see [`crate::api::routes`])
//! - `/public/*`                             - Static assets
//!
//! # Middleware
//!
//! - **CORS** - Any origin
//! - **Tracing** - Structured request/response logging
//!
//! Trailing-slash normalization wraps the whole router in [`crate::server::run`],
//! because it has to run before routing.

use crate::api;
use crate::api::handlers::{health_handler, index_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/public`
pub fn app_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::public_routes())
        .nest_service("/public", ServeDir::new(static_dir))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}
