//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /health`           - Health check
//! - `GET    /api/todos`        - List todos
//! - `POST   /api/todos`        - Create a todo
//! - `GET    /api/todos/{id}`   - Fetch a todo
//! - `DELETE /api/todos/{id}`   - Delete a todo
//! - `GET    /api/pins/{pin}`   - Postal-code lookup proxy
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/todos", api::routes::todo_routes())
        .nest("/api/pins", api::routes::pin_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Builds the served application: [`router`] behind trailing-slash trimming.
///
/// Normalization has to wrap the router rather than sit inside it, otherwise
/// it runs after routing and `/api/todos/` would not match.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
