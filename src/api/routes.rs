//! API route configuration.

use crate::api::handlers::{
    create_todo_handler, delete_todo_handler, get_todo_handler, list_todos_handler,
    pin_details_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Todo CRUD routes, nested under `/api/todos`.
///
/// # Endpoints
///
/// - `GET    /`      - List all todos
/// - `POST   /`      - Create a todo
/// - `GET    /{id}`  - Fetch a todo
/// - `DELETE /{id}`  - Delete a todo
pub fn todo_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_todos_handler).post(create_todo_handler))
        .route("/{id}", get(get_todo_handler).delete(delete_todo_handler))
}

/// Postal-code proxy routes, nested under `/api/pins`.
///
/// - `GET /{pin}` - Upstream lookup, returned verbatim
pub fn pin_routes() -> Router<AppState> {
    Router::new().route("/{pin}", get(pin_details_handler))
}
