//! Handlers for the todo endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::api::dto::todo::{CreateTodoRequest, TodoResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all todos in insertion order.
///
/// # Endpoint
///
/// `GET /api/todos`
pub async fn list_todos_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoResponse>>, AppError> {
    let todos = state.todo_service.list().await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// Returns a single todo.
///
/// # Endpoint
///
/// `GET /api/todos/{id}`
///
/// # Errors
///
/// Responds 400 with an error payload if no todo has this id.
pub async fn get_todo_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<TodoResponse>, AppError> {
    let Path(id) = path?;
    let todo = state.todo_service.get(&id).await?;
    Ok(Json(todo.into()))
}

/// Creates a todo with a server-assigned id.
///
/// # Endpoint
///
/// `POST /api/todos`
///
/// # Request Body
///
/// ```json
/// {
///   "date": "2024-05-01T10:00:00Z",   // optional
///   "description": "water plants"
/// }
/// ```
///
/// An `id` in the body is ignored.
pub async fn create_todo_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<Json<TodoResponse>, AppError> {
    let Json(payload) = payload?;
    let todo = state.todo_service.create(payload.into()).await?;
    Ok(Json(todo.into()))
}

/// Deletes a todo.
///
/// # Endpoint
///
/// `DELETE /api/todos/{id}`
///
/// Always answers `200 OK` with an empty body, whether or not the id existed.
pub async fn delete_todo_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    state.todo_service.delete(&id).await?;
    Ok(StatusCode::OK)
}
