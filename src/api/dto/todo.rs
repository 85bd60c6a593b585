//! DTOs for the todo endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewTodo, Todo};

/// Body of `POST /api/todos`.
///
/// Unknown fields are ignored, which includes any `id` the client sends.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    /// RFC 3339 timestamp. Defaults to the creation time.
    pub date: Option<DateTime<Utc>>,
    pub description: String,
}

impl From<CreateTodoRequest> for NewTodo {
    fn from(req: CreateTodoRequest) -> Self {
        NewTodo {
            date: req.date,
            description: req.description,
        }
    }
}

/// JSON representation of a todo.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TodoResponse {
    pub id: String,
    pub date: DateTime<Utc>,
    pub description: String,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            date: todo.date,
            description: todo.description,
        }
    }
}
