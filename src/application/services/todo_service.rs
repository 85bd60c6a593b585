//! Todo management service.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{NewTodo, Todo};
use crate::domain::repositories::TodoRepository;
use crate::error::AppError;

/// Service for listing, creating and removing todos.
///
/// Ids are always generated here; any id a client sends is discarded before
/// it reaches this layer.
pub struct TodoService<R: TodoRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: TodoRepository + ?Sized> TodoService<R> {
    /// Creates a new todo service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns every stored todo.
    pub async fn list(&self) -> Result<Vec<Todo>, AppError> {
        self.repository.find_all().await
    }

    /// Retrieves a single todo.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no todo has this id.
    pub async fn get(&self, id: &str) -> Result<Todo, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Todo not found: {id}")))
    }

    /// Stores a new todo under a freshly generated id and returns it as stored.
    ///
    /// The date defaults to now when the input has none.
    pub async fn create(&self, new_todo: NewTodo) -> Result<Todo, AppError> {
        let todo = Todo::with_generated_id(
            new_todo.date.unwrap_or_else(Utc::now),
            new_todo.description,
        );
        let id = todo.id.clone();

        self.repository.upsert(todo).await?;
        tracing::debug!(todo_id = %id, "Todo created");

        self.get(&id).await
    }

    /// Removes a todo. Unknown ids are ignored.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let removed = self.repository.remove(id).await?;
        tracing::debug!(todo_id = %id, removed, "Todo delete requested");
        Ok(())
    }

    /// Number of stored todos.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}
