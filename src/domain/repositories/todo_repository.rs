//! Repository trait for todo storage.

use crate::domain::entities::Todo;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for todos.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryTodoRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Inserts the todo, replacing any record with the same id.
    async fn upsert(&self, todo: Todo) -> Result<(), AppError>;

    /// Removes the todo whose id matches `id` exactly, case included.
    ///
    /// Returns `Ok(false)` when no such record existed; that is not an error.
    async fn remove(&self, id: &str) -> Result<bool, AppError>;

    /// Returns all todos in insertion order.
    async fn find_all(&self) -> Result<Vec<Todo>, AppError>;

    /// Finds a todo by id, ignoring ASCII case.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Todo))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, AppError>;

    /// Number of stored todos.
    async fn count(&self) -> Result<usize, AppError>;
}
