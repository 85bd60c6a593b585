//! Todo entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Description given to the records seeded at startup.
pub const BOOTSTRAP_DESCRIPTION: &str = "bootstrap data";

/// A task record held by the todo store.
///
/// `id` is always generated by the service, never taken from the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub date: DateTime<Utc>,
    pub description: String,
}

impl Todo {
    pub fn new(id: String, date: DateTime<Utc>, description: String) -> Self {
        Self {
            id,
            date,
            description,
        }
    }

    /// Builds a todo with a fresh UUID v4 id.
    pub fn with_generated_id(date: DateTime<Utc>, description: String) -> Self {
        Self::new(Uuid::new_v4().to_string(), date, description)
    }

    /// Builds one of the records seeded at startup.
    pub fn bootstrap(date: DateTime<Utc>) -> Self {
        Self::with_generated_id(date, BOOTSTRAP_DESCRIPTION.to_string())
    }
}

/// Input data for creating a todo.
///
/// `date` defaults to the creation time when the client omits it.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub date: Option<DateTime<Utc>>,
    pub description: String,
}
