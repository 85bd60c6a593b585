//! HTTP request handlers for API endpoints.

pub mod health;
pub mod pins;
pub mod todos;

pub use health::health_handler;
pub use pins::pin_details_handler;
pub use todos::{create_todo_handler, delete_todo_handler, get_todo_handler, list_todos_handler};
