//! Todo storage implementations.
//!
//! # Repositories
//!
//! - [`InMemoryTodoRepository`] - Process-local store guarded by an async `RwLock`

pub mod in_memory_todo_repository;

pub use in_memory_todo_repository::InMemoryTodoRepository;
