//! Core domain entities.
//!
//! - [`Todo`] - A stored task record
//! - [`NewTodo`] - Client input for creating a todo

pub mod todo;

pub use todo::{BOOTSTRAP_DESCRIPTION, NewTodo, Todo};
