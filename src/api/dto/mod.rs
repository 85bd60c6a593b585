//! Data Transfer Objects for API requests and responses.
//!
//! The error body lives in [`crate::error::ExceptionPayload`].

pub mod health;
pub mod todo;
