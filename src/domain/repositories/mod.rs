//! Repository trait definitions for the domain layer.
//!
//! - [`TodoRepository`] - Todo storage
//! - [`PincodeClient`] - Postal-code lookup against the upstream API
//!
//! Implementations live in `crate::infrastructure`. Mock implementations are
//! generated via `mockall` for unit tests.

pub mod pincode_client;
pub mod todo_repository;

pub use pincode_client::PincodeClient;
pub use todo_repository::TodoRepository;

#[cfg(test)]
pub use pincode_client::MockPincodeClient;
#[cfg(test)]
pub use todo_repository::MockTodoRepository;
