//! # Todo & PIN Code Service
//!
//! A small Axum service with two REST resources:
//!
//! - an in-memory todo API (`/api/todos`), seeded with bootstrap records at startup
//! - a passthrough proxy to the India Post PIN code lookup API (`/api/pins/{pin}`)
//!
//! Every failed request is answered with `400 Bad Request` and an
//! [`error::ExceptionPayload`] carrying the message, an incident id and a timestamp.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the store/client traits
//! - **Application Layer** ([`application`]) - Services used by handlers
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store, reqwest client
//! - **API Layer** ([`api`]) - Handlers, DTOs, middleware, routes
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"   # Optional
//! cargo run
//! curl http://127.0.0.1:8080/api/todos
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{PincodeService, TodoService};
    pub use crate::domain::entities::{NewTodo, Todo};
    pub use crate::error::{AppError, ExceptionPayload};
    pub use crate::state::AppState;
}
