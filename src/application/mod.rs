//! Application layer services.
//!
//! Services consume domain traits and provide the API used by HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::todo_service::TodoService`] - Todo listing, lookup, creation and removal
//! - [`services::pincode_service::PincodeService`] - Postal-code lookup passthrough

pub mod services;
