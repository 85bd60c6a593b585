//! Infrastructure layer for storage and external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - Outbound HTTP client for the postal-code API
//! - [`persistence`] - Todo store implementations

pub mod http;
pub mod persistence;
