//! Domain layer containing business entities and the interfaces they depend on.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Traits for the todo store and the postal-code API
//!
//! The domain layer has no dependency on HTTP, storage or the outbound client.
//! Implementations live in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
