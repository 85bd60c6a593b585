//! Outbound HTTP integrations.
//!
//! - [`HttpPincodeClient`] - reqwest client for the postal-code lookup API

mod pincode_client;

pub use pincode_client::{DEFAULT_PINCODE_API_URL, HttpPincodeClient};
