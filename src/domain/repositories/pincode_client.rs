//! Client trait for the postal-code lookup API.

use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Looks up postal (PIN) code details from an upstream service.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpPincodeClient`] - reqwest-based HTTP client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PincodeClient: Send + Sync {
    /// Fetches the upstream JSON document for `pin`, unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the request fails, the upstream answers
    /// with a non-success status, or the body is not JSON.
    async fn pin_details(&self, pin: &str) -> Result<Value, AppError>;

    /// Base URL the client sends requests to, for diagnostics.
    fn base_url(&self) -> String;
}
