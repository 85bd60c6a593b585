//! Postal-code lookup service.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::repositories::PincodeClient;
use crate::error::AppError;

/// Thin passthrough to a [`PincodeClient`].
///
/// The upstream document is returned as-is; nothing is validated or reshaped.
pub struct PincodeService<C: PincodeClient + ?Sized> {
    client: Arc<C>,
}

impl<C: PincodeClient + ?Sized> PincodeService<C> {
    /// Creates a new pincode service.
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Looks up the details of a postal code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the upstream lookup fails.
    pub async fn pin_details(&self, pin: &str) -> Result<Value, AppError> {
        self.client.pin_details(pin).await
    }

    /// Base URL of the upstream API.
    pub fn upstream_url(&self) -> String {
        self.client.base_url()
    }
}
