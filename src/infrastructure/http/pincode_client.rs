//! reqwest-backed postal-code API client.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::domain::repositories::PincodeClient;
use crate::error::AppError;

/// Public endpoint of the India Post PIN code lookup API.
pub const DEFAULT_PINCODE_API_URL: &str = "http://postalpincode.in/api/pincode/";

/// HTTP client forwarding PIN code lookups to the upstream API.
///
/// The PIN is appended to the base URL as a single percent-encoded path
/// segment, so `110001` against the default base becomes
/// `http://postalpincode.in/api/pincode/110001`. Responses are returned as
/// parsed JSON without any reshaping. Requests are never retried.
pub struct HttpPincodeClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpPincodeClient {
    /// Builds a client with its own connection pool and request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute `http`/`https` URL or
    /// the underlying reqwest client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Self::with_client(client, base_url)
    }

    /// Wraps an existing reqwest client.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid pincode API URL: {base_url}"))?;

        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            anyhow::bail!("Pincode API URL must be an absolute http(s) URL, got '{base_url}'");
        }

        info!("Pincode API client targeting {}", base_url);

        Ok(Self { client, base_url })
    }

    /// Builds the upstream URL for a single PIN.
    ///
    /// `.` and `..` are rejected: the URL path would drop them and the request
    /// would hit the base path instead of a PIN.
    fn pin_url(&self, pin: &str) -> Result<Url, AppError> {
        if matches!(pin, "." | "..") {
            return Err(AppError::bad_request(format!("Invalid postal code: '{pin}'")));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::internal("Pincode API base URL cannot carry a path"))?
            .pop_if_empty()
            .push(pin);
        Ok(url)
    }
}

#[async_trait]
impl PincodeClient for HttpPincodeClient {
    async fn pin_details(&self, pin: &str) -> Result<Value, AppError> {
        let url = self.pin_url(pin)?;

        let response = self.client.get(url).send().await.map_err(|e| {
            error!(error = %e, pin, "Pincode API request failed");
            if e.is_timeout() {
                AppError::upstream("Postal code lookup failed: upstream timed out")
            } else {
                AppError::upstream("Postal code lookup failed: upstream unreachable")
            }
        })?;

        let status = response.status();
        debug!(pin, status = status.as_u16(), "Pincode API responded");

        if !status.is_success() {
            return Err(AppError::upstream(format!(
                "Postal code lookup failed: upstream returned {status}"
            )));
        }

        response.json::<Value>().await.map_err(|e| {
            warn!(error = %e, pin, "Pincode API returned an unreadable body");
            AppError::upstream("Postal code lookup failed: upstream response is not valid JSON")
        })
    }

    fn base_url(&self) -> String {
        self.base_url.to_string()
    }
}
