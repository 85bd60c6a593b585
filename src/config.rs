//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PINCODE_API_URL` - Postal-code API base URL
//!   (default: `http://postalpincode.in/api/pincode/`)
//! - `PINCODE_TIMEOUT_SECONDS` - Upstream request timeout (default: 10, max: 300)
//! - `TODO_SEED_COUNT` - Bootstrap todos created at startup (default: 10)
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export PINCODE_API_URL="http://localhost:9000/api/pincode/"
//! ```

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::http::DEFAULT_PINCODE_API_URL;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Base URL the PIN code is appended to.
    pub pincode_api_url: String,
    pub pincode_timeout_seconds: u64,
    /// Number of bootstrap todos seeded into the store at startup.
    pub todo_seed_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            pincode_api_url: DEFAULT_PINCODE_API_URL.to_string(),
            pincode_timeout_seconds: 10,
            todo_seed_count: 10,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let pincode_api_url = env::var("PINCODE_API_URL").unwrap_or(defaults.pincode_api_url);

        let pincode_timeout_seconds =
            parse_var("PINCODE_TIMEOUT_SECONDS")?.unwrap_or(defaults.pincode_timeout_seconds);

        let todo_seed_count = parse_var("TODO_SEED_COUNT")?.unwrap_or(defaults.todo_seed_count);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            pincode_api_url,
            pincode_timeout_seconds,
            todo_seed_count,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `pincode_api_url` is not an http(s) URL
    /// - `pincode_timeout_seconds` is outside 1..=300
    /// - `todo_seed_count` exceeds 10000
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.pincode_api_url.starts_with("http://")
            && !self.pincode_api_url.starts_with("https://")
        {
            anyhow::bail!(
                "PINCODE_API_URL must start with 'http://' or 'https://', got '{}'",
                self.pincode_api_url
            );
        }

        if self.pincode_timeout_seconds == 0 || self.pincode_timeout_seconds > 300 {
            anyhow::bail!(
                "PINCODE_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.pincode_timeout_seconds
            );
        }

        if self.todo_seed_count > 10_000 {
            anyhow::bail!(
                "TODO_SEED_COUNT is too large (max: 10000), got {}",
                self.todo_seed_count
            );
        }

        Ok(())
    }

    /// Upstream request timeout.
    pub fn pincode_timeout(&self) -> Duration {
        Duration::from_secs(self.pincode_timeout_seconds)
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Pincode API: {}", self.pincode_api_url);
        tracing::info!("  Pincode timeout: {}s", self.pincode_timeout_seconds);
        tracing::info!("  Seed todos: {}", self.todo_seed_count);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads and parses an optional variable. Unset means `None`; set but
/// unparseable is an error.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        "LISTEN",
        "RUST_LOG",
        "LOG_FORMAT",
        "PINCODE_API_URL",
        "PINCODE_TIMEOUT_SECONDS",
        "TODO_SEED_COUNT",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment run serially via #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.pincode_api_url, DEFAULT_PINCODE_API_URL);
        assert_eq!(config.todo_seed_count, 10);
        assert_eq!(config.pincode_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8080".to_string();

        config.pincode_api_url = "ftp://postalpincode.in/".to_string();
        assert!(config.validate().is_err());

        config.pincode_api_url = "https://postalpincode.in/api/pincode/".to_string();
        assert!(config.validate().is_ok());

        config.pincode_timeout_seconds = 0;
        assert!(config.validate().is_err());

        config.pincode_timeout_seconds = 301;
        assert!(config.validate().is_err());

        config.pincode_timeout_seconds = 5;
        config.todo_seed_count = 10_001;
        assert!(config.validate().is_err());

        config.todo_seed_count = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.pincode_timeout_seconds, 10);
        assert_eq!(config.todo_seed_count, 10);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9999");
            env::set_var("PINCODE_API_URL", "http://localhost:9000/pin/");
            env::set_var("PINCODE_TIMEOUT_SECONDS", "3");
            env::set_var("TODO_SEED_COUNT", "0");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9999");
        assert_eq!(config.pincode_api_url, "http://localhost:9000/pin/");
        assert_eq!(config.pincode_timeout_seconds, 3);
        assert_eq!(config.todo_seed_count, 0);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_number() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("TODO_SEED_COUNT", "ten");
        }

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("TODO_SEED_COUNT"));

        clear_env();
    }
}
