//! Configuration management for the palette core.
//!
//! All configuration comes from environment variables (optionally via a
//! `.env` file). The only required decision is whether a remote search API
//! exists: with no base URL configured, search runs purely against the
//! in-memory collection.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote search API; `None` means local-only search
    pub api_base_url: Option<String>,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Debounce interval before a query is evaluated, in milliseconds
    /// (default: 150)
    pub debounce_ms: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SITE_API_BASE_URL`: Base URL for the remote search API; unset or
    ///   empty disables remote search
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `SEARCH_DEBOUNCE_MS`: Debounce interval in milliseconds (default: 150)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; dotenvy stays quiet on stdout
        let _ = dotenvy::dotenv();

        let api_base_url = match env::var("SITE_API_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ConfigError::InvalidValue {
                        var: "SITE_API_BASE_URL".to_string(),
                        reason: "Must start with http:// or https://".to_string(),
                    });
                }
                Some(url)
            }
            _ => None,
        };

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let debounce_ms = Self::parse_env_u64("SEARCH_DEBOUNCE_MS", 150)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            api_base_url,
            request_timeout,
            debounce_ms,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: None,
            request_timeout: 10,
            debounce_ms: 150,
            log_level: "info".to_string(),
        }
    }
}
