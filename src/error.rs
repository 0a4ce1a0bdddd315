//! Error types for the palette core.
//!
//! Custom error types using `thiserror` for precise error handling. The
//! search engine itself is infallible by design; errors only arise at the
//! configuration and network edges.

use thiserror::Error;

/// Errors that can occur when talking to the remote search API.
#[derive(Error, Debug)]
pub enum SiteApiError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with SiteApiError
pub type SiteApiResult<T> = Result<T, SiteApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
