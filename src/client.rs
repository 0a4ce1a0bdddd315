//! HTTP client for the optional remote search API.
//!
//! A synchronous `ureq` client; async callers bridge through
//! `tokio::task::spawn_blocking` (see the search service). The endpoint is a
//! single GET returning Post-shaped JSON.

use crate::config::Config;
use crate::error::{SiteApiError, SiteApiResult};
use crate::models::Post;
use std::sync::Arc;
use std::time::Duration;

/// Client for `GET {base_url}/api/search?q=<query>`.
#[derive(Clone)]
pub struct SiteClient {
    /// Base URL of the site API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl SiteClient {
    /// Create a client from configuration. Returns `None` when no base URL
    /// is configured (search then runs locally only).
    pub fn from_config(config: &Config) -> Option<Self> {
        config.api_base_url.as_ref().map(|url| {
            let agent = ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(config.request_timeout))
                .build();
            Self {
                base_url: url.clone(),
                agent: Arc::new(agent),
            }
        })
    }

    /// Create a client with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();
        Self {
            base_url,
            agent: Arc::new(agent),
        }
    }

    /// Query the remote search endpoint.
    pub fn search(&self, query: &str) -> SiteApiResult<Vec<Post>> {
        let url = format!(
            "{}/api/search?q={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(query)
        );

        tracing::debug!("GET {}", url);
        let response = self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .call()
            .map_err(map_error)?;

        let body = response
            .into_string()
            .map_err(|e| SiteApiError::HttpError(e.to_string()))?;
        let posts: Vec<Post> = serde_json::from_str(&body).map_err(SiteApiError::JsonError)?;
        Ok(posts)
    }
}

/// Map a ureq error to a SiteApiError.
fn map_error(error: ureq::Error) -> SiteApiError {
    match error {
        ureq::Error::Status(code, response) => {
            let message = response
                .into_string()
                .unwrap_or_else(|_| "Unknown error".to_string());
            SiteApiError::ApiError {
                status: code,
                message,
            }
        }
        ureq::Error::Transport(transport) => {
            if transport.kind() == ureq::ErrorKind::Io {
                SiteApiError::Timeout
            } else {
                SiteApiError::HttpError(transport.to_string())
            }
        }
    }
}
