//! Debounced search with stale-response discarding.
//!
//! Every submission takes a ticket from a monotonically increasing sequence
//! number. The ticket is checked after the debounce sleep and again after
//! the (optional) network call; if a newer submission exists at either
//! point, the result is dropped. Only the latest keystroke's results are
//! ever applied.

use crate::client::SiteClient;
use crate::config::Config;
use crate::models::Post;
use crate::search::{self, MatchResult};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Debounced, cancellation-aware search over the post collection.
#[derive(Clone)]
pub struct SearchService {
    /// Remote endpoint, if configured
    client: Option<Arc<SiteClient>>,

    /// The local collection searched when no endpoint is configured
    posts: Arc<Vec<Post>>,

    /// Request sequence number; the latest ticket wins
    seq: Arc<AtomicU64>,

    /// Debounce interval before a query is evaluated
    debounce: Duration,
}

impl SearchService {
    /// Build a service from configuration. With `SITE_API_BASE_URL` unset
    /// the service searches `posts` locally.
    pub fn new(config: &Config, posts: Vec<Post>) -> Self {
        Self {
            client: SiteClient::from_config(config).map(Arc::new),
            posts: Arc::new(posts),
            seq: Arc::new(AtomicU64::new(0)),
            debounce: Duration::from_millis(config.debounce_ms),
        }
    }

    /// Local-only service, mainly for tests and offline use.
    pub fn local(posts: Vec<Post>, debounce: Duration) -> Self {
        Self {
            client: None,
            posts: Arc::new(posts),
            seq: Arc::new(AtomicU64::new(0)),
            debounce,
        }
    }

    /// Submit a query. Resolves to `Some(results)` only if this is still the
    /// latest submission once evaluation finishes; superseded submissions
    /// resolve to `None` and their results are never applied.
    ///
    /// Remote failures degrade to an empty result set (logged, never
    /// propagated); the caller shows "no results".
    pub async fn submit(&self, query: &str) -> Option<Vec<MatchResult>> {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        if !self.debounce.is_zero() {
            tokio::time::sleep(self.debounce).await;
        }
        if self.seq.load(Ordering::SeqCst) != ticket {
            debug!("query {:?} superseded during debounce", query);
            return None;
        }

        let results = match &self.client {
            Some(client) => {
                let client = Arc::clone(client);
                let remote_query = query.to_string();
                match tokio::task::spawn_blocking(move || client.search(&remote_query)).await {
                    Ok(Ok(posts)) => {
                        // Remote results are only a record source; re-match
                        // locally so snippets and highlighting agree with
                        // the canonical substring semantics.
                        search::search(&posts, query)
                    }
                    Ok(Err(e)) => {
                        warn!("remote search failed, showing no results: {}", e);
                        Vec::new()
                    }
                    Err(e) => {
                        warn!("search task failed, showing no results: {}", e);
                        Vec::new()
                    }
                }
            }
            None => search::search(&self.posts, query),
        };

        // The network round-trip may have been overtaken by a newer query
        if self.seq.load(Ordering::SeqCst) != ticket {
            debug!("discarding stale results for query {:?}", query);
            return None;
        }
        Some(results)
    }

    /// Whether a remote endpoint is configured.
    pub fn is_remote(&self) -> bool {
        self.client.is_some()
    }
}
