//! Tracker configuration from environment.

use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Base URL of the delivery backend.
    pub base_url: String,
    /// Bearer token for authenticated endpoints, if required.
    pub auth_token: Option<String>,
    /// Cadence of the roster poll loop.
    pub poll_interval: Duration,
    /// Per-request timeout for backend calls.
    pub request_timeout: Duration,
    /// Roster entries not refreshed within this window are dropped.
    pub roster_ttl: Duration,
}

impl TrackerConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("DELIVERY_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            auth_token: env::var("DELIVERY_API_TOKEN").ok().filter(|t| !t.is_empty()),
            poll_interval: Duration::from_millis(
                env::var("DELIVERY_POLL_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5000),
            ),
            request_timeout: Duration::from_secs(10),
            roster_ttl: Duration::from_secs(30),
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            auth_token: None,
            poll_interval: Duration::from_millis(5000),
            request_timeout: Duration::from_secs(10),
            roster_ttl: Duration::from_secs(30),
        }
    }
}
