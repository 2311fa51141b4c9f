//! HTTP client for the delivery backend.

use anyhow::Result;
use delivery_core::models::TimedWaypoint;
use serde::Deserialize;

use crate::config::TrackerConfig;
use crate::models::{DroneSummary, TrackingPoint};

/// Errors surfaced by backend calls beyond plain transport failures.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("route for order {0} has no waypoints")]
    EmptyRoute(u64),
}

/// Client for the delivery backend's tracking and fleet endpoints.
pub struct TrackerClient {
    base_url: String,
    auth_token: Option<String>,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    #[serde(default)]
    waypoints: Vec<TimedWaypoint>,
}

impl TrackerClient {
    pub fn new(config: &TrackerConfig) -> Self {
        // Falls back to a default client (no request timeout) if the
        // builder cannot load system TLS configuration.
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_default();

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
            client,
        }
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.client.get(&url);
        if let Some(token) = self.auth_token.as_deref() {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        builder
    }

    /// Fetch the fleet roster from the status summary endpoint.
    pub async fn fetch_drones(&self) -> Result<Vec<DroneSummary>> {
        let response = self.get("/drones/status/summary").send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()).into());
        }
        Ok(response.json().await?)
    }

    /// Fetch the newest tracking fix for an order.
    ///
    /// Returns `None` when the backend has no fix yet (404).
    pub async fn fetch_latest_position(&self, order_id: u64) -> Result<Option<TrackingPoint>> {
        let response = self
            .get(&format!("/tracking/latest/{}", order_id))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()).into());
        }
        Ok(Some(response.json().await?))
    }

    /// Fetch the stored route for an order, ordered by waypoint sequence.
    pub async fn fetch_route(&self, order_id: u64) -> Result<Vec<TimedWaypoint>> {
        let response = self.get(&format!("/route/{}", order_id)).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()).into());
        }

        let mut route: RouteResponse = response.json().await?;
        if route.waypoints.is_empty() {
            return Err(ApiError::EmptyRoute(order_id).into());
        }

        route.waypoints.sort_by_key(|wp| wp.sequence);
        Ok(route.waypoints)
    }
}
