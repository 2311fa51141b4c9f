//! Fleet roster polling loop.
//!
//! Fetches the drone roster at a fixed cadence and maintains a shared cache
//! that readers (UI, CLI) consume. Entries the backend stops reporting age
//! out after a TTL instead of lingering forever.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use dashmap::DashMap;
use tokio::time::{interval, MissedTickBehavior};

use crate::backoff::PollBackoff;
use crate::client::TrackerClient;
use crate::config::TrackerConfig;
use crate::models::DroneSummary;

const BACKOFF_MAX: Duration = Duration::from_secs(60);

/// Backend the poll loop fetches rosters from.
///
/// [`TrackerClient`] is the production implementation; tests substitute
/// fakes.
pub trait RosterSource {
    fn fetch_roster(&self) -> impl Future<Output = Result<Vec<DroneSummary>>> + Send;
}

impl RosterSource for TrackerClient {
    fn fetch_roster(&self) -> impl Future<Output = Result<Vec<DroneSummary>>> + Send {
        self.fetch_drones()
    }
}

#[derive(Debug, Clone)]
struct CachedDrone {
    summary: DroneSummary,
    fetched_at: Instant,
}

/// Shared, cloneable view of the most recently polled roster.
#[derive(Debug, Clone, Default)]
pub struct RosterCache {
    drones: Arc<DashMap<u64, CachedDrone>>,
}

impl RosterCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, summary: DroneSummary) {
        self.drones.insert(
            summary.drone_id,
            CachedDrone {
                summary,
                fetched_at: Instant::now(),
            },
        );
    }

    pub fn get(&self, drone_id: u64) -> Option<DroneSummary> {
        self.drones.get(&drone_id).map(|e| e.summary.clone())
    }

    /// Current roster, unordered.
    pub fn snapshot(&self) -> Vec<DroneSummary> {
        self.drones.iter().map(|e| e.summary.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.drones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drones.is_empty()
    }

    /// Drop entries not refreshed within `ttl`.
    pub fn prune_stale(&self, ttl: Duration) {
        let now = Instant::now();
        self.drones
            .retain(|_, entry| now.duration_since(entry.fetched_at) <= ttl);
    }
}

/// Poll the backend roster forever at the configured interval.
///
/// Fetch failures are logged and retried with exponential backoff on top of
/// the base interval; a success resets the backoff. Ticks missed while
/// sleeping off a backoff are skipped, not replayed, so a recovering backend
/// sees the configured cadence rather than a burst of catch-up fetches.
pub async fn run_roster_loop(
    cache: RosterCache,
    source: impl RosterSource,
    config: TrackerConfig,
) {
    let mut ticker = interval(config.poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut backoff = PollBackoff::new(config.poll_interval, BACKOFF_MAX);

    loop {
        ticker.tick().await;

        match source.fetch_roster().await {
            Ok(drones) => {
                let count = drones.len();
                for drone in drones {
                    cache.upsert(drone);
                }
                cache.prune_stale(config.roster_ttl);
                backoff.on_success();
                tracing::debug!(count, "roster refreshed");
            }
            Err(err) => {
                let delay = backoff.on_failure();
                tracing::warn!("roster fetch failed: {err:#}; backing off {delay:?}");
                tokio::time::sleep(delay).await;
            }
        }
    }
}
