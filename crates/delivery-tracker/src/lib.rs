//! Delivery tracker - data-fetching service for the delivery backend.
//!
//! Replaces an ambient shared polling cache with an explicit service:
//! configuration (endpoint, poll interval) is injected, the roster cache is
//! an owned handle, and the poll loop is a spawnable task.

pub mod backoff;
pub mod client;
pub mod config;
pub mod models;
pub mod poller;

pub use client::TrackerClient;
pub use config::TrackerConfig;
pub use models::{DroneDetailedStatus, DroneSummary, TrackingPoint};
pub use poller::{run_roster_loop, RosterCache, RosterSource};
