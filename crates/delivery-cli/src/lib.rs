//! Delivery CLI - command line tools for the drone delivery tracker.
//!
//! Binaries:
//! - track_order: run a simulated delivery and print each tick
//! - watch_fleet: poll the backend roster and print the cached fleet
//! - order_status: one-shot route and latest-position lookup for an order

pub mod display;
