//! Core data models for delivery routes and simulation snapshots.

use serde::{Deserialize, Serialize};

/// A named stop on a delivery route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
}

impl Waypoint {
    pub fn new(lat: f64, lng: f64, name: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            name: name.into(),
        }
    }
}

/// Ordered sequence of waypoints a simulated delivery traverses.
///
/// Traversal follows index order; segment `i` spans `waypoints[i]` to
/// `waypoints[i + 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub waypoints: Vec<Waypoint>,
}

impl Route {
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Number of traversable segments (one less than the waypoint count).
    pub fn segment_count(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }

    /// Informational total length in kilometers, summed per segment.
    /// Never feeds movement; the simulator advances by fixed progress steps.
    pub fn total_distance_km(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|pair| {
                crate::geo::haversine_distance_km(pair[0].lat, pair[0].lng, pair[1].lat, pair[1].lng)
            })
            .sum()
    }
}

/// Lifecycle state of a [`crate::simulator::DroneSimulator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimStatus {
    /// Constructed or explicitly stopped; ticks are no-ops.
    #[default]
    Idle,
    /// Advancing along the route.
    Moving,
    /// Final waypoint reached; position frozen there.
    Completed,
}

/// Human-readable delivery phase derived from simulator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryPhase {
    /// En route from the depot to the restaurant.
    HeadingToPickup,
    /// At the restaurant waypoint collecting the order.
    AtPickup,
    /// En route from the restaurant to the customer.
    HeadingToDropoff,
    /// Delivery finished.
    Delivered,
}

impl DeliveryPhase {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryPhase::HeadingToPickup => "Flying to restaurant",
            DeliveryPhase::AtPickup => "Picking up order",
            DeliveryPhase::HeadingToDropoff => "Delivering to customer",
            DeliveryPhase::Delivered => "Delivered",
        }
    }
}

impl std::fmt::Display for DeliveryPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Position snapshot returned by one simulator tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickUpdate {
    pub lat: f64,
    pub lng: f64,
    /// Segment being traversed when this snapshot was taken.
    pub segment: usize,
    /// Fractional completion of that segment, in [0, 1).
    pub progress: f64,
    pub completed: bool,
    /// Bearing toward the current segment end, degrees in [0, 360).
    pub heading_deg: f64,
    pub battery_level: f64,
}

/// Densified route point with a linear time estimate, as served by the
/// tracking backend's route endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedWaypoint {
    pub sequence: u32,
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "longitude")]
    pub lng: f64,
    /// Seconds from departure, assuming the nominal per-leg flight time.
    #[serde(alias = "estimated_time")]
    pub estimated_time_s: u32,
}
