//! Wire models for the delivery backend's tracking and fleet endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Detailed operational status of a fleet drone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DroneDetailedStatus {
    #[default]
    Idle,
    Charging,
    Assigned,
    GoingToRestaurant,
    PickingUp,
    InDelivery,
    Returning,
    Maintenance,
    Error,
}

impl DroneDetailedStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DroneDetailedStatus::Idle => "idle",
            DroneDetailedStatus::Charging => "charging",
            DroneDetailedStatus::Assigned => "assigned",
            DroneDetailedStatus::GoingToRestaurant => "going to restaurant",
            DroneDetailedStatus::PickingUp => "picking up",
            DroneDetailedStatus::InDelivery => "in delivery",
            DroneDetailedStatus::Returning => "returning",
            DroneDetailedStatus::Maintenance => "maintenance",
            DroneDetailedStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for DroneDetailedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One drone in the fleet roster, as served by the status summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroneSummary {
    pub drone_id: u64,
    pub drone_name: String,
    #[serde(default)]
    pub current_status: DroneDetailedStatus,
    pub battery_level: f64,
    #[serde(default)]
    pub current_location: Option<Location>,
    #[serde(default)]
    pub last_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub active_alerts: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// One tracking fix for an order's delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingPoint {
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "longitude")]
    pub lng: f64,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub battery_level: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_entry_deserializes_from_backend_payload() {
        let json = r#"{
            "drone_id": 7,
            "drone_name": "Falcon-7",
            "current_status": "in_delivery",
            "battery_level": 82.5,
            "current_location": {"lat": 10.77, "lng": 106.70},
            "last_update": "2025-03-01T09:30:00Z",
            "active_alerts": 1
        }"#;

        let drone: DroneSummary = serde_json::from_str(json).unwrap();
        assert_eq!(drone.drone_id, 7);
        assert_eq!(drone.current_status, DroneDetailedStatus::InDelivery);
        assert_eq!(drone.current_location.unwrap().lat, 10.77);
        assert_eq!(drone.active_alerts, 1);
    }

    #[test]
    fn roster_entry_tolerates_missing_optionals() {
        let json = r#"{
            "drone_id": 2,
            "drone_name": "Sparrow-2",
            "battery_level": 100.0
        }"#;

        let drone: DroneSummary = serde_json::from_str(json).unwrap();
        assert_eq!(drone.current_status, DroneDetailedStatus::Idle);
        assert!(drone.current_location.is_none());
        assert!(drone.last_update.is_none());
        assert_eq!(drone.active_alerts, 0);
    }

    #[test]
    fn tracking_point_accepts_long_field_names() {
        let json = r#"{
            "latitude": 10.78,
            "longitude": 106.71,
            "battery_level": 64.0,
            "status": "in_flight",
            "timestamp": "2025-03-01T09:31:10Z"
        }"#;

        let point: TrackingPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.lat, 10.78);
        assert_eq!(point.lng, 106.71);
        assert_eq!(point.status.as_deref(), Some("in_flight"));
        assert!(point.altitude.is_none());
    }
}
