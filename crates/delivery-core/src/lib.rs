pub mod geo;
pub mod models;
pub mod route;
pub mod simulator;
pub mod timeline;

pub use geo::{bearing_deg, haversine_distance_km, interpolate};
pub use models::{DeliveryPhase, Route, SimStatus, TickUpdate, TimedWaypoint, Waypoint};
pub use route::{densify, generate_route, DEPOT_LAT, DEPOT_LNG};
pub use simulator::DroneSimulator;
pub use timeline::{OrderStage, OrderTimeline};
