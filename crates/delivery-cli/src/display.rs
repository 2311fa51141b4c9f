//! Terminal formatting helpers shared by the binaries.

use delivery_core::models::{Route, TickUpdate};

/// Format a coordinate pair at GPS precision.
pub fn coord(lat: f64, lng: f64) -> String {
    format!("({:.6}, {:.6})", lat, lng)
}

/// One-line rendering of a tick snapshot.
pub fn tick_line(update: &TickUpdate, phase: &str) -> String {
    format!(
        "{} seg {} {:>3.0}% | {:<24} | hdg {:>5.1} | bat {:>5.1}%",
        coord(update.lat, update.lng),
        update.segment,
        update.progress * 100.0,
        phase,
        update.heading_deg,
        update.battery_level,
    )
}

/// Multi-line route summary: stops plus total length.
pub fn route_summary(route: &Route) -> String {
    let mut out = String::new();
    for (i, wp) in route.waypoints.iter().enumerate() {
        out.push_str(&format!("  {}. {} {}\n", i + 1, wp.name, coord(wp.lat, wp.lng)));
    }
    out.push_str(&format!("  total: {:.2} km", route.total_distance_km()));
    out
}
