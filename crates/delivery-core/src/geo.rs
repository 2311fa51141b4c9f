//! Geographic math for distances, bearings, and path interpolation.

use crate::models::Waypoint;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers (haversine).
///
/// Coordinates are decimal degrees. Total over any finite inputs; no range
/// validation is performed.
pub fn haversine_distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lng2 - lng1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Initial bearing from point 1 to point 2, degrees normalized to [0, 360).
/// 0 = north, 90 = east.
pub fn bearing_deg(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dlambda = (lng2 - lng1).to_radians();

    let y = dlambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlambda.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Componentwise linear interpolation between two waypoints.
///
/// Returns `start + (end - start) * t` on lat/lng. `t` is not clamped:
/// values outside [0, 1] extrapolate linearly. Callers wanting a point on
/// the segment must keep `t` in range themselves.
pub fn interpolate(start: &Waypoint, end: &Waypoint, t: f64) -> (f64, f64) {
    (
        start.lat + (end.lat - start.lat) * t,
        start.lng + (end.lng - start.lng) * t,
    )
}
