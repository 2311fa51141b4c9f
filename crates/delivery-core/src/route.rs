//! Delivery route construction.
//!
//! Every delivery flies the same three-stop shape: depot, restaurant,
//! customer. The depot is a fixed launch site; restaurant and customer
//! coordinates come from the order.

use crate::geo::interpolate;
use crate::models::{Route, TimedWaypoint, Waypoint};

/// Depot launch site (District 5, Ho Chi Minh City).
pub const DEPOT_LAT: f64 = 10.762622;
pub const DEPOT_LNG: f64 = 106.660172;

/// Nominal flight time per route leg used for waypoint time estimates.
const LEG_FLIGHT_TIME_S: u32 = 60;

/// Build the three-waypoint route for an order.
///
/// Waypoint 0 is always the fixed depot. Coordinates are accepted verbatim;
/// no range validation is performed.
pub fn generate_route(
    restaurant_lat: f64,
    restaurant_lng: f64,
    customer_lat: f64,
    customer_lng: f64,
) -> Route {
    Route::new(vec![
        Waypoint::new(DEPOT_LAT, DEPOT_LNG, "Depot"),
        Waypoint::new(restaurant_lat, restaurant_lng, "Restaurant"),
        Waypoint::new(customer_lat, customer_lng, "Customer"),
    ])
}

/// Expand a route into evenly spaced points with linear time estimates.
///
/// Each segment contributes `points_per_segment` interpolated points plus its
/// end waypoint; the route's first waypoint opens the sequence. Used to feed
/// path polylines and the tracking backend's route payloads.
pub fn densify(route: &Route, points_per_segment: u32) -> Vec<TimedWaypoint> {
    let mut points = Vec::new();
    let step = points_per_segment.max(1);

    let mut sequence = 0u32;
    for (seg, pair) in route.waypoints.windows(2).enumerate() {
        let include_start = seg == 0;
        let first = if include_start { 0 } else { 1 };

        for i in first..=step {
            let t = f64::from(i) / f64::from(step);
            let (lat, lng) = interpolate(&pair[0], &pair[1], t);
            let elapsed = seg as u32 * LEG_FLIGHT_TIME_S + (t * f64::from(LEG_FLIGHT_TIME_S)) as u32;
            points.push(TimedWaypoint {
                sequence,
                lat,
                lng,
                estimated_time_s: elapsed,
            });
            sequence += 1;
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_route_has_three_waypoints_with_fixed_depot() {
        let route = generate_route(10.7757, 106.7004, 10.7820, 106.7050);

        assert_eq!(route.len(), 3);
        assert_eq!(route.waypoints[0].lat, DEPOT_LAT);
        assert_eq!(route.waypoints[0].lng, DEPOT_LNG);
        assert_eq!(route.waypoints[1].lat, 10.7757);
        assert_eq!(route.waypoints[2].lng, 106.7050);
    }

    #[test]
    fn generate_route_accepts_out_of_range_coordinates() {
        // No validation by design; values pass through verbatim.
        let route = generate_route(95.0, 200.0, -95.0, -200.0);

        assert_eq!(route.waypoints[1].lat, 95.0);
        assert_eq!(route.waypoints[2].lng, -200.0);
        assert_eq!(route.waypoints[0].lat, DEPOT_LAT);
    }

    #[test]
    fn total_distance_sums_both_legs() {
        let route = generate_route(10.7757, 106.7004, 10.7820, 106.7050);
        let leg1 = crate::geo::haversine_distance_km(DEPOT_LAT, DEPOT_LNG, 10.7757, 106.7004);
        let leg2 = crate::geo::haversine_distance_km(10.7757, 106.7004, 10.7820, 106.7050);

        assert!((route.total_distance_km() - (leg1 + leg2)).abs() < 1e-9);
    }

    #[test]
    fn densify_covers_route_endpoints() {
        let route = generate_route(10.7757, 106.7004, 10.7820, 106.7050);
        let points = densify(&route, 10);

        // 11 points on the first segment, 10 more on the second.
        assert_eq!(points.len(), 21);
        assert_eq!(points[0].lat, DEPOT_LAT);
        assert_eq!(points[0].estimated_time_s, 0);

        let last = points.last().unwrap();
        assert_eq!(last.lat, 10.7820);
        assert_eq!(last.lng, 106.7050);
        assert_eq!(last.estimated_time_s, 120);

        for (i, point) in points.iter().enumerate() {
            assert_eq!(point.sequence, i as u32);
        }
    }

    #[test]
    fn densify_midpoint_of_first_segment() {
        let route = generate_route(10.7757, 106.7004, 10.7820, 106.7050);
        let points = densify(&route, 10);

        let mid = &points[5];
        assert!((mid.lat - (DEPOT_LAT + 10.7757) / 2.0).abs() < 1e-12);
        assert_eq!(mid.estimated_time_s, 30);
    }
}
