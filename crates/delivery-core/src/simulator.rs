//! Tick-driven delivery simulation engine.
//!
//! The engine owns no timer. A consumer schedules `tick()` at a fixed
//! cadence (the reference UI uses 200 ms) and renders the returned snapshot;
//! stopping the timer is the consumer's job, typically on the completed tick
//! or on view teardown.

use crate::geo::{bearing_deg, interpolate};
use crate::models::{DeliveryPhase, Route, SimStatus, TickUpdate};

/// Fixed per-tick progress increment: 1% of a segment.
pub const PROGRESS_STEP: f64 = 0.01;

/// Battery drain per tick, percentage points.
const BATTERY_DRAIN_PER_TICK: f64 = 0.05;

const FULL_BATTERY: f64 = 100.0;

/// Simulates one drone delivery along a fixed route.
///
/// State is mutated only by [`start`](Self::start), [`stop`](Self::stop),
/// and [`tick`](Self::tick). Each order owns one independent simulator;
/// instances share nothing.
#[derive(Debug, Clone)]
pub struct DroneSimulator {
    order_id: u64,
    route: Route,
    current_segment: usize,
    progress: f64,
    status: SimStatus,
    battery_level: f64,
}

impl DroneSimulator {
    pub fn new(order_id: u64, route: Route) -> Self {
        Self {
            order_id,
            route,
            current_segment: 0,
            progress: 0.0,
            status: SimStatus::Idle,
            battery_level: FULL_BATTERY,
        }
    }

    pub fn order_id(&self) -> u64 {
        self.order_id
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn status(&self) -> SimStatus {
        self.status
    }

    pub fn current_segment(&self) -> usize {
        self.current_segment
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn battery_level(&self) -> f64 {
        self.battery_level
    }

    /// Begin (or restart) the delivery from segment 0.
    ///
    /// Idempotent: calling from any state rewinds to the start of the route.
    pub fn start(&mut self) {
        self.current_segment = 0;
        self.progress = 0.0;
        self.battery_level = FULL_BATTERY;
        self.status = SimStatus::Moving;
    }

    /// Halt ticking without touching position state.
    pub fn stop(&mut self) {
        self.status = SimStatus::Idle;
    }

    /// Advance the simulation by one step.
    ///
    /// Returns `None` unless the simulator is moving. Progress grows by
    /// [`PROGRESS_STEP`]; crossing 1.0 resets progress to exactly 0 and
    /// advances the segment. Overflow past 1.0 is discarded, not carried
    /// into the next segment. The rollover and the interpolation below it
    /// both read the updated segment/progress, so a boundary-crossing tick
    /// reports the first position of the next segment rather than skipping
    /// it.
    pub fn tick(&mut self) -> Option<TickUpdate> {
        if self.status != SimStatus::Moving {
            return None;
        }
        if self.route.segment_count() == 0 {
            // Degenerate route; nothing to traverse.
            self.status = SimStatus::Completed;
            return None;
        }

        self.battery_level = (self.battery_level - BATTERY_DRAIN_PER_TICK).max(0.0);
        self.progress += PROGRESS_STEP;

        if self.progress >= 1.0 {
            self.progress = 0.0;
            self.current_segment += 1;

            if self.current_segment >= self.route.len() - 1 {
                self.status = SimStatus::Completed;
                // segment_count > 0 guarantees at least two waypoints here.
                let last = self.route.waypoints.last()?;
                let heading = self
                    .route
                    .waypoints
                    .get(self.route.len() - 2)
                    .map(|prev| bearing_deg(prev.lat, prev.lng, last.lat, last.lng))
                    .unwrap_or(0.0);
                return Some(TickUpdate {
                    lat: last.lat,
                    lng: last.lng,
                    segment: self.current_segment,
                    progress: 0.0,
                    completed: true,
                    heading_deg: heading,
                    battery_level: self.battery_level,
                });
            }
        }

        let from = &self.route.waypoints[self.current_segment];
        let to = &self.route.waypoints[self.current_segment + 1];
        let (lat, lng) = interpolate(from, to, self.progress);

        Some(TickUpdate {
            lat,
            lng,
            segment: self.current_segment,
            progress: self.progress,
            completed: false,
            heading_deg: bearing_deg(lat, lng, to.lat, to.lng),
            battery_level: self.battery_level,
        })
    }

    /// Read the current interpolated position without advancing state.
    ///
    /// Once the segment index reaches the route bound the final waypoint is
    /// returned, frozen.
    pub fn current_position(&self) -> (f64, f64) {
        if self.route.is_empty() {
            return (0.0, 0.0);
        }
        if self.current_segment >= self.route.len() - 1 {
            let last = &self.route.waypoints[self.route.len() - 1];
            return (last.lat, last.lng);
        }

        let from = &self.route.waypoints[self.current_segment];
        let to = &self.route.waypoints[self.current_segment + 1];
        interpolate(from, to, self.progress)
    }

    /// Map the current segment to a display phase.
    ///
    /// Segment 0 is the pickup leg; segment 1 is the drop-off leg, shown as
    /// "at pickup" on the exact rollover tick (progress still 0). Past the
    /// labeled range the delivery reads as finished.
    pub fn phase(&self) -> DeliveryPhase {
        if self.status == SimStatus::Completed || self.current_segment + 1 >= self.route.len() {
            return DeliveryPhase::Delivered;
        }
        match self.current_segment {
            0 => DeliveryPhase::HeadingToPickup,
            1 if self.progress == 0.0 => DeliveryPhase::AtPickup,
            _ => DeliveryPhase::HeadingToDropoff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{generate_route, DEPOT_LAT, DEPOT_LNG};

    fn simulator() -> DroneSimulator {
        DroneSimulator::new(42, generate_route(10.7757, 106.7004, 10.7820, 106.7050))
    }

    #[test]
    fn tick_before_start_is_a_noop() {
        let mut sim = simulator();
        for _ in 0..10 {
            assert!(sim.tick().is_none());
        }
        assert_eq!(sim.status(), SimStatus::Idle);
        assert_eq!(sim.current_segment(), 0);
        assert_eq!(sim.progress(), 0.0);
    }

    #[test]
    fn hundred_ticks_advance_exactly_one_segment() {
        let mut sim = simulator();
        sim.start();

        let mut completions = 0;
        for _ in 0..100 {
            let update = sim.tick().expect("moving simulator always yields a tick");
            if update.completed {
                completions += 1;
            }
        }

        assert_eq!(completions, 0);
        assert_eq!(sim.current_segment(), 1);
        assert_eq!(sim.progress(), 0.0);
        assert_eq!(sim.status(), SimStatus::Moving);
    }

    #[test]
    fn fifty_ticks_reach_first_segment_midpoint() {
        let mut sim = simulator();
        sim.start();

        let mut last = None;
        for _ in 0..50 {
            last = sim.tick();
        }

        let update = last.unwrap();
        assert_eq!(sim.current_segment(), 0);
        assert!((sim.progress() - 0.5).abs() < 1e-9);
        assert!((update.lat - (DEPOT_LAT + 10.7757) / 2.0).abs() < 1e-9);
        assert!((update.lng - (DEPOT_LNG + 106.7004) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn two_hundred_ticks_complete_the_delivery_once() {
        let mut sim = simulator();
        sim.start();

        let mut completions = 0;
        let mut final_update = None;
        for _ in 0..200 {
            if let Some(update) = sim.tick() {
                if update.completed {
                    completions += 1;
                    final_update = Some(update);
                }
            }
        }

        assert_eq!(completions, 1);
        assert_eq!(sim.status(), SimStatus::Completed);

        let update = final_update.unwrap();
        assert_eq!(update.lat, 10.7820);
        assert_eq!(update.lng, 106.7050);
        assert_eq!(sim.current_position(), (10.7820, 106.7050));
    }

    #[test]
    fn ticks_after_completion_are_noops() {
        let mut sim = simulator();
        sim.start();
        for _ in 0..200 {
            sim.tick();
        }
        assert_eq!(sim.status(), SimStatus::Completed);

        assert!(sim.tick().is_none());
        assert_eq!(sim.current_position(), (10.7820, 106.7050));
    }

    #[test]
    fn rollover_tick_reports_start_of_next_segment() {
        let mut sim = simulator();
        sim.start();

        let mut rollover = None;
        for _ in 0..100 {
            rollover = sim.tick();
        }

        // Tick 100 crosses the boundary: segment 1, progress 0, positioned
        // exactly at the restaurant.
        let update = rollover.unwrap();
        assert_eq!(update.segment, 1);
        assert_eq!(update.progress, 0.0);
        assert!(!update.completed);
        assert!((update.lat - 10.7757).abs() < 1e-9);
        assert!((update.lng - 106.7004).abs() < 1e-9);
    }

    #[test]
    fn start_is_idempotent_and_rewinds() {
        let mut sim = simulator();
        sim.start();
        for _ in 0..130 {
            sim.tick();
        }
        assert_eq!(sim.current_segment(), 1);

        sim.start();
        assert_eq!(sim.status(), SimStatus::Moving);
        assert_eq!(sim.current_segment(), 0);
        assert_eq!(sim.progress(), 0.0);
        assert_eq!(sim.battery_level(), 100.0);
    }

    #[test]
    fn stop_halts_ticks_without_moving_position() {
        let mut sim = simulator();
        sim.start();
        for _ in 0..30 {
            sim.tick();
        }
        let position = sim.current_position();

        sim.stop();
        assert!(sim.tick().is_none());
        assert_eq!(sim.current_position(), position);
        assert_eq!(sim.current_segment(), 0);
    }

    #[test]
    fn phase_follows_segments() {
        let mut sim = simulator();
        assert_eq!(sim.phase(), DeliveryPhase::HeadingToPickup);

        sim.start();
        for _ in 0..50 {
            sim.tick();
        }
        assert_eq!(sim.phase(), DeliveryPhase::HeadingToPickup);

        for _ in 0..50 {
            sim.tick();
        }
        // Exactly on the restaurant waypoint.
        assert_eq!(sim.phase(), DeliveryPhase::AtPickup);

        sim.tick();
        assert_eq!(sim.phase(), DeliveryPhase::HeadingToDropoff);

        for _ in 0..100 {
            sim.tick();
        }
        assert_eq!(sim.phase(), DeliveryPhase::Delivered);
    }

    #[test]
    fn battery_drains_per_tick() {
        let mut sim = simulator();
        sim.start();

        sim.tick();
        assert!((sim.battery_level() - 99.95).abs() < 1e-9);

        for _ in 0..199 {
            sim.tick();
        }
        // 200 ticks at 0.05 each.
        assert!((sim.battery_level() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn heading_points_along_first_leg() {
        let mut sim = simulator();
        sim.start();

        let update = sim.tick().unwrap();
        let expected = crate::geo::bearing_deg(update.lat, update.lng, 10.7757, 106.7004);
        assert!((update.heading_deg - expected).abs() < 1e-9);
    }
}
