//! Exponential backoff for the poll loop.
//!
//! Keeps backend outages from turning the fixed-cadence poller into a tight
//! retry loop with a warn-log storm.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone)]
pub struct PollBackoff {
    base: Duration,
    max: Duration,
    current: Option<Duration>,
}

impl PollBackoff {
    pub fn new(base: Duration, max: Duration) -> Self {
        let base = base.max(Duration::from_millis(1));
        Self {
            base,
            max: max.max(base),
            current: None,
        }
    }

    /// Record a failed attempt and return how long to hold off before the
    /// next one, jittered to avoid synchronized retries.
    pub fn on_failure(&mut self) -> Duration {
        let next = match self.current {
            None => self.base,
            Some(current) => current.saturating_mul(2).min(self.max),
        };
        self.current = Some(next);
        jittered(next)
    }

    /// Record a successful attempt; the next failure starts over at base.
    pub fn on_success(&mut self) {
        self.current = None;
    }

    pub fn is_backing_off(&self) -> bool {
        self.current.is_some()
    }
}

/// Add up to 20% jitter, seeded from the clock's subsecond nanos.
fn jittered(delay: Duration) -> Duration {
    let delay_ms = delay.as_millis() as u64;
    if delay_ms == 0 {
        return delay;
    }
    let span = delay_ms / 5;
    if span == 0 {
        return delay;
    }

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() as u64)
        .unwrap_or(0);
    delay + Duration::from_millis(nanos % (span + 1))
}
