//! Five-stage order status timeline.
//!
//! The timeline is presentation sequencing only: a single external
//! fixed-interval scheduler calls [`OrderTimeline::advance`] to step through
//! the stages one at a time. It is fully decoupled from the position
//! simulator; the two never read each other's state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStage {
    Confirmed,
    Preparing,
    PickedUp,
    InFlight,
    Delivered,
}

impl OrderStage {
    pub const ALL: [OrderStage; 5] = [
        OrderStage::Confirmed,
        OrderStage::Preparing,
        OrderStage::PickedUp,
        OrderStage::InFlight,
        OrderStage::Delivered,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderStage::Confirmed => "Order confirmed",
            OrderStage::Preparing => "Restaurant preparing",
            OrderStage::PickedUp => "Drone picked up order",
            OrderStage::InFlight => "Drone in flight",
            OrderStage::Delivered => "Delivered",
        }
    }

    fn next(&self) -> Option<OrderStage> {
        let index = Self::ALL.iter().position(|stage| stage == self)?;
        Self::ALL.get(index + 1).copied()
    }
}

impl std::fmt::Display for OrderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Stage index advanced by one fixed-interval scheduler.
#[derive(Debug, Clone, Default)]
pub struct OrderTimeline {
    stage_index: usize,
}

impl OrderTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> OrderStage {
        OrderStage::ALL[self.stage_index.min(OrderStage::ALL.len() - 1)]
    }

    /// Move to the next stage. Returns false once the final stage is
    /// reached; callers use that to stop their scheduler.
    pub fn advance(&mut self) -> bool {
        if self.stage().next().is_none() {
            return false;
        }
        self.stage_index += 1;
        true
    }

    pub fn is_final(&self) -> bool {
        self.stage() == OrderStage::Delivered
    }

    /// Stages already passed or current, for rendering a checklist.
    pub fn reached(&self) -> &'static [OrderStage] {
        let all: &'static [OrderStage; 5] = &OrderStage::ALL;
        &all[..=self.stage_index.min(all.len() - 1)]
    }
}
