//! Bounded wellbeing meters.
//!
//! Every stat in the game, player or NPC, is a `Meter`: an integer held
//! in [0, 100]. Deltas of any magnitude saturate into that band.

use serde::{Deserialize, Serialize};

/// Lowest possible meter value.
pub const METER_MIN: u32 = 0;
/// Highest possible meter value.
pub const METER_MAX: u32 = 100;

/// A bounded stat value in [0, 100].
///
/// Construction clamps, [`Meter::apply`] clamps, and deserialization goes
/// through [`Meter::new`], so a meter can never leave the band no matter
/// what values are thrown at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Meter {
    value: u32,
}

impl From<u32> for Meter {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<Meter> for u32 {
    fn from(meter: Meter) -> Self {
        meter.value
    }
}

impl Meter {
    /// Create a new meter, clamped to [0, 100].
    pub fn new(value: u32) -> Self {
        Self {
            value: value.min(METER_MAX),
        }
    }

    /// Get the current value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Add a signed delta, saturating into [0, 100].
    pub fn apply(&mut self, delta: i32) {
        let next = i64::from(self.value) + i64::from(delta);
        self.value = next.clamp(i64::from(METER_MIN), i64::from(METER_MAX)) as u32;
    }
}

impl std::fmt::Display for Meter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
