//! Player wellbeing stats.

use serde::{Deserialize, Serialize};

use crate::meter::Meter;

/// The player character's seven wellbeing meters.
///
/// All meters start full except `physical` (gym momentum starts mid at 50)
/// and `connection` (relationship quality starts at 75).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// The tank. Depletes with stress, refills with rest and exercise.
    pub energy: Meter,
    /// Emotional regulation: how close to flooding.
    pub regulation: Meter,
    /// Builds with wins, erodes with slides.
    pub confidence: Meter,
    /// How "there" the player is for their family.
    pub presence: Meter,
    /// Sleep quality, affects next-day capacity.
    pub sleep: Meter,
    /// Gym consistency and fitness momentum.
    pub physical: Meter,
    /// Relationship quality with the partner.
    pub connection: Meter,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            energy: Meter::new(100),
            regulation: Meter::new(100),
            confidence: Meter::new(100),
            presence: Meter::new(100),
            sleep: Meter::new(100),
            physical: Meter::new(50),
            connection: Meter::new(75),
        }
    }
}

impl PlayerStats {
    /// Create stats at their session-start defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore all meters to their defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// First display line: the four core meters.
    pub fn format_primary(&self) -> String {
        format!(
            "Energy: {}  Regulation: {}  Confidence: {}  Presence: {}",
            self.energy, self.regulation, self.confidence, self.presence
        )
    }

    /// Second display line: the remaining three meters.
    pub fn format_secondary(&self) -> String {
        format!(
            "Sleep: {}  Physical: {}  Connection: {}",
            self.sleep, self.physical, self.connection
        )
    }
}
