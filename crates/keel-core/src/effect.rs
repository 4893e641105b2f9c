//! Effects produced by dialog choices.
//!
//! An [`Effect`] is a sparse set of signed deltas, constructed per choice
//! from static content and consumed once by the engine. NPC-directed deltas
//! ride along as a tagged [`NpcDelta`] variant, so an effect can never name
//! a stat its target NPC does not have.

use serde::{Deserialize, Serialize};

use crate::npc::NpcId;

/// Sparse deltas for one family member's stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NpcDelta {
    /// Deltas for the partner.
    Partner {
        /// Change to trust.
        trust: Option<i32>,
        /// Change to worry.
        worry: Option<i32>,
    },
    /// Deltas for child 1.
    ChildOne {
        /// Change to their regulation.
        regulation: Option<i32>,
        /// Change to their security.
        security: Option<i32>,
    },
    /// Deltas for child 2.
    ChildTwo {
        /// Change to their anxiety.
        anxiety: Option<i32>,
        /// Change to their confidence.
        confidence: Option<i32>,
    },
}

impl NpcDelta {
    /// Partner deltas.
    pub fn partner(trust: i32, worry: i32) -> Self {
        Self::Partner {
            trust: Some(trust),
            worry: Some(worry),
        }
    }

    /// Child 1 deltas.
    pub fn child_one(regulation: i32, security: i32) -> Self {
        Self::ChildOne {
            regulation: Some(regulation),
            security: Some(security),
        }
    }

    /// Child 2 deltas.
    pub fn child_two(anxiety: i32, confidence: i32) -> Self {
        Self::ChildTwo {
            anxiety: Some(anxiety),
            confidence: Some(confidence),
        }
    }

    /// Which family member this delta targets.
    pub fn npc(&self) -> NpcId {
        match self {
            Self::Partner { .. } => NpcId::Partner,
            Self::ChildOne { .. } => NpcId::ChildOne,
            Self::ChildTwo { .. } => NpcId::ChildTwo,
        }
    }

    /// The present deltas as (stat label, delta) pairs, for feedback display.
    pub fn entries(&self) -> Vec<(&'static str, i32)> {
        let mut out = Vec::new();
        let mut push = |label, value: &Option<i32>| {
            if let Some(v) = value {
                out.push((label, *v));
            }
        };
        match self {
            Self::Partner { trust, worry } => {
                push("Trust", trust);
                push("Worry", worry);
            }
            Self::ChildOne {
                regulation,
                security,
            } => {
                push("Regulation", regulation);
                push("Security", security);
            }
            Self::ChildTwo {
                anxiety,
                confidence,
            } => {
                push("Anxiety", anxiety);
                push("Confidence", confidence);
            }
        }
        out
    }
}

/// A sparse set of signed stat deltas applied when a choice is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    /// Change to energy.
    pub energy: Option<i32>,
    /// Change to regulation.
    pub regulation: Option<i32>,
    /// Change to confidence.
    pub confidence: Option<i32>,
    /// Change to presence.
    pub presence: Option<i32>,
    /// Change to sleep.
    pub sleep: Option<i32>,
    /// Change to physical.
    pub physical: Option<i32>,
    /// Change to connection.
    pub connection: Option<i32>,
    /// Deltas for one family member, if the choice touches them.
    pub npc: Option<NpcDelta>,
}

impl Effect {
    /// Create an empty effect.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the energy delta.
    pub fn with_energy(mut self, delta: i32) -> Self {
        self.energy = Some(delta);
        self
    }

    /// Set the regulation delta.
    pub fn with_regulation(mut self, delta: i32) -> Self {
        self.regulation = Some(delta);
        self
    }

    /// Set the confidence delta.
    pub fn with_confidence(mut self, delta: i32) -> Self {
        self.confidence = Some(delta);
        self
    }

    /// Set the presence delta.
    pub fn with_presence(mut self, delta: i32) -> Self {
        self.presence = Some(delta);
        self
    }

    /// Set the sleep delta.
    pub fn with_sleep(mut self, delta: i32) -> Self {
        self.sleep = Some(delta);
        self
    }

    /// Set the physical delta.
    pub fn with_physical(mut self, delta: i32) -> Self {
        self.physical = Some(delta);
        self
    }

    /// Set the connection delta.
    pub fn with_connection(mut self, delta: i32) -> Self {
        self.connection = Some(delta);
        self
    }

    /// Attach deltas for a family member.
    pub fn with_npc(mut self, delta: NpcDelta) -> Self {
        self.npc = Some(delta);
        self
    }

    /// Whether this effect counts as a positive choice.
    ///
    /// A choice is positive when its confidence and regulation deltas sum
    /// above zero, mirroring how the feedback lines decide their tone.
    pub fn is_positive(&self) -> bool {
        self.confidence.unwrap_or(0) + self.regulation.unwrap_or(0) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let e = Effect::new()
            .with_energy(-15)
            .with_confidence(20)
            .with_npc(NpcDelta::partner(15, -20));
        assert_eq!(e.energy, Some(-15));
        assert_eq!(e.confidence, Some(20));
        assert_eq!(e.regulation, None);
        assert_eq!(e.npc.as_ref().unwrap().npc(), NpcId::Partner);
    }

    #[test]
    fn positivity_from_confidence_and_regulation() {
        assert!(Effect::new().with_confidence(10).with_regulation(-5).is_positive());
        assert!(!Effect::new().with_confidence(-10).with_regulation(5).is_positive());
        assert!(!Effect::new().with_energy(50).is_positive());
    }

    #[test]
    fn delta_entries_skip_absent_stats() {
        let d = NpcDelta::Partner {
            trust: Some(-10),
            worry: None,
        };
        assert_eq!(d.entries(), vec![("Trust", -10)]);
    }

    #[test]
    fn delta_entries_in_declaration_order() {
        let d = NpcDelta::child_two(25, -20);
        assert_eq!(d.entries(), vec![("Anxiety", 25), ("Confidence", -20)]);
    }

    #[test]
    fn round_trip_serde() {
        let e = Effect::new()
            .with_regulation(-25)
            .with_npc(NpcDelta::child_one(-25, -20));
        let json = serde_json::to_string(&e).unwrap();
        let e2: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(e, e2);
    }
}
