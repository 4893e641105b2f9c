//! NPC stat records.
//!
//! Each family member carries its own strongly-typed pair of meters.
//! Worry and anxiety are inverted meters: high is bad.

use serde::{Deserialize, Serialize};

use crate::meter::Meter;

/// Identifies one of the three tracked family members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NpcId {
    /// The player's partner.
    Partner,
    /// The younger, high-needs child.
    ChildOne,
    /// The anxious child.
    ChildTwo,
}

impl std::fmt::Display for NpcId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Partner => write!(f, "Partner"),
            Self::ChildOne => write!(f, "Child 1"),
            Self::ChildTwo => write!(f, "Child 2"),
        }
    }
}

/// The partner's stats. Trust erodes when shut out; worry is inverted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerStats {
    /// Do they feel included or shut out?
    pub trust: Meter,
    /// Are they anxious about the player? High is bad.
    pub worry: Meter,
}

impl Default for PartnerStats {
    fn default() -> Self {
        Self {
            trust: Meter::new(80),
            worry: Meter::new(30),
        }
    }
}

/// Child 1's stats. Children mirror their parents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildOneStats {
    /// Their own emotional regulation.
    pub regulation: Meter,
    /// Do they feel safe with the parent?
    pub security: Meter,
}

impl Default for ChildOneStats {
    fn default() -> Self {
        Self {
            regulation: Meter::new(70),
            security: Meter::new(80),
        }
    }
}

/// Child 2's stats. Anxiety is inverted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildTwoStats {
    /// Their baseline anxiety. High is bad.
    pub anxiety: Meter,
    /// Mirrors the player's patterns.
    pub confidence: Meter,
}

impl Default for ChildTwoStats {
    fn default() -> Self {
        Self {
            anxiety: Meter::new(40),
            confidence: Meter::new(70),
        }
    }
}

/// Stats for the whole household, one record per family member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdStats {
    /// The partner's record.
    pub partner: PartnerStats,
    /// Child 1's record.
    pub child_one: ChildOneStats,
    /// Child 2's record.
    pub child_two: ChildTwoStats,
}

impl HouseholdStats {
    /// Create household stats at their session-start defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore all records to their defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// One-line display of a family member's current stats.
    pub fn format(&self, npc: NpcId) -> String {
        match npc {
            NpcId::Partner => format!(
                "Partner - Trust: {}  Worry: {}",
                self.partner.trust, self.partner.worry
            ),
            NpcId::ChildOne => format!(
                "Child 1 - Regulation: {}  Security: {}",
                self.child_one.regulation, self.child_one.security
            ),
            NpcId::ChildTwo => format!(
                "Child 2 - Anxiety: {}  Confidence: {}",
                self.child_two.anxiety, self.child_two.confidence
            ),
        }
    }
}
