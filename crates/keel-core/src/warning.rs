//! Warning channels for stats approaching critical territory.

use serde::{Deserialize, Serialize};

/// A stat sitting in its warning band.
///
/// Variants are declared in evaluation priority order; at most one warning
/// is surfaced per check regardless of how many stats qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Warning {
    /// Energy in (10, 25].
    Energy,
    /// Regulation in (10, 25].
    Regulation,
    /// Confidence in (10, 25].
    Confidence,
    /// Presence in (10, 25].
    Presence,
    /// Sleep in (10, 25].
    Sleep,
    /// Connection in (10, 25].
    Connection,
    /// Partner trust in (10, 25].
    PartnerTrust,
    /// Partner worry in [75, 90). Inverted: high is bad.
    PartnerWorry,
    /// Child 1 security in (10, 25].
    ChildOneSecurity,
    /// Child 2 anxiety in [75, 90). Inverted: high is bad.
    ChildTwoAnxiety,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::Energy => "Energy critically low — you need rest or you'll crash.",
            Self::Regulation => "Regulation failing — you're close to flooding.",
            Self::Confidence => "Confidence eroding — the slide is taking hold.",
            Self::Presence => "Presence fading — your family is noticing.",
            Self::Sleep => "Sleep debt mounting — cognitive capacity shrinking.",
            Self::Connection => "Connection weakening — you're isolating.",
            Self::PartnerTrust => "Partner's trust is shaky — they're feeling shut out.",
            Self::PartnerWorry => "Partner's worry is high — they're carrying your weight.",
            Self::ChildOneSecurity => "Child 1's sense of safety is dropping.",
            Self::ChildTwoAnxiety => "Child 2's anxiety is spiking.",
        };
        write!(f, "{msg}")
    }
}
