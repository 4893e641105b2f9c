//! Terminal reasons: the ten conditions that end a session.

use serde::{Deserialize, Serialize};

/// The stat whose threshold crossing ended the session.
///
/// Variants are declared in evaluation priority order. Normal stats are
/// terminal at 10 or below; the two inverted stats (partner worry, child 2
/// anxiety) are terminal at 95 or above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalReason {
    /// Energy hit bottom.
    Energy,
    /// Regulation hit bottom.
    Regulation,
    /// Confidence hit bottom.
    Confidence,
    /// Presence hit bottom.
    Presence,
    /// Sleep hit bottom.
    Sleep,
    /// Connection hit bottom.
    Connection,
    /// Partner trust hit bottom.
    PartnerTrust,
    /// Partner worry maxed out.
    PartnerWorry,
    /// Child 1's security hit bottom.
    ChildOneSecurity,
    /// Child 2's anxiety maxed out.
    ChildTwoAnxiety,
}

impl TerminalReason {
    /// All reasons in evaluation priority order.
    pub const ALL: [Self; 10] = [
        Self::Energy,
        Self::Regulation,
        Self::Confidence,
        Self::Presence,
        Self::Sleep,
        Self::Connection,
        Self::PartnerTrust,
        Self::PartnerWorry,
        Self::ChildOneSecurity,
        Self::ChildTwoAnxiety,
    ];
}

impl std::fmt::Display for TerminalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Energy => "energy",
            Self::Regulation => "regulation",
            Self::Confidence => "confidence",
            Self::Presence => "presence",
            Self::Sleep => "sleep",
            Self::Connection => "connection",
            Self::PartnerTrust => "partner trust",
            Self::PartnerWorry => "partner worry",
            Self::ChildOneSecurity => "child 1 security",
            Self::ChildTwoAnxiety => "child 2 anxiety",
        };
        write!(f, "{label}")
    }
}
