//! Feedback lines shown after each choice.

use keel_core::NpcDelta;

use crate::location::Location;

/// The one-line reaction to a choice, themed per place.
pub fn feedback_line(location: Location, positive: bool) -> &'static str {
    match (location, positive) {
        (Location::Gym, true) => "Good choice. Building momentum.",
        (Location::Gym, false) => "The slide continues...",
        (Location::Work, true) => "Protecting your energy.",
        (Location::Work, false) => "Tank depleting...",
        (Location::Home, true) => "Staying present.",
        (Location::Home, false) => "Collision triggered...",
        // No encounters happen on the street; generic lines as a fallback.
        (Location::Hub, true) => "A step in the right direction.",
        (Location::Hub, false) => "That one cost you.",
    }
}

/// Format the raw NPC deltas of a choice for display, e.g.
/// `Partner Trust +15  |  Partner Worry -20`.
///
/// These are the scripted deltas, before any amplification; the display
/// mirrors what the choice says it does, not what dysregulation made of it.
pub fn format_npc_changes(delta: &NpcDelta) -> Option<String> {
    let npc = delta.npc();
    let parts: Vec<String> = delta
        .entries()
        .iter()
        .map(|(label, value)| format!("{npc} {label} {value:+}"))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("  |  "))
    }
}
