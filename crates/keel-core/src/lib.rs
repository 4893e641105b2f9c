//! Stat engine for Even Keel, a narrative wellbeing simulation.
//!
//! This crate owns the numbers: bounded player and household meters, the
//! sparse effect records produced by dialog choices, the low-regulation
//! amplifier, and the warning/terminal threshold checks. It knows nothing
//! about scenario text, locations, or presentation; those live upstream.

/// Sparse choice effects and NPC-directed deltas.
pub mod effect;
/// The engine that applies effects and evaluates thresholds.
pub mod engine;
/// Bounded meter values in [0, 100].
pub mod meter;
/// NPC identities and strongly-typed household stat records.
pub mod npc;
/// Player wellbeing stats.
pub mod stats;
/// Terminal reasons that end a session.
pub mod terminal;
/// Warning channels for stats nearing critical territory.
pub mod warning;

/// Re-export effect types.
pub use effect::{Effect, NpcDelta};
/// Re-export engine types.
pub use engine::{CheckOutcome, CheckPhase, EngineState, StatEngine};
/// Re-export the meter type.
pub use meter::Meter;
/// Re-export NPC stat types.
pub use npc::{ChildOneStats, ChildTwoStats, HouseholdStats, NpcId, PartnerStats};
/// Re-export player stats.
pub use stats::PlayerStats;
/// Re-export the terminal reason type.
pub use terminal::TerminalReason;
/// Re-export the warning type.
pub use warning::Warning;
