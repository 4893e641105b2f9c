//! Static content tables: scenarios, feedback lines, and game-over copy.
//!
//! Everything in here is data. The engine never reads these tables
//! directly; the session hands it plain effect records.

/// Post-choice feedback lines and NPC delta formatting.
pub mod feedback;
/// Game-over cards keyed by terminal reason.
pub mod gameover;
/// Scenario and choice tables per cast member.
pub mod scenarios;

pub use feedback::{feedback_line, format_npc_changes};
pub use gameover::{GameOverCondition, condition};
pub use scenarios::{ChoiceCard, Scenario, scenarios_for};
