//! Story layer for the wellbeing game.
//!
//! Wraps the stat engine from `keel-core` in a playable session: a small
//! hub-and-buildings world, dialog encounters drawn from static content
//! tables, and a journal of everything that happened. The session is
//! driven entirely through [`StorySession::process`], one line of input
//! at a time, which makes it equally usable from a terminal loop or a
//! test.

/// Session configuration.
pub mod config;
/// Static content tables: scenarios, feedback, game-over cards.
pub mod content;
/// Error types for session commands.
pub mod error;
/// Session journaling.
pub mod journal;
/// Places and people.
pub mod location;
/// The interactive session controller.
pub mod session;

pub use config::StoryConfig;
pub use content::{ChoiceCard, GameOverCondition, Scenario, condition, scenarios_for};
pub use error::{StoryError, StoryResult};
pub use journal::{Journal, JournalEntry};
pub use location::{CastMember, Location};
pub use session::StorySession;
