//! Journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the session journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JournalEntry {
    /// The player moved somewhere.
    Travel {
        /// Destination name.
        to: String,
        /// When they moved.
        timestamp: DateTime<Utc>,
    },
    /// A dialog encounter opened.
    Encounter {
        /// Who opened it.
        with: String,
        /// The scenario title.
        scenario: String,
        /// When it opened.
        timestamp: DateTime<Utc>,
    },
    /// The player answered an encounter.
    Choice {
        /// The scenario title.
        scenario: String,
        /// The choice text selected.
        choice: String,
        /// Whether the choice read as positive.
        positive: bool,
        /// Formatted NPC deltas, if the choice touched a family member.
        npc_changes: Option<String>,
        /// When the choice was made.
        timestamp: DateTime<Utc>,
    },
    /// A stat entered its warning band.
    Warning {
        /// The warning message.
        message: String,
        /// When it fired.
        timestamp: DateTime<Utc>,
    },
    /// A stat crossed its critical threshold.
    GameOver {
        /// The card's headline.
        title: String,
        /// Which stat ended the session.
        reason: String,
        /// When the session ended.
        timestamp: DateTime<Utc>,
    },
    /// The session was reset to defaults.
    Restart {
        /// When the restart happened.
        timestamp: DateTime<Utc>,
    },
    /// A freeform player note.
    Note {
        /// The note text.
        text: String,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
}
