//! Error types for the story session.

use thiserror::Error;

use crate::location::Location;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while driving a story session.
#[derive(Debug, Error)]
pub enum StoryError {
    /// Input did not match any command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The named place does not exist.
    #[error("unknown place: {0}")]
    UnknownLocation(String),

    /// The named person does not exist.
    #[error("nobody here by that name: {0}")]
    UnknownCastMember(String),

    /// The person exists but is somewhere else.
    #[error("{name} is not here — find them at the {place}.")]
    NotHere {
        /// The person's name.
        name: String,
        /// Where they actually are.
        place: Location,
    },

    /// Several people are present; the player must name one.
    #[error("who? ({0} are here)")]
    AmbiguousCastMember(String),

    /// Nobody is present at the current location.
    #[error("there's no one to talk to here")]
    NoOneHere,

    /// A building can only be entered from the hub.
    #[error("head back out to the hub first")]
    NotAtHub,

    /// A choice was made with no dialog open.
    #[error("no one is waiting on an answer")]
    NoEncounter,

    /// The choice number does not exist in the open dialog.
    #[error("invalid choice: {0}")]
    InvalidChoice(usize),

    /// A dialog is already open and must be answered first.
    #[error("answer the open question first (pick a number)")]
    EncounterPending,

    /// The session has ended; only restart and review commands work.
    #[error("the day has caught up with you — type 'restart' to try again")]
    SessionOver,
}
