//! Session journaling: a chronological record with markdown/text export.

/// Journal entry types.
pub mod entry;
/// Journal storage and export.
pub mod log;

pub use entry::JournalEntry;
pub use log::Journal;
