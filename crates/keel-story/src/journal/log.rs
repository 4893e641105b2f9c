//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// A chronological log of session events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Session Journal\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::Travel { to, .. } => {
                    out.push_str(&format!("*Went to the {to}.*\n\n"));
                }
                JournalEntry::Encounter { with, scenario, .. } => {
                    out.push_str(&format!("## {with}: {scenario}\n\n"));
                }
                JournalEntry::Choice {
                    choice,
                    positive,
                    npc_changes,
                    ..
                } => {
                    let tone = if *positive { "steady" } else { "slide" };
                    out.push_str(&format!("**Chose** ({tone}): {choice}\n"));
                    if let Some(changes) = npc_changes {
                        out.push_str(&format!("  {changes}\n"));
                    }
                    out.push('\n');
                }
                JournalEntry::Warning { message, .. } => {
                    out.push_str(&format!("> ⚠ {message}\n\n"));
                }
                JournalEntry::GameOver { title, reason, .. } => {
                    out.push_str(&format!("## {title}\n\n({reason} gave out)\n\n"));
                }
                JournalEntry::Restart { .. } => {
                    out.push_str("---\n\n*Started over.*\n\n");
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("> {text}\n\n"));
                }
            }
        }
        out.trim_end().to_string() + "\n"
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Session Journal\n===============\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::Travel { to, .. } => {
                    out.push_str(&format!("went to the {to}\n"));
                }
                JournalEntry::Encounter { with, scenario, .. } => {
                    out.push_str(&format!("[{with}] {scenario}\n"));
                }
                JournalEntry::Choice {
                    choice,
                    positive,
                    npc_changes,
                    ..
                } => {
                    let tone = if *positive { "+" } else { "-" };
                    out.push_str(&format!("  ({tone}) {choice}\n"));
                    if let Some(changes) = npc_changes {
                        out.push_str(&format!("      {changes}\n"));
                    }
                }
                JournalEntry::Warning { message, .. } => {
                    out.push_str(&format!("  warning: {message}\n"));
                }
                JournalEntry::GameOver { title, .. } => {
                    out.push_str(&format!("GAME OVER: {title}\n"));
                }
                JournalEntry::Restart { .. } => {
                    out.push_str("-- restart --\n");
                }
                JournalEntry::Note { text, .. } => {
                    out.push_str(&format!("  note: {text}\n"));
                }
            }
        }
        out
    }
}
