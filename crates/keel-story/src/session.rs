//! Story session management.
//!
//! `StorySession` owns the stat engine and drives it from text commands:
//! moving between places, opening dialog encounters, answering them, and
//! restarting after a game over. Selecting a choice applies its effect and
//! runs both deferred checks in order, so a warning always lands in the
//! output before any game-over transition from the same update.

use chrono::Utc;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use keel_core::{CheckOutcome, StatEngine};

use crate::config::StoryConfig;
use crate::content::gameover::condition;
use crate::content::scenarios::{Scenario, scenarios_for};
use crate::content::{feedback_line, format_npc_changes};
use crate::error::{StoryError, StoryResult};
use crate::journal::{Journal, JournalEntry};
use crate::location::{CastMember, Location};

/// An open dialog waiting for an answer.
#[derive(Debug, Clone)]
struct Encounter {
    cast: CastMember,
    scenario: Scenario,
}

/// An interactive story session.
pub struct StorySession {
    engine: StatEngine,
    location: Location,
    encounter: Option<Encounter>,
    journal: Journal,
    rng: StdRng,
}

impl StorySession {
    /// Create a new session at the hub with default stats.
    pub fn new(config: StoryConfig) -> Self {
        Self {
            engine: StatEngine::new(),
            location: Location::Hub,
            encounter: None,
            journal: Journal::new(),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// The stat engine.
    pub fn engine(&self) -> &StatEngine {
        &self.engine
    }

    /// Direct engine access for tests and tooling.
    #[doc(hidden)]
    pub fn engine_mut(&mut self) -> &mut StatEngine {
        &mut self.engine
    }

    /// Where the player currently is.
    pub fn location(&self) -> Location {
        self.location
    }

    /// The journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Whether a dialog is waiting for an answer.
    pub fn encounter_open(&self) -> bool {
        self.encounter.is_some()
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> StoryResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        if let Ok(n) = cmd.parse::<usize>() {
            return self.do_choose(n);
        }

        match cmd.as_str() {
            "go" | "enter" => self.do_go(rest),
            "leave" | "out" => self.do_go("hub"),
            "talk" => self.do_talk(rest),
            "look" => Ok(self.do_look()),
            "stats" => Ok(self.do_stats()),
            "npcs" | "family" => Ok(self.do_npcs()),
            "status" => Ok(self.do_status()),
            "note" => self.do_note(rest),
            "journal" => Ok(self.do_journal_show()),
            "export" => self.do_journal_export(rest),
            "restart" | "reset" => Ok(self.do_restart()),
            "help" => Ok(Self::do_help(rest)),
            "quit" | "q" => Ok("Take care of yourself.".to_string()),
            _ => Err(StoryError::UnknownCommand(trimmed.to_string())),
        }
    }

    fn guard_active(&self) -> StoryResult<()> {
        if self.engine.is_over() {
            return Err(StoryError::SessionOver);
        }
        if self.encounter.is_some() {
            return Err(StoryError::EncounterPending);
        }
        Ok(())
    }

    fn do_go(&mut self, rest: &str) -> StoryResult<String> {
        self.guard_active()?;

        let target = Location::parse(rest)
            .ok_or_else(|| StoryError::UnknownLocation(rest.to_string()))?;

        if target == self.location {
            return Ok(self.do_look());
        }
        // Buildings connect only through the hub.
        if target != Location::Hub && self.location != Location::Hub {
            return Err(StoryError::NotAtHub);
        }

        self.location = target;
        self.journal.append(JournalEntry::Travel {
            to: target.to_string(),
            timestamp: Utc::now(),
        });

        Ok(self.do_look())
    }

    fn do_talk(&mut self, rest: &str) -> StoryResult<String> {
        self.guard_active()?;

        let cast = self.resolve_cast(rest)?;
        let table = scenarios_for(cast);
        let scenario = table[self.rng.random_range(0..table.len())].clone();

        self.journal.append(JournalEntry::Encounter {
            with: cast.to_string(),
            scenario: scenario.title.clone(),
            timestamp: Utc::now(),
        });

        let mut out = match cast.npc_id() {
            // Family dialogs lead with the person's name and their stats.
            Some(npc) => format!(
                "{}: {}\n{}\n",
                cast,
                scenario.title,
                self.engine.household().format(npc)
            ),
            None => format!("{}\n", scenario.title),
        };
        for (i, choice) in scenario.choices.iter().enumerate() {
            out.push_str(&format!("  [{}] {}\n", i + 1, choice.text));
        }
        out.push_str("Pick a number.");

        self.encounter = Some(Encounter { cast, scenario });
        Ok(out)
    }

    fn resolve_cast(&self, rest: &str) -> StoryResult<CastMember> {
        if rest.is_empty() {
            let present = self.location.cast();
            return match present {
                [] => Err(StoryError::NoOneHere),
                [only] => Ok(*only),
                many => {
                    let names: Vec<String> = many.iter().map(|c| c.to_string()).collect();
                    Err(StoryError::AmbiguousCastMember(names.join(", ")))
                }
            };
        }

        let cast = CastMember::parse(rest)
            .ok_or_else(|| StoryError::UnknownCastMember(rest.to_string()))?;
        if cast.location() != self.location {
            return Err(StoryError::NotHere {
                name: cast.to_string(),
                place: cast.location(),
            });
        }
        Ok(cast)
    }

    fn do_choose(&mut self, number: usize) -> StoryResult<String> {
        if self.engine.is_over() {
            return Err(StoryError::SessionOver);
        }
        let encounter = self.encounter.take().ok_or(StoryError::NoEncounter)?;

        let Some(choice) = encounter.scenario.choices.get(number.wrapping_sub(1)) else {
            // Leave the dialog open so the player can pick again.
            let err = StoryError::InvalidChoice(number);
            self.encounter = Some(encounter);
            return Err(err);
        };

        let effect = choice.effect.clone();
        let positive = effect.is_positive();
        let npc_changes = effect.npc.as_ref().and_then(format_npc_changes);

        self.engine.apply_effect(&effect);
        self.journal.append(JournalEntry::Choice {
            scenario: encounter.scenario.title.clone(),
            choice: choice.text.clone(),
            positive,
            npc_changes: npc_changes.clone(),
            timestamp: Utc::now(),
        });

        let mut out = feedback_line(encounter.cast.location(), positive).to_string();
        if let Some(changes) = npc_changes {
            out.push_str(&format!("\n{changes}"));
        }
        out.push_str(&format!("\n\n{}", self.do_stats()));

        // Warning check first, terminal second; same ordering the timers
        // enforced in the original presentation.
        if let Some(CheckOutcome::Warning(warning)) = self.engine.tick() {
            out.push_str(&format!("\n\n⚠ {warning}"));
            self.journal.append(JournalEntry::Warning {
                message: warning.to_string(),
                timestamp: Utc::now(),
            });
        }
        if let Some(CheckOutcome::Terminal(reason)) = self.engine.tick() {
            let card = condition(reason);
            out.push_str(&format!("\n\n{}", self.game_over_block(card.title, card.message, card.lesson)));
            self.journal.append(JournalEntry::GameOver {
                title: card.title.to_string(),
                reason: reason.to_string(),
                timestamp: Utc::now(),
            });
        }

        Ok(out)
    }

    fn game_over_block(&self, title: &str, message: &str, lesson: &str) -> String {
        let h = self.engine.household();
        format!(
            "=== {title} ===\n{message}\n\nLESSON: {lesson}\n\nFinal Stats:\n{}\n{}\nPartner Trust: {}  Child 1 Security: {}  Child 2 Anxiety: {}\n\nType 'restart' to try again.",
            self.engine.player().format_primary(),
            self.engine.player().format_secondary(),
            h.partner.trust,
            h.child_one.security,
            h.child_two.anxiety,
        )
    }

    fn do_look(&self) -> String {
        self.location.describe().to_string()
    }

    fn do_stats(&self) -> String {
        format!(
            "{}\n{}",
            self.engine.player().format_primary(),
            self.engine.player().format_secondary()
        )
    }

    fn do_npcs(&self) -> String {
        let h = self.engine.household();
        format!(
            "{}\n{}\n{}",
            h.format(keel_core::NpcId::Partner),
            h.format(keel_core::NpcId::ChildOne),
            h.format(keel_core::NpcId::ChildTwo),
        )
    }

    fn do_status(&self) -> String {
        let mut out = format!("Location: {}\n", self.location);
        match self.engine.state() {
            keel_core::EngineState::Active => out.push_str("Holding steady.\n"),
            keel_core::EngineState::GameOver(reason) => {
                out.push_str(&format!("The day ended: {reason} gave out.\n"));
            }
        }
        if let Some(ref enc) = self.encounter {
            out.push_str(&format!("Open dialog: {} ({})\n", enc.scenario.title, enc.cast));
        }
        out.push_str(&format!("Journal: {} entries", self.journal.len()));
        out
    }

    fn do_note(&mut self, text: &str) -> StoryResult<String> {
        if text.is_empty() {
            return Err(StoryError::UnknownCommand("note (needs text)".to_string()));
        }
        self.journal.append(JournalEntry::Note {
            text: text.to_string(),
            timestamp: Utc::now(),
        });
        Ok("Noted.".to_string())
    }

    fn do_journal_show(&self) -> String {
        if self.journal.is_empty() {
            return "Journal is empty.".to_string();
        }
        self.journal.export_text().trim_end().to_string()
    }

    fn do_journal_export(&self, format: &str) -> StoryResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.journal.export_markdown()),
            "text" | "txt" => Ok(self.journal.export_text()),
            other => Err(StoryError::UnknownCommand(format!(
                "unknown format '{other}', use: markdown, text"
            ))),
        }
    }

    fn do_restart(&mut self) -> String {
        self.engine.reset();
        self.location = Location::Hub;
        self.encounter = None;
        self.journal.append(JournalEntry::Restart {
            timestamp: Utc::now(),
        });
        format!("A new day. You're back on the street.\n\n{}", self.do_stats())
    }

    fn do_help(topic: &str) -> String {
        match topic.to_lowercase().as_str() {
            "places" | "go" => "\
Places:
  go gym|work|home              Enter a building (from the hub)
  leave                         Head back out to the hub
  look                          Describe where you are"
                .to_string(),
            "journal" | "note" => "\
Journal:
  note <text>                   Add a journal note
  journal                       Show the journal
  export [markdown|text]        Export the journal"
                .to_string(),
            _ => "\
Commands:
  go gym|work|home              Enter a building (from the hub)
  leave                         Head back out to the hub
  look                          Describe where you are
  talk [name]                   Start a conversation
  1, 2, ...                     Answer an open dialog
  stats                         Show your stats
  npcs                          Show the family's stats
  status                        Show session status
  note <text>                   Add a journal note
  journal                       Show the journal
  export [markdown|text]        Export the journal
  restart                       Start the day over
  help [places|journal]         Show help
  quit                          Exit"
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_core::Meter;

    fn session() -> StorySession {
        StorySession::new(StoryConfig::default())
    }

    #[test]
    fn starts_at_hub_with_defaults() {
        let s = session();
        assert_eq!(s.location(), Location::Hub);
        assert!(!s.encounter_open());
        assert!(s.journal().is_empty());
        assert_eq!(s.engine().player().energy.value(), 100);
    }

    #[test]
    fn go_between_hub_and_buildings() {
        let mut s = session();
        let out = s.process("go gym").unwrap();
        assert!(out.contains("trainer"));
        assert_eq!(s.location(), Location::Gym);

        // Buildings do not connect directly.
        assert!(matches!(s.process("go work"), Err(StoryError::NotAtHub)));

        s.process("leave").unwrap();
        assert_eq!(s.location(), Location::Hub);
        s.process("go work").unwrap();
        assert_eq!(s.location(), Location::Work);
    }

    #[test]
    fn go_unknown_place() {
        let mut s = session();
        assert!(matches!(
            s.process("go moon"),
            Err(StoryError::UnknownLocation(_))
        ));
    }

    #[test]
    fn talk_at_hub_fails() {
        let mut s = session();
        assert!(matches!(s.process("talk"), Err(StoryError::NoOneHere)));
    }

    #[test]
    fn talk_opens_an_encounter() {
        let mut s = session();
        s.process("go gym").unwrap();
        let out = s.process("talk").unwrap();
        assert!(out.contains("[1]"));
        assert!(out.contains("[2]"));
        assert!(out.contains("Pick a number."));
        assert!(s.encounter_open());
        assert_eq!(s.journal().len(), 2); // travel + encounter
    }

    #[test]
    fn talk_while_encounter_open_fails() {
        let mut s = session();
        s.process("go gym").unwrap();
        s.process("talk").unwrap();
        assert!(matches!(s.process("talk"), Err(StoryError::EncounterPending)));
        assert!(matches!(s.process("go hub"), Err(StoryError::EncounterPending)));
    }

    #[test]
    fn family_member_must_be_home() {
        let mut s = session();
        assert!(matches!(
            s.process("talk partner"),
            Err(StoryError::NotHere { .. })
        ));
    }

    #[test]
    fn talking_at_home_needs_a_name() {
        let mut s = session();
        s.process("go home").unwrap();
        assert!(matches!(
            s.process("talk"),
            Err(StoryError::AmbiguousCastMember(_))
        ));
        let out = s.process("talk child 2").unwrap();
        assert!(out.contains("Child 2"));
        assert!(out.contains("Anxiety"));
    }

    #[test]
    fn choosing_applies_the_effect() {
        let mut s = session();
        s.process("go gym").unwrap();
        s.process("talk").unwrap();
        let before = s.engine().player().clone();
        let out = s.process("1").unwrap();
        assert!(out.contains("Energy:"));
        assert!(!s.encounter_open());
        assert_ne!(s.engine().player(), &before);
    }

    #[test]
    fn choice_without_encounter_fails() {
        let mut s = session();
        assert!(matches!(s.process("1"), Err(StoryError::NoEncounter)));
    }

    #[test]
    fn invalid_choice_keeps_the_dialog_open() {
        let mut s = session();
        s.process("go gym").unwrap();
        s.process("talk").unwrap();
        assert!(matches!(s.process("9"), Err(StoryError::InvalidChoice(9))));
        assert!(s.encounter_open());
        s.process("2").unwrap();
        assert!(!s.encounter_open());
    }

    #[test]
    fn family_choice_shows_npc_changes() {
        let mut s = session();
        s.process("go home").unwrap();
        s.process("talk partner").unwrap();
        let out = s.process("1").unwrap();
        assert!(out.contains("Partner Trust"));
        assert!(out.contains("Partner Worry"));
    }

    #[test]
    fn warning_surfaces_after_a_choice() {
        let mut s = session();
        // Gym choices never touch connection, so a staged low value stays
        // in its warning band through the update.
        s.engine_mut().player_mut().connection = Meter::new(12);
        s.process("go gym").unwrap();
        s.process("talk").unwrap();
        let out = s.process("1").unwrap();
        assert!(out.contains("⚠"));
        assert!(out.contains("Connection weakening"));
        assert!(!s.engine().is_over());
    }

    #[test]
    fn game_over_and_restart() {
        let mut s = session();
        // With energy at zero, any gym choice leaves it at or below the
        // critical threshold.
        s.engine_mut().player_mut().energy = Meter::new(0);
        s.process("go gym").unwrap();
        s.process("talk").unwrap();
        let out = s.process("1").unwrap();
        assert!(out.contains("BURNOUT"));
        assert!(out.contains("LESSON:"));
        assert!(out.contains("Final Stats:"));
        assert!(s.engine().is_over());

        assert!(matches!(s.process("talk"), Err(StoryError::SessionOver)));
        assert!(matches!(s.process("go home"), Err(StoryError::SessionOver)));
        assert!(matches!(s.process("1"), Err(StoryError::SessionOver)));

        let out = s.process("restart").unwrap();
        assert!(out.contains("A new day."));
        assert_eq!(s.location(), Location::Hub);
        assert!(!s.engine().is_over());
        assert_eq!(s.engine().player().energy.value(), 100);
    }

    #[test]
    fn stats_and_npcs_commands() {
        let mut s = session();
        let stats = s.process("stats").unwrap();
        assert!(stats.contains("Energy: 100"));
        assert!(stats.contains("Connection: 75"));
        let npcs = s.process("npcs").unwrap();
        assert!(npcs.contains("Partner - Trust: 80  Worry: 30"));
        assert!(npcs.contains("Child 2 - Anxiety: 40  Confidence: 70"));
    }

    #[test]
    fn note_and_journal() {
        let mut s = session();
        s.process("note The gym felt easier today").unwrap();
        assert_eq!(s.journal().len(), 1);
        let journal = s.process("journal").unwrap();
        assert!(journal.contains("The gym felt easier today"));
    }

    #[test]
    fn journal_export_formats() {
        let mut s = session();
        s.process("note hello").unwrap();
        assert!(s.process("export markdown").unwrap().contains("# Session Journal"));
        assert!(s.process("export text").unwrap().contains("Session Journal"));
        assert!(s.process("export csv").is_err());
    }

    #[test]
    fn status_line() {
        let mut s = session();
        s.process("go gym").unwrap();
        let status = s.process("status").unwrap();
        assert!(status.contains("Location: gym"));
        assert!(status.contains("Holding steady."));
    }

    #[test]
    fn help_and_quit() {
        let mut s = session();
        assert!(s.process("help").unwrap().contains("Commands:"));
        assert!(s.process("help places").unwrap().contains("go gym|work|home"));
        assert_eq!(s.process("quit").unwrap(), "Take care of yourself.");
    }

    #[test]
    fn empty_and_unknown_input() {
        let mut s = session();
        assert_eq!(s.process("   ").unwrap(), "");
        assert!(matches!(
            s.process("dance"),
            Err(StoryError::UnknownCommand(_))
        ));
    }
}
