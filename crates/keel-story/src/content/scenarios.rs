//! Scenario cards: the dialog encounters each person can open.
//!
//! Pure data. Titles, choice texts, and deltas are carried verbatim from
//! the game script; the engine consumes the effects without knowing where
//! they came from.

use keel_core::{Effect, NpcDelta};

use crate::location::CastMember;

/// One choice in a scenario card.
#[derive(Debug, Clone)]
pub struct ChoiceCard {
    /// The text shown to the player.
    pub text: String,
    /// Deltas applied when this choice is selected.
    pub effect: Effect,
}

impl ChoiceCard {
    /// Create a choice.
    pub fn new(text: impl Into<String>, effect: Effect) -> Self {
        Self {
            text: text.into(),
            effect,
        }
    }
}

/// A dialog encounter: a situation title and its choices.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// The situation, shown as the dialog title.
    pub title: String,
    /// Available responses.
    pub choices: Vec<ChoiceCard>,
}

impl Scenario {
    /// Create a scenario with no choices yet.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            choices: Vec::new(),
        }
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: ChoiceCard) -> Self {
        self.choices.push(choice);
        self
    }
}

/// The scenario table for a cast member.
pub fn scenarios_for(cast: CastMember) -> Vec<Scenario> {
    match cast {
        CastMember::Trainer => trainer_scenarios(),
        CastMember::Coworker => coworker_scenarios(),
        CastMember::Partner => partner_scenarios(),
        CastMember::ChildOne => child_one_scenarios(),
        CastMember::ChildTwo => child_two_scenarios(),
    }
}

fn trainer_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("Morning Workout")
            .with_choice(ChoiceCard::new(
                "Full workout - let's go!",
                Effect::new()
                    .with_energy(-15)
                    .with_confidence(20)
                    .with_regulation(15)
                    .with_physical(15)
                    .with_sleep(10),
            ))
            .with_choice(ChoiceCard::new(
                "Just 10 minutes today",
                Effect::new()
                    .with_energy(-5)
                    .with_confidence(5)
                    .with_regulation(5)
                    .with_physical(5)
                    .with_sleep(5),
            )),
        Scenario::new("Day 2 of Skipping")
            .with_choice(ChoiceCard::new(
                "Break the slide - show up",
                Effect::new()
                    .with_energy(-10)
                    .with_confidence(25)
                    .with_regulation(20)
                    .with_physical(10),
            ))
            .with_choice(ChoiceCard::new(
                "Tomorrow for sure...",
                Effect::new()
                    .with_confidence(-15)
                    .with_regulation(-10)
                    .with_physical(-10),
            )),
        Scenario::new("Feeling Depleted But It's Gym Day")
            .with_choice(ChoiceCard::new(
                "Light session - something beats nothing",
                Effect::new()
                    .with_energy(-5)
                    .with_confidence(15)
                    .with_regulation(10)
                    .with_physical(8),
            ))
            .with_choice(ChoiceCard::new(
                "Rest day - you'll hit it hard tomorrow",
                Effect::new()
                    .with_energy(10)
                    .with_confidence(-5)
                    .with_physical(-5),
            )),
        Scenario::new("Week 2 Momentum Building")
            .with_choice(ChoiceCard::new(
                "Stay consistent - trust the process",
                Effect::new()
                    .with_energy(-10)
                    .with_confidence(20)
                    .with_regulation(15)
                    .with_physical(15)
                    .with_sleep(10),
            ))
            .with_choice(ChoiceCard::new(
                "Push harder - make up for lost time",
                Effect::new()
                    .with_energy(-25)
                    .with_confidence(10)
                    .with_regulation(-5)
                    .with_physical(10)
                    .with_sleep(-10),
            )),
    ]
}

fn coworker_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("Urgent Meeting Request")
            .with_choice(ChoiceCard::new(
                "Set boundaries - protect your time",
                Effect::new()
                    .with_energy(-5)
                    .with_confidence(10)
                    .with_regulation(5)
                    .with_presence(5),
            ))
            .with_choice(ChoiceCard::new(
                "Accept everything - don't rock the boat",
                Effect::new()
                    .with_energy(-20)
                    .with_confidence(-5)
                    .with_regulation(-10)
                    .with_presence(-10),
            )),
        Scenario::new("End of Draining Day")
            .with_choice(ChoiceCard::new(
                "Leave on time - you need recovery",
                Effect::new()
                    .with_energy(10)
                    .with_confidence(5)
                    .with_regulation(10)
                    .with_presence(15)
                    .with_sleep(15),
            ))
            .with_choice(ChoiceCard::new(
                "Stay late - prove your worth",
                Effect::new()
                    .with_energy(-25)
                    .with_regulation(-15)
                    .with_presence(-20)
                    .with_sleep(-20),
            )),
        Scenario::new("Intellectually Unstimulating Task")
            .with_choice(ChoiceCard::new(
                "Do it efficiently, move on",
                Effect::new().with_energy(-10).with_confidence(5),
            ))
            .with_choice(ChoiceCard::new(
                "Procrastinate - find something interesting",
                Effect::new()
                    .with_energy(-5)
                    .with_confidence(-10)
                    .with_regulation(-5)
                    .with_sleep(-5),
            )),
        Scenario::new("Autonomy Challenged (Micromanagement)")
            .with_choice(ChoiceCard::new(
                "Pick your battles - let this one go",
                Effect::new()
                    .with_energy(-10)
                    .with_confidence(-5)
                    .with_regulation(-10),
            ))
            .with_choice(ChoiceCard::new(
                "Push back professionally - protect your autonomy",
                Effect::new()
                    .with_energy(-15)
                    .with_confidence(15)
                    .with_regulation(5),
            )),
    ]
}

fn partner_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("Partner Check-in")
            .with_choice(ChoiceCard::new(
                "Open up - share how you're feeling",
                Effect::new()
                    .with_energy(5)
                    .with_confidence(10)
                    .with_regulation(20)
                    .with_connection(15)
                    .with_npc(NpcDelta::partner(15, -20)),
            ))
            .with_choice(ChoiceCard::new(
                "Say you're fine - don't be a burden",
                Effect::new()
                    .with_energy(-5)
                    .with_confidence(-5)
                    .with_regulation(-10)
                    .with_connection(-10)
                    .with_npc(NpcDelta::partner(-10, 15)),
            )),
        Scenario::new("Partner Offers Help")
            .with_choice(ChoiceCard::new(
                "Accept support - you need it",
                Effect::new()
                    .with_energy(15)
                    .with_confidence(5)
                    .with_regulation(15)
                    .with_connection(20)
                    .with_npc(NpcDelta::partner(20, -15)),
            ))
            .with_choice(ChoiceCard::new(
                "Decline - handle it yourself",
                Effect::new()
                    .with_energy(-10)
                    .with_regulation(-5)
                    .with_connection(-15)
                    .with_npc(NpcDelta::partner(-15, 20)),
            )),
    ]
}

fn child_one_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("Moment of Overwhelm")
            .with_choice(ChoiceCard::new(
                "Stay calm - meet them where they are",
                Effect::new()
                    .with_energy(-15)
                    .with_confidence(10)
                    .with_regulation(5)
                    .with_presence(15)
                    .with_npc(NpcDelta::child_one(20, 15)),
            ))
            .with_choice(ChoiceCard::new(
                "Get frustrated - you're depleted too",
                Effect::new()
                    .with_energy(-5)
                    .with_confidence(-15)
                    .with_regulation(-25)
                    .with_presence(-20)
                    .with_npc(NpcDelta::child_one(-25, -20)),
            )),
        Scenario::new("Wants Your Attention (You're Deep in Thought)")
            .with_choice(ChoiceCard::new(
                "Pause and engage - they need you now",
                Effect::new()
                    .with_energy(-10)
                    .with_confidence(10)
                    .with_presence(20)
                    .with_npc(NpcDelta::child_one(15, 20)),
            ))
            .with_choice(ChoiceCard::new(
                "Just a minute... (keep doing your thing)",
                Effect::new()
                    .with_confidence(-5)
                    .with_regulation(-10)
                    .with_presence(-15)
                    .with_npc(NpcDelta::child_one(-10, -15)),
            )),
    ]
}

fn child_two_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("Anxious About School")
            .with_choice(ChoiceCard::new(
                "Patient listening - validate their feelings",
                Effect::new()
                    .with_energy(-10)
                    .with_confidence(15)
                    .with_regulation(10)
                    .with_presence(15)
                    .with_npc(NpcDelta::child_two(-20, 20)),
            ))
            .with_choice(ChoiceCard::new(
                "Quick fix - 'you'll be fine'",
                Effect::new()
                    .with_energy(-5)
                    .with_confidence(-10)
                    .with_regulation(-15)
                    .with_presence(-10)
                    .with_npc(NpcDelta::child_two(15, -15)),
            )),
        Scenario::new("Won't Eat Dinner (Food Concerns)")
            .with_choice(ChoiceCard::new(
                "No pressure - offer alternatives calmly",
                Effect::new()
                    .with_energy(-10)
                    .with_confidence(10)
                    .with_regulation(5)
                    .with_presence(10)
                    .with_npc(NpcDelta::child_two(-15, 15)),
            ))
            .with_choice(ChoiceCard::new(
                "You need to eat something (push it)",
                Effect::new()
                    .with_energy(-5)
                    .with_confidence(-5)
                    .with_regulation(-20)
                    .with_presence(-15)
                    .with_npc(NpcDelta::child_two(25, -20)),
            )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_core::NpcId;

    #[test]
    fn every_cast_member_has_scenarios() {
        for cast in [
            CastMember::Trainer,
            CastMember::Coworker,
            CastMember::Partner,
            CastMember::ChildOne,
            CastMember::ChildTwo,
        ] {
            let table = scenarios_for(cast);
            assert!(!table.is_empty(), "{cast} has no scenarios");
            for scenario in &table {
                assert_eq!(scenario.choices.len(), 2, "{}", scenario.title);
            }
        }
    }

    #[test]
    fn fourteen_scenarios_total() {
        let total: usize = [
            CastMember::Trainer,
            CastMember::Coworker,
            CastMember::Partner,
            CastMember::ChildOne,
            CastMember::ChildTwo,
        ]
        .into_iter()
        .map(|c| scenarios_for(c).len())
        .sum();
        assert_eq!(total, 14);
    }

    #[test]
    fn family_effects_target_the_right_record() {
        for cast in [CastMember::Partner, CastMember::ChildOne, CastMember::ChildTwo] {
            let expected = cast.npc_id().unwrap();
            for scenario in scenarios_for(cast) {
                for choice in &scenario.choices {
                    let delta = choice.effect.npc.as_ref().expect("family choice has NPC delta");
                    assert_eq!(delta.npc(), expected, "{}", scenario.title);
                }
            }
        }
    }

    #[test]
    fn trainer_and_coworker_effects_stay_on_the_player() {
        for cast in [CastMember::Trainer, CastMember::Coworker] {
            for scenario in scenarios_for(cast) {
                for choice in &scenario.choices {
                    assert!(choice.effect.npc.is_none(), "{}", scenario.title);
                }
            }
        }
    }

    #[test]
    fn check_in_deltas_match_the_script() {
        let table = scenarios_for(CastMember::Partner);
        let open_up = &table[0].choices[0].effect;
        assert_eq!(open_up.regulation, Some(20));
        assert_eq!(open_up.connection, Some(15));
        match open_up.npc.as_ref().unwrap() {
            NpcDelta::Partner { trust, worry } => {
                assert_eq!(*trust, Some(15));
                assert_eq!(*worry, Some(-20));
            }
            other => panic!("unexpected target: {other:?}"),
        }
    }
}
