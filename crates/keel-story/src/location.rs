//! Places and people.
//!
//! The world is a hub with three buildings off it, the way the original
//! map laid them out. Moving is a typed state change; there is no geometry.

use serde::{Deserialize, Serialize};

use keel_core::NpcId;

/// A place the player can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    /// The street connecting the three buildings.
    Hub,
    /// The gym, where the trainer waits.
    Gym,
    /// The office, with its coworker.
    Work,
    /// Home, where the family is.
    Home,
}

impl Location {
    /// Parse a place name (case-insensitive).
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "hub" | "street" | "out" => Some(Self::Hub),
            "gym" => Some(Self::Gym),
            "work" | "office" => Some(Self::Work),
            "home" | "house" => Some(Self::Home),
            _ => None,
        }
    }

    /// Who can be found here.
    pub fn cast(self) -> &'static [CastMember] {
        match self {
            Self::Hub => &[],
            Self::Gym => &[CastMember::Trainer],
            Self::Work => &[CastMember::Coworker],
            Self::Home => &[
                CastMember::Partner,
                CastMember::ChildOne,
                CastMember::ChildTwo,
            ],
        }
    }

    /// Short scene-setting line shown on arrival.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Hub => "You're on the street. The gym, the office, and home are all a short walk.",
            Self::Gym => "Treadmills, weights, a bench. The trainer is by the rack.",
            Self::Work => "Rows of desks and monitors. A coworker catches your eye.",
            Self::Home => "The living room. Your partner and both kids are here.",
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hub => write!(f, "hub"),
            Self::Gym => write!(f, "gym"),
            Self::Work => write!(f, "work"),
            Self::Home => write!(f, "home"),
        }
    }
}

/// A person the player can talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastMember {
    /// The gym trainer. No tracked stats.
    Trainer,
    /// The office coworker. No tracked stats.
    Coworker,
    /// The player's partner.
    Partner,
    /// The younger, high-needs child.
    ChildOne,
    /// The anxious child.
    ChildTwo,
}

impl CastMember {
    /// Parse a person's name (case-insensitive, accepts "child 1" etc.).
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "trainer" => Some(Self::Trainer),
            "coworker" => Some(Self::Coworker),
            "partner" => Some(Self::Partner),
            "child 1" | "child1" => Some(Self::ChildOne),
            "child 2" | "child2" => Some(Self::ChildTwo),
            _ => None,
        }
    }

    /// Where this person lives in the world.
    pub fn location(self) -> Location {
        match self {
            Self::Trainer => Location::Gym,
            Self::Coworker => Location::Work,
            Self::Partner | Self::ChildOne | Self::ChildTwo => Location::Home,
        }
    }

    /// The tracked stat record for this person, if they have one.
    pub fn npc_id(self) -> Option<NpcId> {
        match self {
            Self::Trainer | Self::Coworker => None,
            Self::Partner => Some(NpcId::Partner),
            Self::ChildOne => Some(NpcId::ChildOne),
            Self::ChildTwo => Some(NpcId::ChildTwo),
        }
    }
}

impl std::fmt::Display for CastMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trainer => write!(f, "Trainer"),
            Self::Coworker => write!(f, "Coworker"),
            Self::Partner => write!(f, "Partner"),
            Self::ChildOne => write!(f, "Child 1"),
            Self::ChildTwo => write!(f, "Child 2"),
        }
    }
}
