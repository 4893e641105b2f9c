//! Game-over copy: one themed card per terminal reason.

use keel_core::TerminalReason;

/// Display copy for a session's end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverCondition {
    /// Headline, e.g. "BURNOUT".
    pub title: &'static str,
    /// What happened, possibly multi-line.
    pub message: &'static str,
    /// The takeaway shown beneath the message.
    pub lesson: &'static str,
}

/// Look up the card for a terminal reason.
pub fn condition(reason: TerminalReason) -> GameOverCondition {
    match reason {
        TerminalReason::Energy => GameOverCondition {
            title: "BURNOUT",
            message: "Your tank hit empty. You pushed too hard without rest.\nYour body forced the stop you wouldn't take.",
            lesson: "Recovery isn't optional — it's the foundation everything else is built on.",
        },
        TerminalReason::Regulation => GameOverCondition {
            title: "EMOTIONAL FLOODING",
            message: "Complete dysregulation. The collision you couldn't prevent.\nYou lost control in front of the people who needed you most.",
            lesson: "Catching yourself early is easier than recovering from rock bottom.",
        },
        TerminalReason::Confidence => GameOverCondition {
            title: "THE SLIDE WINS",
            message: "The snowball effect took over. Each missed day made the next one harder.\nYou stopped believing you could get back on track.",
            lesson: "Day 2 is the critical intervention point — not week 3.",
        },
        TerminalReason::Presence => GameOverCondition {
            title: "ABSENT PARENT",
            message: "You were there physically, but nowhere else.\nYour family stopped expecting you to be present.",
            lesson: "Presence isn't about perfection — it's about consistency.",
        },
        TerminalReason::Sleep => GameOverCondition {
            title: "SYSTEM CRASH",
            message: "Sleep debt caught up. Your cognitive load exceeded capacity.\nYour body shut down what your mind wouldn't.",
            lesson: "Sleep is when you rebuild. Skip it long enough, and there's nothing left to rebuild with.",
        },
        TerminalReason::Connection => GameOverCondition {
            title: "ISOLATION",
            message: "You pushed away the support system that could have caught you.\n'I don't want to be a burden' became a self-fulfilling prophecy.",
            lesson: "Systematic support removes the emotional weight of asking for help.",
        },
        TerminalReason::PartnerTrust => GameOverCondition {
            title: "RELATIONSHIP CRISIS",
            message: "They stopped believing you'd let them in.\nToo many 'I'm fine' responses when you clearly weren't.",
            lesson: "Partners can't help with what they don't know about.",
        },
        TerminalReason::PartnerWorry => GameOverCondition {
            title: "PARTNER OVERWHELMED",
            message: "Your partner's worry maxed out. They're carrying anxiety for both of you.\nThe weight you wouldn't share became their burden anyway.",
            lesson: "Sharing the load is lighter than watching someone struggle alone.",
        },
        TerminalReason::ChildOneSecurity => GameOverCondition {
            title: "CHILD LOST SAFETY",
            message: "Your young child stopped feeling safe with you.\nTheir world is hard enough without an unpredictable parent.",
            lesson: "Children with high needs require regulated parents — your calm is their anchor.",
        },
        TerminalReason::ChildTwoAnxiety => GameOverCondition {
            title: "CHILD'S ANXIETY SPIRAL",
            message: "Their anxiety spiked beyond baseline. They're mirroring your dysregulation.\nKids don't do what you say — they do what you do.",
            lesson: "You can't tell them to calm down while you're wound up.",
        },
    }
}
