//! The stat engine: applies choice effects and evaluates thresholds.
//!
//! All mutation of player and household stats goes through
//! [`StatEngine::apply_effect`]. After each update the engine owes the
//! caller two checks, warning first, then terminal, advanced one at a time
//! by [`StatEngine::tick`]. The split exists so a presentation layer can
//! let a warning render before a game-over transition; a caller that does
//! not stagger simply ticks twice in a row.

use serde::{Deserialize, Serialize};

use crate::effect::{Effect, NpcDelta};
use crate::meter::Meter;
use crate::npc::HouseholdStats;
use crate::stats::PlayerStats;
use crate::terminal::TerminalReason;
use crate::warning::Warning;

/// Upper bound of the warning band for normal stats.
pub const WARNING_THRESHOLD: u32 = 25;
/// At or below this, a normal stat is terminal.
pub const CRITICAL_THRESHOLD: u32 = 10;

/// Inverted stats warn at or above this.
const INVERTED_WARNING_FLOOR: u32 = 75;
/// Inverted stats stop warning at this (terminal takes over at 95).
const INVERTED_WARNING_CEILING: u32 = 90;
/// At or above this, an inverted stat is terminal.
const INVERTED_CRITICAL_THRESHOLD: u32 = 95;

/// Which deferred check the engine owes the caller next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckPhase {
    /// No check pending.
    Idle,
    /// The next tick runs the warning check.
    PendingWarningCheck,
    /// The next tick runs the terminal check.
    PendingTerminalCheck,
}

/// Whether the session is still live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Effects may be applied.
    Active,
    /// A stat crossed its critical threshold; only reset leaves this state.
    GameOver(TerminalReason),
}

/// What a tick surfaced, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// A stat is in its warning band.
    Warning(Warning),
    /// A stat crossed into terminal territory.
    Terminal(TerminalReason),
}

/// Owns the player and household stats and every mutation of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatEngine {
    player: PlayerStats,
    household: HouseholdStats,
    check_phase: CheckPhase,
    state: EngineState,
}

impl Default for StatEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StatEngine {
    /// Create an engine with all stats at their defaults.
    pub fn new() -> Self {
        Self {
            player: PlayerStats::new(),
            household: HouseholdStats::new(),
            check_phase: CheckPhase::Idle,
            state: EngineState::Active,
        }
    }

    /// The player's current stats.
    pub fn player(&self) -> &PlayerStats {
        &self.player
    }

    /// The household's current stats.
    pub fn household(&self) -> &HouseholdStats {
        &self.household
    }

    /// Which check is pending.
    pub fn check_phase(&self) -> CheckPhase {
        self.check_phase
    }

    /// Whether the session is active or over.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Whether a terminal condition has been reached.
    pub fn is_over(&self) -> bool {
        matches!(self.state, EngineState::GameOver(_))
    }

    /// The multiplier applied to negative NPC-directed deltas.
    ///
    /// Low regulation amplifies harm to others: 1.5x below 30, 1.25x
    /// below 50, otherwise 1.0.
    pub fn amplifier(&self) -> f64 {
        let regulation = self.player.regulation.value();
        if regulation < 30 {
            1.5
        } else if regulation < 50 {
            1.25
        } else {
            1.0
        }
    }

    /// Apply a choice's deltas to the player and, if present, one family
    /// member.
    ///
    /// The amplifier is read before any delta lands, so an effect that
    /// drains regulation does not amplify its own NPC deltas. Negative NPC
    /// deltas are scaled and rounded; positive ones are never amplified.
    /// Leaves the engine owing a warning check, then a terminal check; a
    /// new effect while a check is pending rewinds to the warning check
    /// (last update wins).
    pub fn apply_effect(&mut self, effect: &Effect) {
        let amplifier = self.amplifier();

        Self::apply_delta(&mut self.player.energy, effect.energy);
        Self::apply_delta(&mut self.player.regulation, effect.regulation);
        Self::apply_delta(&mut self.player.confidence, effect.confidence);
        Self::apply_delta(&mut self.player.presence, effect.presence);
        Self::apply_delta(&mut self.player.sleep, effect.sleep);
        Self::apply_delta(&mut self.player.physical, effect.physical);
        Self::apply_delta(&mut self.player.connection, effect.connection);

        if let Some(ref delta) = effect.npc {
            self.apply_npc_delta(delta, amplifier);
        }

        self.check_phase = CheckPhase::PendingWarningCheck;
    }

    fn apply_delta(meter: &mut Meter, delta: Option<i32>) {
        if let Some(d) = delta {
            meter.apply(d);
        }
    }

    fn apply_npc_delta(&mut self, delta: &NpcDelta, amplifier: f64) {
        let mut land = |meter: &mut Meter, d: &Option<i32>| {
            if let Some(d) = d {
                meter.apply(amplify(*d, amplifier));
            }
        };
        match delta {
            NpcDelta::Partner { trust, worry } => {
                land(&mut self.household.partner.trust, trust);
                land(&mut self.household.partner.worry, worry);
            }
            NpcDelta::ChildOne {
                regulation,
                security,
            } => {
                land(&mut self.household.child_one.regulation, regulation);
                land(&mut self.household.child_one.security, security);
            }
            NpcDelta::ChildTwo {
                anxiety,
                confidence,
            } => {
                land(&mut self.household.child_two.anxiety, anxiety);
                land(&mut self.household.child_two.confidence, confidence);
            }
        }
    }

    /// Advance the deferred checks by one step.
    ///
    /// The first tick after an update runs the warning check, the second
    /// runs the terminal check (and moves the engine to game over if one
    /// fires). Further ticks are no-ops until the next effect.
    pub fn tick(&mut self) -> Option<CheckOutcome> {
        match self.check_phase {
            CheckPhase::Idle => None,
            CheckPhase::PendingWarningCheck => {
                self.check_phase = CheckPhase::PendingTerminalCheck;
                self.evaluate_warnings().map(CheckOutcome::Warning)
            }
            CheckPhase::PendingTerminalCheck => {
                self.check_phase = CheckPhase::Idle;
                let reason = self.evaluate_terminal();
                if let Some(r) = reason {
                    self.state = EngineState::GameOver(r);
                }
                reason.map(CheckOutcome::Terminal)
            }
        }
    }

    /// Scan all risk stats for values in their warning bands.
    ///
    /// Returns the first match in priority order: the six warnable player
    /// stats, then partner trust, partner worry, child 1 security, child 2
    /// anxiety. Physical has no warning band.
    pub fn evaluate_warnings(&self) -> Option<Warning> {
        let checks: [(Warning, bool); 10] = [
            (Warning::Energy, in_warning_band(self.player.energy)),
            (Warning::Regulation, in_warning_band(self.player.regulation)),
            (Warning::Confidence, in_warning_band(self.player.confidence)),
            (Warning::Presence, in_warning_band(self.player.presence)),
            (Warning::Sleep, in_warning_band(self.player.sleep)),
            (Warning::Connection, in_warning_band(self.player.connection)),
            (
                Warning::PartnerTrust,
                in_warning_band(self.household.partner.trust),
            ),
            (
                Warning::PartnerWorry,
                in_inverted_warning_band(self.household.partner.worry),
            ),
            (
                Warning::ChildOneSecurity,
                in_warning_band(self.household.child_one.security),
            ),
            (
                Warning::ChildTwoAnxiety,
                in_inverted_warning_band(self.household.child_two.anxiety),
            ),
        ];
        checks
            .into_iter()
            .find_map(|(w, hit)| hit.then_some(w))
    }

    /// Check all risk stats against their critical thresholds.
    ///
    /// Returns the first crossed reason in priority order, or `None`.
    /// Normal stats are terminal at <= 10; the inverted stats at >= 95.
    /// The inverted terminal bound is intentionally above the warning
    /// band's ceiling of 90, leaving [90, 95) silent.
    pub fn evaluate_terminal(&self) -> Option<TerminalReason> {
        let checks: [(TerminalReason, bool); 10] = [
            (TerminalReason::Energy, is_critical(self.player.energy)),
            (
                TerminalReason::Regulation,
                is_critical(self.player.regulation),
            ),
            (
                TerminalReason::Confidence,
                is_critical(self.player.confidence),
            ),
            (TerminalReason::Presence, is_critical(self.player.presence)),
            (TerminalReason::Sleep, is_critical(self.player.sleep)),
            (
                TerminalReason::Connection,
                is_critical(self.player.connection),
            ),
            (
                TerminalReason::PartnerTrust,
                is_critical(self.household.partner.trust),
            ),
            (
                TerminalReason::PartnerWorry,
                is_inverted_critical(self.household.partner.worry),
            ),
            (
                TerminalReason::ChildOneSecurity,
                is_critical(self.household.child_one.security),
            ),
            (
                TerminalReason::ChildTwoAnxiety,
                is_inverted_critical(self.household.child_two.anxiety),
            ),
        ];
        checks
            .into_iter()
            .find_map(|(r, hit)| hit.then_some(r))
    }

    /// Restore every stat to its default and return to the active state.
    /// Idempotent.
    pub fn reset(&mut self) {
        self.player.reset();
        self.household.reset();
        self.check_phase = CheckPhase::Idle;
        self.state = EngineState::Active;
    }

    /// Direct mutable access to the player stats, for tests and tooling
    /// that need to stage a specific stat state.
    #[doc(hidden)]
    pub fn player_mut(&mut self) -> &mut PlayerStats {
        &mut self.player
    }

    /// Direct mutable access to the household stats.
    #[doc(hidden)]
    pub fn household_mut(&mut self) -> &mut HouseholdStats {
        &mut self.household
    }
}

/// Scale a negative delta by the amplifier. Halves round toward positive
/// infinity, so `-22.5` lands on `-22`. Positive deltas pass through
/// untouched.
fn amplify(delta: i32, amplifier: f64) -> i32 {
    if delta < 0 {
        (f64::from(delta) * amplifier + 0.5).floor() as i32
    } else {
        delta
    }
}

fn in_warning_band(meter: Meter) -> bool {
    let v = meter.value();
    v > CRITICAL_THRESHOLD && v <= WARNING_THRESHOLD
}

fn in_inverted_warning_band(meter: Meter) -> bool {
    let v = meter.value();
    (INVERTED_WARNING_FLOOR..INVERTED_WARNING_CEILING).contains(&v)
}

fn is_critical(meter: Meter) -> bool {
    meter.value() <= CRITICAL_THRESHOLD
}

fn is_inverted_critical(meter: Meter) -> bool {
    meter.value() >= INVERTED_CRITICAL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::NpcDelta;

    fn drained(engine: &mut StatEngine, regulation: u32) {
        // Drop regulation to a target band without touching other stats.
        let current = engine.player().regulation.value();
        engine.player_mut().regulation.apply(regulation as i32 - current as i32);
    }

    #[test]
    fn fresh_engine_is_active_and_idle() {
        let e = StatEngine::new();
        assert_eq!(e.state(), EngineState::Active);
        assert_eq!(e.check_phase(), CheckPhase::Idle);
        assert!(!e.is_over());
    }

    #[test]
    fn amplifier_bands() {
        let mut e = StatEngine::new();
        assert_eq!(e.amplifier(), 1.0);
        drained(&mut e, 50);
        assert_eq!(e.amplifier(), 1.0);
        drained(&mut e, 49);
        assert_eq!(e.amplifier(), 1.25);
        drained(&mut e, 30);
        assert_eq!(e.amplifier(), 1.25);
        drained(&mut e, 29);
        assert_eq!(e.amplifier(), 1.5);
    }

    #[test]
    fn player_deltas_clamp() {
        let mut e = StatEngine::new();
        e.apply_effect(&Effect::new().with_energy(-150).with_physical(80));
        assert_eq!(e.player().energy.value(), 0);
        assert_eq!(e.player().physical.value(), 100);
    }

    #[test]
    fn sparse_effect_leaves_other_stats_alone() {
        let mut e = StatEngine::new();
        e.apply_effect(&Effect::new().with_sleep(-10));
        assert_eq!(e.player().sleep.value(), 90);
        assert_eq!(e.player().energy.value(), 100);
        assert_eq!(e.household(), &HouseholdStats::default());
    }

    #[test]
    fn negative_npc_delta_amplified_at_low_regulation() {
        let mut e = StatEngine::new();
        drained(&mut e, 20);
        e.apply_effect(&Effect::new().with_npc(NpcDelta::Partner {
            trust: None,
            worry: Some(-10),
        }));
        // round(-10 * 1.5) = -15
        assert_eq!(e.household().partner.worry.value(), 15);
    }

    #[test]
    fn positive_npc_delta_never_amplified() {
        let mut e = StatEngine::new();
        drained(&mut e, 20);
        e.apply_effect(&Effect::new().with_npc(NpcDelta::Partner {
            trust: Some(10),
            worry: None,
        }));
        assert_eq!(e.household().partner.trust.value(), 90);
    }

    #[test]
    fn amplifier_reads_regulation_before_update() {
        // The effect drains regulation below 30, but the NPC delta must be
        // scaled by the pre-update amplifier of 1.0.
        let mut e = StatEngine::new();
        e.apply_effect(&Effect::new().with_regulation(-80).with_npc(NpcDelta::Partner {
            trust: Some(-10),
            worry: None,
        }));
        assert_eq!(e.household().partner.trust.value(), 70);
    }

    #[test]
    fn warning_band_boundaries() {
        let mut e = StatEngine::new();
        e.player_mut().energy = Meter::new(26);
        assert_eq!(e.evaluate_warnings(), None);
        e.player_mut().energy = Meter::new(25);
        assert_eq!(e.evaluate_warnings(), Some(Warning::Energy));
        e.player_mut().energy = Meter::new(11);
        assert_eq!(e.evaluate_warnings(), Some(Warning::Energy));
        e.player_mut().energy = Meter::new(10);
        assert_eq!(e.evaluate_warnings(), None);
    }

    #[test]
    fn inverted_warning_band_boundaries() {
        let mut e = StatEngine::new();
        e.household_mut().partner.worry = Meter::new(74);
        assert_eq!(e.evaluate_warnings(), None);
        e.household_mut().partner.worry = Meter::new(75);
        assert_eq!(e.evaluate_warnings(), Some(Warning::PartnerWorry));
        e.household_mut().partner.worry = Meter::new(89);
        assert_eq!(e.evaluate_warnings(), Some(Warning::PartnerWorry));
        e.household_mut().partner.worry = Meter::new(90);
        assert_eq!(e.evaluate_warnings(), None);
    }

    #[test]
    fn warning_priority_order() {
        let mut e = StatEngine::new();
        e.player_mut().regulation = Meter::new(20);
        e.player_mut().energy = Meter::new(20);
        assert_eq!(e.evaluate_warnings(), Some(Warning::Energy));
    }

    #[test]
    fn terminal_boundaries() {
        let mut e = StatEngine::new();
        e.player_mut().sleep = Meter::new(11);
        assert_eq!(e.evaluate_terminal(), None);
        e.player_mut().sleep = Meter::new(10);
        assert_eq!(e.evaluate_terminal(), Some(TerminalReason::Sleep));
    }

    #[test]
    fn inverted_terminal_gap_between_90_and_95() {
        // [90, 95) neither warns nor terminates; the bound difference is
        // part of the original behavior.
        let mut e = StatEngine::new();
        e.household_mut().child_two.anxiety = Meter::new(92);
        assert_eq!(e.evaluate_warnings(), None);
        assert_eq!(e.evaluate_terminal(), None);
        e.household_mut().child_two.anxiety = Meter::new(95);
        assert_eq!(e.evaluate_terminal(), Some(TerminalReason::ChildTwoAnxiety));
    }

    #[test]
    fn energy_to_zero_scenario() {
        let mut e = StatEngine::new();
        e.apply_effect(&Effect::new().with_energy(-100));
        assert_eq!(e.player().energy.value(), 0);
        assert_eq!(e.tick(), None); // 0 is below the warning band
        assert_eq!(
            e.tick(),
            Some(CheckOutcome::Terminal(TerminalReason::Energy))
        );
        assert_eq!(e.state(), EngineState::GameOver(TerminalReason::Energy));
    }

    #[test]
    fn warning_precedes_terminal_for_same_update() {
        let mut e = StatEngine::new();
        e.player_mut().presence = Meter::new(30);
        e.apply_effect(&Effect::new().with_presence(-15));
        assert_eq!(e.player().presence.value(), 15);
        assert_eq!(e.tick(), Some(CheckOutcome::Warning(Warning::Presence)));
        assert_eq!(e.tick(), None); // 15 is not terminal
        assert!(!e.is_over());
    }

    #[test]
    fn partner_worry_clamps_then_terminates() {
        let mut e = StatEngine::new();
        e.household_mut().partner.worry = Meter::new(90);
        e.apply_effect(&Effect::new().with_npc(NpcDelta::Partner {
            trust: None,
            worry: Some(10),
        }));
        assert_eq!(e.household().partner.worry.value(), 100);
        e.tick();
        assert_eq!(
            e.tick(),
            Some(CheckOutcome::Terminal(TerminalReason::PartnerWorry))
        );
    }

    #[test]
    fn reapply_rewinds_pending_checks() {
        let mut e = StatEngine::new();
        e.apply_effect(&Effect::new().with_energy(-10));
        e.tick();
        assert_eq!(e.check_phase(), CheckPhase::PendingTerminalCheck);
        e.apply_effect(&Effect::new().with_energy(-10));
        assert_eq!(e.check_phase(), CheckPhase::PendingWarningCheck);
    }

    #[test]
    fn ticks_idle_after_both_checks() {
        let mut e = StatEngine::new();
        e.apply_effect(&Effect::new().with_energy(-5));
        e.tick();
        e.tick();
        assert_eq!(e.check_phase(), CheckPhase::Idle);
        assert_eq!(e.tick(), None);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut e = StatEngine::new();
        e.apply_effect(&Effect::new().with_energy(-100));
        e.tick();
        e.tick();
        assert!(e.is_over());
        e.reset();
        let snapshot = e.clone();
        e.reset();
        assert_eq!(e.player(), snapshot.player());
        assert_eq!(e.household(), snapshot.household());
        assert_eq!(e.state(), EngineState::Active);
        assert_eq!(e.check_phase(), CheckPhase::Idle);
    }

    #[test]
    fn amplify_rounding() {
        assert_eq!(amplify(-10, 1.5), -15);
        assert_eq!(amplify(-20, 1.25), -25);
        assert_eq!(amplify(-15, 1.5), -22); // -22.5 rounds toward positive infinity
        assert_eq!(amplify(-10, 1.25), -12); // -12.5 likewise
        assert_eq!(amplify(10, 1.5), 10);
        assert_eq!(amplify(0, 1.5), 0);
    }

    #[test]
    fn half_magnitude_amplified_delta_at_low_regulation() {
        let mut e = StatEngine::new();
        drained(&mut e, 20);
        e.apply_effect(&Effect::new().with_npc(NpcDelta::Partner {
            trust: Some(-15),
            worry: None,
        }));
        // -15 * 1.5 = -22.5, applied as -22
        assert_eq!(e.household().partner.trust.value(), 58);
    }
}
