//! Desirability evaluators feeding goal arbitration.
//!
//! Each evaluator produces a score in `[0, 1]` for one candidate top-level
//! goal, shaped by the unit's personality bias. The brain compares scores
//! and pushes the winner's goal; a score of zero means "not applicable right
//! now".

use game_core::{AbilityKind, UnitId, distance_within};

use crate::battle::BattleState;

/// Top-level goal an evaluator argues for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalProposal {
    AttackTarget,
    Explore,
    Hide,
    Reload,
    UseSpecial,
}

/// Scores one candidate goal for a unit.
pub trait Evaluator: Send {
    /// How much the unit wants this right now, in `[0, 1]`.
    fn desirability(&self, state: &BattleState, unit: UnitId) -> f32;

    /// The goal to push when this evaluator wins.
    fn proposal(&self) -> GoalProposal;
}

fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

// ============================================================================
// Health
// ============================================================================

/// Wants the unit out of harm's way when health is low.
///
/// Proposes hiding: no restorative action exists yet, so the best response
/// to low health is breaking contact.
pub struct HealthEvaluator {
    bias: f32,
}

impl HealthEvaluator {
    pub fn new(bias: f32) -> Self {
        Self { bias }
    }
}

impl Evaluator for HealthEvaluator {
    fn desirability(&self, state: &BattleState, unit: UnitId) -> f32 {
        let me = state.unit(unit);
        if me.flags.has_moved {
            return 0.0;
        }
        clamp01(0.2 * (1.0 - me.stats.health * 0.01)) * self.bias
    }

    fn proposal(&self) -> GoalProposal {
        GoalProposal::Hide
    }
}

// ============================================================================
// Explore
// ============================================================================

/// Wants to go looking for the fight whenever there is no shootable target
/// and the move is still available.
pub struct ExploreEvaluator {
    bias: f32,
}

impl ExploreEvaluator {
    pub fn new(bias: f32) -> Self {
        Self { bias }
    }
}

impl Evaluator for ExploreEvaluator {
    fn desirability(&self, state: &BattleState, unit: UnitId) -> f32 {
        let engaged = state.is_target_present(unit) && state.is_target_shootable(unit);
        if engaged || state.unit(unit).flags.has_moved {
            return 0.0;
        }
        1.0 * self.bias
    }

    fn proposal(&self) -> GoalProposal {
        GoalProposal::Explore
    }
}

// ============================================================================
// Attack target
// ============================================================================

/// Wants to attack the current target, scaled by the unit's condition and
/// its weapon's punch.
pub struct AttackTargetEvaluator {
    bias: f32,
}

impl AttackTargetEvaluator {
    pub fn new(bias: f32) -> Self {
        Self { bias }
    }
}

impl Evaluator for AttackTargetEvaluator {
    fn desirability(&self, state: &BattleState, unit: UnitId) -> f32 {
        let me = state.unit(unit);
        if me.flags.has_attacked || !state.is_target_present(unit) {
            return 0.0;
        }
        clamp01((me.stats.health * 0.01) * (me.weapon.strength * 0.1)) * self.bias
    }

    fn proposal(&self) -> GoalProposal {
        GoalProposal::AttackTarget
    }
}

// ============================================================================
// Hide
// ============================================================================

/// Wants to hide from a target that outmatches the unit on both health and
/// weapon strength. Either advantage floors at zero, so a unit ahead on one
/// axis never hides.
pub struct HideEvaluator {
    bias: f32,
}

impl HideEvaluator {
    pub fn new(bias: f32) -> Self {
        Self { bias }
    }
}

impl Evaluator for HideEvaluator {
    fn desirability(&self, state: &BattleState, unit: UnitId) -> f32 {
        let me = state.unit(unit);
        if me.flags.has_moved || !state.is_target_present(unit) {
            return 0.0;
        }
        let Some(target) = me.target else {
            return 0.0;
        };
        let Ok(them) = state.try_unit(target) else {
            return 0.0;
        };

        let health_edge = (them.stats.health - me.stats.health).max(0.0) * 0.01;
        let strength_edge = (them.weapon.strength - me.weapon.strength).max(0.0) * 0.01;
        clamp01(health_edge * strength_edge) * self.bias
    }

    fn proposal(&self) -> GoalProposal {
        GoalProposal::Hide
    }
}

// ============================================================================
// Reload
// ============================================================================

/// Wants the magazine topped up.
///
/// An empty magazine with spare rounds is an unconditional 1.0. A partial
/// magazine scores 1.0 too while nobody threatening is near; with a known
/// threat inside sight range it only scores by how empty the magazine is,
/// so shooting keeps priority.
pub struct ReloadEvaluator {
    bias: f32,
}

impl ReloadEvaluator {
    pub fn new(bias: f32) -> Self {
        Self { bias }
    }
}

impl Evaluator for ReloadEvaluator {
    fn desirability(&self, state: &BattleState, unit: UnitId) -> f32 {
        let me = state.unit(unit);
        if me.flags.has_attacked || !me.flags.has_moved {
            return 0.0;
        }

        let weapon = &me.weapon;
        if !weapon.has_ammo_loaded() && weapon.has_ammo_spare() {
            return 1.0;
        }
        if weapon.rounds_loaded >= weapon.magazine_size || !weapon.has_ammo_spare() {
            return 0.0;
        }

        let threat_near = state.is_target_present(unit)
            && distance_within(
                me.position,
                me.memory.nearest_position(me.position),
                me.stats.sight_range,
            );
        if !threat_near {
            return 1.0;
        }
        (1.0 - weapon.rounds_loaded as f32 / weapon.magazine_size as f32) * 0.2 * self.bias
    }

    fn proposal(&self) -> GoalProposal {
        GoalProposal::Reload
    }
}

// ============================================================================
// Special ability (armor)
// ============================================================================

/// Wants the armor ability up when health is low. Units bound to any other
/// ability score zero here.
pub struct ArmorEvaluator {
    bias: f32,
}

impl ArmorEvaluator {
    pub fn new(bias: f32) -> Self {
        Self { bias }
    }
}

impl Evaluator for ArmorEvaluator {
    fn desirability(&self, state: &BattleState, unit: UnitId) -> f32 {
        let me = state.unit(unit);
        if me.ability.kind != AbilityKind::Armor || !me.ability.is_available() {
            return 0.0;
        }
        clamp01(1.0 - me.stats.health / me.stats.max_health) * self.bias
    }

    fn proposal(&self) -> GoalProposal {
        GoalProposal::UseSpecial
    }
}
