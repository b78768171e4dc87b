//! Target bookkeeping layered over [`BattleState`].
//!
//! A unit holds at most one target at a time. The predicate ladder here
//! (present → visible → shootable) is what evaluators and goals branch on;
//! each level implies the ones before it.

use game_core::{UnitId, Vec3, distance_within};

use crate::battle::BattleState;

impl BattleState {
    pub fn set_target(&mut self, unit: UnitId, target: Option<UnitId>) {
        self.unit_mut(unit).target = target;
    }

    pub fn target_of(&self, unit: UnitId) -> Option<UnitId> {
        self.unit(unit).target
    }

    /// The unit has a target and that target is still alive.
    pub fn is_target_present(&self, unit: UnitId) -> bool {
        match self.unit(unit).target {
            Some(target) => self
                .try_unit(target)
                .map(|t| t.is_alive())
                .unwrap_or(false),
            None => false,
        }
    }

    /// The target is present and the unit can currently see it.
    pub fn is_target_visible(&self, unit: UnitId) -> bool {
        match self.unit(unit).target {
            Some(target) => self.is_target_present(unit) && self.can_see(unit, target),
            None => false,
        }
    }

    /// The target is visible, inside weapon range, and the weapon has rounds
    /// loaded.
    pub fn is_target_shootable(&self, unit: UnitId) -> bool {
        if !self.is_target_visible(unit) {
            return false;
        }
        let me = self.unit(unit);
        let Some(target) = me.target else {
            return false;
        };
        me.weapon.has_ammo_loaded()
            && distance_within(me.position, self.unit(target).position, me.weapon.range)
    }

    /// Current position of the target, or [`Vec3::ZERO`] when no target is
    /// present.
    pub fn target_position(&self, unit: UnitId) -> Vec3 {
        match self.unit(unit).target {
            Some(target) if self.is_target_present(unit) => self.unit(target).position,
            _ => Vec3::ZERO,
        }
    }
}
