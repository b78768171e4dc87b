//! Spend the turn's attack on reloading the weapon.

use game_core::UnitId;
use goal_stack::{Goal, GoalCategory, Status};

use crate::ai::goals::{GoalTag, UnitGoal};
use crate::battle::BattleState;

/// Tops the magazine up from spare ammo, consuming the unit's attack for the
/// turn, then holds `Running` for the reload animation window.
///
/// A unit that has already attacked cannot reload; the goal completes as a
/// no-op so the plan above it keeps going.
pub struct GoalReload {
    unit: UnitId,
    started: Option<f32>,
    status: Status,
}

impl GoalReload {
    pub fn new(unit: UnitId) -> Self {
        Self {
            unit,
            started: None,
            status: Status::Inactive,
        }
    }
}

impl Goal<BattleState> for GoalReload {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn category(&self) -> GoalCategory {
        GoalCategory::Attack
    }

    fn activate(&mut self, ctx: &mut BattleState) {
        self.status = Status::Running;

        let time = ctx.time;
        let me = ctx.unit_mut(self.unit);
        if me.flags.has_attacked {
            return;
        }

        match me.weapon.reload() {
            Ok(rounds) => {
                me.flags.has_attacked = true;
                self.started = Some(time);
                tracing::debug!(unit = ?self.unit, rounds, "reloading");
            }
            Err(err) => {
                tracing::debug!(unit = ?self.unit, %err, "reload skipped");
            }
        }
    }

    fn process(&mut self, ctx: &mut BattleState) -> Status {
        self.activate_if_inactive(ctx);

        self.status = match self.started {
            Some(started) if ctx.time - started < ctx.config.reload_animation_secs => {
                Status::Running
            }
            _ => Status::Success,
        };
        self.status
    }

    fn terminate(&mut self, _ctx: &mut BattleState) {
        self.status = Status::Success;
    }
}

impl UnitGoal for GoalReload {
    fn tag(&self) -> GoalTag {
        GoalTag::Reload
    }
}
