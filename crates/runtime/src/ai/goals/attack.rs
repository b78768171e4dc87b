//! Atomic attack: fire one burst at the current target.

use game_core::UnitId;
use goal_stack::{Goal, GoalCategory, Status};

use crate::ai::goals::{GoalTag, UnitGoal};
use crate::battle::BattleState;

/// Fires one burst at the current target, then holds `Running` for the
/// duration of the fire animation window before reporting `Success`.
///
/// The shot itself happens on the first processing tick: the unit turns to
/// face the target, the weapon consumes a burst and `has_attacked` is set.
/// Damage resolution is the combat layer's business, not this goal's.
pub struct GoalAttack {
    unit: UnitId,
    first_run: bool,
    fire_started: f32,
    status: Status,
}

impl GoalAttack {
    pub fn new(unit: UnitId) -> Self {
        Self {
            unit,
            first_run: true,
            fire_started: 0.0,
            status: Status::Inactive,
        }
    }
}

impl Goal<BattleState> for GoalAttack {
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
        ctx.unit_mut(self.unit).is_attacking = true;
        if !ctx.is_target_present(self.unit) || !ctx.is_target_shootable(self.unit) {
            tracing::debug!(unit = ?self.unit, "attack activated without a shootable target");
            self.status = Status::Failed;
        }
    }

    fn process(&mut self, ctx: &mut BattleState) -> Status {
        self.activate_if_inactive(ctx);
        if self.status.is_failed() {
            return self.status;
        }

        if self.first_run {
            if !ctx.is_target_present(self.unit) || !ctx.is_target_shootable(self.unit) {
                self.status = Status::Failed;
                return self.status;
            }

            let target_pos = ctx.target_position(self.unit);
            let me = ctx.unit_mut(self.unit);
            me.facing = (target_pos - me.position).normalized();
            if let Err(err) = me.weapon.fire() {
                tracing::warn!(unit = ?self.unit, %err, "attack aborted");
                self.status = Status::Failed;
                return self.status;
            }
            me.flags.has_attacked = true;

            tracing::debug!(unit = ?self.unit, target = ?ctx.target_of(self.unit), "burst fired");
            ctx.emit_noise(self.unit);
            self.fire_started = ctx.time;
            self.first_run = false;
            self.status = Status::Running;
        } else if ctx.time - self.fire_started >= ctx.config.fire_animation_secs {
            self.status = Status::Success;
        } else {
            self.status = Status::Running;
        }
        self.status
    }

    fn terminate(&mut self, ctx: &mut BattleState) {
        ctx.unit_mut(self.unit).is_attacking = false;
        self.status = Status::Success;
    }
}

impl UnitGoal for GoalAttack {
    fn tag(&self) -> GoalTag {
        GoalTag::Attack
    }
}
