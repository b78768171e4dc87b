//! Trigger the unit's special ability.

use game_core::UnitId;
use goal_stack::{Goal, GoalCategory, Status};

use crate::ai::goals::{GoalTag, UnitGoal};
use crate::battle::BattleState;

/// Triggers the unit's bound special ability.
///
/// Fails when the ability is on cooldown or otherwise unavailable; succeeds
/// exactly when the ability ends up active. The effect itself (armor plating,
/// stealth field, ...) is resolved by the ability layer.
pub struct GoalUseSpecial {
    unit: UnitId,
    status: Status,
}

impl GoalUseSpecial {
    pub fn new(unit: UnitId) -> Self {
        Self {
            unit,
            status: Status::Inactive,
        }
    }
}

impl Goal<BattleState> for GoalUseSpecial {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn category(&self) -> GoalCategory {
        GoalCategory::Misc
    }

    fn activate(&mut self, ctx: &mut BattleState) {
        self.status = Status::Running;
        if !ctx.unit(self.unit).ability.is_available() {
            tracing::debug!(unit = ?self.unit, "special ability unavailable");
            self.status = Status::Failed;
        }
    }

    fn process(&mut self, ctx: &mut BattleState) -> Status {
        self.activate_if_inactive(ctx);
        if self.status.is_failed() {
            return self.status;
        }

        let me = ctx.unit_mut(self.unit);
        if let Err(err) = me.ability.trigger() {
            tracing::debug!(unit = ?self.unit, %err, "ability trigger rejected");
        }
        self.status = if me.ability.in_use() {
            Status::Success
        } else {
            Status::Failed
        };
        self.status
    }

    fn terminate(&mut self, _ctx: &mut BattleState) {
        if !self.status.is_terminal() {
            self.status = Status::Success;
        }
    }
}

impl UnitGoal for GoalUseSpecial {
    fn tag(&self) -> GoalTag {
        GoalTag::UseSpecial
    }
}
