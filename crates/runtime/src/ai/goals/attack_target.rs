//! Composite attack: get into position (or hunt), then fire.

use game_core::UnitId;
use goal_stack::{Goal, GoalCategory, Status};

use crate::ai::goals::{
    GoalAttack, GoalFindAttackCover, GoalHuntTarget, GoalTag, UnitGoal, UnitGoalStack,
};
use crate::battle::BattleState;

/// Attacks the current target, planning around visibility and the move flag:
///
/// - target visible, move available: reposition to attack cover, then fire
/// - target visible, move spent: fire from here
/// - target not visible, move available: hunt its last known position
/// - target not visible, move spent: nothing to be done, fail
pub struct GoalAttackTarget {
    unit: UnitId,
    subgoals: UnitGoalStack,
    status: Status,
}

impl GoalAttackTarget {
    pub fn new(unit: UnitId) -> Self {
        Self {
            unit,
            subgoals: UnitGoalStack::new(),
            status: Status::Inactive,
        }
    }
}

impl Goal<BattleState> for GoalAttackTarget {
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
        self.subgoals.terminate_all(ctx);

        if !ctx.is_target_present(self.unit) {
            tracing::debug!(unit = ?self.unit, "attack-target activated without a target");
            self.status = Status::Failed;
            return;
        }

        let has_moved = ctx.unit(self.unit).flags.has_moved;
        if ctx.is_target_visible(self.unit) {
            self.subgoals.push_front(Box::new(GoalAttack::new(self.unit)));
            if !has_moved {
                self.subgoals
                    .push_front(Box::new(GoalFindAttackCover::new(self.unit)));
            }
        } else if !has_moved {
            self.subgoals
                .push_front(Box::new(GoalHuntTarget::new(self.unit)));
        } else {
            tracing::debug!(unit = ?self.unit, "target hidden and move spent");
            self.status = Status::Failed;
        }
    }

    fn process(&mut self, ctx: &mut BattleState) -> Status {
        self.activate_if_inactive(ctx);
        if self.status.is_failed() {
            return self.status;
        }

        self.status = self.subgoals.process_front(ctx);
        if !self.status.is_failed() && !self.subgoals.is_empty() {
            self.status = Status::Running;
        }
        self.status
    }

    fn terminate(&mut self, ctx: &mut BattleState) {
        self.subgoals.terminate_all(ctx);
        self.status = Status::Success;
    }
}

impl UnitGoal for GoalAttackTarget {
    fn tag(&self) -> GoalTag {
        GoalTag::AttackTarget
    }
}
