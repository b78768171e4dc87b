//! Chase a target that is out of sight.

use game_core::{UnitId, Vec3, distance_within};
use goal_stack::{Goal, GoalCategory, Status};

use crate::ai::goals::{GoalSeekToPosition, GoalSelectTarget, GoalTag, UnitGoal, UnitGoalStack};
use crate::battle::BattleState;
use crate::unit::GoalRequest;

/// Walks toward the target's last remembered position.
///
/// When memory of the current target is gone, the nearest remembered enemy
/// becomes the new target. When the last known position is essentially where
/// the unit already stands, hunting degenerates into reselecting a target in
/// place. An exhausted chase (arrived, still nobody there) purges the target
/// from memory, asks for a fresh target selection and fails.
pub struct GoalHuntTarget {
    unit: UnitId,
    destination_set: bool,
    subgoals: UnitGoalStack,
    status: Status,
}

impl GoalHuntTarget {
    pub fn new(unit: UnitId) -> Self {
        Self {
            unit,
            destination_set: false,
            subgoals: UnitGoalStack::new(),
            status: Status::Inactive,
        }
    }

    fn plan_chase(&mut self, ctx: &mut BattleState) {
        let mut last_known = Vec3::ZERO;
        if ctx.is_target_present(self.unit) {
            if let Some(target) = ctx.target_of(self.unit) {
                last_known = ctx.recall_last_position(self.unit, target);
            }
        }
        if last_known.is_zero() {
            let next = ctx.nearest_remembered_subject(self.unit);
            ctx.set_target(self.unit, next);
            if let Some(next) = next {
                last_known = ctx.recall_last_position(self.unit, next);
            }
        }

        let me = ctx.unit(self.unit);
        let position = me.position;
        let budget = me.stats.move_remaining;

        if last_known.is_zero()
            || distance_within(position, last_known, ctx.config.hunt_reselect_distance)
        {
            // Nothing worth walking to; pick a target from right here.
            self.subgoals
                .push_front(Box::new(GoalSelectTarget::new(self.unit)));
            return;
        }

        let mut destination = last_known;
        if !distance_within(position, destination, budget) {
            destination = position + (destination - position).normalized() * budget;
        }

        if ctx.evaluate_path(self.unit, destination) {
            tracing::debug!(unit = ?self.unit, dest = ?destination, "hunting");
            self.subgoals
                .push_front(Box::new(GoalSeekToPosition::new(self.unit, destination)));
        } else {
            self.status = Status::Failed;
        }
    }
}

impl Goal<BattleState> for GoalHuntTarget {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn category(&self) -> GoalCategory {
        GoalCategory::Move
    }

    fn activate(&mut self, ctx: &mut BattleState) {
        self.status = Status::Running;
        self.subgoals.terminate_all(ctx);
        self.destination_set = false;
    }

    fn process(&mut self, ctx: &mut BattleState) -> Status {
        self.activate_if_inactive(ctx);

        let has_moved = ctx.unit(self.unit).flags.has_moved;
        if !has_moved && !self.destination_set {
            self.destination_set = true;
            self.plan_chase(ctx);
        } else if has_moved {
            self.status = Status::Success;
        } else {
            let status = self.subgoals.process_front(ctx);
            self.status = status;
            if !self.subgoals.is_empty() && !status.is_failed() {
                self.status = Status::Running;
            } else if ctx.is_target_present(self.unit) && ctx.is_target_shootable(self.unit) {
                self.status = Status::Success;
            } else if ctx.is_target_present(self.unit) {
                // Chase exhausted and nobody is there: that memory was a dud.
                if let Some(target) = ctx.target_of(self.unit) {
                    ctx.forget(self.unit, target);
                }
                ctx.request_goal(self.unit, GoalRequest::SelectTarget);
                self.status = Status::Failed;
            }
        }
        self.status
    }

    fn terminate(&mut self, ctx: &mut BattleState) {
        self.subgoals.terminate_all(ctx);
        self.status = Status::Success;
    }
}

impl UnitGoal for GoalHuntTarget {
    fn tag(&self) -> GoalTag {
        GoalTag::HuntTarget
    }
}
