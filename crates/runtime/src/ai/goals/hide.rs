//! Break away from danger, into cover when possible.

use game_core::{UnitId, Vec3};
use goal_stack::{Goal, GoalCategory, Status};

use crate::ai::goals::{GoalSeekToPosition, GoalTag, UnitGoal, UnitGoalStack};
use crate::battle::BattleState;

/// Moves the unit somewhere safer.
///
/// Preferred destination is a reachable cover point near the threat axis.
/// Without one the unit flees on a straight line: directly away from its
/// target when it has one, otherwise back toward the team's center of mass.
pub struct GoalHide {
    unit: UnitId,
    destination_set: bool,
    subgoals: UnitGoalStack,
    status: Status,
}

impl GoalHide {
    pub fn new(unit: UnitId) -> Self {
        Self {
            unit,
            destination_set: false,
            subgoals: UnitGoalStack::new(),
            status: Status::Inactive,
        }
    }

    /// Reachable cover point to hide at, or [`Vec3::ZERO`] when none exists.
    fn hiding_cover(&self, ctx: &BattleState) -> Vec3 {
        let me = ctx.unit(self.unit);
        let anchor = if ctx.is_target_present(self.unit) {
            ctx.target_position(self.unit)
        } else {
            me.position
        };

        match ctx.cover.closest_point(anchor) {
            Some(point)
                if game_core::distance_within(
                    me.position,
                    point.position,
                    me.stats.move_remaining,
                ) =>
            {
                point.position
            }
            _ => Vec3::ZERO,
        }
    }

    fn flee_destination(&self, ctx: &BattleState) -> Vec3 {
        let me = ctx.unit(self.unit);
        let direction = if ctx.is_target_present(self.unit) {
            (me.position - ctx.target_position(self.unit)).normalized()
        } else {
            (ctx.team_center(self.unit) - me.position).normalized()
        };
        me.position + direction * me.stats.move_remaining
    }
}

impl Goal<BattleState> for GoalHide {
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

        if !self.destination_set {
            self.destination_set = true;

            let mut destination = self.hiding_cover(ctx);
            if destination.is_zero() {
                destination = self.flee_destination(ctx);
            }

            if ctx.evaluate_path(self.unit, destination) {
                tracing::debug!(unit = ?self.unit, dest = ?destination, "hiding");
                self.subgoals
                    .push_front(Box::new(GoalSeekToPosition::new(self.unit, destination)));
            } else {
                tracing::debug!(unit = ?self.unit, "nowhere to hide");
                self.status = Status::Failed;
            }
        } else {
            self.status = self.subgoals.process_front(ctx);
            if !self.status.is_failed() && !self.subgoals.is_empty() {
                self.status = Status::Running;
            }
        }
        self.status
    }

    fn terminate(&mut self, ctx: &mut BattleState) {
        self.subgoals.terminate_all(ctx);
        self.status = Status::Success;
    }
}

impl UnitGoal for GoalHide {
    fn tag(&self) -> GoalTag {
        GoalTag::Hide
    }
}
