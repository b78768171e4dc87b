//! Sidestep out of cover far enough to get a firing line.

use game_core::{UnitId, Vec3, distance_within};
use goal_stack::{Goal, GoalCategory, Status};

use crate::ai::goals::{GoalAttack, GoalSeekToPosition, GoalTag, UnitGoal, UnitGoalStack};
use crate::battle::BattleState;

/// Steps laterally out of cover to shoot, then steps back.
///
/// Succeeds immediately when the target is already shootable and fails when
/// the unit has no cover to step from. After the step-out seek lands, either
/// an attack (attack still available) or a seek back to the starting point is
/// pushed.
pub struct GoalStepFromCover {
    unit: UnitId,
    origin: Vec3,
    step_out: Vec3,
    subgoals: UnitGoalStack,
    status: Status,
}

impl GoalStepFromCover {
    pub fn new(unit: UnitId) -> Self {
        Self {
            unit,
            origin: Vec3::ZERO,
            step_out: Vec3::ZERO,
            subgoals: UnitGoalStack::new(),
            status: Status::Inactive,
        }
    }

    /// Position to step out to, or [`Vec3::ZERO`] when none qualifies.
    fn sidestep_position(&self, ctx: &BattleState) -> Vec3 {
        // TODO: derive the lateral step from the cover layout around the
        // unit; the cover oracle does not expose per-direction blockers yet,
        // so no candidate is produced and the goal completes without
        // stepping.
        let candidate = Vec3::ZERO;
        if let Some(target) = ctx.target_of(self.unit) {
            if !candidate.is_zero() && ctx.can_see_from(self.unit, candidate, target) {
                return candidate;
            }
        }
        Vec3::ZERO
    }
}

impl Goal<BattleState> for GoalStepFromCover {
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
        self.subgoals.terminate_all(ctx);

        if ctx.is_target_present(self.unit) && ctx.is_target_shootable(self.unit) {
            self.status = Status::Success;
            return;
        }
        if ctx.total_cover_at(self.unit) <= 0.0 {
            tracing::debug!(unit = ?self.unit, "no cover to step from");
            self.status = Status::Failed;
            return;
        }

        self.status = Status::Running;
        self.origin = ctx.unit(self.unit).position;
        self.step_out = self.sidestep_position(ctx);
        if !self.step_out.is_zero() {
            self.subgoals
                .push_front(Box::new(GoalSeekToPosition::new(self.unit, self.step_out)));
        }
    }

    fn process(&mut self, ctx: &mut BattleState) -> Status {
        self.activate_if_inactive(ctx);
        if self.status.is_terminal() {
            return self.status;
        }

        self.status = self.subgoals.process_front(ctx);

        // Step-out landed: either shoot from here or fall back to cover.
        let position = ctx.unit(self.unit).position;
        if !self.status.is_running() && distance_within(self.step_out, position, 1.0) {
            if ctx.unit(self.unit).flags.has_attacked {
                self.subgoals
                    .push_front(Box::new(GoalSeekToPosition::new(self.unit, self.origin)));
            } else {
                self.subgoals.push_front(Box::new(GoalAttack::new(self.unit)));
            }
            self.status = Status::Running;
        }
        self.status
    }

    fn terminate(&mut self, ctx: &mut BattleState) {
        self.subgoals.terminate_all(ctx);
        self.status = Status::Success;
    }
}

impl UnitGoal for GoalStepFromCover {
    fn tag(&self) -> GoalTag {
        GoalTag::StepFromCover
    }
}
