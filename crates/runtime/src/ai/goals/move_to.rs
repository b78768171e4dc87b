//! Composite move: a seek plus path-planner message handling.

use game_core::{UnitId, Vec3};
use goal_stack::{Goal, GoalCategory, Status};

use crate::ai::goals::{
    GoalSeekToPosition, GoalTag, MSG_NO_PATH, MSG_PATH_READY, UnitGoal, UnitGoalStack,
};
use crate::battle::BattleState;

/// Moves the unit to a fixed position.
///
/// Thin wrapper over [`GoalSeekToPosition`] that also listens for planner
/// messages: a fresh path restarts the seek, a planning failure fails the
/// whole move.
pub struct GoalMoveToPosition {
    unit: UnitId,
    destination: Vec3,
    subgoals: UnitGoalStack,
    status: Status,
}

impl GoalMoveToPosition {
    pub fn new(unit: UnitId, destination: Vec3) -> Self {
        Self {
            unit,
            destination,
            subgoals: UnitGoalStack::new(),
            status: Status::Inactive,
        }
    }
}

impl Goal<BattleState> for GoalMoveToPosition {
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
        self.subgoals
            .push_front(Box::new(GoalSeekToPosition::new(self.unit, self.destination)));
    }

    fn process(&mut self, ctx: &mut BattleState) -> Status {
        self.activate_if_inactive(ctx);
        self.status = self.subgoals.process_front(ctx);
        self.status
    }

    fn terminate(&mut self, ctx: &mut BattleState) {
        self.subgoals.terminate_all(ctx);
        self.status = Status::Success;
    }

    fn handle_message(&mut self, ctx: &mut BattleState, msg: &str) -> bool {
        if self.subgoals.forward_message(ctx, msg) {
            return true;
        }
        match msg {
            MSG_PATH_READY => {
                // The planner took over the walk; nothing left to drive here.
                self.subgoals.terminate_all(ctx);
                true
            }
            MSG_NO_PATH => {
                self.status = Status::Failed;
                true
            }
            _ => false,
        }
    }
}

impl UnitGoal for GoalMoveToPosition {
    fn tag(&self) -> GoalTag {
        GoalTag::MoveToPosition
    }
}
