//! Atomic seek: drive the navigator toward a destination.

use game_core::{UnitId, Vec3};
use goal_stack::{Goal, GoalCategory, Status};

use crate::ai::goals::{GoalTag, UnitGoal};
use crate::battle::{BattleState, UnitEventKind};
use crate::unit::GoalRequest;

/// Walks the unit to `destination` via the navigator, one tick at a time.
///
/// Arrival is the remaining path distance dropping to the configured epsilon.
/// Termination always releases the path and announces `MoveComplete`, so a
/// preempted seek leaves no navigation state behind.
pub struct GoalSeekToPosition {
    unit: UnitId,
    destination: Vec3,
    planned: Option<bool>,
    status: Status,
}

impl GoalSeekToPosition {
    pub fn new(unit: UnitId, destination: Vec3) -> Self {
        Self {
            unit,
            destination,
            planned: None,
            status: Status::Inactive,
        }
    }
}

impl Goal<BattleState> for GoalSeekToPosition {
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
        ctx.unit_mut(self.unit).is_moving = true;
        // Cover quality needs re-rating once this move lands.
        ctx.request_goal(self.unit, GoalRequest::TakeCover);
    }

    fn process(&mut self, ctx: &mut BattleState) -> Status {
        self.activate_if_inactive(ctx);

        match self.planned {
            None => {
                let ok = ctx.plan_move(self.unit, self.destination);
                self.planned = Some(ok);
                if ok {
                    tracing::debug!(unit = ?self.unit, dest = ?self.destination, "seek path planned");
                    self.status = Status::Running;
                } else {
                    tracing::debug!(unit = ?self.unit, dest = ?self.destination, "no path to seek destination");
                    self.status = Status::Failed;
                }
            }
            Some(false) => self.status = Status::Failed,
            Some(true) => {
                if ctx.nav_remaining(self.unit) <= ctx.config.arrival_epsilon {
                    ctx.unit_mut(self.unit).flags.has_moved = true;
                    self.status = Status::Success;
                } else {
                    self.status = Status::Running;
                }
            }
        }
        self.status
    }

    fn terminate(&mut self, ctx: &mut BattleState) {
        ctx.unit_mut(self.unit).is_moving = false;
        ctx.nav_clear(self.unit);
        ctx.push_event(self.unit, UnitEventKind::MoveComplete);
        self.status = Status::Success;
    }
}

impl UnitGoal for GoalSeekToPosition {
    fn tag(&self) -> GoalTag {
        GoalTag::SeekToPosition
    }
}
