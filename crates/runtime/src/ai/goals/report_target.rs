//! Share the current target with the team.

use game_core::UnitId;
use goal_stack::{Goal, GoalCategory, Status};

use crate::ai::goals::{GoalTag, UnitGoal};
use crate::battle::BattleState;
use crate::memory::SenseKind;

/// Writes the unit's current target into every living teammate's memory, so
/// the whole team can hunt an enemy only one member has seen.
pub struct GoalReportTarget {
    unit: UnitId,
    status: Status,
}

impl GoalReportTarget {
    pub fn new(unit: UnitId) -> Self {
        Self {
            unit,
            status: Status::Inactive,
        }
    }
}

impl Goal<BattleState> for GoalReportTarget {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn category(&self) -> GoalCategory {
        GoalCategory::Misc
    }

    fn activate(&mut self, _ctx: &mut BattleState) {
        self.status = Status::Running;
    }

    fn process(&mut self, ctx: &mut BattleState) -> Status {
        self.activate_if_inactive(ctx);

        if !ctx.is_target_present(self.unit) {
            self.status = Status::Failed;
            return self.status;
        }
        let Some(target) = ctx.target_of(self.unit) else {
            self.status = Status::Failed;
            return self.status;
        };

        let teammates: Vec<UnitId> = ctx.teammates(self.unit).map(|u| u.id).collect();
        for teammate in teammates {
            ctx.observe(teammate, target, SenseKind::Sight);
        }
        tracing::debug!(unit = ?self.unit, ?target, "target reported to team");
        self.status = Status::Success;
        self.status
    }

    fn terminate(&mut self, _ctx: &mut BattleState) {
        if !self.status.is_terminal() {
            self.status = Status::Success;
        }
    }
}

impl UnitGoal for GoalReportTarget {
    fn tag(&self) -> GoalTag {
        GoalTag::ReportTarget
    }
}
