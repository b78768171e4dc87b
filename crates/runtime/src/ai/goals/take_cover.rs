//! Re-rate and cache the unit's cover quality.

use game_core::UnitId;
use goal_stack::{Goal, GoalCategory, Status};

use crate::ai::goals::{GoalTag, UnitGoal};
use crate::battle::BattleState;

/// Rates the cover at the unit's current position and caches it on the unit,
/// where damage resolution and the presentation layer read it. The crouch or
/// stand animation that follows is the presentation layer's business.
///
/// Always succeeds; cover quality is a rating, never a precondition.
pub struct GoalTakeCover {
    unit: UnitId,
    status: Status,
}

impl GoalTakeCover {
    pub fn new(unit: UnitId) -> Self {
        Self {
            unit,
            status: Status::Inactive,
        }
    }
}

impl Goal<BattleState> for GoalTakeCover {
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
        let quality = ctx.total_cover_at(self.unit);
        ctx.unit_mut(self.unit).cover_quality = quality;
        tracing::debug!(unit = ?self.unit, quality, "cover rated");
    }

    fn process(&mut self, ctx: &mut BattleState) -> Status {
        self.activate_if_inactive(ctx);
        self.status = Status::Success;
        self.status
    }

    fn terminate(&mut self, _ctx: &mut BattleState) {
        self.status = Status::Success;
    }
}

impl UnitGoal for GoalTakeCover {
    fn tag(&self) -> GoalTag {
        GoalTag::TakeCover
    }
}
