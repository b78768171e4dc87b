//! Pick an enemy to fight.

use game_core::UnitId;
use goal_stack::{Goal, GoalCategory, Status};

use crate::ai::goals::{GoalTag, UnitGoal};
use crate::battle::BattleState;
use crate::memory::SenseKind;
use crate::unit::GoalRequest;

/// Selects the unit's target: the nearest visible enemy inside the search
/// radius, falling back to the nearest remembered one. A preset candidate
/// (from player input or a scripted event) skips the search entirely.
///
/// A successful selection is committed to memory and queued for reporting to
/// the team; finding nobody at all fails the goal.
pub struct GoalSelectTarget {
    unit: UnitId,
    preset: Option<UnitId>,
    status: Status,
}

impl GoalSelectTarget {
    pub fn new(unit: UnitId) -> Self {
        Self {
            unit,
            preset: None,
            status: Status::Inactive,
        }
    }

    pub fn with_candidate(unit: UnitId, candidate: UnitId) -> Self {
        Self {
            unit,
            preset: Some(candidate),
            status: Status::Inactive,
        }
    }

    fn best_enemy(&self, ctx: &mut BattleState) -> Option<UnitId> {
        let position = ctx.unit(self.unit).position;
        // Search a bit beyond weapon range so near-range enemies still
        // register as targets worth closing in on.
        let search_sq = ctx.unit(self.unit).weapon.range_squared() * 2.0;

        let mut best = None;
        let mut best_dist = search_sq;
        let candidates: Vec<(UnitId, f32)> = ctx
            .enemies(self.unit)
            .map(|e| (e.id, position.distance_squared(e.position)))
            .collect();
        for (id, dist) in candidates {
            if dist <= best_dist && ctx.can_see(self.unit, id) {
                best_dist = dist;
                best = Some(id);
            }
        }

        best.or_else(|| ctx.nearest_remembered_subject(self.unit))
    }
}

impl Goal<BattleState> for GoalSelectTarget {
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

        let target = match self.preset {
            Some(candidate) => Some(candidate),
            None => self.best_enemy(ctx),
        };

        match target {
            Some(target) => {
                tracing::debug!(unit = ?self.unit, ?target, "target selected");
                ctx.set_target(self.unit, Some(target));
                ctx.observe(self.unit, target, SenseKind::Sight);
                ctx.request_goal(self.unit, GoalRequest::ReportTarget);
                self.status = Status::Success;
            }
            None => {
                tracing::debug!(unit = ?self.unit, "no target found");
                self.status = Status::Failed;
            }
        }
    }

    fn process(&mut self, ctx: &mut BattleState) -> Status {
        self.activate_if_inactive(ctx);
        self.status
    }

    fn terminate(&mut self, _ctx: &mut BattleState) {
        if !self.status.is_terminal() {
            self.status = Status::Success;
        }
    }
}

impl UnitGoal for GoalSelectTarget {
    fn tag(&self) -> GoalTag {
        GoalTag::SelectTarget
    }
}
