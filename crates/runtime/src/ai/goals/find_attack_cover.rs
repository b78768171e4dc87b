//! Reposition into cover inside the weapon's ideal firing band.

use game_core::{UnitId, Vec3};
use goal_stack::{Goal, GoalCategory, Status};

use crate::ai::goals::{GoalSeekToPosition, GoalTag, UnitGoal, UnitGoalStack};
use crate::battle::BattleState;

/// Moves the unit to a cover point from which the target is comfortably in
/// range. Never fails: when no usable cover exists the goal simply completes
/// and the attack proceeds from the current position.
pub struct GoalFindAttackCover {
    unit: UnitId,
    subgoals: UnitGoalStack,
    status: Status,
}

impl GoalFindAttackCover {
    pub fn new(unit: UnitId) -> Self {
        Self {
            unit,
            subgoals: UnitGoalStack::new(),
            status: Status::Inactive,
        }
    }

    /// Picks a reachable cover point to attack from, or [`Vec3::ZERO`] when
    /// none qualifies.
    ///
    /// First choice is the closest reachable point inside the weapon's ideal
    /// band around the target. Failing that, the point nearest the midpoint
    /// between unit and target competes with the point nearest the unit;
    /// whichever still has the target in weapon range wins, and the winner
    /// must be reachable on the remaining move budget.
    fn attack_cover_position(&self, ctx: &BattleState) -> Vec3 {
        let me = ctx.unit(self.unit);
        let target_pos = ctx.target_position(self.unit);
        let budget_sq = me.stats.move_remaining * me.stats.move_remaining;

        let (near, far) = me.weapon.ideal_range();
        let in_band = ctx.cover.points_within_band(target_pos, near, far);
        let banded = in_band
            .iter()
            .filter(|p| me.position.distance_squared(p.position) <= budget_sq)
            .min_by(|a, b| {
                let da = me.position.distance_squared(a.position);
                let db = me.position.distance_squared(b.position);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .copied();

        let between = banded.or_else(|| ctx.cover.closest_point_between(me.position, target_pos));
        let Some(between) = between else {
            return Vec3::ZERO;
        };
        let nearest = ctx.cover.closest_point(me.position);

        let range_sq = me.weapon.range_squared();
        let reaches = |p: Vec3| p.distance_squared(target_pos) <= range_sq;

        let mut chosen = None;
        if reaches(between.position) {
            chosen = Some(between);
        } else if let Some(nearest) = nearest {
            if nearest.position != between.position && reaches(nearest.position) {
                chosen = Some(nearest);
            }
        }

        match chosen {
            Some(point) if me.position.distance_squared(point.position) <= budget_sq => {
                point.position
            }
            _ => Vec3::ZERO,
        }
    }
}

impl Goal<BattleState> for GoalFindAttackCover {
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

        let destination = self.attack_cover_position(ctx);
        if destination.is_zero() {
            tracing::debug!(unit = ?self.unit, "no usable attack cover; firing in place");
        } else {
            self.subgoals
                .push_front(Box::new(GoalSeekToPosition::new(self.unit, destination)));
        }
    }

    fn process(&mut self, ctx: &mut BattleState) -> Status {
        self.activate_if_inactive(ctx);
        self.status = self.subgoals.process_front(ctx);
        if !self.subgoals.is_empty() {
            self.status = Status::Running;
        }
        self.status
    }

    fn terminate(&mut self, ctx: &mut BattleState) {
        self.subgoals.terminate_all(ctx);
        self.status = Status::Success;
    }
}

impl UnitGoal for GoalFindAttackCover {
    fn tag(&self) -> GoalTag {
        GoalTag::FindAttackCover
    }
}
