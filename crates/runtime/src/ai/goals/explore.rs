//! Wander toward the likely action.

use game_core::{UnitId, Vec3};
use goal_stack::{Goal, GoalCategory, Status};
use rand::Rng;

use crate::ai::goals::{GoalSeekToPosition, GoalTag, UnitGoal, UnitGoalStack};
use crate::battle::BattleState;

/// Picks a pathable destination biased toward where the fight probably is
/// and walks there.
///
/// The bias direction blends the average positions of living teammates and
/// remembered-or-visible enemies; a random unit-circle direction is mixed in
/// so two explorers never shadow each other exactly. Sampling retries a
/// configured number of times before the goal gives up.
pub struct GoalExplore {
    unit: UnitId,
    attempted: bool,
    subgoals: UnitGoalStack,
    status: Status,
}

impl GoalExplore {
    pub fn new(unit: UnitId) -> Self {
        Self {
            unit,
            attempted: false,
            subgoals: UnitGoalStack::new(),
            status: Status::Inactive,
        }
    }

    fn sample_destination(&self, ctx: &mut BattleState) -> Vec3 {
        let me = ctx.unit(self.unit);
        let position = me.position;
        let budget = me.stats.move_remaining;

        let team_avg = average(ctx.teammates(self.unit).map(|u| u.position));
        let enemy_avg = average(ctx.enemies(self.unit).map(|u| u.position));

        // Toward the mid-field when both sides are known, away from a known
        // enemy mass when alone, toward friends otherwise.
        let bias = match (team_avg, enemy_avg) {
            (Some(team), Some(enemy)) => (team.midpoint(enemy) - position).normalized() * 1.5,
            (None, Some(enemy)) => (position - enemy).normalized() * 0.5,
            (Some(team), None) => (team - position).normalized(),
            (None, None) => Vec3::ZERO,
        };

        let angle: f32 = ctx.rng.gen_range(0.0..std::f32::consts::TAU);
        let jitter = Vec3::new(angle.cos(), 0.0, angle.sin());

        position + (bias + jitter).normalized() * budget
    }

    fn find_destination(&self, ctx: &mut BattleState) -> Option<Vec3> {
        for _ in 0..ctx.config.explore_attempts {
            let candidate = self.sample_destination(ctx);
            if ctx.evaluate_path(self.unit, candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

fn average(positions: impl Iterator<Item = Vec3>) -> Option<Vec3> {
    let mut sum = Vec3::ZERO;
    let mut count = 0u32;
    for p in positions {
        sum += p;
        count += 1;
    }
    (count > 0).then(|| sum * (1.0 / count as f32))
}

impl Goal<BattleState> for GoalExplore {
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
        self.attempted = false;
    }

    fn process(&mut self, ctx: &mut BattleState) -> Status {
        self.activate_if_inactive(ctx);

        if !self.attempted {
            self.attempted = true;
            match self.find_destination(ctx) {
                Some(destination) => {
                    tracing::debug!(unit = ?self.unit, dest = ?destination, "exploring");
                    self.subgoals
                        .push_front(Box::new(GoalSeekToPosition::new(self.unit, destination)));
                }
                None => {
                    tracing::warn!(unit = ?self.unit, "no pathable explore destination found");
                    self.status = Status::Failed;
                }
            }
        } else {
            let status = self.subgoals.process_front(ctx);
            self.status = if !self.subgoals.is_empty() && !status.is_failed() {
                Status::Running
            } else {
                status
            };
        }
        self.status
    }

    fn terminate(&mut self, ctx: &mut BattleState) {
        self.subgoals.terminate_all(ctx);
        self.status = Status::Success;
    }
}

impl UnitGoal for GoalExplore {
    fn tag(&self) -> GoalTag {
        GoalTag::Explore
    }
}
