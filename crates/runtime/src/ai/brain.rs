//! The top-level arbitrating goal owning a unit's plan.

use game_core::{Personality, UnitId, Vec3};
use goal_stack::{Goal, GoalCategory, Status};

use crate::ai::evaluators::{
    ArmorEvaluator, AttackTargetEvaluator, Evaluator, ExploreEvaluator, GoalProposal,
    HealthEvaluator, HideEvaluator, ReloadEvaluator,
};
use crate::ai::goals::{
    GoalAttackTarget, GoalExplore, GoalHide, GoalMoveToPosition, GoalReload, GoalReportTarget,
    GoalSelectTarget, GoalTag, GoalTakeCover, GoalUseSpecial, UnitGoalStack,
};
use crate::battle::{BattleState, UnitEventKind};
use crate::unit::{GoalRequest, TurnFlags};

/// One unit's decision maker.
///
/// Owns the top-level goal stack and the evaluators that compete to fill it.
/// Processing advances the front goal one tick; when the front goal finishes,
/// turn flags are updated from its category and arbitration decides what (if
/// anything) comes next. An empty stack ends the unit's turn.
///
/// Brains live in the turn runner, not in [`BattleState`], so processing a
/// brain against the shared state never aliases its own stack.
pub struct Brain {
    unit: UnitId,
    evaluators: Vec<Box<dyn Evaluator>>,
    goals: UnitGoalStack,
    just_activated: bool,
    status: Status,
}

impl Brain {
    pub fn new(unit: UnitId, personality: Personality) -> Self {
        // Registration order is fixed; arbitration resolves score ties in
        // favor of the later-registered evaluator.
        let evaluators: Vec<Box<dyn Evaluator>> = vec![
            Box::new(HealthEvaluator::new(personality.health_bias)),
            Box::new(ExploreEvaluator::new(personality.explore_bias)),
            Box::new(AttackTargetEvaluator::new(personality.attack_bias)),
            Box::new(HideEvaluator::new(personality.hide_bias)),
            Box::new(ReloadEvaluator::new(personality.reload_bias)),
            Box::new(ArmorEvaluator::new(personality.health_bias)),
        ];

        Self {
            unit,
            evaluators,
            goals: UnitGoalStack::new(),
            just_activated: false,
            status: Status::Inactive,
        }
    }

    pub fn unit(&self) -> UnitId {
        self.unit
    }

    pub fn goal_count(&self) -> usize {
        self.goals.len()
    }

    pub fn front_tag(&self) -> Option<GoalTag> {
        self.goals.front().map(|g| g.tag())
    }

    /// Resets the brain and the unit's per-turn state for a fresh turn.
    pub fn begin_turn(&mut self, ctx: &mut BattleState) {
        self.goals.terminate_all(ctx);
        self.status = Status::Inactive;
        self.just_activated = false;

        let me = ctx.unit_mut(self.unit);
        me.flags = TurnFlags::default();
        me.stats.reset_move();
        me.ability.advance_turn();
        me.pending.clear();
        tracing::debug!(unit = ?self.unit, "turn started");
    }

    // ========================================================================
    // Arbitration
    // ========================================================================

    /// Scores every evaluator and pushes the winner's goal.
    ///
    /// The very first arbitration after activation always selects a target
    /// instead, so every plan starts from a known enemy picture. A winning
    /// score of zero means nothing is worth doing; the stack is left alone.
    pub fn arbitrate(&mut self, ctx: &mut BattleState) {
        if self.just_activated {
            self.just_activated = false;
            self.add_goal_select_target();
            return;
        }

        let mut best = 0.0f32;
        let mut winner = None;
        for (index, evaluator) in self.evaluators.iter().enumerate() {
            let score = evaluator.desirability(ctx, self.unit);
            tracing::debug!(unit = ?self.unit, ?index, score, "evaluator scored");
            // `>=` so the later-registered evaluator wins ties.
            if score >= best {
                best = score;
                winner = Some(index);
            }
        }

        if best <= 0.0 {
            tracing::debug!(unit = ?self.unit, "nothing desirable; idling");
            return;
        }
        let Some(winner) = winner else {
            return;
        };

        match self.evaluators[winner].proposal() {
            GoalProposal::AttackTarget => self.add_goal_attack_target(),
            GoalProposal::Explore => self.add_goal_explore(),
            GoalProposal::Hide => self.add_goal_hide(),
            GoalProposal::Reload => self.add_goal_reload(),
            GoalProposal::UseSpecial => self.add_goal_use_special(),
        }
    }

    // ========================================================================
    // Goal insertion
    // ========================================================================

    fn front_is(&self, tag: GoalTag) -> bool {
        self.front_tag() == Some(tag)
    }

    pub fn add_goal_attack_target(&mut self) {
        if !self.front_is(GoalTag::AttackTarget) {
            self.goals
                .push_front(Box::new(GoalAttackTarget::new(self.unit)));
        }
    }

    pub fn add_goal_explore(&mut self) {
        self.goals.push_front(Box::new(GoalExplore::new(self.unit)));
    }

    pub fn add_goal_hide(&mut self) {
        if !self.front_is(GoalTag::Hide) {
            self.goals.push_front(Box::new(GoalHide::new(self.unit)));
        }
    }

    pub fn add_goal_select_target(&mut self) {
        if !self.front_is(GoalTag::SelectTarget) {
            self.goals
                .push_front(Box::new(GoalSelectTarget::new(self.unit)));
        }
    }

    /// Forces selection of a specific candidate (player input or scripted).
    pub fn add_goal_select_target_with(&mut self, candidate: UnitId) {
        if !self.front_is(GoalTag::SelectTarget) {
            self.goals
                .push_front(Box::new(GoalSelectTarget::with_candidate(
                    self.unit, candidate,
                )));
        }
    }

    pub fn add_goal_take_cover(&mut self) {
        self.goals.push_front(Box::new(GoalTakeCover::new(self.unit)));
    }

    pub fn add_goal_reload(&mut self) {
        self.goals.push_front(Box::new(GoalReload::new(self.unit)));
    }

    pub fn add_goal_use_special(&mut self) {
        self.goals.push_front(Box::new(GoalUseSpecial::new(self.unit)));
    }

    pub fn add_goal_move_to(&mut self, destination: Vec3) {
        self.goals
            .push_front(Box::new(GoalMoveToPosition::new(self.unit, destination)));
    }

    pub fn queue_goal_move_to(&mut self, destination: Vec3) {
        self.goals
            .push_back(Box::new(GoalMoveToPosition::new(self.unit, destination)));
    }

    pub fn queue_goal_select_target(&mut self) {
        self.goals
            .push_back(Box::new(GoalSelectTarget::new(self.unit)));
    }

    pub fn queue_goal_report_target(&mut self) {
        self.goals
            .push_back(Box::new(GoalReportTarget::new(self.unit)));
    }

    pub fn queue_goal_take_cover(&mut self) {
        self.goals.push_back(Box::new(GoalTakeCover::new(self.unit)));
    }

    /// Picks up the goal requests subgoals parked on the unit and queues the
    /// corresponding goals.
    fn drain_requests(&mut self, ctx: &mut BattleState) {
        for request in ctx.take_requests(self.unit) {
            match request {
                GoalRequest::TakeCover => self.queue_goal_take_cover(),
                GoalRequest::SelectTarget => self.queue_goal_select_target(),
                GoalRequest::ReportTarget => self.queue_goal_report_target(),
            }
        }
    }

    pub fn forward_message(&mut self, ctx: &mut BattleState, msg: &str) -> bool {
        self.goals.forward_message(ctx, msg)
    }
}

impl Goal<BattleState> for Brain {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    fn category(&self) -> GoalCategory {
        GoalCategory::Brain
    }

    fn activate(&mut self, ctx: &mut BattleState) {
        self.just_activated = true;
        if !ctx.unit(self.unit).is_possessed {
            self.arbitrate(ctx);
        }
        self.status = Status::Running;
    }

    fn process(&mut self, ctx: &mut BattleState) -> Status {
        self.activate_if_inactive(ctx);

        let front_status = self.goals.process_front(ctx);
        self.drain_requests(ctx);

        if front_status.is_terminal() {
            let ai_shortcut = ctx.is_ai_controlled(self.unit);

            // The finished goal is still at the front until the next tick;
            // its category says which turn action it consumed. The AI
            // shortcut burns the action even on failure so a stuck plan
            // cannot stall the match.
            match self.goals.front_category() {
                Some(GoalCategory::Attack) => {
                    if front_status.is_success() || ai_shortcut {
                        ctx.unit_mut(self.unit).flags.has_attacked = true;
                    }
                }
                Some(GoalCategory::Move) => {
                    self.add_goal_take_cover();
                    self.queue_goal_select_target();
                    if front_status.is_success() || ai_shortcut {
                        ctx.unit_mut(self.unit).flags.has_moved = true;
                    }
                }
                _ => {}
            }

            let me = ctx.unit(self.unit);
            let possessed = me.is_possessed;
            let flags = me.flags;
            if self.goals.len() < 2 && (!flags.has_moved || !flags.has_attacked) && !possessed {
                self.arbitrate(ctx);
            }

            if self.goals.is_empty() {
                tracing::debug!(unit = ?self.unit, ?front_status, "turn finished");
                self.status = front_status;
                ctx.push_event(self.unit, UnitEventKind::TurnFinished);
            }
        }
        self.status
    }

    fn terminate(&mut self, ctx: &mut BattleState) {
        self.goals.terminate_all(ctx);
        self.status = Status::Success;
    }
}
