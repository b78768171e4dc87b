//! The shared battle context every goal and evaluator runs against.

use std::collections::VecDeque;

use game_core::{AiConfig, TeamKind, UnitId, Vec3};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cover_map::CoverMap;
use crate::error::RuntimeError;
use crate::memory::SenseKind;
use crate::oracle::{
    CoverOracle, LineNavigator, Navigator, OpenField, ProximityCoverOracle, SpatialOracle,
};
use crate::unit::{GoalRequest, UnitState};

/// Notification emitted by goals for the scheduler and presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitEventKind {
    /// A seek goal released its navigation path.
    MoveComplete,
    /// The unit's brain ran out of goals; its turn is over.
    TurnFinished,
}

/// An event tagged with the unit that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitEvent {
    pub unit: UnitId,
    pub kind: UnitEventKind,
}

/// Everything a goal may read or mutate while deciding and acting.
///
/// Owns the roster, the match clock, the cover layout, the match RNG and the
/// world oracles. Brains live outside this struct (in the turn runner), so a
/// brain can process against `&mut BattleState` without aliasing its own
/// goal stack.
pub struct BattleState {
    pub config: AiConfig,
    /// Match clock in seconds, advanced by the scheduler.
    pub time: f32,
    pub cover: CoverMap,
    pub rng: StdRng,
    units: Vec<UnitState>,
    events: VecDeque<UnitEvent>,
    spatial: Box<dyn SpatialOracle>,
    navigator: Box<dyn Navigator>,
    cover_oracle: Box<dyn CoverOracle>,
}

impl BattleState {
    /// Builds a battle over an open field with the default geometric
    /// oracles. Scenario setups that need walls or a real navmesh use
    /// [`BattleState::with_oracles`].
    pub fn new(config: AiConfig, units: Vec<UnitState>, cover: CoverMap) -> Self {
        Self::with_oracles(
            config,
            units,
            cover,
            Box::new(OpenField),
            Box::new(LineNavigator::default()),
            Box::new(ProximityCoverOracle::default()),
        )
    }

    pub fn with_oracles(
        config: AiConfig,
        units: Vec<UnitState>,
        cover: CoverMap,
        spatial: Box<dyn SpatialOracle>,
        navigator: Box<dyn Navigator>,
        cover_oracle: Box<dyn CoverOracle>,
    ) -> Self {
        let rng = StdRng::seed_from_u64(config.rng_seed);
        Self {
            config,
            time: 0.0,
            cover,
            rng,
            units,
            events: VecDeque::new(),
            spatial,
            navigator,
            cover_oracle,
        }
    }

    // ========================================================================
    // Roster
    // ========================================================================

    pub fn units(&self) -> &[UnitState] {
        &self.units
    }

    pub fn try_unit(&self, id: UnitId) -> Result<&UnitState, RuntimeError> {
        self.units
            .iter()
            .find(|u| u.id == id)
            .ok_or(RuntimeError::UnknownUnit(id))
    }

    /// Panics when `id` is not in the roster; goals only ever hold ids
    /// handed out by this battle.
    pub fn unit(&self, id: UnitId) -> &UnitState {
        match self.try_unit(id) {
            Ok(unit) => unit,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn unit_mut(&mut self, id: UnitId) -> &mut UnitState {
        match self.units.iter_mut().find(|u| u.id == id) {
            Some(unit) => unit,
            None => panic!("{}", RuntimeError::UnknownUnit(id)),
        }
    }

    /// Living teammates of `unit`, excluding the unit itself.
    pub fn teammates(&self, unit: UnitId) -> impl Iterator<Item = &UnitState> {
        let team = self.unit(unit).team;
        self.units
            .iter()
            .filter(move |u| u.id != unit && u.team == team && u.is_alive())
    }

    /// Living units hostile to `unit`.
    pub fn enemies(&self, unit: UnitId) -> impl Iterator<Item = &UnitState> {
        let team = self.unit(unit).team;
        self.units
            .iter()
            .filter(move |u| u.team != team && u.is_alive())
    }

    /// Average position of the unit's living team members, itself included.
    pub fn team_center(&self, unit: UnitId) -> Vec3 {
        let team = self.unit(unit).team;
        let mut sum = Vec3::ZERO;
        let mut count = 0u32;
        for member in self.units.iter().filter(|u| u.team == team && u.is_alive()) {
            sum += member.position;
            count += 1;
        }
        if count == 0 {
            Vec3::ZERO
        } else {
            sum * (1.0 / count as f32)
        }
    }

    pub fn is_ai_controlled(&self, unit: UnitId) -> bool {
        self.unit(unit).team_kind == TeamKind::Ai
    }

    // ========================================================================
    // Senses and memory
    // ========================================================================

    /// Whether `observer` can currently see `subject`: the subject is alive,
    /// not cloaked, within sight range and on a clear sight line.
    pub fn can_see(&self, observer: UnitId, subject: UnitId) -> bool {
        let obs = self.unit(observer);
        let subj = self.unit(subject);
        if !subj.is_alive() || is_cloaked(subj) {
            return false;
        }
        game_core::distance_within(obs.position, subj.position, obs.stats.sight_range)
            && self.spatial.line_of_sight(obs.position, subj.position)
    }

    /// Whether `subject` would be visible with the observer standing at
    /// `vantage`. Range is still measured from the observer's current
    /// position; only the sight line moves.
    pub fn can_see_from(&self, observer: UnitId, vantage: Vec3, subject: UnitId) -> bool {
        let obs = self.unit(observer);
        let subj = self.unit(subject);
        if !subj.is_alive() || is_cloaked(subj) {
            return false;
        }
        game_core::distance_within(obs.position, subj.position, obs.stats.sight_range)
            && self.spatial.line_of_sight(vantage, subj.position)
    }

    pub fn can_hear(&self, observer: UnitId, source: Vec3) -> bool {
        let obs = self.unit(observer);
        game_core::distance_within(obs.position, source, obs.stats.hearing_range)
    }

    /// Writes (or refreshes) `subject` into the observer's memory at the
    /// subject's current position.
    pub fn observe(&mut self, observer: UnitId, subject: UnitId, sense: SenseKind) {
        let position = self.unit(subject).position;
        let time = self.time;
        self.unit_mut(observer)
            .memory
            .update(subject, position, time, sense);
    }

    /// Registers a loud action (gunfire) at the source unit's position.
    /// Every other living unit in hearing range remembers the source by
    /// sound.
    pub fn emit_noise(&mut self, source: UnitId) {
        let position = self.unit(source).position;
        let time = self.time;
        let listeners: Vec<UnitId> = self
            .units
            .iter()
            .filter(|u| u.id != source && u.is_alive())
            .map(|u| u.id)
            .collect();
        for listener in listeners {
            if self.can_hear(listener, position) {
                self.unit_mut(listener)
                    .memory
                    .update(source, position, time, SenseKind::Sound);
            }
        }
    }

    pub fn forget(&mut self, observer: UnitId, subject: UnitId) {
        self.unit_mut(observer).memory.remove(subject);
    }

    /// Last remembered position of `subject`, or [`Vec3::ZERO`] when nothing
    /// (current) is remembered. Sweeps stale records first.
    pub fn recall_last_position(&mut self, observer: UnitId, subject: UnitId) -> Vec3 {
        self.sweep_memory(observer);
        self.unit(observer).memory.last_recorded_position(subject)
    }

    /// Remembered subject closest to the observer, after sweeping.
    pub fn nearest_remembered_subject(&mut self, observer: UnitId) -> Option<UnitId> {
        self.sweep_memory(observer);
        let pos = self.unit(observer).position;
        self.unit(observer).memory.nearest_subject(pos)
    }

    fn sweep_memory(&mut self, observer: UnitId) {
        let now = self.time;
        let forget_duration = self.config.forget_duration;
        let alive: Vec<UnitId> = self
            .units
            .iter()
            .filter(|u| u.is_alive())
            .map(|u| u.id)
            .collect();
        self.unit_mut(observer)
            .memory
            .sweep(now, forget_duration, |id| !alive.contains(&id));
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Whether a complete path exists from the unit's position to `dest`.
    pub fn evaluate_path(&self, unit: UnitId, dest: Vec3) -> bool {
        self.spatial.evaluate_path(self.unit(unit).position, dest)
    }

    /// Plans a path and hands it to the navigator. Returns `false` when no
    /// path exists.
    pub fn plan_move(&mut self, unit: UnitId, dest: Vec3) -> bool {
        let from = self.unit(unit).position;
        if !self.spatial.evaluate_path(from, dest) {
            return false;
        }
        self.navigator.set_destination(unit, from, dest)
    }

    pub fn nav_remaining(&self, unit: UnitId) -> f32 {
        self.navigator.remaining_distance(unit)
    }

    pub fn nav_has_path(&self, unit: UnitId) -> bool {
        self.navigator.has_path(unit)
    }

    pub fn nav_clear(&mut self, unit: UnitId) {
        self.navigator.clear(unit);
    }

    /// Advances the match clock and moves every unit with an active path.
    pub fn advance(&mut self, dt: f32) {
        self.time += dt;
        self.navigator.advance(dt, &mut self.units);
    }

    // ========================================================================
    // Cover
    // ========================================================================

    /// Cover quality at the unit's position in `[0, 100]`.
    pub fn total_cover_at(&self, unit: UnitId) -> f32 {
        self.cover_oracle.total_cover_at(self, unit)
    }

    /// Cover against an attack arriving along `direction`, in `[0, 1]`.
    pub fn coverage_from_direction(&self, unit: UnitId, direction: Vec3) -> f32 {
        self.cover_oracle.coverage_from_direction(self, unit, direction)
    }

    // ========================================================================
    // Events and goal requests
    // ========================================================================

    pub fn push_event(&mut self, unit: UnitId, kind: UnitEventKind) {
        self.events.push_back(UnitEvent { unit, kind });
    }

    pub fn drain_events(&mut self) -> Vec<UnitEvent> {
        self.events.drain(..).collect()
    }

    /// Parks a goal request on the unit for its brain to pick up after the
    /// current processing step.
    pub fn request_goal(&mut self, unit: UnitId, request: GoalRequest) {
        self.unit_mut(unit).pending.push(request);
    }

    pub(crate) fn take_requests(&mut self, unit: UnitId) -> Vec<GoalRequest> {
        std::mem::take(&mut self.unit_mut(unit).pending)
    }
}

fn is_cloaked(unit: &UnitState) -> bool {
    unit.ability.kind == game_core::AbilityKind::Stealth && unit.ability.in_use()
}
