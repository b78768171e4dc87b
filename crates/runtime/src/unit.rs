//! Mutable per-unit battle state.

use game_core::{
    Ability, AbilityKind, Archetype, Personality, TeamId, TeamKind, UnitId, UnitStats, Vec3,
    Weapon, WeaponKind,
};
use serde::{Deserialize, Serialize};

use crate::memory::MemoryStore;

/// Once-per-turn action flags.
///
/// Set by goals as they complete and consulted by evaluators and goal
/// activation logic; reset exactly once when the unit's turn begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TurnFlags {
    pub has_moved: bool,
    pub has_attacked: bool,
}

/// A goal a subgoal asks the owning brain to queue on its behalf.
///
/// Subgoals cannot reach back into the brain that owns them mid-processing,
/// so they park requests here; the brain drains them right after each
/// processing step and back-queues the corresponding goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalRequest {
    TakeCover,
    SelectTarget,
    ReportTarget,
}

/// Everything the runtime tracks about one unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitState {
    pub id: UnitId,
    pub team: TeamId,
    pub team_kind: TeamKind,
    pub position: Vec3,
    pub facing: Vec3,
    /// Player-possessed units never arbitrate; their brain idles.
    pub is_possessed: bool,
    pub is_moving: bool,
    pub is_attacking: bool,
    pub stats: UnitStats,
    pub weapon: Weapon,
    pub ability: Ability,
    pub personality: Personality,
    pub flags: TurnFlags,
    pub memory: MemoryStore,
    pub target: Option<UnitId>,
    /// Cover quality at the current position, cached by the take-cover goal.
    pub cover_quality: f32,
    pub(crate) pending: Vec<GoalRequest>,
}

impl UnitState {
    pub fn new(id: UnitId, team: TeamId, team_kind: TeamKind, position: Vec3) -> Self {
        Self {
            id,
            team,
            team_kind,
            position,
            facing: Vec3::new(0.0, 0.0, 1.0),
            is_possessed: false,
            is_moving: false,
            is_attacking: false,
            stats: UnitStats::default(),
            weapon: Weapon::new(WeaponKind::AssaultRifle),
            ability: Ability::new(AbilityKind::Armor),
            personality: Personality::default(),
            flags: TurnFlags::default(),
            memory: MemoryStore::new(),
            target: None,
            cover_quality: 0.0,
            pending: Vec::new(),
        }
    }

    pub fn with_weapon(mut self, kind: WeaponKind) -> Self {
        self.weapon = Weapon::new(kind);
        self
    }

    pub fn with_ability(mut self, kind: AbilityKind) -> Self {
        self.ability = Ability::new(kind);
        self
    }

    pub fn with_archetype(mut self, archetype: Archetype) -> Self {
        self.personality = archetype.into();
        self
    }

    pub fn possessed(mut self) -> Self {
        self.is_possessed = true;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }
}
