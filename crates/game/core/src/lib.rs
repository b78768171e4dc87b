//! Domain model shared across the tactical combat workspace.
//!
//! `game-core` defines the canonical data types a match is made of: vector
//! math, unit identities and stats, weapons, special abilities, personality
//! archetypes, cover points and balance configuration. All of it is plain
//! data with pure mutators; the decision logic that consumes these types
//! lives in the `runtime` crate.
pub mod ability;
pub mod config;
pub mod cover;
pub mod ids;
pub mod math;
pub mod personality;
pub mod stats;
pub mod weapon;

pub use ability::{Ability, AbilityError, AbilityKind};
pub use config::AiConfig;
pub use cover::CoverPoint;
pub use ids::{TeamId, TeamKind, UnitId};
pub use math::{Vec3, distance_within};
pub use personality::{Archetype, Personality};
pub use stats::UnitStats;
pub use weapon::{FireError, ReloadError, Weapon, WeaponKind};
