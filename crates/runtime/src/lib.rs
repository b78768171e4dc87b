//! Battle runtime: goal-driven decision making for tactical units.
//!
//! The runtime layers the generic `goal-stack` state machine onto the
//! `game-core` domain model:
//!
//! - [`BattleState`] is the shared context every goal runs against: the
//!   roster, the match clock, cover, the match RNG and the world oracles
//! - [`ai::Brain`] is one unit's decision maker, arbitrating among
//!   desirability evaluators and driving the winning goal's subtree
//! - [`TurnRunner`] schedules brains cooperatively, one unit at a time
//!
//! World geometry concerns (sight lines, paths, movement, cover quality)
//! live behind the [`oracle`] traits so a full engine backend and the
//! simple geometric backends used in headless simulation are
//! interchangeable.

pub mod ai;
pub mod battle;
pub mod cover_map;
pub mod error;
pub mod memory;
pub mod oracle;
pub mod runner;
mod targeting;
pub mod unit;

pub use ai::{Brain, GoalTag};
pub use battle::{BattleState, UnitEvent, UnitEventKind};
pub use cover_map::CoverMap;
pub use error::RuntimeError;
pub use memory::{MemoryRecord, MemoryStore, SenseKind};
pub use runner::TurnRunner;
pub use unit::{GoalRequest, TurnFlags, UnitState};
