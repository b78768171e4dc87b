//! Runtime error types.

use game_core::UnitId;
use thiserror::Error;

/// Errors surfaced by the battle runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("unknown unit {0:?}")]
    UnknownUnit(UnitId),

    #[error("no living units left to schedule")]
    NoActiveUnits,

    #[error("turn for unit {unit:?} did not finish within {ticks} ticks")]
    TurnStalled { unit: UnitId, ticks: usize },
}
