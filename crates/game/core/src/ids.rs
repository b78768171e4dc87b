//! Unit and team identity types.

use serde::{Deserialize, Serialize};

/// Stable identifier of a unit within a match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct UnitId(pub u32);

/// Identifier of a team within a match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TeamId(pub u32);

/// Who controls a team's units by default.
///
/// AI-controlled units get the turn-completion shortcut: a failed attack or
/// move still consumes the corresponding turn flag, so a stuck plan cannot
/// stall the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamKind {
    Human,
    Ai,
}
