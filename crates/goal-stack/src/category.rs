//! Coarse goal classification.

/// Category of a goal, used by turn bookkeeping.
///
/// When a goal reaches a terminal state its owner inspects the category to
/// decide which turn-state flags to set: an `Attack` completion consumes the
/// unit's attack for the turn, a `Move` completion consumes its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalCategory {
    /// Consumes the unit's move when it completes.
    Move,

    /// Consumes the unit's attack when it completes (firing and reloading
    /// both count).
    Attack,

    /// Bookkeeping goals with no turn cost (target selection, reporting,
    /// cover updates).
    Misc,

    /// The top-level arbitrating goal that owns all others.
    Brain,
}
