//! Tactical goals.
//!
//! Each goal drives one unit (identified by `UnitId`, never a borrow) against
//! the shared [`BattleState`]. Composite goals own a [`GoalStack`] of further
//! `UnitGoal`s; atomic goals do the actual work of firing, moving, reloading
//! and looking around.

mod attack;
mod attack_target;
mod explore;
mod find_attack_cover;
mod hide;
mod hunt_target;
mod move_to;
mod reload;
mod report_target;
mod seek;
mod select_target;
mod step_from_cover;
mod take_cover;
mod use_special;

pub use attack::GoalAttack;
pub use attack_target::GoalAttackTarget;
pub use explore::GoalExplore;
pub use find_attack_cover::GoalFindAttackCover;
pub use hide::GoalHide;
pub use hunt_target::GoalHuntTarget;
pub use move_to::GoalMoveToPosition;
pub use reload::GoalReload;
pub use report_target::GoalReportTarget;
pub use seek::GoalSeekToPosition;
pub use select_target::GoalSelectTarget;
pub use step_from_cover::GoalStepFromCover;
pub use take_cover::GoalTakeCover;
pub use use_special::GoalUseSpecial;

use goal_stack::{Goal, GoalStack};

use crate::battle::BattleState;

/// Message sent when an externally planned path becomes available.
pub const MSG_PATH_READY: &str = "path_ready";
/// Message sent when path planning concluded no path exists.
pub const MSG_NO_PATH: &str = "no_path_available";

/// Identifies a goal's concrete kind.
///
/// Used for duplicate suppression: a brain refuses to push some goals to the
/// front when a goal of the same tag is already there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalTag {
    Attack,
    AttackTarget,
    Explore,
    FindAttackCover,
    Hide,
    HuntTarget,
    MoveToPosition,
    Reload,
    ReportTarget,
    SeekToPosition,
    SelectTarget,
    StepFromCover,
    TakeCover,
    UseSpecial,
}

/// A [`Goal`] over [`BattleState`] that knows its own kind.
pub trait UnitGoal: Goal<BattleState> {
    fn tag(&self) -> GoalTag;
}

/// Subgoal stack used by every composite unit goal and the brain.
pub type UnitGoalStack = GoalStack<BattleState, dyn UnitGoal>;
