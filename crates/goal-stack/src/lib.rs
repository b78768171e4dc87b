//! Lightweight goal state machine library for turn-based unit AI.
//!
//! This library provides the building blocks for goal-oriented behavior:
//! long-lived goal nodes that are resumed tick after tick until they reach a
//! terminal state, arranged in front-first subgoal stacks.
//!
//! - **Four-state lifecycle**: goals move Inactive → Running → Success/Failed
//! - **Cooperative ticking**: a Running goal does one bounded unit of work per
//!   [`Goal::process`] call and is resumed on the next tick
//! - **Subgoal stacks**: composite goals own a [`GoalStack`] whose front entry
//!   is the only goal processed per tick
//! - **Zero dependencies**: pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Goal`]: core trait for all nodes, generic over a context type
//! - [`Status`]: Inactive / Running / Success / Failed
//! - [`GoalCategory`]: coarse classification consumed by turn bookkeeping
//! - [`GoalStack`]: ordered front-first collection with the composite
//!   processing algorithm

pub mod category;
pub mod goal;
pub mod stack;
pub mod status;

// Re-export core types for ergonomic API
pub use category::GoalCategory;
pub use goal::Goal;
pub use stack::GoalStack;
pub use status::Status;
