//! Goal-driven unit AI: evaluators, tactical goals and the brain.

pub mod brain;
pub mod evaluators;
pub mod goals;

pub use brain::Brain;
pub use evaluators::{Evaluator, GoalProposal};
pub use goals::{GoalTag, UnitGoal, UnitGoalStack};
