//! World collaborators the AI queries but does not own.
//!
//! Line of sight, path planning, movement execution and cover quality all
//! depend on level geometry the decision layer has no business knowing
//! about. They sit behind traits so a full physics/navmesh backend and the
//! simple geometric backends used by headless simulation plug in the same
//! way.

mod line_navigator;
mod proximity_cover;
mod spatial;

pub use line_navigator::LineNavigator;
pub use proximity_cover::ProximityCoverOracle;
pub use spatial::{OpenField, WalledField};

use game_core::{UnitId, Vec3};

use crate::battle::BattleState;
use crate::unit::UnitState;

/// Visibility and reachability queries against level geometry.
pub trait SpatialOracle: Send {
    /// Whether an unobstructed sight line exists between two points.
    fn line_of_sight(&self, from: Vec3, to: Vec3) -> bool;

    /// Whether a complete path from `from` to `to` exists.
    fn evaluate_path(&self, from: Vec3, to: Vec3) -> bool;
}

/// Executes movement along planned paths.
///
/// Destinations are set per unit; [`Navigator::advance`] then moves every
/// unit with an active path and charges the travelled distance against its
/// move budget. Paths stay active until explicitly cleared, arrival is
/// detected by the seek goal via [`Navigator::remaining_distance`].
pub trait Navigator: Send {
    /// Plans a path for `unit` from `from` to `dest`. Returns `false` when
    /// no path could be planned.
    fn set_destination(&mut self, unit: UnitId, from: Vec3, dest: Vec3) -> bool;

    fn has_path(&self, unit: UnitId) -> bool;

    /// Path distance left to the destination, or `f32::INFINITY` when the
    /// unit has no active path.
    fn remaining_distance(&self, unit: UnitId) -> f32;

    fn clear(&mut self, unit: UnitId);

    /// Moves every unit with an active path by one time slice.
    fn advance(&mut self, dt: f32, units: &mut [UnitState]);
}

/// Cover quality queries.
pub trait CoverOracle: Send {
    /// Overall cover quality at the unit's position in `[0, 100]`.
    fn total_cover_at(&self, state: &BattleState, unit: UnitId) -> f32;

    /// How well the unit is covered against an attack arriving along
    /// `direction`, in `[0, 1]`.
    fn coverage_from_direction(&self, state: &BattleState, unit: UnitId, direction: Vec3) -> f32;
}
