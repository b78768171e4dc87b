//! Cover points placed in the world.

use serde::{Deserialize, Serialize};

use crate::math::Vec3;

/// A spot next to world geometry a unit can take cover at.
///
/// Placement comes from the level; quality at a point is computed by the
/// runtime's cover oracle against world geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverPoint {
    pub position: Vec3,
}

impl CoverPoint {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}
