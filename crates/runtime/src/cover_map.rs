//! Queries over the cover points placed in a level.

use game_core::{CoverPoint, Vec3};
use serde::{Deserialize, Serialize};

fn closest_of<'a>(
    points: impl Iterator<Item = &'a CoverPoint>,
    to: Vec3,
) -> Option<CoverPoint> {
    points
        .min_by(|a, b| {
            let da = to.distance_squared(a.position);
            let db = to.distance_squared(b.position);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .copied()
}

/// All cover points of the current level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverMap {
    points: Vec<CoverPoint>,
}

impl CoverMap {
    pub fn new(points: Vec<CoverPoint>) -> Self {
        Self { points }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[CoverPoint] {
        &self.points
    }

    /// Cover point closest to `pos`, or `None` on a level without cover.
    pub fn closest_point(&self, pos: Vec3) -> Option<CoverPoint> {
        closest_of(self.points.iter(), pos)
    }

    /// Cover point closest to the midpoint of `a` and `b`.
    pub fn closest_point_between(&self, a: Vec3, b: Vec3) -> Option<CoverPoint> {
        closest_of(self.points.iter(), a.midpoint(b))
    }

    /// Cover points whose distance to `pos` falls inside `[min, max]`.
    pub fn points_within_band(&self, pos: Vec3, min: f32, max: f32) -> Vec<CoverPoint> {
        self.points
            .iter()
            .filter(|p| {
                let d = pos.distance_squared(p.position);
                d >= min * min && d <= max * max
            })
            .copied()
            .collect()
    }
}
