//! Geometric [`SpatialOracle`] backends for headless simulation.

use game_core::Vec3;

use super::SpatialOracle;

/// A world with no obstructions: every sight line and path is clear.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenField;

impl SpatialOracle for OpenField {
    fn line_of_sight(&self, _from: Vec3, _to: Vec3) -> bool {
        true
    }

    fn evaluate_path(&self, _from: Vec3, _to: Vec3) -> bool {
        true
    }
}

/// A flat world with wall segments that block sight and circular regions no
/// path may end in. Geometry is evaluated on the XZ plane.
#[derive(Debug, Clone, Default)]
pub struct WalledField {
    walls: Vec<(Vec3, Vec3)>,
    unpathable: Vec<(Vec3, f32)>,
}

impl WalledField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wall(mut self, a: Vec3, b: Vec3) -> Self {
        self.walls.push((a, b));
        self
    }

    /// Marks a circular region as unreachable for path planning.
    pub fn with_unpathable(mut self, center: Vec3, radius: f32) -> Self {
        self.unpathable.push((center, radius));
        self
    }
}

/// Proper segment intersection on the XZ plane, excluding collinear overlap
/// (a sight line grazing along a wall does not count as blocked).
fn segments_cross(a1: Vec3, a2: Vec3, b1: Vec3, b2: Vec3) -> bool {
    fn orient(p: Vec3, q: Vec3, r: Vec3) -> f32 {
        (q.x - p.x) * (r.z - p.z) - (q.z - p.z) * (r.x - p.x)
    }

    let d1 = orient(b1, b2, a1);
    let d2 = orient(b1, b2, a2);
    let d3 = orient(a1, a2, b1);
    let d4 = orient(a1, a2, b2);

    (d1 > 0.0) != (d2 > 0.0) && (d3 > 0.0) != (d4 > 0.0)
}

impl SpatialOracle for WalledField {
    fn line_of_sight(&self, from: Vec3, to: Vec3) -> bool {
        !self
            .walls
            .iter()
            .any(|&(a, b)| segments_cross(from, to, a, b))
    }

    fn evaluate_path(&self, _from: Vec3, to: Vec3) -> bool {
        !self
            .unpathable
            .iter()
            .any(|&(center, radius)| to.distance_squared(center) <= radius * radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_block_crossing_sight_lines() {
        let field = WalledField::new().with_wall(
            Vec3::new(5.0, 0.0, -5.0),
            Vec3::new(5.0, 0.0, 5.0),
        );

        assert!(!field.line_of_sight(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)));
        assert!(field.line_of_sight(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0)));
    }

    #[test]
    fn unpathable_regions_reject_destinations() {
        let field = WalledField::new().with_unpathable(Vec3::new(10.0, 0.0, 0.0), 2.0);

        assert!(!field.evaluate_path(Vec3::ZERO, Vec3::new(9.0, 0.0, 0.0)));
        assert!(field.evaluate_path(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0)));
    }
}
