//! Distance-based [`CoverOracle`] backend.

use game_core::{UnitId, Vec3};

use super::CoverOracle;
use crate::battle::BattleState;

/// Rates cover purely by proximity to the nearest cover point: full quality
/// on top of the point, falling off linearly to zero at `radius`.
#[derive(Debug, Clone, Copy)]
pub struct ProximityCoverOracle {
    radius: f32,
}

impl ProximityCoverOracle {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    fn nearest_factor(&self, state: &BattleState, pos: Vec3) -> Option<(Vec3, f32)> {
        let point = state.cover.closest_point(pos)?;
        let distance = pos.distance(point.position);
        if distance > self.radius {
            return None;
        }
        Some((point.position, 1.0 - distance / self.radius))
    }
}

impl Default for ProximityCoverOracle {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl CoverOracle for ProximityCoverOracle {
    fn total_cover_at(&self, state: &BattleState, unit: UnitId) -> f32 {
        let pos = state.unit(unit).position;
        self.nearest_factor(state, pos)
            .map(|(_, factor)| factor * 100.0)
            .unwrap_or(0.0)
    }

    fn coverage_from_direction(&self, state: &BattleState, unit: UnitId, direction: Vec3) -> f32 {
        let pos = state.unit(unit).position;
        let Some((point, factor)) = self.nearest_factor(state, pos) else {
            return 0.0;
        };

        // Cover only counts against attacks arriving from behind the point.
        let alignment = {
            let toward_point = (point - pos).normalized();
            let incoming = -direction.normalized();
            toward_point.x * incoming.x + toward_point.y * incoming.y + toward_point.z * incoming.z
        };
        (alignment * factor).clamp(0.0, 1.0)
    }
}
