//! Straight-line [`Navigator`] backend.

use std::collections::BTreeMap;

use game_core::{UnitId, Vec3};

use super::Navigator;
use crate::unit::UnitState;

#[derive(Debug, Clone, Copy)]
struct ActivePath {
    destination: Vec3,
    remaining: f32,
}

/// Moves units in a straight line toward their destination at a constant
/// speed. Stands in for a navmesh agent in tests and headless matches.
#[derive(Debug, Clone)]
pub struct LineNavigator {
    speed: f32,
    // BTreeMap keeps per-tick movement order deterministic.
    paths: BTreeMap<UnitId, ActivePath>,
}

impl LineNavigator {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            paths: BTreeMap::new(),
        }
    }
}

impl Default for LineNavigator {
    fn default() -> Self {
        Self::new(5.0)
    }
}

impl Navigator for LineNavigator {
    fn set_destination(&mut self, unit: UnitId, from: Vec3, dest: Vec3) -> bool {
        self.paths.insert(
            unit,
            ActivePath {
                destination: dest,
                remaining: from.distance(dest),
            },
        );
        true
    }

    fn has_path(&self, unit: UnitId) -> bool {
        self.paths.contains_key(&unit)
    }

    fn remaining_distance(&self, unit: UnitId) -> f32 {
        self.paths
            .get(&unit)
            .map(|p| p.remaining)
            .unwrap_or(f32::INFINITY)
    }

    fn clear(&mut self, unit: UnitId) {
        self.paths.remove(&unit);
    }

    fn advance(&mut self, dt: f32, units: &mut [UnitState]) {
        for (&id, path) in self.paths.iter_mut() {
            let Some(unit) = units.iter_mut().find(|u| u.id == id) else {
                continue;
            };

            let to_dest = path.destination - unit.position;
            let distance = to_dest.length();
            if distance <= f32::EPSILON {
                path.remaining = 0.0;
                continue;
            }

            let step = (self.speed * dt).min(distance);
            let direction = to_dest.normalized();
            unit.position += direction * step;
            unit.facing = direction;
            unit.stats.consume_move(step);
            path.remaining = distance - step;
        }
    }
}
