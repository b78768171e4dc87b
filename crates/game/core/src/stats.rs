//! Per-unit vital and movement stats.

use serde::{Deserialize, Serialize};

/// Vital stats of a unit.
///
/// Health is on a 0..=max scale (100 by default, and the evaluator formulas
/// assume that scale). `move_remaining` is the travel budget left this turn
/// and refills to `move_range` when the unit's turn begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitStats {
    pub max_health: f32,
    pub health: f32,
    pub move_range: f32,
    pub move_remaining: f32,
    pub sight_range: f32,
    pub hearing_range: f32,
    /// Base accuracy in [0, 1], multiplied into weapon accuracy by the
    /// external damage resolver.
    pub accuracy: f32,
}

impl Default for UnitStats {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            health: 100.0,
            move_range: 10.0,
            move_remaining: 10.0,
            sight_range: 20.0,
            hearing_range: 50.0,
            accuracy: 1.0,
        }
    }
}

impl UnitStats {
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Applies damage (or healing, when negative), clamped to [0, max].
    pub fn apply_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).clamp(0.0, self.max_health);
    }

    /// Refills the travel budget at the start of the unit's turn.
    pub fn reset_move(&mut self) {
        self.move_remaining = self.move_range;
    }

    /// Consumes travel budget; saturates at zero.
    pub fn consume_move(&mut self, distance: f32) {
        self.move_remaining = (self.move_remaining - distance).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_clamps_to_bounds() {
        let mut stats = UnitStats::default();
        stats.apply_damage(150.0);
        assert_eq!(stats.health, 0.0);
        assert!(!stats.is_alive());

        stats.apply_damage(-500.0); // heal
        assert_eq!(stats.health, stats.max_health);
    }

    #[test]
    fn move_budget_saturates() {
        let mut stats = UnitStats::default();
        stats.consume_move(7.0);
        assert_eq!(stats.move_remaining, 3.0);
        stats.consume_move(10.0);
        assert_eq!(stats.move_remaining, 0.0);
        stats.reset_move();
        assert_eq!(stats.move_remaining, stats.move_range);
    }
}
