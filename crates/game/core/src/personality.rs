//! Personality archetypes and evaluator biases.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Personality archetype assigned to a unit at creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Archetype {
    #[default]
    Neutral,
    Aggressive,
    Defensive,
}

/// Fixed per-unit bias scalars in [0, 1].
///
/// Every desirability score an evaluator produces is multiplied by the
/// matching bias, shaping the unit toward its archetype. Biases are assigned
/// once at unit creation and never change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    pub health_bias: f32,
    pub hide_bias: f32,
    pub explore_bias: f32,
    pub attack_bias: f32,
    pub reload_bias: f32,
}

impl From<Archetype> for Personality {
    fn from(archetype: Archetype) -> Self {
        match archetype {
            Archetype::Neutral => Self {
                health_bias: 1.0,
                hide_bias: 0.5,
                explore_bias: 0.6,
                attack_bias: 0.5,
                reload_bias: 0.7,
            },
            Archetype::Aggressive => Self {
                health_bias: 0.5,
                hide_bias: 0.1,
                explore_bias: 0.7,
                attack_bias: 0.8,
                reload_bias: 0.5,
            },
            Archetype::Defensive => Self {
                health_bias: 1.0,
                hide_bias: 0.8,
                explore_bias: 0.4,
                attack_bias: 0.4,
                reload_bias: 0.8,
            },
        }
    }
}

impl Default for Personality {
    fn default() -> Self {
        Archetype::Neutral.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggressive_prefers_attacking_over_hiding() {
        let p = Personality::from(Archetype::Aggressive);
        assert!(p.attack_bias > p.hide_bias);

        let d = Personality::from(Archetype::Defensive);
        assert!(d.hide_bias > d.attack_bias);
    }
}
