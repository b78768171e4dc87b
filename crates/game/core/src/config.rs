//! Balance and AI tuning knobs.

use serde::{Deserialize, Serialize};

/// Tunables consumed by the AI runtime.
///
/// Defaults reproduce the shipped balance; scenario setups override fields
/// as needed (tests typically shrink the animation windows to keep tick
/// counts small).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Seconds before an unrefreshed memory record is forgotten.
    pub forget_duration: f32,

    /// Sampling attempts before the explore goal gives up on finding a
    /// pathable destination.
    pub explore_attempts: u32,

    /// Length of the aim/fire animation window in seconds.
    pub fire_animation_secs: f32,

    /// Length of the reload animation window in seconds.
    pub reload_animation_secs: f32,

    /// A seek goal counts as arrived when the remaining path distance drops
    /// to this value or below.
    pub arrival_epsilon: f32,

    /// If the last remembered position of a hunted target is within this
    /// distance, hunting falls back to reselecting a target in place.
    pub hunt_reselect_distance: f32,

    /// Seed for the match RNG (explore jitter). Fixed seed, fixed match.
    pub rng_seed: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            forget_duration: 600.0,
            explore_attempts: 20,
            fire_animation_secs: 1.0,
            reload_animation_secs: 2.0,
            arrival_epsilon: 0.1,
            hunt_reselect_distance: 2.0,
            rng_seed: 0,
        }
    }
}
