//! Special abilities.
//!
//! The actual effect of an ability (healing pulse, dermal armor, stealth
//! field) is resolved by an external collaborator. The core tracks only what
//! the AI needs: which ability a unit carries, whether it is currently
//! available, and whether it is in use.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use thiserror::Error;

/// Ability archetypes a unit can be bound to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum AbilityKind {
    Heal,
    Ammo,
    Stealth,
    Scan,
    Armor,
    Accuracy,
}

/// Error returned by [`Ability::trigger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AbilityError {
    #[error("ability is on cooldown for {turns_left} more turns")]
    OnCooldown { turns_left: u32 },
    #[error("ability is already in use")]
    AlreadyInUse,
}

/// A unit's special ability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub kind: AbilityKind,
    /// Turns the effect stays active after triggering.
    pub duration: u32,
    /// Turns the ability is inaccessible after use.
    pub cooldown_delay: u32,
    pub range: f32,
    in_use: bool,
    cooldown_left: u32,
}

impl Ability {
    pub fn new(kind: AbilityKind) -> Self {
        Self {
            kind,
            duration: 1,
            cooldown_delay: 5,
            range: 7.0,
            in_use: false,
            cooldown_left: 0,
        }
    }

    /// Off cooldown and not already active.
    pub fn is_available(&self) -> bool {
        self.cooldown_left == 0 && !self.in_use
    }

    pub fn in_use(&self) -> bool {
        self.in_use
    }

    /// Activates the ability, starting its cooldown.
    pub fn trigger(&mut self) -> Result<(), AbilityError> {
        if self.in_use {
            return Err(AbilityError::AlreadyInUse);
        }
        if self.cooldown_left > 0 {
            return Err(AbilityError::OnCooldown {
                turns_left: self.cooldown_left,
            });
        }

        self.in_use = true;
        self.cooldown_left = self.cooldown_delay;
        Ok(())
    }

    /// Advances one turn of cooldown/duration bookkeeping. Called when the
    /// owning unit's turn begins.
    pub fn advance_turn(&mut self) {
        if self.in_use {
            if self.duration <= 1 {
                self.in_use = false;
            } else {
                self.duration -= 1;
            }
        }
        self.cooldown_left = self.cooldown_left.saturating_sub(1);
    }
}
