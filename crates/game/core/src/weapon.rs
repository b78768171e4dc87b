//! Weapons and ammunition bookkeeping.
//!
//! Ballistics, hit resolution and animation are external collaborators; this
//! module only owns the numbers the AI reasons about: ammo counts, range,
//! strength and accuracy.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use thiserror::Error;

/// Weapon archetypes with fixed stat blocks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum WeaponKind {
    AssaultRifle,
    SniperRifle,
    Lmg,
    Smg,
    Pistols,
}

/// Error returned by [`Weapon::fire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FireError {
    /// Fewer rounds loaded than one burst (`fire_rate`) needs.
    #[error("insufficient ammo loaded: {loaded} rounds, burst needs {needed}")]
    InsufficientAmmo { loaded: u32, needed: u32 },
}

/// Error returned by [`Weapon::reload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReloadError {
    #[error("no spare ammo")]
    NoSpareAmmo,
    #[error("magazine already full")]
    MagazineFull,
}

/// A unit's ranged weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub kind: WeaponKind,
    pub magazine_size: u32,
    pub rounds_loaded: u32,
    pub rounds_spare: u32,
    /// Rounds consumed per attack (burst size).
    pub fire_rate: u32,
    pub range: f32,
    /// Weapon strength on a 0..=10-ish scale; feeds the attack evaluator.
    pub strength: f32,
    pub accuracy: f32,
}

impl Weapon {
    /// Builds a weapon with the stat block for its kind.
    pub fn new(kind: WeaponKind) -> Self {
        let (magazine_size, rounds_spare, fire_rate, range, strength, accuracy) = match kind {
            WeaponKind::AssaultRifle => (30, 600, 6, 14.0, 7.0, 0.8),
            WeaponKind::SniperRifle => (4, 32, 1, 20.0, 50.0, 1.0),
            WeaponKind::Lmg => (50, 400, 10, 10.0, 7.0, 0.6),
            WeaponKind::Smg => (30, 120, 8, 10.0, 7.0, 0.7),
            WeaponKind::Pistols => (16, 40, 4, 9.0, 10.0, 0.8),
        };

        Self {
            kind,
            magazine_size,
            rounds_loaded: magazine_size,
            rounds_spare,
            fire_rate,
            range,
            strength,
            accuracy,
        }
    }

    pub fn has_ammo_loaded(&self) -> bool {
        self.rounds_loaded > 0
    }

    pub fn has_ammo_spare(&self) -> bool {
        self.rounds_spare > 0
    }

    pub fn range_squared(&self) -> f32 {
        self.range * self.range
    }

    /// The band a weapon performs best in: [50%, 90%] of maximum range.
    /// Attack-cover selection looks for cover points inside this band.
    pub fn ideal_range(&self) -> (f32, f32) {
        (self.range * 0.5, self.range * 0.9)
    }

    /// Consumes one burst of ammunition.
    pub fn fire(&mut self) -> Result<(), FireError> {
        if self.rounds_loaded < self.fire_rate {
            return Err(FireError::InsufficientAmmo {
                loaded: self.rounds_loaded,
                needed: self.fire_rate,
            });
        }
        self.rounds_loaded -= self.fire_rate;
        Ok(())
    }

    /// Transfers rounds from spare ammo into the magazine.
    ///
    /// Returns the number of rounds transferred.
    pub fn reload(&mut self) -> Result<u32, ReloadError> {
        if self.rounds_spare == 0 {
            return Err(ReloadError::NoSpareAmmo);
        }
        let needed = self.magazine_size - self.rounds_loaded;
        if needed == 0 {
            return Err(ReloadError::MagazineFull);
        }

        let transferred = needed.min(self.rounds_spare);
        self.rounds_loaded += transferred;
        self.rounds_spare -= transferred;
        Ok(transferred)
    }
}
