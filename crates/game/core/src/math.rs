//! Minimal 3D vector math.
//!
//! Units live on a navigation mesh in engine space, so positions are `f32`
//! triples. [`Vec3::ZERO`] doubles as the conventional "no position" sentinel
//! throughout the AI (no memory of a subject, no cover found, no sidestep
//! position); world geometry never places anything exactly at the origin.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A position or direction in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// Origin; also the "no position" sentinel.
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn distance_squared(self, other: Vec3) -> f32 {
        (self - other).length_squared()
    }

    pub fn distance(self, other: Vec3) -> f32 {
        (self - other).length()
    }

    /// Unit-length copy of this vector, or [`Vec3::ZERO`] when the vector is
    /// too short to normalize meaningfully.
    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        if len <= f32::EPSILON {
            Vec3::ZERO
        } else {
            self * (1.0 / len)
        }
    }

    pub fn midpoint(self, other: Vec3) -> Vec3 {
        (self + other) * 0.5
    }

    /// Returns `true` if this is the "no position" sentinel.
    pub fn is_zero(self) -> bool {
        self == Vec3::ZERO
    }
}

/// Returns `true` if `a` and `b` are within `max` of each other.
///
/// Compares squared magnitudes, so callers never pay for a square root.
pub fn distance_within(a: Vec3, b: Vec3, max: f32) -> bool {
    a.distance_squared(b) <= max * max
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_of_near_zero_is_sentinel() {
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
        assert_eq!(Vec3::new(0.0, 0.0, 1e-20).normalized(), Vec3::ZERO);
    }

    #[test]
    fn distance_within_is_inclusive() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 0.0, 4.0);
        assert!(distance_within(a, b, 5.0));
        assert!(!distance_within(a, b, 4.99));
    }

    #[test]
    fn midpoint_is_halfway() {
        let m = Vec3::new(2.0, 0.0, 0.0).midpoint(Vec3::new(4.0, 2.0, 0.0));
        assert_eq!(m, Vec3::new(3.0, 1.0, 0.0));
    }
}
