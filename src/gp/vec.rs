//! 3D vector (displacement).

use super::XYZ;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A vector in 3D space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    coord: XYZ,
}

impl Vec3 {
    /// Creates zero vector.
    #[inline]
    pub const fn new() -> Self {
        Self { coord: XYZ::new() }
    }

    /// Creates vector from XYZ.
    #[inline]
    pub const fn from_xyz(xyz: XYZ) -> Self {
        Self { coord: xyz }
    }

    /// Creates vector from components.
    #[inline]
    pub const fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self {
            coord: XYZ::from_coords(x, y, z),
        }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.coord.x()
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.coord.y()
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.coord.z()
    }

    #[inline]
    pub const fn xyz(&self) -> XYZ {
        self.coord
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.coord.is_finite()
    }

    /// Computes magnitude.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.coord.modulus()
    }

    #[inline]
    pub fn added(&self, other: &Vec3) -> Vec3 {
        Vec3::from_xyz(self.coord.added(&other.coord))
    }

    #[inline]
    pub fn subtracted(&self, other: &Vec3) -> Vec3 {
        Vec3::from_xyz(self.coord.subtracted(&other.coord))
    }

    /// Returns this vector scaled by `scalar`.
    #[inline]
    pub fn multiplied(&self, scalar: f64) -> Vec3 {
        Vec3::from_xyz(self.coord.multiplied(scalar))
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, other: Vec3) -> Vec3 {
        self.added(&other)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, other: Vec3) -> Vec3 {
        self.subtracted(&other)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, scalar: f64) -> Vec3 {
        self.multiplied(scalar)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::from_xyz(self.coord.reversed())
    }
}
