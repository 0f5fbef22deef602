//! 3D coordinate triple.
//!
//! Storage type behind [`Pnt`](super::Pnt) and [`Vec3`](super::Vec3).

use serde::{Deserialize, Serialize};
use std::ops::{Add, Index, Mul, Neg, Sub};

/// 3D cartesian coordinate entity {X, Y, Z}.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct XYZ {
    x: f64,
    y: f64,
    z: f64,
}

impl XYZ {
    /// Creates an XYZ with zero coordinates.
    #[inline]
    pub const fn new() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Creates an XYZ with given coordinates.
    #[inline]
    pub const fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns all coordinates as a tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns true if all coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Computes the modulus (length).
    #[inline]
    pub fn modulus(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns true if coordinates are equal within tolerance.
    #[inline]
    pub fn is_equal(&self, other: &XYZ, tolerance: f64) -> bool {
        self.subtracted(other).modulus() <= tolerance
    }

    #[inline]
    pub fn added(&self, other: &XYZ) -> XYZ {
        XYZ::from_coords(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    #[inline]
    pub fn subtracted(&self, other: &XYZ) -> XYZ {
        XYZ::from_coords(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    #[inline]
    pub fn multiplied(&self, scalar: f64) -> XYZ {
        XYZ::from_coords(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    #[inline]
    pub fn reversed(&self) -> XYZ {
        XYZ::from_coords(-self.x, -self.y, -self.z)
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(&self, other: &XYZ) -> XYZ {
        XYZ::from_coords(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(&self, other: &XYZ) -> XYZ {
        XYZ::from_coords(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

impl Add for XYZ {
    type Output = XYZ;
    #[inline]
    fn add(self, other: XYZ) -> XYZ {
        self.added(&other)
    }
}

impl Sub for XYZ {
    type Output = XYZ;
    #[inline]
    fn sub(self, other: XYZ) -> XYZ {
        self.subtracted(&other)
    }
}

impl Mul<f64> for XYZ {
    type Output = XYZ;
    #[inline]
    fn mul(self, scalar: f64) -> XYZ {
        self.multiplied(scalar)
    }
}

impl Neg for XYZ {
    type Output = XYZ;
    #[inline]
    fn neg(self) -> XYZ {
        self.reversed()
    }
}

impl Index<usize> for XYZ {
    type Output = f64;

    /// Zero-based component access (0=X, 1=Y, 2=Z).
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("XYZ index {} out of range [0,2]", index),
        }
    }
}
