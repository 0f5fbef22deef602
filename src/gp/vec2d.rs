//! 2D vector (displacement).

use crate::gp::XY;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D vector in cartesian coordinates.
///
/// Vectors ignore translation when transformed; see
/// [`Trsf2d::transform_vector`](super::Trsf2d::transform_vector).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2d {
    xy: XY,
}

impl Vec2d {
    /// Creates a zero vector.
    #[inline]
    pub const fn new() -> Self {
        Self { xy: XY::new() }
    }

    /// Creates a vector with given components.
    #[inline]
    pub const fn from_coords(x: f64, y: f64) -> Self {
        Self { xy: XY::from_coords(x, y) }
    }

    /// Creates a vector from an XY.
    #[inline]
    pub const fn from_xy(xy: XY) -> Self {
        Self { xy }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.xy.x()
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.xy.y()
    }

    #[inline]
    pub const fn xy(&self) -> XY {
        self.xy
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.xy.is_finite()
    }

    /// Computes the magnitude.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.xy.modulus()
    }

    #[inline]
    pub fn added(&self, other: &Vec2d) -> Vec2d {
        Vec2d::from_xy(self.xy.added(&other.xy))
    }

    #[inline]
    pub fn subtracted(&self, other: &Vec2d) -> Vec2d {
        Vec2d::from_xy(self.xy.subtracted(&other.xy))
    }

    /// Returns this vector multiplied by a scalar.
    #[inline]
    pub fn multiplied(&self, scalar: f64) -> Vec2d {
        Vec2d::from_xy(self.xy.multiplied(scalar))
    }
}

impl Add for Vec2d {
    type Output = Vec2d;
    #[inline]
    fn add(self, other: Vec2d) -> Vec2d {
        self.added(&other)
    }
}

impl Sub for Vec2d {
    type Output = Vec2d;
    #[inline]
    fn sub(self, other: Vec2d) -> Vec2d {
        self.subtracted(&other)
    }
}

impl Mul<f64> for Vec2d {
    type Output = Vec2d;
    #[inline]
    fn mul(self, scalar: f64) -> Vec2d {
        self.multiplied(scalar)
    }
}

impl Neg for Vec2d {
    type Output = Vec2d;
    #[inline]
    fn neg(self) -> Vec2d {
        Vec2d::from_xy(self.xy.reversed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2d_arithmetic() {
        let a = Vec2d::from_coords(1.0, 2.0);
        let b = Vec2d::from_coords(3.0, 4.0);
        assert_eq!(a + b, Vec2d::from_coords(4.0, 6.0));
        assert_eq!(b - a, Vec2d::from_coords(2.0, 2.0));
        assert_eq!(a * 3.0, Vec2d::from_coords(3.0, 6.0));
        assert_eq!(-a, Vec2d::from_coords(-1.0, -2.0));
    }

    #[test]
    fn test_vec2d_magnitude() {
        assert!((Vec2d::from_coords(3.0, 4.0).magnitude() - 5.0).abs() < 1e-12);
    }
}
