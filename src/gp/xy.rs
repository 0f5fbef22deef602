//! 2D coordinate pair.
//!
//! Storage type behind [`Pnt2d`](super::Pnt2d) and [`Vec2d`](super::Vec2d).
//! It carries no point/vector meaning of its own.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Index, Mul, Neg, Sub};

/// 2D cartesian coordinate entity {X, Y}.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct XY {
    x: f64,
    y: f64,
}

impl XY {
    /// Creates an XY with zero coordinates (0, 0).
    #[inline]
    pub const fn new() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Creates an XY with given coordinates.
    #[inline]
    pub const fn from_coords(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns both coordinates as a tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Returns the X coordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y coordinate.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns true if both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Computes the modulus (length).
    #[inline]
    pub fn modulus(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Returns true if coordinates are equal within tolerance.
    #[inline]
    pub fn is_equal(&self, other: &XY, tolerance: f64) -> bool {
        self.subtracted(other).modulus() <= tolerance
    }

    /// Returns sum of this and other XY.
    #[inline]
    pub fn added(&self, other: &XY) -> XY {
        XY::from_coords(self.x + other.x, self.y + other.y)
    }

    /// Returns difference of this and other XY.
    #[inline]
    pub fn subtracted(&self, other: &XY) -> XY {
        XY::from_coords(self.x - other.x, self.y - other.y)
    }

    /// Returns this multiplied by scalar.
    #[inline]
    pub fn multiplied(&self, scalar: f64) -> XY {
        XY::from_coords(self.x * scalar, self.y * scalar)
    }

    /// Returns reversed XY.
    #[inline]
    pub fn reversed(&self) -> XY {
        XY::from_coords(-self.x, -self.y)
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(&self, other: &XY) -> XY {
        XY::from_coords(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(&self, other: &XY) -> XY {
        XY::from_coords(self.x.max(other.x), self.y.max(other.y))
    }
}

impl Add for XY {
    type Output = XY;
    #[inline]
    fn add(self, other: XY) -> XY {
        self.added(&other)
    }
}

impl Sub for XY {
    type Output = XY;
    #[inline]
    fn sub(self, other: XY) -> XY {
        self.subtracted(&other)
    }
}

impl Mul<f64> for XY {
    type Output = XY;
    #[inline]
    fn mul(self, scalar: f64) -> XY {
        self.multiplied(scalar)
    }
}

impl Neg for XY {
    type Output = XY;
    #[inline]
    fn neg(self) -> XY {
        self.reversed()
    }
}

impl Index<usize> for XY {
    type Output = f64;

    /// Zero-based component access (0=X, 1=Y).
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("XY index {} out of range [0,1]", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xy_arithmetic() {
        let a = XY::from_coords(1.0, 2.0);
        let b = XY::from_coords(3.0, -4.0);
        assert_eq!(a + b, XY::from_coords(4.0, -2.0));
        assert_eq!(a - b, XY::from_coords(-2.0, 6.0));
        assert_eq!(a * 2.0, XY::from_coords(2.0, 4.0));
        assert_eq!(-a, XY::from_coords(-1.0, -2.0));
    }

    #[test]
    fn test_xy_min_max() {
        let a = XY::from_coords(1.0, 5.0);
        let b = XY::from_coords(3.0, -4.0);
        assert_eq!(a.min(&b), XY::from_coords(1.0, -4.0));
        assert_eq!(a.max(&b), XY::from_coords(3.0, 5.0));
    }

    #[test]
    fn test_xy_is_finite() {
        assert!(XY::from_coords(1.0, 2.0).is_finite());
        assert!(!XY::from_coords(f64::NAN, 2.0).is_finite());
        assert!(!XY::from_coords(1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_xy_index() {
        let a = XY::from_coords(7.0, 8.0);
        assert_eq!(a[0], 7.0);
        assert_eq!(a[1], 8.0);
    }
}
