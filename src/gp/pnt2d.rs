//! 2D point in Normalized or Output space.

use crate::gp::{Vec2d, XY};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point in cartesian coordinates.
///
/// Points receive translation when transformed; see
/// [`Trsf2d::transform_point`](super::Trsf2d::transform_point).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pnt2d {
    coord: XY,
}

impl Pnt2d {
    /// Creates a point at the origin (0, 0).
    #[inline]
    pub const fn new() -> Self {
        Self { coord: XY::new() }
    }

    /// Creates a point with given coordinates.
    #[inline]
    pub const fn from_coords(x: f64, y: f64) -> Self {
        Self { coord: XY::from_coords(x, y) }
    }

    /// Creates a point from an XY.
    #[inline]
    pub const fn from_xy(xy: XY) -> Self {
        Self { coord: xy }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.coord.x()
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.coord.y()
    }

    /// Returns coordinates as tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64) {
        self.coord.coords()
    }

    /// Returns the XY.
    #[inline]
    pub const fn xy(&self) -> XY {
        self.coord
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.coord.is_finite()
    }

    /// Returns the distance to another point.
    #[inline]
    pub fn distance(&self, other: &Pnt2d) -> f64 {
        self.coord.subtracted(&other.coord).modulus()
    }

    /// Checks if this point is equal to another within tolerance.
    #[inline]
    pub fn is_equal(&self, other: &Pnt2d, tolerance: f64) -> bool {
        self.distance(other) <= tolerance
    }

    /// Returns translated copy.
    #[inline]
    pub fn translated(&self, vec: Vec2d) -> Pnt2d {
        Pnt2d::from_xy(self.coord.added(&vec.xy()))
    }

    /// Midpoint between this and another point.
    #[inline]
    pub fn midpoint(&self, other: &Pnt2d) -> Pnt2d {
        Pnt2d::from_xy(self.coord.multiplied(0.5).added(&other.coord.multiplied(0.5)))
    }

    /// Returns a copy scaled about `center`.
    #[inline]
    pub fn scaled(&self, center: &Pnt2d, factor: f64) -> Pnt2d {
        let d = self.coord.subtracted(&center.coord).multiplied(factor);
        Pnt2d::from_xy(center.coord.added(&d))
    }

    /// Component-wise minimum of two points.
    #[inline]
    pub fn min(&self, other: &Pnt2d) -> Pnt2d {
        Pnt2d::from_xy(self.coord.min(&other.coord))
    }

    /// Component-wise maximum of two points.
    #[inline]
    pub fn max(&self, other: &Pnt2d) -> Pnt2d {
        Pnt2d::from_xy(self.coord.max(&other.coord))
    }
}

impl Add<Vec2d> for Pnt2d {
    type Output = Pnt2d;
    #[inline]
    fn add(self, vec: Vec2d) -> Pnt2d {
        self.translated(vec)
    }
}

impl Sub for Pnt2d {
    type Output = Vec2d;
    #[inline]
    fn sub(self, other: Pnt2d) -> Vec2d {
        Vec2d::from_xy(self.coord.subtracted(&other.coord))
    }
}
