//! 3D point in Source space.

use super::{Vec3, XYZ};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 3D cartesian point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pnt {
    coord: XYZ,
}

impl Pnt {
    /// Creates a point at origin (0, 0, 0).
    #[inline]
    pub const fn new() -> Self {
        Self { coord: XYZ::new() }
    }

    /// Creates a point from XYZ coordinates.
    #[inline]
    pub const fn from_xyz(xyz: XYZ) -> Self {
        Self { coord: xyz }
    }

    /// Creates a point from coordinates.
    #[inline]
    pub const fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self {
            coord: XYZ::from_coords(x, y, z),
        }
    }

    /// Returns all coordinates as tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64, f64) {
        self.coord.coords()
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

    /// Returns the underlying XYZ.
    #[inline]
    pub const fn xyz(&self) -> XYZ {
        self.coord
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.coord.is_finite()
    }

    /// Computes distance to another point.
    #[inline]
    pub fn distance(&self, other: &Pnt) -> f64 {
        self.coord.subtracted(&other.coord).modulus()
    }

    /// Checks if points are equal within tolerance.
    #[inline]
    pub fn is_equal(&self, other: &Pnt, tolerance: f64) -> bool {
        self.distance(other) <= tolerance
    }

    /// Returns translated point.
    #[inline]
    pub fn translated(&self, v: &Vec3) -> Pnt {
        Pnt::from_xyz(self.coord.added(&v.xyz()))
    }

    /// Midpoint between this and another point.
    #[inline]
    pub fn midpoint(&self, other: &Pnt) -> Pnt {
        Pnt::from_xyz(self.coord.multiplied(0.5).added(&other.coord.multiplied(0.5)))
    }

    #[inline]
    pub fn min(&self, other: &Pnt) -> Pnt {
        Pnt::from_xyz(self.coord.min(&other.coord))
    }

    #[inline]
    pub fn max(&self, other: &Pnt) -> Pnt {
        Pnt::from_xyz(self.coord.max(&other.coord))
    }
}

impl Add<Vec3> for Pnt {
    type Output = Pnt;
    #[inline]
    fn add(self, v: Vec3) -> Pnt {
        self.translated(&v)
    }
}

impl Sub for Pnt {
    type Output = Vec3;
    #[inline]
    fn sub(self, other: Pnt) -> Vec3 {
        Vec3::from_xyz(self.coord.subtracted(&other.coord))
    }
}

impl From<[f64; 3]> for Pnt {
    fn from(arr: [f64; 3]) -> Self {
        Pnt::from_coords(arr[0], arr[1], arr[2])
    }
}
