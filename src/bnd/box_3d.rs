//! Axis-aligned 3D bounding box in Source space.

use crate::gp::{Pnt, Trsf};
use crate::{MinimapError, Result};
use serde::{Deserialize, Serialize};

/// Closed 3D box, `min <= max` on every axis. Zero extent is valid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoxCorners")]
pub struct Box3d {
    min: Pnt,
    max: Pnt,
}

#[derive(Deserialize)]
struct BoxCorners {
    min: Pnt,
    max: Pnt,
}

impl TryFrom<BoxCorners> for Box3d {
    type Error = MinimapError;

    fn try_from(c: BoxCorners) -> Result<Self> {
        Box3d::new(c.min, c.max)
    }
}

impl Box3d {
    /// Creates a box, rejecting swapped or non-finite corners.
    pub fn new(min: Pnt, max: Pnt) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(MinimapError::InvalidGeometry(format!(
                "non-finite box corner: {:?} / {:?}",
                min.coords(),
                max.coords()
            )));
        }
        if min.x() > max.x() || min.y() > max.y() || min.z() > max.z() {
            return Err(MinimapError::InvalidGeometry(format!(
                "box min {:?} exceeds max {:?}",
                min.coords(),
                max.coords()
            )));
        }
        Ok(Self { min, max })
    }

    /// Creates a zero-extent box at `p`.
    pub fn from_point(p: Pnt) -> Self {
        Self { min: p, max: p }
    }

    /// Creates the box spanned by two arbitrary corners.
    pub fn from_corners(a: Pnt, b: Pnt) -> Self {
        Self { min: a.min(&b), max: a.max(&b) }
    }

    #[inline]
    pub const fn min(&self) -> Pnt {
        self.min
    }

    #[inline]
    pub const fn max(&self) -> Pnt {
        self.max
    }

    /// Center of the box.
    #[inline]
    pub fn center(&self) -> Pnt {
        self.min.midpoint(&self.max)
    }

    /// Extent along X, Y and Z.
    pub fn extent(&self) -> (f64, f64, f64) {
        (
            self.max.x() - self.min.x(),
            self.max.y() - self.min.y(),
            self.max.z() - self.min.z(),
        )
    }

    /// Extends the box to contain `p`.
    pub fn including(&self, p: Pnt) -> Box3d {
        Box3d {
            min: self.min.min(&p),
            max: self.max.max(&p),
        }
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &Box3d) -> Box3d {
        Box3d {
            min: self.min.min(&other.min),
            max: self.max.max(&other.max),
        }
    }

    /// The eight corners.
    pub fn corners(&self) -> [Pnt; 8] {
        let (a, b) = (self.min, self.max);
        [
            Pnt::from_coords(a.x(), a.y(), a.z()),
            Pnt::from_coords(b.x(), a.y(), a.z()),
            Pnt::from_coords(a.x(), b.y(), a.z()),
            Pnt::from_coords(b.x(), b.y(), a.z()),
            Pnt::from_coords(a.x(), a.y(), b.z()),
            Pnt::from_coords(b.x(), a.y(), b.z()),
            Pnt::from_coords(a.x(), b.y(), b.z()),
            Pnt::from_coords(b.x(), b.y(), b.z()),
        ]
    }

    /// Axis-aligned box enclosing the transformed corners.
    pub fn transformed(&self, trsf: &Trsf) -> Box3d {
        let corners = self.corners();
        let first = Box3d::from_point(trsf.transform_point(corners[0]));
        corners[1..]
            .iter()
            .fold(first, |acc, c| acc.including(trsf.transform_point(*c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gp::Vec3;

    #[test]
    fn test_box3d_new_rejects_bad_corners() {
        let lo = Pnt::from_coords(0.0, 0.0, 0.0);
        let hi = Pnt::from_coords(1.0, 2.0, 3.0);
        assert!(Box3d::new(lo, hi).is_ok());
        assert!(Box3d::new(lo, lo).is_ok());
        assert!(matches!(Box3d::new(hi, lo), Err(MinimapError::InvalidGeometry(_))));
        assert!(Box3d::new(lo, Pnt::from_coords(1.0, f64::NAN, 1.0)).is_err());
    }

    #[test]
    fn test_box3d_deserialize_checks_corners() {
        let b = Box3d::from_corners(Pnt::from_coords(-1.0, 0.0, 5.0), Pnt::from_coords(2.0, 3.0, 6.0));
        let json = serde_json::to_value(b).unwrap();
        let back: Box3d = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(back, b);

        let mut swapped = json;
        let min = swapped["min"].take();
        swapped["min"] = swapped["max"].take();
        swapped["max"] = min;
        assert!(serde_json::from_value::<Box3d>(swapped).is_err());
    }

    #[test]
    fn test_box3d_from_corners() {
        let b = Box3d::from_corners(Pnt::from_coords(1.0, -1.0, 5.0), Pnt::from_coords(0.0, 2.0, 3.0));
        assert_eq!(b.min(), Pnt::from_coords(0.0, -1.0, 3.0));
        assert_eq!(b.max(), Pnt::from_coords(1.0, 2.0, 5.0));
        assert_eq!(b.extent(), (1.0, 3.0, 2.0));
        assert_eq!(b.center(), Pnt::from_coords(0.5, 0.5, 4.0));
    }

    #[test]
    fn test_box3d_transformed_with_reflection() {
        let b = Box3d::from_corners(Pnt::from_coords(0.0, 0.0, 0.0), Pnt::from_coords(1.0, 2.0, 3.0));
        let t = Trsf::from_translation(Vec3::from_coords(1.0, 0.0, 0.0))
            .multiplied(&Trsf::from_scale(-1.0, 1.0, 1.0));
        let tb = b.transformed(&t);
        assert_eq!(tb.min(), Pnt::from_coords(0.0, 0.0, 0.0));
        assert_eq!(tb.max(), Pnt::from_coords(1.0, 2.0, 3.0));
    }
}
