//! Axis-aligned 2D rectangle.

use crate::gp::{Pnt2d, Vec2d};
use crate::{MinimapError, Result};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle defined by its minimum and maximum corners.
///
/// `min.x <= max.x` and `min.y <= max.y` always hold. Zero-width and
/// zero-height rectangles are valid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RectCorners")]
pub struct Rect {
    min: Pnt2d,
    max: Pnt2d,
}

#[derive(Deserialize)]
struct RectCorners {
    min: Pnt2d,
    max: Pnt2d,
}

impl TryFrom<RectCorners> for Rect {
    type Error = MinimapError;

    fn try_from(c: RectCorners) -> Result<Self> {
        Rect::new(c.min, c.max)
    }
}

impl Rect {
    /// Creates a rectangle, rejecting swapped or non-finite corners.
    pub fn new(min: Pnt2d, max: Pnt2d) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(MinimapError::InvalidGeometry(format!(
                "non-finite rectangle corner: {:?} / {:?}",
                min.coords(),
                max.coords()
            )));
        }
        if min.x() > max.x() || min.y() > max.y() {
            return Err(MinimapError::InvalidGeometry(format!(
                "rectangle min {:?} exceeds max {:?}",
                min.coords(),
                max.coords()
            )));
        }
        Ok(Self { min, max })
    }

    /// Creates the rectangle spanned by two arbitrary corners.
    pub fn from_corners(a: Pnt2d, b: Pnt2d) -> Self {
        Self { min: a.min(&b), max: a.max(&b) }
    }

    /// Creates a zero-extent rectangle at `p`.
    pub fn from_point(p: Pnt2d) -> Self {
        Self { min: p, max: p }
    }

    #[inline]
    pub const fn min(&self) -> Pnt2d {
        self.min
    }

    #[inline]
    pub const fn max(&self) -> Pnt2d {
        self.max
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    /// Extent along both axes.
    #[inline]
    pub fn size(&self) -> Vec2d {
        self.max - self.min
    }

    /// Midpoint of the corners. For a zero-extent axis this is the shared
    /// coordinate.
    #[inline]
    pub fn center(&self) -> Pnt2d {
        self.min.midpoint(&self.max)
    }

    /// True when either extent is zero.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Closed containment: [min, max].
    pub fn contains(&self, p: Pnt2d) -> bool {
        p.x() >= self.min.x() && p.x() <= self.max.x() && p.y() >= self.min.y() && p.y() <= self.max.y()
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            min: self.min.min(&other.min),
            max: self.max.max(&other.max),
        }
    }

    /// Extends the rectangle to contain `p`.
    pub fn including(&self, p: Pnt2d) -> Rect {
        Rect {
            min: self.min.min(&p),
            max: self.max.max(&p),
        }
    }

    /// Clamps `p` into the rectangle.
    pub fn clamp_point(&self, p: Pnt2d) -> Pnt2d {
        Pnt2d::from_coords(
            p.x().clamp(self.min.x(), self.max.x()),
            p.y().clamp(self.min.y(), self.max.y()),
        )
    }
}
