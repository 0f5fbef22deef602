//! 2D affine transformation backed by a 3×3 homogeneous matrix.

use crate::gp::{Mat3, Mat4, Pnt2d, Trsf, Vec2d, XY};
use crate::Result;

/// Represents a 2D affine transformation: P' = M * P + T
///
/// Composition order: `a.multiplied(&b)` applies `b` first, then `a`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trsf2d {
    matrix: Mat3,
}

impl Trsf2d {
    /// Creates the identity transformation.
    #[inline]
    pub fn identity() -> Self {
        Self { matrix: Mat3::identity() }
    }

    /// Wraps a homogeneous matrix. The last row is expected to be `[0, 0, 1]`.
    #[inline]
    pub const fn from_matrix(matrix: Mat3) -> Self {
        Self { matrix }
    }

    /// Creates a translation.
    pub fn from_translation(vec: Vec2d) -> Self {
        Self::from_matrix(Mat3::from_rows([
            [1.0, 0.0, vec.x()],
            [0.0, 1.0, vec.y()],
            [0.0, 0.0, 1.0],
        ]))
    }

    /// Creates a per-axis scaling about the origin.
    pub fn from_scale(sx: f64, sy: f64) -> Self {
        Self::from_matrix(Mat3::from_rows([
            [sx, 0.0, 0.0],
            [0.0, sy, 0.0],
            [0.0, 0.0, 1.0],
        ]))
    }

    /// Creates a reflection negating the selected axes.
    pub fn from_reflection(flip_x: bool, flip_y: bool) -> Self {
        let sign = |flip: bool| if flip { -1.0 } else { 1.0 };
        Self::from_scale(sign(flip_x), sign(flip_y))
    }

    /// Returns the matrix.
    #[inline]
    pub const fn matrix(&self) -> Mat3 {
        self.matrix
    }

    /// Returns the translation part.
    #[inline]
    pub fn translation(&self) -> Vec2d {
        Vec2d::from_coords(self.matrix.value(0, 2), self.matrix.value(1, 2))
    }

    /// Transforms a point (translation applied).
    #[inline]
    pub fn transform_point(&self, point: Pnt2d) -> Pnt2d {
        let [x, y, _] = self.matrix.multiply_column(&[point.x(), point.y(), 1.0]);
        Pnt2d::from_xy(XY::from_coords(x, y))
    }

    /// Transforms a vector (translation ignored).
    #[inline]
    pub fn transform_vector(&self, vec: Vec2d) -> Vec2d {
        let [x, y, _] = self.matrix.multiply_column(&[vec.x(), vec.y(), 0.0]);
        Vec2d::from_coords(x, y)
    }

    /// Returns `self ∘ other`: `other` is applied first.
    #[inline]
    pub fn multiplied(&self, other: &Trsf2d) -> Trsf2d {
        Trsf2d::from_matrix(self.matrix.multiplied(&other.matrix))
    }

    /// Returns the inverse, or `SingularTransform`.
    #[inline]
    pub fn inverted(&self) -> Result<Trsf2d> {
        Ok(Trsf2d::from_matrix(self.matrix.inverted()?))
    }

    /// Returns the inverse, failing when `|det| < epsilon`.
    pub fn inverted_with_tolerance(&self, epsilon: f64) -> Result<Trsf2d> {
        Ok(Trsf2d::from_matrix(self.matrix.inverted_with_tolerance(epsilon)?))
    }

    /// Embeds this transformation into 3D; the third axis passes through.
    pub fn lift(&self) -> Trsf {
        let m = &self.matrix;
        Trsf::from_matrix(Mat4::from_rows([
            [m.value(0, 0), m.value(0, 1), 0.0, m.value(0, 2)],
            [m.value(1, 0), m.value(1, 1), 0.0, m.value(1, 2)],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    /// Element-wise comparison within tolerance.
    pub fn is_equal(&self, other: &Trsf2d, tolerance: f64) -> bool {
        self.matrix.is_equal(&other.matrix, tolerance)
    }
}

impl Default for Trsf2d {
    fn default() -> Self {
        Self::identity()
    }
}
