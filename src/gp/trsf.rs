//! 3D affine transformation backed by a 4×4 homogeneous matrix.

use super::mat::Mat4;
use super::{Pnt, Vec3, XYZ};
use crate::Result;

/// A transformation in 3D space: P' = M * P + T
///
/// Composition order: `a.multiplied(&b)` applies `b` first, then `a`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trsf {
    matrix: Mat4,
}

impl Default for Trsf {
    fn default() -> Self {
        Self::identity()
    }
}

impl Trsf {
    /// Creates identity transformation.
    pub fn identity() -> Self {
        Self { matrix: Mat4::identity() }
    }

    /// Wraps a homogeneous matrix. The last row is expected to be `[0, 0, 0, 1]`.
    pub const fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    /// Creates a translation.
    pub fn from_translation(v: Vec3) -> Self {
        Self::from_matrix(Mat4::from_rows([
            [1.0, 0.0, 0.0, v.x()],
            [0.0, 1.0, 0.0, v.y()],
            [0.0, 0.0, 1.0, v.z()],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    /// Creates a per-axis scaling about the origin.
    pub fn from_scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self::from_matrix(Mat4::from_rows([
            [sx, 0.0, 0.0, 0.0],
            [0.0, sy, 0.0, 0.0],
            [0.0, 0.0, sz, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    /// Creates a signed axis permutation.
    ///
    /// Output axis `i` receives `sign * input[axis]` for `rows[i] = (axis, sign)`.
    /// Repeating an input axis yields a singular transform.
    pub fn from_permutation(rows: [(usize, f64); 3]) -> Self {
        let mut matrix = Mat4::zero();
        for (out_axis, (in_axis, sign)) in rows.into_iter().enumerate() {
            matrix.set_value(out_axis, in_axis, sign);
        }
        matrix.set_value(3, 3, 1.0);
        Self::from_matrix(matrix)
    }

    /// Returns the matrix.
    #[inline]
    pub const fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Returns the translation part.
    pub fn translation(&self) -> Vec3 {
        let m = &self.matrix;
        Vec3::from_coords(m.value(0, 3), m.value(1, 3), m.value(2, 3))
    }

    /// Transforms a point (translation applied).
    pub fn transform_point(&self, p: Pnt) -> Pnt {
        let [x, y, z, _] = self.matrix.multiply_column(&[p.x(), p.y(), p.z(), 1.0]);
        Pnt::from_xyz(XYZ::from_coords(x, y, z))
    }

    /// Transforms a vector (translation ignored).
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        let [x, y, z, _] = self.matrix.multiply_column(&[v.x(), v.y(), v.z(), 0.0]);
        Vec3::from_coords(x, y, z)
    }

    /// Returns `self ∘ other`: `other` is applied first.
    pub fn multiplied(&self, other: &Trsf) -> Trsf {
        Trsf::from_matrix(self.matrix.multiplied(&other.matrix))
    }

    /// Returns the inverse, or `SingularTransform`.
    pub fn inverted(&self) -> Result<Trsf> {
        Ok(Trsf::from_matrix(self.matrix.inverted()?))
    }

    /// Returns the inverse, failing when `|det| < epsilon`.
    pub fn inverted_with_tolerance(&self, epsilon: f64) -> Result<Trsf> {
        Ok(Trsf::from_matrix(self.matrix.inverted_with_tolerance(epsilon)?))
    }

    /// Element-wise comparison within tolerance.
    pub fn is_equal(&self, other: &Trsf, tolerance: f64) -> bool {
        self.matrix.is_equal(&other.matrix, tolerance)
    }
}
