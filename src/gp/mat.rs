//! Square matrix with compile-time dimension.
//!
//! `Mat<3>` backs 2D homogeneous transforms and `Mat<4>` backs 3D ones.

use crate::precision;
use crate::{MinimapError, Result};

/// N×N matrix, row-major.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat<const N: usize> {
    data: [[f64; N]; N],
}

/// 3×3 matrix (2D homogeneous).
pub type Mat3 = Mat<3>;

/// 4×4 matrix (3D homogeneous).
pub type Mat4 = Mat<4>;

impl<const N: usize> Default for Mat<N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<const N: usize> Mat<N> {
    /// Creates identity matrix.
    pub fn identity() -> Self {
        let mut data = [[0.0; N]; N];
        for (i, row) in data.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self { data }
    }

    /// Creates zero matrix.
    pub const fn zero() -> Self {
        Self { data: [[0.0; N]; N] }
    }

    /// Creates a matrix from rows.
    pub const fn from_rows(data: [[f64; N]; N]) -> Self {
        Self { data }
    }

    /// Gets value at (row, col), zero-based.
    #[inline]
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    /// Sets value at (row, col), zero-based.
    #[inline]
    pub fn set_value(&mut self, row: usize, col: usize, value: f64) {
        self.data[row][col] = value;
    }

    /// Returns the rows.
    #[inline]
    pub const fn rows(&self) -> &[[f64; N]; N] {
        &self.data
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().flatten().all(|v| v.is_finite())
    }

    /// Matrix product `self * other`.
    pub fn multiplied(&self, other: &Mat<N>) -> Mat<N> {
        let mut result = Mat::zero();
        for i in 0..N {
            for j in 0..N {
                let mut sum = 0.0;
                for k in 0..N {
                    sum += self.data[i][k] * other.data[k][j];
                }
                result.data[i][j] = sum;
            }
        }
        result
    }

    /// Multiplies the matrix by a column vector.
    pub fn multiply_column(&self, column: &[f64; N]) -> [f64; N] {
        let mut out = [0.0; N];
        for (i, row) in self.data.iter().enumerate() {
            out[i] = row.iter().zip(column).map(|(a, b)| a * b).sum();
        }
        out
    }

    /// Computes determinant by Gaussian elimination with partial pivoting.
    pub fn determinant(&self) -> f64 {
        let mut m = self.data;
        let mut det = 1.0;
        for col in 0..N {
            let pivot = (col..N)
                .max_by(|&a, &b| m[a][col].abs().total_cmp(&m[b][col].abs()))
                .unwrap_or(col);
            if m[pivot][col] == 0.0 {
                return 0.0;
            }
            if pivot != col {
                m.swap(pivot, col);
                det = -det;
            }
            det *= m[col][col];
            for row in (col + 1)..N {
                let factor = m[row][col] / m[col][col];
                for k in col..N {
                    m[row][k] -= factor * m[col][k];
                }
            }
        }
        det
    }

    /// Returns the inverse, failing when `|det| < precision::SINGULAR`.
    pub fn inverted(&self) -> Result<Mat<N>> {
        self.inverted_with_tolerance(precision::SINGULAR)
    }

    /// Returns the inverse, failing when `|det| < epsilon`.
    pub fn inverted_with_tolerance(&self, epsilon: f64) -> Result<Mat<N>> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < epsilon {
            return Err(self.singular_error(det));
        }

        // Gauss-Jordan on [A | I]
        let mut a = self.data;
        let mut inv = Mat::<N>::identity().data;
        for col in 0..N {
            let pivot = (col..N)
                .max_by(|&x, &y| a[x][col].abs().total_cmp(&a[y][col].abs()))
                .unwrap_or(col);
            if a[pivot][col] == 0.0 {
                return Err(self.singular_error(det));
            }
            a.swap(pivot, col);
            inv.swap(pivot, col);

            let p = a[col][col];
            for k in 0..N {
                a[col][k] /= p;
                inv[col][k] /= p;
            }
            for row in 0..N {
                if row == col {
                    continue;
                }
                let factor = a[row][col];
                if factor == 0.0 {
                    continue;
                }
                for k in 0..N {
                    a[row][k] -= factor * a[col][k];
                    inv[row][k] -= factor * inv[col][k];
                }
            }
        }
        Ok(Mat { data: inv })
    }

    fn singular_error(&self, determinant: f64) -> MinimapError {
        MinimapError::SingularTransform {
            determinant: determinant.abs(),
            rows: self.data.iter().map(|r| r.to_vec()).collect(),
        }
    }

    /// Checks element-wise equality within tolerance.
    pub fn is_equal(&self, other: &Mat<N>, tolerance: f64) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}
