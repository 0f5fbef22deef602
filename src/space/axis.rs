//! Source axis selection for the two output axes.

use crate::gp::Trsf;
use crate::{MinimapError, Result};
use serde::{Deserialize, Serialize};

/// A Source-space axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Zero-based component index.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The axis not named by `a` or `b`. Returns `a` when they coincide.
    fn remaining(a: Axis, b: Axis) -> Axis {
        [Axis::X, Axis::Y, Axis::Z]
            .into_iter()
            .find(|axis| *axis != a && *axis != b)
            .unwrap_or(a)
    }
}

/// A source axis with an optional sign flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignedAxis {
    pub axis: Axis,
    #[serde(default)]
    pub negate: bool,
}

impl SignedAxis {
    pub const fn positive(axis: Axis) -> Self {
        Self { axis, negate: false }
    }

    pub const fn negative(axis: Axis) -> Self {
        Self { axis, negate: true }
    }

    #[inline]
    pub fn sign(&self) -> f64 {
        if self.negate {
            -1.0
        } else {
            1.0
        }
    }

    /// Image of the source interval `[min, max]` under this axis's sign,
    /// as an ordered pair.
    pub fn map_range(&self, min: f64, max: f64) -> (f64, f64) {
        if self.negate {
            (-max, -min)
        } else {
            (min, max)
        }
    }
}

/// Which source axis feeds Output X and Output Y.
///
/// The unused source axis is carried as depth so the mapping stays an
/// invertible 3D transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisMapping {
    pub horizontal: SignedAxis,
    pub vertical: SignedAxis,
}

impl Default for AxisMapping {
    /// Side view: Source Y → X, Source −Z → Y.
    fn default() -> Self {
        Self::new(SignedAxis::positive(Axis::Y), SignedAxis::negative(Axis::Z))
    }
}

impl AxisMapping {
    pub const fn new(horizontal: SignedAxis, vertical: SignedAxis) -> Self {
        Self { horizontal, vertical }
    }

    /// Top-down view with Y growing downward: Source X → X, Source −Y → Y.
    pub const fn top_down() -> Self {
        Self::new(SignedAxis::positive(Axis::X), SignedAxis::negative(Axis::Y))
    }

    /// Plain planar mapping: Source X → X, Source Y → Y.
    pub const fn planar_xy() -> Self {
        Self::new(SignedAxis::positive(Axis::X), SignedAxis::positive(Axis::Y))
    }

    /// Source axis carried through as depth.
    pub fn depth(&self) -> Axis {
        Axis::remaining(self.horizontal.axis, self.vertical.axis)
    }

    pub fn validate(&self) -> Result<()> {
        if self.horizontal.axis == self.vertical.axis {
            return Err(MinimapError::ConfigurationError(format!(
                "axis {:?} mapped to both output axes",
                self.horizontal.axis
            )));
        }
        Ok(())
    }

    /// Signed permutation taking Source coordinates to
    /// (horizontal, vertical, depth).
    pub fn to_trsf(&self) -> Trsf {
        Trsf::from_permutation([
            (self.horizontal.axis.index(), self.horizontal.sign()),
            (self.vertical.axis.index(), self.vertical.sign()),
            (self.depth().index(), 1.0),
        ])
    }
}
