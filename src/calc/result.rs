//! Calculator inputs and outputs.

use crate::bnd::{Box3d, Rect};
use crate::cache::Fingerprint;
use crate::gp::{Pnt, Pnt2d, Vec2d};
use crate::space::{OriginConvention, TransformChain};
use serde::{Deserialize, Serialize};

/// One curve's sampled points, in Source space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampledCurve {
    pub name: String,
    pub points: Vec<Pnt>,
}

impl SampledCurve {
    pub fn new(name: impl Into<String>, points: Vec<Pnt>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Exported width and height, after the export scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// Snapshot of one bounds/dimension calculation.
///
/// Returned by value; mutating a copy never affects the cache.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculationResult {
    /// Union of the per-curve bounds.
    pub source_bounds: Box3d,
    pub normalized_bounds: Rect,
    pub output_bounds: Rect,
    pub source_center: Pnt,
    pub normalized_center: Pnt2d,
    pub output_center: Pnt2d,
    pub dimensions: Dimensions,
    /// Output extent over projected Source extent, per output axis.
    /// `1.0` on an axis where the Source extent is zero.
    pub axis_ratio: Vec2d,
    pub chain: TransformChain,
    /// Export scale the dimensions were derived with.
    pub scale: f64,
    pub origin: OriginConvention,
    pub fingerprint: Fingerprint,
    pub curve_count: usize,
    pub point_count: usize,
}

impl CalculationResult {
    /// Anchor of selection-relative export coordinates: the top-left corner
    /// of the Output bounds, or their center under `OriginConvention::Center`.
    pub fn selection_anchor(&self) -> Pnt2d {
        match self.origin {
            OriginConvention::TopLeft => self.output_bounds.min(),
            OriginConvention::Center => self.output_center,
        }
    }

    /// Maps an Output point into export coordinates relative to the
    /// selection, scaled so the selection spans `dimensions`.
    pub fn to_selection(&self, p: Pnt2d) -> Pnt2d {
        let anchor = self.selection_anchor();
        Pnt2d::from_coords(
            (p.x() - anchor.x()) * self.scale,
            (p.y() - anchor.y()) * self.scale,
        )
    }
}

/// Output position paired with the Source position it came from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerPoint {
    pub x: f64,
    pub y: f64,
    pub source_x: f64,
    pub source_y: f64,
    pub source_z: f64,
}
