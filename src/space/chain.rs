//! Per-stage mappings and the composed Source → Normalized → Output chain.

use super::{CoordinateSpace, OriginConvention, ScaleMode, SpaceMappingConfig};
use crate::bnd::Rect;
use crate::gp::{Pnt, Pnt2d, Trsf, Trsf2d, Vec2d, Vec3};
use crate::space::AxisMapping;
use crate::Result;

/// Parameters of the stage that maps into one coordinate space.
///
/// The stage matrix is `translate(offset) ∘ scale ∘ axes`: axis remap and
/// sign flips first, then per-axis scale, then the origin offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageMapping {
    /// Axis remap applied first; `None` for stages that stay in the plane.
    pub axes: Option<AxisMapping>,
    pub scale: Vec2d,
    pub offset: Vec2d,
}

impl StageMapping {
    /// Stage producing coordinates in `space` from its predecessor.
    ///
    /// Source has no predecessor and maps to the identity. The config is
    /// assumed to be validated.
    pub fn into_space(space: CoordinateSpace, config: &SpaceMappingConfig) -> StageMapping {
        match space {
            CoordinateSpace::Source => StageMapping {
                axes: None,
                scale: Vec2d::from_coords(1.0, 1.0),
                offset: Vec2d::new(),
            },
            CoordinateSpace::Normalized => {
                let wb = &config.world_bounds;
                let (w, h) = (wb.width(), wb.height());
                let (h_min, _) = config.axes.horizontal.map_range(wb.min_x, wb.max_x);
                let (v_min, _) = config.axes.vertical.map_range(wb.min_y, wb.max_y);
                StageMapping {
                    axes: Some(config.axes),
                    scale: Vec2d::from_coords(1.0 / w, 1.0 / h),
                    offset: Vec2d::from_coords(-h_min / w, -v_min / h),
                }
            }
            CoordinateSpace::Output => {
                let scale = content_size(config);
                let offset = match config.origin {
                    OriginConvention::TopLeft => Vec2d::new(),
                    OriginConvention::Center => Vec2d::from_coords(-scale.x() / 2.0, -scale.y() / 2.0),
                };
                StageMapping { axes: None, scale, offset }
            }
        }
    }

    /// In-plane part of the stage: `translate ∘ scale`.
    pub fn planar_trsf(&self) -> Trsf2d {
        Trsf2d::from_translation(self.offset)
            .multiplied(&Trsf2d::from_scale(self.scale.x(), self.scale.y()))
    }

    /// Full 3D stage; depth is neither scaled nor offset.
    pub fn to_trsf(&self) -> Trsf {
        let reflect = self.axes.map(|a| a.to_trsf()).unwrap_or_default();
        Trsf::from_translation(Vec3::from_coords(self.offset.x(), self.offset.y(), 0.0))
            .multiplied(&Trsf::from_scale(self.scale.x(), self.scale.y(), 1.0))
            .multiplied(&reflect)
    }
}

/// Size of the mapped world area in Output units.
fn content_size(config: &SpaceMappingConfig) -> Vec2d {
    let out = &config.output_size;
    match config.scale_mode {
        ScaleMode::Stretch => Vec2d::from_coords(out.width, out.height),
        ScaleMode::Uniform => {
            let (w, h) = (config.world_bounds.width(), config.world_bounds.height());
            let k = (out.width / w).min(out.height / h);
            Vec2d::from_coords(k * w, k * h)
        }
    }
}

/// The composed transforms for one `SpaceMappingConfig`.
///
/// Normalized and Output are planar; in 3D form they carry the unused
/// source axis as depth, which keeps every stage invertible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformChain {
    source_to_normalized: Trsf,
    normalized_to_output: Trsf2d,
    source_to_output: Trsf,
    output_area: Rect,
    singular_tolerance: f64,
}

impl TransformChain {
    /// Validates `config` and builds every stage.
    pub fn from_config(config: &SpaceMappingConfig) -> Result<Self> {
        config.validate()?;

        let source_to_normalized =
            StageMapping::into_space(CoordinateSpace::Normalized, config).to_trsf();
        let normalized_to_output =
            StageMapping::into_space(CoordinateSpace::Output, config).planar_trsf();
        let source_to_output = normalized_to_output.lift().multiplied(&source_to_normalized);

        let output_area = Rect::from_corners(
            normalized_to_output.transform_point(Pnt2d::from_coords(0.0, 0.0)),
            normalized_to_output.transform_point(Pnt2d::from_coords(1.0, 1.0)),
        );

        Ok(Self {
            source_to_normalized,
            normalized_to_output,
            source_to_output,
            output_area,
            singular_tolerance: config.singular_tolerance,
        })
    }

    #[inline]
    pub fn source_to_normalized(&self) -> &Trsf {
        &self.source_to_normalized
    }

    #[inline]
    pub fn normalized_to_output(&self) -> &Trsf2d {
        &self.normalized_to_output
    }

    #[inline]
    pub fn source_to_output(&self) -> &Trsf {
        &self.source_to_output
    }

    /// The world bounds as seen in Output space.
    #[inline]
    pub fn output_area(&self) -> Rect {
        self.output_area
    }

    /// Inverse of the full chain, one matrix inversion.
    pub fn output_to_source(&self) -> Result<Trsf> {
        self.source_to_output.inverted_with_tolerance(self.singular_tolerance)
    }

    /// 3D transform between any two spaces.
    pub fn between(&self, from: CoordinateSpace, to: CoordinateSpace) -> Result<Trsf> {
        if from == to {
            return Ok(Trsf::identity());
        }
        let into = self.from_source(to);
        match from {
            CoordinateSpace::Source => Ok(into),
            _ => Ok(into.multiplied(
                &self.from_source(from).inverted_with_tolerance(self.singular_tolerance)?,
            )),
        }
    }

    fn from_source(&self, space: CoordinateSpace) -> Trsf {
        match space {
            CoordinateSpace::Source => Trsf::identity(),
            CoordinateSpace::Normalized => self.source_to_normalized,
            CoordinateSpace::Output => self.source_to_output,
        }
    }

    /// Maps a Source point to Output, dropping depth.
    pub fn to_output(&self, p: Pnt) -> Pnt2d {
        let q = self.source_to_output.transform_point(p);
        Pnt2d::from_coords(q.x(), q.y())
    }

    /// Maps a Source point to Normalized, dropping depth.
    pub fn to_normalized(&self, p: Pnt) -> Pnt2d {
        let q = self.source_to_normalized.transform_point(p);
        Pnt2d::from_coords(q.x(), q.y())
    }

    /// Maps an Output point back to Source with zero depth.
    pub fn unproject(&self, p: Pnt2d) -> Result<Pnt> {
        let inverse = self.output_to_source()?;
        Ok(inverse.transform_point(Pnt::from_coords(p.x(), p.y(), 0.0)))
    }
}
