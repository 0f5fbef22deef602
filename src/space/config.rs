//! Space-mapping configuration.
//!
//! One immutable snapshot per call; the engine never reads shared settings.

use crate::precision;
use crate::space::AxisMapping;
use crate::{MinimapError, Result};
use serde::{Deserialize, Serialize};

/// Extents of the authoring domain along the two mapped source axes.
///
/// `min_x`/`max_x` refer to the source axis feeding Output X and
/// `min_y`/`max_y` to the one feeding Output Y, in source units and
/// before any sign flip.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl WorldBounds {
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self { min_x, max_x, min_y, max_y }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(-4000.0, 4000.0, -4000.0, 4000.0)
    }
}

/// Output area size in output units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputSize {
    pub width: f64,
    pub height: f64,
}

impl OutputSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for OutputSize {
    fn default() -> Self {
        Self::new(300.0, 300.0)
    }
}

/// Where the Output origin sits relative to the mapped world area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginConvention {
    /// (0, 0) at the top-left corner of the output area.
    #[default]
    TopLeft,
    /// (0, 0) at the center of the output area.
    Center,
}

/// How world extents are fitted into the output area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// One factor for both axes: the largest that keeps the world inside
    /// the output area.
    #[default]
    Uniform,
    /// Independent factors so the world fills the output area exactly.
    Stretch,
}

/// Parameters for building the Source → Normalized → Output transforms.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceMappingConfig {
    pub axes: AxisMapping,
    pub world_bounds: WorldBounds,
    pub output_size: OutputSize,
    /// Export scale applied to derived dimensions.
    pub scale: f64,
    /// Decimal places kept by output rounding.
    pub precision: u32,
    pub origin: OriginConvention,
    pub scale_mode: ScaleMode,
    /// Clamp rounded positions into the output area.
    pub clamp_to_output: bool,
    /// Determinant magnitude below which Output → Source inversion fails.
    pub singular_tolerance: f64,
}

impl Default for SpaceMappingConfig {
    fn default() -> Self {
        Self {
            axes: AxisMapping::default(),
            world_bounds: WorldBounds::default(),
            output_size: OutputSize::default(),
            scale: 1.0,
            precision: 2,
            origin: OriginConvention::TopLeft,
            scale_mode: ScaleMode::Uniform,
            clamp_to_output: false,
            singular_tolerance: precision::SINGULAR,
        }
    }
}

impl SpaceMappingConfig {
    pub fn with_axes(mut self, axes: AxisMapping) -> Self {
        self.axes = axes;
        self
    }

    pub fn with_world_bounds(mut self, bounds: WorldBounds) -> Self {
        self.world_bounds = bounds;
        self
    }

    pub fn with_output_size(mut self, width: f64, height: f64) -> Self {
        self.output_size = OutputSize::new(width, height);
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_origin(mut self, origin: OriginConvention) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the origin from the "center at origin" toggle.
    pub fn with_center_at_origin(self, center: bool) -> Self {
        self.with_origin(if center {
            OriginConvention::Center
        } else {
            OriginConvention::TopLeft
        })
    }

    pub fn with_scale_mode(mut self, mode: ScaleMode) -> Self {
        self.scale_mode = mode;
        self
    }

    pub fn with_clamp_to_output(mut self, clamp: bool) -> Self {
        self.clamp_to_output = clamp;
        self
    }

    pub fn with_singular_tolerance(mut self, epsilon: f64) -> Self {
        self.singular_tolerance = epsilon;
        self
    }

    /// Rejects configurations under which scaling is undefined.
    pub fn validate(&self) -> Result<()> {
        self.axes.validate()?;

        let wb = &self.world_bounds;
        if ![wb.min_x, wb.max_x, wb.min_y, wb.max_y].iter().all(|v| v.is_finite()) {
            return Err(MinimapError::ConfigurationError(format!(
                "world bounds must be finite: {:?}",
                wb
            )));
        }
        if wb.width() <= 0.0 || wb.height() <= 0.0 {
            return Err(MinimapError::ConfigurationError(format!(
                "world bounds have non-positive extent {} x {}",
                wb.width(),
                wb.height()
            )));
        }

        let out = &self.output_size;
        if !(out.width.is_finite() && out.height.is_finite()) || out.width <= 0.0 || out.height <= 0.0 {
            return Err(MinimapError::ConfigurationError(format!(
                "output size must be positive, got {} x {}",
                out.width, out.height
            )));
        }

        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(MinimapError::ConfigurationError(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }

        if self.precision > precision::MAX_DECIMALS {
            return Err(MinimapError::ConfigurationError(format!(
                "precision {} exceeds the maximum of {} decimals",
                self.precision,
                precision::MAX_DECIMALS
            )));
        }

        if !self.singular_tolerance.is_finite() || self.singular_tolerance < 0.0 {
            return Err(MinimapError::ConfigurationError(format!(
                "singular tolerance must be finite and non-negative, got {}",
                self.singular_tolerance
            )));
        }
        Ok(())
    }
}
