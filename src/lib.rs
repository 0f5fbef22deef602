//! scaleform-minimap: coordinate engine for Scaleform minimap export.
//!
//! Converts sampled 3D curve geometry (Source space) into 2D coordinates in
//! a Normalized and an Output space through composed affine matrices, and
//! memoizes the bounds/dimension calculation behind an LRU cache.

pub mod precision;
pub mod gp;
pub mod bnd;
pub mod space;
pub mod cache;
pub mod calc;
pub mod format;
pub mod logging;

// Re-exports for convenience
pub use gp::{Pnt, Pnt2d, Vec2d, Vec3, Trsf, Trsf2d};
pub use bnd::{Box3d, Rect, bounds_of, bounds_of_2d};
pub use space::{AxisMapping, CoordinateSpace, OriginConvention, SpaceMappingConfig, TransformChain};
pub use cache::{CacheConfig, CacheStats, CalculationCache, Fingerprint, Invalidation};
pub use calc::{CalculationResult, Calculator, Dimensions, MarkerPoint, SampledCurve};
pub use format::{CoordinateFormat, DecimalSeparator};

/// Tolerance for geometric comparisons
pub const TOLERANCE: f64 = precision::ROUND_TRIP;

/// Result type for minimap operations
pub type Result<T> = std::result::Result<T, MinimapError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MinimapError {
    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Singular transform (|det| = {determinant:e}): {rows:?}")]
    SingularTransform {
        determinant: f64,
        rows: Vec<Vec<f64>>,
    },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
