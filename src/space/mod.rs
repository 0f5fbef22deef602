//! Coordinate spaces and the mapping between them.
//!
//! Source is the 3D authoring space, Normalized is the unit square over the
//! configured world bounds, Output is the exported 2D space.

mod axis;
mod chain;
mod config;

pub use axis::{Axis, AxisMapping, SignedAxis};
pub use chain::{StageMapping, TransformChain};
pub use config::{OriginConvention, OutputSize, ScaleMode, SpaceMappingConfig, WorldBounds};

use serde::{Deserialize, Serialize};

/// Coordinate systems a point can be expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordinateSpace {
    Source,
    Normalized,
    Output,
}
