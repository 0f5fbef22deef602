//! Geometric primitives package.
//!
//! Points and vectors are distinct types: transforming a point applies
//! translation, transforming a vector does not.

mod xy;
mod xyz;
mod pnt2d;
mod pnt;
mod vec2d;
mod vec;
pub mod mat;
mod trsf2d;
mod trsf;

pub use xy::XY;
pub use xyz::XYZ;
pub use pnt2d::Pnt2d;
pub use pnt::Pnt;
pub use vec2d::Vec2d;
pub use vec::Vec3;
pub use mat::{Mat, Mat3, Mat4};
pub use trsf2d::Trsf2d;
pub use trsf::Trsf;
