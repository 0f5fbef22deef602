//! Bounds, dimension and position calculator.

mod calculator;
mod result;

pub use calculator::Calculator;
pub use result::{CalculationResult, Dimensions, MarkerPoint, SampledCurve};
