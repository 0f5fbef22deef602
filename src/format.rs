//! Text formatting of output coordinates for exporters.
//!
//! Rounding happens here and in `Calculator::calculate_position` only.

use crate::gp::Pnt2d;
use crate::precision::{self, round_to};
use crate::space::SpaceMappingConfig;
use serde::{Deserialize, Serialize};

/// Character used between integer and fractional digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecimalSeparator {
    #[default]
    Dot,
    Comma,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateFormat {
    pub precision: u32,
    pub separator: DecimalSeparator,
}

impl Default for CoordinateFormat {
    fn default() -> Self {
        Self {
            precision: 2,
            separator: DecimalSeparator::Dot,
        }
    }
}

impl CoordinateFormat {
    pub fn new(precision: u32, separator: DecimalSeparator) -> Self {
        Self {
            precision: precision.min(precision::MAX_DECIMALS),
            separator,
        }
    }

    /// Uses the config's precision.
    pub fn from_config(config: &SpaceMappingConfig, separator: DecimalSeparator) -> Self {
        Self::new(config.precision, separator)
    }

    /// Fixed-point text with exactly `precision` decimals.
    pub fn format_value(&self, value: f64) -> String {
        let text = format!("{:.*}", self.precision as usize, round_to(value, self.precision));
        match self.separator {
            DecimalSeparator::Dot => text,
            DecimalSeparator::Comma => text.replace('.', ","),
        }
    }

    /// `x,y` with dot decimals, `x y` with comma decimals.
    pub fn format_point(&self, p: Pnt2d) -> String {
        let sep = match self.separator {
            DecimalSeparator::Dot => ",",
            DecimalSeparator::Comma => " ",
        };
        format!("{}{}{}", self.format_value(p.x()), sep, self.format_value(p.y()))
    }
}
