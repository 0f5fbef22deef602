//! Precision constants and rounding for coordinate calculations.
//!
//! Internal computation always runs at full `f64` precision. Rounding to a
//! fixed number of decimals happens only at the output boundary
//! (`Calculator::calculate_position`, coordinate formatting).

/// Determinant magnitude below which a matrix is treated as singular.
/// Value: 1.0e-9
pub const SINGULAR: f64 = 1.0e-9;

/// Confusion tolerance for checking coincidence of two points.
/// Value: 1.0e-7
pub const CONFUSION: f64 = 1.0e-7;

/// Tolerance for Source → Output → Source round trips.
/// Value: 1.0e-6
pub const ROUND_TRIP: f64 = CONFUSION * 10.0;

/// Largest number of decimals accepted for output rounding.
pub const MAX_DECIMALS: u32 = 6;

/// Rounds `value` to `decimals` places, half away from zero.
///
/// `decimals` is clamped to [`MAX_DECIMALS`]. A rounded `-0.0` is
/// normalized to `0.0` so formatted output never shows a signed zero.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Divides `numerator` by `denominator`, returning `1.0` when the
/// denominator is exactly zero.
#[inline]
pub fn ratio_or_unit(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        1.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_values() {
        assert_eq!(SINGULAR, 1.0e-9);
        assert_eq!(CONFUSION, 1.0e-7);
        assert!((ROUND_TRIP - 1.0e-6).abs() < 1e-18);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(1.235, 0), 1.0);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(12.3456789, 10), 12.345679);
    }

    #[test]
    fn test_round_to_normalizes_negative_zero() {
        let r = round_to(-0.0001, 2);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn test_ratio_or_unit() {
        assert_eq!(ratio_or_unit(10.0, 2.0), 5.0);
        assert_eq!(ratio_or_unit(10.0, 0.0), 1.0);
        assert_eq!(ratio_or_unit(0.0, 0.0), 1.0);
        assert_eq!(ratio_or_unit(0.0, -0.0), 1.0);
        assert!((ratio_or_unit(2e-8, 5e-8) - 0.4).abs() < 1e-12);
    }
}
