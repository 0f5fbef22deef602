//! Content fingerprint of a calculation request.

use crate::calc::SampledCurve;
use crate::space::{Axis, OriginConvention, ScaleMode, SignedAxis, SpaceMappingConfig};
use std::fmt;

/// BLAKE3 digest over point bit patterns and every config field.
///
/// Bit-identical input gives an identical fingerprint. Curve names do not
/// participate.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    pub fn of(curves: &[SampledCurve], config: &SpaceMappingConfig) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"minimap.calc.v1");

        hasher.update(&(curves.len() as u64).to_le_bytes());
        for curve in curves {
            hasher.update(&(curve.points.len() as u64).to_le_bytes());
            for p in &curve.points {
                let (x, y, z) = p.coords();
                for v in [x, y, z] {
                    hasher.update(&v.to_bits().to_le_bytes());
                }
            }
        }

        hash_config(&mut hasher, config);
        Self(*hasher.finalize().as_bytes())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

fn hash_config(hasher: &mut blake3::Hasher, config: &SpaceMappingConfig) {
    for axis in [config.axes.horizontal, config.axes.vertical] {
        hasher.update(&signed_axis_tag(axis));
    }

    let wb = &config.world_bounds;
    let floats = [
        wb.min_x,
        wb.max_x,
        wb.min_y,
        wb.max_y,
        config.output_size.width,
        config.output_size.height,
        config.scale,
        config.singular_tolerance,
    ];
    for v in floats {
        hasher.update(&v.to_bits().to_le_bytes());
    }

    hasher.update(&config.precision.to_le_bytes());
    hasher.update(&[
        match config.origin {
            OriginConvention::TopLeft => 0,
            OriginConvention::Center => 1,
        },
        match config.scale_mode {
            ScaleMode::Uniform => 0,
            ScaleMode::Stretch => 1,
        },
        config.clamp_to_output as u8,
    ]);
}

fn signed_axis_tag(axis: SignedAxis) -> [u8; 2] {
    let index = match axis.axis {
        Axis::X => 0,
        Axis::Y => 1,
        Axis::Z => 2,
    };
    [index, axis.negate as u8]
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(blake3::Hash::from(self.0).to_hex().as_str())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = blake3::Hash::from(self.0).to_hex();
        write!(f, "Fingerprint({})", &hex.as_str()[..16])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gp::Pnt;
    use crate::space::{AxisMapping, WorldBounds};

    fn curves() -> Vec<SampledCurve> {
        vec![SampledCurve::new(
            "road",
            vec![Pnt::from_coords(0.0, 1.0, 2.0), Pnt::from_coords(3.0, 4.0, 5.0)],
        )]
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let config = SpaceMappingConfig::default();
        assert_eq!(Fingerprint::of(&curves(), &config), Fingerprint::of(&curves(), &config));
    }

    #[test]
    fn test_fingerprint_ignores_curve_names() {
        let config = SpaceMappingConfig::default();
        let mut renamed = curves();
        renamed[0].name = "river".to_string();
        assert_eq!(Fingerprint::of(&curves(), &config), Fingerprint::of(&renamed, &config));
    }

    #[test]
    fn test_fingerprint_tracks_curve_split() {
        let config = SpaceMappingConfig::default();
        let joined = curves();
        let split = vec![
            SampledCurve::new("a", vec![joined[0].points[0]]),
            SampledCurve::new("b", vec![joined[0].points[1]]),
        ];
        assert_ne!(Fingerprint::of(&joined, &config), Fingerprint::of(&split, &config));
    }

    #[test]
    fn test_fingerprint_changes_with_every_config_field() {
        let base = SpaceMappingConfig::default();
        let variants = [
            base.with_axes(AxisMapping::planar_xy()),
            base.with_world_bounds(WorldBounds::new(-4000.0, 4001.0, -4000.0, 4000.0)),
            base.with_output_size(300.0, 301.0),
            base.with_scale(2.0),
            base.with_precision(3),
            base.with_center_at_origin(true),
            base.with_scale_mode(ScaleMode::Stretch),
            base.with_clamp_to_output(true),
            base.with_singular_tolerance(1e-12),
        ];
        let reference = Fingerprint::of(&curves(), &base);
        for v in &variants {
            assert_ne!(reference, Fingerprint::of(&curves(), v), "{:?}", v);
        }
    }

    #[test]
    fn test_fingerprint_display_is_hex() {
        let fp = Fingerprint::of(&curves(), &SpaceMappingConfig::default());
        let s = fp.to_string();
        assert_eq!(s.len(), 64);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
