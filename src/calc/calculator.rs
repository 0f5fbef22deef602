use super::{CalculationResult, Dimensions, MarkerPoint, SampledCurve};
use crate::bnd::{bounds_of, Box3d, Rect};
use crate::cache::{CacheConfig, CacheStats, CalculationCache, Fingerprint, Invalidation};
use crate::gp::{Pnt, Pnt2d, Vec2d};
use crate::precision::{ratio_or_unit, round_to};
use crate::space::{SpaceMappingConfig, TransformChain};
use crate::{MinimapError, Result};
use log::{debug, trace, warn};

/// Entry point for bounds, dimension and position calculations.
///
/// Results depend only on the curves and the config passed in; the owned
/// cache memoizes [`Calculator::calculate_dimensions`].
#[derive(Debug, Default)]
pub struct Calculator {
    cache: CalculationCache,
    last: Option<CalculationResult>,
}

impl Calculator {
    pub fn new(cache_config: CacheConfig) -> Self {
        Self::with_cache(CalculationCache::new(cache_config))
    }

    pub fn with_cache(cache: CalculationCache) -> Self {
        Self { cache, last: None }
    }

    /// Bounds, centers, dimensions and axis ratios for `curves`.
    ///
    /// Curves without points are skipped; if no curve has points the call
    /// fails with `EmptyInput`.
    pub fn calculate_dimensions(
        &mut self,
        curves: &[SampledCurve],
        config: &SpaceMappingConfig,
    ) -> Result<CalculationResult> {
        config.validate()?;
        let fingerprint = Fingerprint::of(curves, config);
        trace!("fingerprint {} for {} curve(s)", fingerprint, curves.len());

        let result = self
            .cache
            .get_or_compute(fingerprint, || compute(curves, config, fingerprint))?;
        self.last = Some(result);
        Ok(result)
    }

    /// Source → Output, rounded to `config.precision` decimals.
    pub fn calculate_position(&self, point: Pnt, config: &SpaceMappingConfig) -> Result<Pnt2d> {
        let chain = TransformChain::from_config(config)?;
        position(&chain, point, config)
    }

    /// Source → Output at full precision.
    pub fn transform_path(&self, points: &[Pnt], config: &SpaceMappingConfig) -> Result<Vec<Pnt2d>> {
        let chain = TransformChain::from_config(config)?;
        points
            .iter()
            .map(|p| {
                check_point(p)?;
                finite_output(chain.to_output(*p), p)
            })
            .collect()
    }

    /// One path per curve in selection-relative export coordinates.
    ///
    /// Points are offset from the selection's top-left corner (its center
    /// under `OriginConvention::Center`) and multiplied by the export scale,
    /// so paths fit a `0 0 width height` view box sized from `dimensions`.
    /// Curves without points yield empty paths.
    pub fn export_paths(
        &mut self,
        curves: &[SampledCurve],
        config: &SpaceMappingConfig,
    ) -> Result<Vec<Vec<Pnt2d>>> {
        let result = self.calculate_dimensions(curves, config)?;
        curves
            .iter()
            .map(|curve| {
                curve
                    .points
                    .iter()
                    .map(|p| finite_output(result.to_selection(result.chain.to_output(*p)), p))
                    .collect()
            })
            .collect()
    }

    /// Output → Source through the inverse chain. Depth comes back as zero.
    pub fn output_to_source(&self, point: Pnt2d, config: &SpaceMappingConfig) -> Result<Pnt> {
        if !point.is_finite() {
            return Err(MinimapError::InvalidGeometry(format!(
                "non-finite output position {:?}",
                point.coords()
            )));
        }
        let source = TransformChain::from_config(config)?.unproject(point)?;
        if !source.is_finite() {
            return Err(MinimapError::InvalidGeometry(format!(
                "output position {:?} overflows in source space",
                point.coords()
            )));
        }
        Ok(source)
    }

    /// Rounded output positions paired with their source coordinates.
    pub fn marker_data(&self, positions: &[Pnt], config: &SpaceMappingConfig) -> Result<Vec<MarkerPoint>> {
        let chain = TransformChain::from_config(config)?;
        positions
            .iter()
            .map(|p| {
                let out = position(&chain, *p, config)?;
                Ok(MarkerPoint {
                    x: out.x(),
                    y: out.y(),
                    source_x: p.x(),
                    source_y: p.y(),
                    source_z: p.z(),
                })
            })
            .collect()
    }

    /// Forwards to the cache. `Invalidation::All` also forgets the last result.
    pub fn invalidate(&mut self, what: Invalidation) -> usize {
        if what == Invalidation::All {
            self.last = None;
        }
        self.cache.invalidate(what)
    }

    /// Most recent result from `calculate_dimensions`.
    pub fn last_result(&self) -> Option<&CalculationResult> {
        self.last.as_ref()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn cache(&self) -> &CalculationCache {
        &self.cache
    }
}

fn compute(
    curves: &[SampledCurve],
    config: &SpaceMappingConfig,
    fingerprint: Fingerprint,
) -> Result<CalculationResult> {
    let mut source_bounds: Option<Box3d> = None;
    let mut curve_count = 0;
    let mut point_count = 0;
    for curve in curves.iter().filter(|c| !c.points.is_empty()) {
        let b = bounds_of(&curve.points).inspect_err(|e| warn!("curve '{}' rejected: {}", curve.name, e))?;
        source_bounds = Some(source_bounds.map_or(b, |acc| acc.union(&b)));
        curve_count += 1;
        point_count += curve.points.len();
    }
    let source_bounds = source_bounds.ok_or_else(|| {
        MinimapError::EmptyInput(format!("no points in {} selected curve(s)", curves.len()))
    })?;

    let chain = TransformChain::from_config(config)?;
    let planar = |b: Box3d| {
        Rect::from_corners(
            Pnt2d::from_coords(b.min().x(), b.min().y()),
            Pnt2d::from_coords(b.max().x(), b.max().y()),
        )
    };
    let normalized_bounds = planar(source_bounds.transformed(chain.source_to_normalized()));
    let output_bounds = planar(source_bounds.transformed(chain.source_to_output()));
    let projected = planar(source_bounds.transformed(&config.axes.to_trsf()));

    let source_center = source_bounds.center();
    let dimensions = Dimensions {
        width: config.scale * output_bounds.width(),
        height: config.scale * output_bounds.height(),
    };
    let axis_ratio = Vec2d::from_coords(
        ratio_or_unit(output_bounds.width(), projected.width()),
        ratio_or_unit(output_bounds.height(), projected.height()),
    );

    let result = CalculationResult {
        source_bounds,
        normalized_bounds,
        output_bounds,
        source_center,
        normalized_center: chain.to_normalized(source_center),
        output_center: chain.to_output(source_center),
        dimensions,
        axis_ratio,
        chain,
        scale: config.scale,
        origin: config.origin,
        fingerprint,
        curve_count,
        point_count,
    };
    ensure_finite(&result)?;

    debug!(
        "calculated {} point(s) over {} curve(s): {:.3} x {:.3}",
        point_count, curve_count, dimensions.width, dimensions.height
    );
    Ok(result)
}

fn position(chain: &TransformChain, point: Pnt, config: &SpaceMappingConfig) -> Result<Pnt2d> {
    check_point(&point)?;
    let mut out = chain.to_output(point);
    if config.clamp_to_output {
        out = chain.output_area().clamp_point(out);
    }
    let rounded = Pnt2d::from_coords(round_to(out.x(), config.precision), round_to(out.y(), config.precision));
    if !rounded.is_finite() {
        return Err(MinimapError::InvalidGeometry(format!(
            "position {:?} overflows in output space",
            point.coords()
        )));
    }
    Ok(rounded)
}

fn finite_output(q: Pnt2d, source: &Pnt) -> Result<Pnt2d> {
    if q.is_finite() {
        Ok(q)
    } else {
        Err(MinimapError::InvalidGeometry(format!(
            "position {:?} overflows in output space",
            source.coords()
        )))
    }
}

fn check_point(p: &Pnt) -> Result<()> {
    if p.is_finite() {
        Ok(())
    } else {
        warn!("rejected non-finite point {:?}", p.coords());
        Err(MinimapError::InvalidGeometry(format!(
            "non-finite coordinate {:?}",
            p.coords()
        )))
    }
}

fn ensure_finite(r: &CalculationResult) -> Result<()> {
    let values = [
        r.normalized_bounds.min().x(),
        r.normalized_bounds.min().y(),
        r.normalized_bounds.max().x(),
        r.normalized_bounds.max().y(),
        r.output_bounds.min().x(),
        r.output_bounds.min().y(),
        r.output_bounds.max().x(),
        r.output_bounds.max().y(),
        r.dimensions.width,
        r.dimensions.height,
        r.axis_ratio.x(),
        r.axis_ratio.y(),
    ];
    if values.iter().all(|v| v.is_finite()) && r.source_center.is_finite() {
        Ok(())
    } else {
        Err(MinimapError::InvalidGeometry(
            "calculation overflowed to a non-finite value".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::{AxisMapping, OriginConvention, WorldBounds};
    use crate::TOLERANCE;

    fn curve(points: &[(f64, f64, f64)]) -> SampledCurve {
        SampledCurve::new("curve", points.iter().map(|&(x, y, z)| Pnt::from_coords(x, y, z)).collect())
    }

    fn planar() -> SpaceMappingConfig {
        SpaceMappingConfig::default()
            .with_axes(AxisMapping::planar_xy())
            .with_world_bounds(WorldBounds::new(-1000.0, 1000.0, -1000.0, 1000.0))
            .with_output_size(800.0, 800.0)
    }

    #[test]
    fn test_two_to_one_rectangle() -> Result<()> {
        let mut calc = Calculator::default();
        let c = curve(&[(0.0, 0.0, 0.0), (100.0, 50.0, 0.0)]);
        let r = calc.calculate_dimensions(&[c], &planar())?;
        assert!((r.dimensions.width - 40.0).abs() < TOLERANCE);
        assert!((r.dimensions.height - 20.0).abs() < TOLERANCE);
        assert!((r.axis_ratio.x() - 0.4).abs() < TOLERANCE);
        assert!((r.axis_ratio.y() - 0.4).abs() < TOLERANCE);
        Ok(())
    }

    #[test]
    fn test_degenerate_point_cloud() -> Result<()> {
        let mut calc = Calculator::default();
        let c = curve(&[(5.0, 5.0, 5.0), (5.0, 5.0, 5.0), (5.0, 5.0, 5.0)]);
        let r = calc.calculate_dimensions(&[c], &SpaceMappingConfig::default())?;
        assert_eq!(r.dimensions, Dimensions { width: 0.0, height: 0.0 });
        assert_eq!(r.source_center, Pnt::from_coords(5.0, 5.0, 5.0));
        assert_eq!(r.axis_ratio, Vec2d::from_coords(1.0, 1.0));
        Ok(())
    }

    #[test]
    fn test_curves_are_unioned() -> Result<()> {
        let mut calc = Calculator::default();
        let a = curve(&[(0.0, 0.0, 0.0), (10.0, 10.0, 0.0)]);
        let b = curve(&[(-10.0, 20.0, 0.0)]);
        let empty = curve(&[]);
        let r = calc.calculate_dimensions(&[a, empty, b], &planar())?;
        assert_eq!(r.source_bounds.min(), Pnt::from_coords(-10.0, 0.0, 0.0));
        assert_eq!(r.source_bounds.max(), Pnt::from_coords(10.0, 20.0, 0.0));
        assert_eq!((r.curve_count, r.point_count), (2, 3));
        Ok(())
    }

    #[test]
    fn test_empty_selection() {
        let mut calc = Calculator::default();
        let config = SpaceMappingConfig::default();
        assert!(matches!(calc.calculate_dimensions(&[], &config), Err(MinimapError::EmptyInput(_))));
        assert!(matches!(
            calc.calculate_dimensions(&[curve(&[])], &config),
            Err(MinimapError::EmptyInput(_))
        ));
        assert!(calc.last_result().is_none());
    }

    #[test]
    fn test_non_finite_input_is_not_cached() {
        let mut calc = Calculator::default();
        let c = curve(&[(0.0, f64::NAN, 0.0)]);
        let config = SpaceMappingConfig::default();
        assert!(matches!(
            calc.calculate_dimensions(&[c], &config),
            Err(MinimapError::InvalidGeometry(_))
        ));
        assert!(calc.cache().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut calc = Calculator::default();
        let c = curve(&[(0.0, 0.0, 0.0)]);
        let config = SpaceMappingConfig::default().with_scale(0.0);
        assert!(matches!(
            calc.calculate_dimensions(&[c], &config),
            Err(MinimapError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_second_call_hits_cache() -> Result<()> {
        let mut calc = Calculator::default();
        let curves = [curve(&[(1.0, 2.0, 3.0), (4.0, -5.0, 6.0)])];
        let config = SpaceMappingConfig::default();
        let first = calc.calculate_dimensions(&curves, &config)?;
        let second = calc.calculate_dimensions(&curves, &config)?;
        assert_eq!(first, second);
        assert_eq!(calc.cache_stats().hits, 1);
        assert_eq!(calc.last_result(), Some(&second));
        Ok(())
    }

    #[test]
    fn test_calculate_position_rounds() -> Result<()> {
        let calc = Calculator::default();
        let config = planar().with_precision(1);
        let p = calc.calculate_position(Pnt::from_coords(1.0, 1.0, 0.0), &config)?;
        // 0.4 * 1 + 400 = 400.4
        assert_eq!(p, Pnt2d::from_coords(400.4, 400.4));
        let p0 = calc.calculate_position(Pnt::from_coords(0.3, 0.0, 0.0), &config.with_precision(0))?;
        assert_eq!(p0, Pnt2d::from_coords(400.0, 400.0));
        Ok(())
    }

    #[test]
    fn test_calculate_position_clamps() -> Result<()> {
        let calc = Calculator::default();
        let config = planar().with_clamp_to_output(true);
        let p = calc.calculate_position(Pnt::from_coords(5000.0, -5000.0, 0.0), &config)?;
        assert_eq!(p, Pnt2d::from_coords(800.0, 0.0));
        Ok(())
    }

    #[test]
    fn test_marker_data() -> Result<()> {
        let calc = Calculator::default();
        let markers = calc.marker_data(&[Pnt::from_coords(-1000.0, 1000.0, 3.0)], &planar())?;
        assert_eq!(markers.len(), 1);
        assert_eq!((markers[0].x, markers[0].y), (0.0, 800.0));
        assert_eq!(markers[0].source_z, 3.0);
        Ok(())
    }

    #[test]
    fn test_invalidate_all_forgets_last_result() -> Result<()> {
        let mut calc = Calculator::default();
        calc.calculate_dimensions(&[curve(&[(0.0, 0.0, 0.0)])], &planar())?;
        assert!(calc.last_result().is_some());
        assert_eq!(calc.invalidate(Invalidation::All), 1);
        assert!(calc.last_result().is_none());
        Ok(())
    }

    #[test]
    fn test_transform_path_rejects_output_overflow() {
        let calc = Calculator::default();
        let config = SpaceMappingConfig::default().with_world_bounds(WorldBounds::new(-1e-3, 1e-3, -1e-3, 1e-3));
        let huge = Pnt::from_coords(1e305, 1e305, 1e305);
        assert!(matches!(
            calc.transform_path(&[Pnt::from_coords(0.0, 0.0, 0.0), huge], &config),
            Err(MinimapError::InvalidGeometry(_))
        ));
        assert!(calc.transform_path(&[Pnt::from_coords(0.0, 1e-4, 0.0)], &config).is_ok());
    }

    #[test]
    fn test_output_to_source_rejects_source_overflow() -> Result<()> {
        let calc = Calculator::default();
        let config = SpaceMappingConfig::default();
        assert!(matches!(
            calc.output_to_source(Pnt2d::from_coords(f64::MAX, -f64::MAX), &config),
            Err(MinimapError::InvalidGeometry(_))
        ));
        let p = calc.output_to_source(Pnt2d::from_coords(150.0, 150.0), &config)?;
        assert!(p.is_finite());
        Ok(())
    }

    #[test]
    fn test_single_huge_point_has_zero_dimensions() -> Result<()> {
        let mut calc = Calculator::default();
        let c = curve(&[(0.0, 1e308, 0.0)]);
        let r = calc.calculate_dimensions(&[c], &SpaceMappingConfig::default())?;
        assert_eq!(r.dimensions, Dimensions { width: 0.0, height: 0.0 });
        assert_eq!(r.source_center, Pnt::from_coords(0.0, 1e308, 0.0));
        Ok(())
    }

    #[test]
    fn test_tiny_extent_keeps_axis_ratio() -> Result<()> {
        let mut calc = Calculator::default();
        let c = curve(&[(0.0, 0.0, 0.0), (5e-8, 5e-8, 0.0)]);
        let r = calc.calculate_dimensions(&[c], &planar())?;
        assert!((r.axis_ratio.x() - 0.4).abs() < 1e-4);
        assert!((r.axis_ratio.y() - 0.4).abs() < 1e-4);
        Ok(())
    }

    #[test]
    fn test_export_paths_top_left() -> Result<()> {
        let mut calc = Calculator::default();
        let curves = [
            curve(&[(0.0, 0.0, 0.0), (100.0, 50.0, 0.0)]),
            curve(&[]),
            curve(&[(50.0, 25.0, 0.0)]),
        ];
        let config = planar().with_scale(2.0);
        let paths = calc.export_paths(&curves, &config)?;
        let r = calc.last_result().copied().unwrap();
        assert_eq!(r.dimensions, Dimensions { width: 80.0, height: 40.0 });
        assert_eq!(paths.len(), 3);
        assert!(paths[1].is_empty());
        let first = &paths[0];
        assert!(first[0].is_equal(&Pnt2d::from_coords(0.0, 0.0), TOLERANCE));
        assert!(first[1].is_equal(&Pnt2d::from_coords(80.0, 40.0), TOLERANCE));
        assert!(paths[2][0].is_equal(&Pnt2d::from_coords(40.0, 20.0), TOLERANCE));
        for p in paths.iter().flatten() {
            assert!(p.x() > -TOLERANCE && p.x() < r.dimensions.width + TOLERANCE);
            assert!(p.y() > -TOLERANCE && p.y() < r.dimensions.height + TOLERANCE);
        }
        Ok(())
    }

    #[test]
    fn test_export_paths_centered() -> Result<()> {
        let mut calc = Calculator::default();
        let curves = [curve(&[(0.0, 0.0, 0.0), (100.0, 50.0, 0.0)])];
        let config = planar().with_origin(OriginConvention::Center);
        let paths = calc.export_paths(&curves, &config)?;
        assert!(paths[0][0].is_equal(&Pnt2d::from_coords(-20.0, -10.0), TOLERANCE));
        assert!(paths[0][1].is_equal(&Pnt2d::from_coords(20.0, 10.0), TOLERANCE));
        assert!(paths[0][0].midpoint(&paths[0][1]).is_equal(&Pnt2d::from_coords(0.0, 0.0), TOLERANCE));
        Ok(())
    }
}
