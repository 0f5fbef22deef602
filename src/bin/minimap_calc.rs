//! Reads sampled curves from stdin and prints minimap dimensions and
//! output positions.
//!
//! Input: one `x y z` triple per line, curves separated by blank lines,
//! `#` starts a comment. An optional first argument names a JSON
//! `SpaceMappingConfig`.

use anyhow::{bail, Context, Result};
use minimap::logging::{init_logging, LoggingConfig};
use minimap::{Calculator, CoordinateFormat, DecimalSeparator, Pnt, SampledCurve, SpaceMappingConfig};
use std::io::Read;

fn parse_curves(text: &str) -> Result<Vec<SampledCurve>> {
    let mut curves = Vec::new();
    let mut points = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            if !points.is_empty() {
                curves.push(SampledCurve::new(format!("curve{}", curves.len()), std::mem::take(&mut points)));
            }
            continue;
        }
        let coords = line
            .split_whitespace()
            .map(|t| t.parse::<f64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .with_context(|| format!("line {}: bad number", lineno + 1))?;
        let &[x, y, z] = coords.as_slice() else {
            bail!("line {}: expected 3 coordinates, got {}", lineno + 1, coords.len());
        };
        points.push(Pnt::from_coords(x, y, z));
    }
    if !points.is_empty() {
        curves.push(SampledCurve::new(format!("curve{}", curves.len()), points));
    }
    Ok(curves)
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
            serde_json::from_str::<SpaceMappingConfig>(&text).with_context(|| format!("parsing {}", path))?
        }
        None => SpaceMappingConfig::default(),
    };

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input).context("reading stdin")?;
    let curves = parse_curves(&input)?;

    let mut calc = Calculator::default();
    let result = calc.calculate_dimensions(&curves, &config)?;
    let fmt = CoordinateFormat::from_config(&config, DecimalSeparator::Dot);

    println!("curves: {} ({} points)", result.curve_count, result.point_count);
    println!(
        "dimensions: {} x {}",
        fmt.format_value(result.dimensions.width),
        fmt.format_value(result.dimensions.height)
    );
    println!("output center: {}", fmt.format_point(result.output_center));
    println!(
        "axis ratio: {} / {}",
        fmt.format_value(result.axis_ratio.x()),
        fmt.format_value(result.axis_ratio.y())
    );

    println!(
        "view box: 0 0 {} {}",
        fmt.format_value(result.dimensions.width),
        fmt.format_value(result.dimensions.height)
    );
    let paths = calc.export_paths(&curves, &config)?;
    for (curve, path) in curves.iter().zip(&paths) {
        let coords: Vec<String> = path.iter().map(|p| fmt.format_point(*p)).collect();
        println!("{}: {}", curve.name, coords.join(" "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_curves_blocks() {
        let text = "0 0 0\n1 2 3 # end\n\n\n4 5 6\n";
        let curves = parse_curves(text).unwrap();
        assert_eq!(curves.len(), 2);
        assert_eq!(curves[0].points.len(), 2);
        assert_eq!(curves[1].points[0], Pnt::from_coords(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_parse_curves_rejects_bad_lines() {
        assert!(parse_curves("1 2\n").is_err());
        assert!(parse_curves("1 x 3\n").is_err());
    }
}
