//! Bounding rectangles and boxes, plus bounds/center utilities over point
//! sequences.

pub mod box_3d;
pub mod rect;

pub use self::box_3d::Box3d;
pub use self::rect::Rect;

use crate::gp::{Pnt, Pnt2d};
use crate::{MinimapError, Result};

/// Minimal box enclosing `points`.
///
/// Fails with `EmptyInput` for an empty slice and `InvalidGeometry` for a
/// non-finite coordinate.
pub fn bounds_of(points: &[Pnt]) -> Result<Box3d> {
    let (first, rest) = points
        .split_first()
        .ok_or_else(|| MinimapError::EmptyInput("bounds requested over zero points".to_string()))?;
    check_finite(first)?;
    rest.iter().try_fold(Box3d::from_point(*first), |acc, p| {
        check_finite(p)?;
        Ok(acc.including(*p))
    })
}

/// Minimal rectangle enclosing `points`.
pub fn bounds_of_2d(points: &[Pnt2d]) -> Result<Rect> {
    let (first, rest) = points
        .split_first()
        .ok_or_else(|| MinimapError::EmptyInput("bounds requested over zero points".to_string()))?;
    let check = |p: &Pnt2d| {
        if p.is_finite() {
            Ok(())
        } else {
            Err(MinimapError::InvalidGeometry(format!(
                "non-finite coordinate {:?}",
                p.coords()
            )))
        }
    };
    check(first)?;
    rest.iter().try_fold(Rect::from_point(*first), |acc, p| {
        check(p)?;
        Ok(acc.including(*p))
    })
}

/// Center of a 2D rectangle. Well-defined for degenerate rectangles.
#[inline]
pub fn center_of(rect: &Rect) -> Pnt2d {
    rect.center()
}

fn check_finite(p: &Pnt) -> Result<()> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(MinimapError::InvalidGeometry(format!(
            "non-finite coordinate {:?}",
            p.coords()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_of_empty() {
        assert!(matches!(bounds_of(&[]), Err(MinimapError::EmptyInput(_))));
        assert!(matches!(bounds_of_2d(&[]), Err(MinimapError::EmptyInput(_))));
    }

    #[test]
    fn test_bounds_of_points() -> Result<()> {
        let pts = [
            Pnt::from_coords(1.0, 5.0, -2.0),
            Pnt::from_coords(-3.0, 2.0, 0.0),
            Pnt::from_coords(0.0, 7.0, 4.0),
        ];
        let b = bounds_of(&pts)?;
        assert_eq!(b.min(), Pnt::from_coords(-3.0, 2.0, -2.0));
        assert_eq!(b.max(), Pnt::from_coords(1.0, 7.0, 4.0));
        Ok(())
    }

    #[test]
    fn test_bounds_of_single_repeated_point() -> Result<()> {
        let p = Pnt::from_coords(5.0, 5.0, 5.0);
        let b = bounds_of(&[p, p, p])?;
        assert_eq!(b.min(), p);
        assert_eq!(b.max(), p);
        assert_eq!(b.extent(), (0.0, 0.0, 0.0));
        Ok(())
    }

    #[test]
    fn test_bounds_of_rejects_nan() {
        let pts = [Pnt::from_coords(0.0, 0.0, 0.0), Pnt::from_coords(f64::NAN, 1.0, 1.0)];
        assert!(matches!(bounds_of(&pts), Err(MinimapError::InvalidGeometry(_))));
        let pts2 = [Pnt2d::from_coords(f64::INFINITY, 0.0)];
        assert!(matches!(bounds_of_2d(&pts2), Err(MinimapError::InvalidGeometry(_))));
    }

    #[test]
    fn test_bounds_of_2d_and_center() -> Result<()> {
        let pts = [
            Pnt2d::from_coords(0.0, 0.0),
            Pnt2d::from_coords(100.0, 50.0),
            Pnt2d::from_coords(20.0, 10.0),
        ];
        let r = bounds_of_2d(&pts)?;
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 50.0);
        assert_eq!(center_of(&r), Pnt2d::from_coords(50.0, 25.0));
        Ok(())
    }
}
