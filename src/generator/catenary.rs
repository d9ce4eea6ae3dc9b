//! Catenary sag curves: the shape of a rope hung between two anchors.

use crate::error::{GeneratorError, Result};
use crate::math::Point3;

/// Iteration cap for the sag solve.
const MAX_TRIES: usize = 100;

/// Relative-error target that ends the sag solve early.
const SAG_TOLERANCE: f64 = 0.001;

/// Height of the catenary `y = sag * cosh(x / sag)` at `x`.
#[must_use]
pub fn height_at(sag: f64, x: f64) -> f64 {
    sag * (x / sag).cosh()
}

/// Solves the sag factor for a chord of length `span` hung from a rope of
/// length `rope_length`.
///
/// Fixed-point iteration on `a = span/2 / asinh(rope/2 / a)`, stopping
/// once the relative change drops below [`SAG_TOLERANCE`].
///
/// # Errors
///
/// Returns an error if the span exceeds the rope length: the rope cannot
/// reach.
pub fn solve_sag(span: f64, rope_length: f64) -> Result<f64> {
    if span > rope_length {
        return Err(GeneratorError::RopeTooShort { span, rope_length }.into());
    }

    let half_span = span * 0.5;
    let half_rope = rope_length * 0.5;
    let mut sag = 100.0;
    for _ in 0..MAX_TRIES {
        let next = half_span / (half_rope / sag).asinh();
        let error = ((next - sag) / sag).abs();
        sag = next;
        if error < SAG_TOLERANCE {
            break;
        }
    }
    Ok(sag)
}

/// Interior points of a catenary hung between `p0` and `p1`.
///
/// Returns `segments` points, excluding the anchors themselves. The sag is
/// applied along the y axis, downward unless `invert` is set.
///
/// # Errors
///
/// Returns an error if the anchor distance exceeds `rope_length`.
pub fn between(
    p0: &Point3,
    p1: &Point3,
    rope_length: f64,
    segments: usize,
    invert: bool,
) -> Result<Vec<Point3>> {
    let span = (p1 - p0).norm();
    let sag = solve_sag(span, rope_length)?;

    let steps = segments + 1;
    let half_span = span * 0.5;
    // cosh is minimal mid-span; offsetting by the anchor height zeroes the
    // drop at both ends.
    let offset = height_at(sag, -half_span);
    let step = span / steps as f64;

    let mut points = Vec::with_capacity(segments);
    for i in 1..steps {
        let t = i as f64 / steps as f64;
        let mut point = Point3::from(p0.coords.lerp(&p1.coords, t));
        let x = i as f64 * step - half_span;
        let drop = offset - height_at(sag, x);
        point.y = if invert { point.y + drop } else { point.y - drop };
        points.push(point);
    }
    Ok(points)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CurvetError;

    #[test]
    fn rope_shorter_than_span_is_rejected() {
        let err = solve_sag(5.0, 4.0).unwrap_err();
        assert!(matches!(
            err,
            CurvetError::Generator(GeneratorError::RopeTooShort { .. })
        ));
    }

    #[test]
    fn solved_sag_reproduces_rope_length() {
        // Arc length of y = a*cosh(x/a) over [-s/2, s/2] is 2a*sinh(s/2a).
        let span = 4.0;
        let rope = 5.0;
        let sag = solve_sag(span, rope).unwrap();
        let arc = 2.0 * sag * (span / (2.0 * sag)).sinh();
        assert!((arc - rope).abs() / rope < 0.01);
    }

    #[test]
    fn interior_points_sag_below_the_chord() {
        let p0 = Point3::new(0.0, 2.0, 0.0);
        let p1 = Point3::new(4.0, 2.0, 0.0);
        let points = between(&p0, &p1, 5.0, 5, false).unwrap();
        assert_eq!(points.len(), 5);
        for point in &points {
            assert!(point.y < 2.0, "point {point} should hang below the chord");
        }
        // Deepest near the middle.
        let mid = points[2].y;
        assert!(points[0].y > mid && points[4].y > mid);
    }

    #[test]
    fn inverted_points_rise_above_the_chord() {
        let p0 = Point3::new(0.0, 0.0, 0.0);
        let p1 = Point3::new(4.0, 0.0, 0.0);
        let points = between(&p0, &p1, 5.0, 3, true).unwrap();
        for point in &points {
            assert!(point.y > 0.0);
        }
    }

    #[test]
    fn drop_vanishes_at_anchors() {
        let span = 4.0;
        let sag = solve_sag(span, 5.0).unwrap();
        let offset = height_at(sag, -span * 0.5);
        assert!((offset - height_at(sag, span * 0.5)).abs() < 1e-9);
    }
}
