use crate::math::{Point3, Vector3};
use crate::spline::{ControlPoint, SegmentSpan, SplineSample};

use super::Basis;

/// Cubic Bezier basis.
///
/// Four control points per segment, advancing three points per segment.
#[derive(Debug, Clone, Copy)]
pub struct BezierCubic;

impl BezierCubic {
    /// Cubic Bernstein blend of `a`, `b`, `c`, `d` at `t`.
    #[must_use]
    pub fn position(a: &Point3, b: &Point3, c: &Point3, d: &Point3, t: f64) -> Point3 {
        let s = 1.0 - t;
        let ss = s * s;
        let tt = t * t;
        Point3::from(
            a.coords * (ss * s)
                + b.coords * (3.0 * ss * t)
                + c.coords * (3.0 * s * tt)
                + d.coords * (tt * t),
        )
    }

    /// First derivative: `3(1-t)^2(b-a) + 6(1-t)t(c-b) + 3t^2(d-c)`.
    #[must_use]
    pub fn velocity(a: &Point3, b: &Point3, c: &Point3, d: &Point3, t: f64) -> Vector3 {
        let s = 1.0 - t;
        (b - a) * (3.0 * s * s) + (c - b) * (6.0 * s * t) + (d - c) * (3.0 * t * t)
    }

    /// Second derivative: `6t((d-a) + 3(b-c)) + 6(a - 2b + c)`.
    #[must_use]
    pub fn acceleration(a: &Point3, b: &Point3, c: &Point3, d: &Point3, t: f64) -> Vector3 {
        let swing = (d - a) + (b - c) * 3.0;
        let bend = a.coords - b.coords * 2.0 + c.coords;
        swing * (6.0 * t) + bend * 6.0
    }
}

impl Basis for BezierCubic {
    type Attrib = ();

    const ARITY: usize = 4;
    const ADVANCE: usize = 3;

    fn curve_count(point_count: usize, is_loop: bool) -> usize {
        if point_count < Self::ARITY {
            return 0;
        }
        let open = (point_count - 1) / Self::ADVANCE;
        if is_loop {
            open + 1
        } else {
            open
        }
    }

    fn sample(points: &[ControlPoint<()>], span: &SegmentSpan) -> SplineSample {
        let [ai, bi, ci, di] = span.indices;
        let (a, b, c, d) = (
            &points[ai].position,
            &points[bi].position,
            &points[ci].position,
            &points[di].position,
        );
        SplineSample {
            position: Self::position(a, b, c, d, span.local_t),
            velocity: Self::velocity(a, b, c, d, span.local_t),
            acceleration: Some(Self::acceleration(a, b, c, d, span.local_t)),
        }
    }
}
