use crate::math::{Point3, Vector3};
use crate::spline::{ControlPoint, SegmentSpan, SplineSample};

use super::Basis;

/// Quadratic Bezier basis.
///
/// Three control points per segment; consecutive segments advance by two
/// points so each segment's last point is the next segment's first.
#[derive(Debug, Clone, Copy)]
pub struct BezierQuad;

impl BezierQuad {
    /// De Casteljau blend of `a`, `b`, `c` at `t`.
    #[must_use]
    pub fn position(a: &Point3, b: &Point3, c: &Point3, t: f64) -> Point3 {
        let ab = a.coords.lerp(&b.coords, t);
        let bc = b.coords.lerp(&c.coords, t);
        Point3::from(ab.lerp(&bc, t))
    }

    /// First derivative: `2(1-t)(b-a) + 2t(c-b)`.
    #[must_use]
    pub fn velocity(a: &Point3, b: &Point3, c: &Point3, t: f64) -> Vector3 {
        (b - a) * (2.0 * (1.0 - t)) + (c - b) * (2.0 * t)
    }

    /// Second derivative: `2(a - 2b + c)`, constant along the segment.
    #[must_use]
    pub fn acceleration(a: &Point3, b: &Point3, c: &Point3) -> Vector3 {
        (a.coords - b.coords * 2.0 + c.coords) * 2.0
    }
}

impl Basis for BezierQuad {
    type Attrib = ();

    const ARITY: usize = 3;
    const ADVANCE: usize = 2;

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
        let [ai, bi, ci, _] = span.indices;
        let (a, b, c) = (
            &points[ai].position,
            &points[bi].position,
            &points[ci].position,
        );
        SplineSample {
            position: Self::position(a, b, c, span.local_t),
            velocity: Self::velocity(a, b, c, span.local_t),
            acceleration: Some(Self::acceleration(a, b, c)),
        }
    }
}
