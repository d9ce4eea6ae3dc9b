use crate::math::{Point3, Vector3};
use crate::spline::{ControlPoint, SegmentSpan, SplineSample};

use super::{four_point_curve_count, Basis};

/// Uniform cubic B-spline basis.
///
/// Four control points per segment with unit advance. Non-interpolating:
/// the curve hugs its control polygon without passing through the points,
/// in exchange for C2 continuity across segments.
#[derive(Debug, Clone, Copy)]
pub struct BSplineCubic;

impl BSplineCubic {
    /// Uniform cubic B-spline blend, normalized by 6.
    #[must_use]
    pub fn position(a: &Point3, b: &Point3, c: &Point3, d: &Point3, t: f64) -> Point3 {
        let t2 = t * t;
        let t3 = t2 * t;
        let wa = -t3 + 3.0 * t2 - 3.0 * t + 1.0;
        let wb = 3.0 * t3 - 6.0 * t2 + 4.0;
        let wc = -3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0;
        Point3::from((a.coords * wa + b.coords * wb + c.coords * wc + d.coords * t3) / 6.0)
    }

    /// First derivative of the blend, normalized by 6.
    #[must_use]
    pub fn velocity(a: &Point3, b: &Point3, c: &Point3, d: &Point3, t: f64) -> Vector3 {
        let t2 = t * t;
        let wa = -3.0 * t2 + 6.0 * t - 3.0;
        let wb = 9.0 * t2 - 12.0 * t;
        let wc = -9.0 * t2 + 6.0 * t + 3.0;
        let wd = 3.0 * t2;
        (a.coords * wa + b.coords * wb + c.coords * wc + d.coords * wd) / 6.0
    }
}

impl Basis for BSplineCubic {
    type Attrib = ();

    const ARITY: usize = 4;
    const ADVANCE: usize = 1;

    fn curve_count(point_count: usize, is_loop: bool) -> usize {
        four_point_curve_count(point_count, is_loop)
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
            acceleration: None,
        }
    }
}
