use crate::math::{Point3, Vector3};
use crate::spline::{ControlPoint, SegmentSpan, SplineSample};

use super::{four_point_curve_count, Basis};

/// Catmull-Rom basis (uniform formulation).
///
/// Four control points per segment with unit advance; the curve
/// interpolates the two interior points `b` and `c`, with tangents taken
/// from the neighbor differences.
#[derive(Debug, Clone, Copy)]
pub struct CatmullRom;

impl CatmullRom {
    /// `0.5 * (2b + (c-a)t + (2a - 5b + 4c - d)t^2 + (3b - a - 3c + d)t^3)`.
    #[must_use]
    pub fn position(a: &Point3, b: &Point3, c: &Point3, d: &Point3, t: f64) -> Point3 {
        let t2 = t * t;
        let t3 = t2 * t;
        Point3::from(
            (a.coords * -0.5 + b.coords * 1.5 - c.coords * 1.5 + d.coords * 0.5) * t3
                + (a.coords - b.coords * 2.5 + c.coords * 2.0 - d.coords * 0.5) * t2
                + (c - a) * (0.5 * t)
                + b.coords,
        )
    }

    /// First derivative of the blend.
    #[must_use]
    pub fn velocity(a: &Point3, b: &Point3, c: &Point3, d: &Point3, t: f64) -> Vector3 {
        let t2 = t * t;
        ((c - a)
            + (a.coords * 2.0 - b.coords * 5.0 + c.coords * 4.0 - d.coords) * (2.0 * t)
            + (b.coords * 3.0 - a.coords - c.coords * 3.0 + d.coords) * (3.0 * t2))
            * 0.5
    }

    /// Second derivative of the blend.
    #[must_use]
    pub fn acceleration(a: &Point3, b: &Point3, c: &Point3, d: &Point3, t: f64) -> Vector3 {
        a.coords * 2.0 - b.coords * 5.0 + c.coords * 4.0 - d.coords
            + (b.coords * 3.0 - a.coords - c.coords * 3.0 + d.coords) * (3.0 * t)
    }
}

impl Basis for CatmullRom {
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
            acceleration: Some(Self::acceleration(a, b, c, d, span.local_t)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn wave() -> (Point3, Point3, Point3, Point3) {
        (
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(2.0, 1.0, 0.0),
            Point3::new(3.0, -1.0, 0.0),
        )
    }

    #[test]
    fn interpolates_interior_points() {
        let (a, b, c, d) = wave();
        assert!((CatmullRom::position(&a, &b, &c, &d, 0.0) - b).norm() < TOLERANCE);
        assert!((CatmullRom::position(&a, &b, &c, &d, 1.0) - c).norm() < TOLERANCE);
    }

    #[test]
    fn tangent_at_start_is_half_neighbor_difference() {
        let (a, b, c, d) = wave();
        let v = CatmullRom::velocity(&a, &b, &c, &d, 0.0);
        assert!((v - (c - a) * 0.5).norm() < TOLERANCE);
    }

    #[test]
    fn tangent_at_end_is_half_neighbor_difference() {
        let (a, b, c, d) = wave();
        let v = CatmullRom::velocity(&a, &b, &c, &d, 1.0);
        assert!((v - (d - b) * 0.5).norm() < TOLERANCE);
    }

    #[test]
    fn velocity_matches_finite_difference() {
        let (a, b, c, d) = wave();
        let h = 1e-6;
        let t = 0.35;
        let p0 = CatmullRom::position(&a, &b, &c, &d, t - h);
        let p1 = CatmullRom::position(&a, &b, &c, &d, t + h);
        let numeric = (p1 - p0) / (2.0 * h);
        let analytic = CatmullRom::velocity(&a, &b, &c, &d, t);
        assert!((numeric - analytic).norm() < 1e-6);
    }

    #[test]
    fn acceleration_matches_finite_difference() {
        let (a, b, c, d) = wave();
        let h = 1e-5;
        let t = 0.35;
        let v0 = CatmullRom::velocity(&a, &b, &c, &d, t - h);
        let v1 = CatmullRom::velocity(&a, &b, &c, &d, t + h);
        let numeric = (v1 - v0) / (2.0 * h);
        let analytic = CatmullRom::acceleration(&a, &b, &c, &d, t);
        assert!((numeric - analytic).norm() < 1e-6);
    }
}
