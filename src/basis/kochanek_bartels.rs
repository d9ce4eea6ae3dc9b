use crate::math::{Point3, Vector3};
use crate::spline::{ControlPoint, SegmentSpan, SplineSample};

use super::{four_point_curve_count, Basis};

/// Per-point shape parameters for the Kochanek-Bartels basis.
///
/// `tension` scales tangent magnitude, `continuity` trades corner
/// sharpness against smoothness, `bias` skews tangents toward the
/// previous or next point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TensionContinuityBias {
    pub tension: f64,
    pub continuity: f64,
    pub bias: f64,
}

impl TensionContinuityBias {
    #[must_use]
    pub fn new(tension: f64, continuity: f64, bias: f64) -> Self {
        Self {
            tension,
            continuity,
            bias,
        }
    }
}

/// Incoming and outgoing tangents for a single segment evaluation.
///
/// Like the Hermite fold, the shape parameters are blended between the
/// segment's two active points at the call's local parameter; the two
/// tangent vectors are computed once and threaded into both the position
/// and derivative formulas.
#[derive(Debug, Clone, Copy)]
pub struct KochanekTangents {
    incoming: Vector3,
    outgoing: Vector3,
}

impl KochanekTangents {
    /// Blends `start` and `end` shape parameters at local parameter `t`
    /// and derives the two tangents from the weighted point differences.
    #[must_use]
    pub fn blend(
        a: &Point3,
        b: &Point3,
        c: &Point3,
        d: &Point3,
        start: TensionContinuityBias,
        end: TensionContinuityBias,
        t: f64,
    ) -> Self {
        let s = 1.0 - t;
        let tension = s * start.tension + t * end.tension;
        let continuity = s * start.continuity + t * end.continuity;
        let bias = s * start.bias + t * end.bias;

        let in_prev = (1.0 - tension) * (1.0 + bias) * (1.0 + continuity) * 0.5;
        let in_next = (1.0 - tension) * (1.0 - bias) * (1.0 - continuity) * 0.5;
        let out_prev = (1.0 - tension) * (1.0 + bias) * (1.0 - continuity) * 0.5;
        let out_next = (1.0 - tension) * (1.0 - bias) * (1.0 + continuity) * 0.5;

        Self {
            incoming: (b - a) * in_prev + (c - b) * in_next,
            outgoing: (c - b) * out_prev + (d - c) * out_next,
        }
    }

    /// Tangent entering the segment at `b`.
    #[must_use]
    pub fn incoming(&self) -> &Vector3 {
        &self.incoming
    }

    /// Tangent leaving the segment at `c`.
    #[must_use]
    pub fn outgoing(&self) -> &Vector3 {
        &self.outgoing
    }
}

/// Kochanek-Bartels basis with per-point tension, continuity, and bias.
///
/// Four control points per segment with unit advance; a Hermite-tangent
/// cubic blend from `b` to `c` using the derived tangents. No closed-form
/// second derivative is provided.
#[derive(Debug, Clone, Copy)]
pub struct KochanekBartels;

impl KochanekBartels {
    /// Hermite-tangent cubic blend from `b` to `c` at `t`.
    #[must_use]
    pub fn position(b: &Point3, c: &Point3, tangents: &KochanekTangents, t: f64) -> Point3 {
        let t2 = t * t;
        let t3 = t2 * t;
        let span = c - b;
        Point3::from(
            b.coords
                + tangents.incoming * t
                + (span * 3.0 - tangents.incoming * 2.0 - tangents.outgoing) * t2
                + (span * -2.0 + tangents.incoming + tangents.outgoing) * t3,
        )
    }

    /// Polynomial derivative of the blend.
    #[must_use]
    pub fn velocity(b: &Point3, c: &Point3, tangents: &KochanekTangents, t: f64) -> Vector3 {
        let t2 = t * t;
        let span = c - b;
        tangents.incoming
            + (span * 3.0 - tangents.incoming * 2.0 - tangents.outgoing) * (2.0 * t)
            + (span * -2.0 + tangents.incoming + tangents.outgoing) * (3.0 * t2)
    }
}

impl Basis for KochanekBartels {
    type Attrib = TensionContinuityBias;

    const ARITY: usize = 4;
    const ADVANCE: usize = 1;

    fn curve_count(point_count: usize, is_loop: bool) -> usize {
        four_point_curve_count(point_count, is_loop)
    }

    fn sample(points: &[ControlPoint<TensionContinuityBias>], span: &SegmentSpan) -> SplineSample {
        let [ai, bi, ci, di] = span.indices;
        let (a, b, c, d) = (
            &points[ai].position,
            &points[bi].position,
            &points[ci].position,
            &points[di].position,
        );
        let tangents = KochanekTangents::blend(
            a,
            b,
            c,
            d,
            points[bi].attrib,
            points[ci].attrib,
            span.local_t,
        );
        SplineSample {
            position: Self::position(b, c, &tangents, span.local_t),
            velocity: Self::velocity(b, c, &tangents, span.local_t),
            acceleration: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn wave() -> (Point3, Point3, Point3, Point3) {
        (
            Point3::new(0.0, 1.0, 0.5),
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(2.0, 1.0, -0.5),
            Point3::new(3.0, -1.0, 0.0),
        )
    }

    #[test]
    fn interpolates_interior_points() {
        let (a, b, c, d) = wave();
        let zero = TensionContinuityBias::default();
        let tan0 = KochanekTangents::blend(&a, &b, &c, &d, zero, zero, 0.0);
        let tan1 = KochanekTangents::blend(&a, &b, &c, &d, zero, zero, 1.0);
        assert!((KochanekBartels::position(&b, &c, &tan0, 0.0) - b).norm() < TOLERANCE);
        assert!((KochanekBartels::position(&b, &c, &tan1, 1.0) - c).norm() < TOLERANCE);
    }

    #[test]
    fn zero_parameters_match_catmull_rom() {
        // All-zero shape parameters collapse every weight to 0.5, giving
        // tangents 0.5(c-a) and 0.5(d-b) in all three components. This
        // pins the component-wise tangent computation: the original
        // implementation overwrote one component of the outgoing tangent
        // and never matched Catmull-Rom off the x axis.
        let (a, b, c, d) = wave();
        let zero = TensionContinuityBias::default();
        for i in 0..=4 {
            let t = f64::from(i) / 4.0;
            let tangents = KochanekTangents::blend(&a, &b, &c, &d, zero, zero, t);
            assert!((tangents.incoming() - (c - a) * 0.5).norm() < TOLERANCE);
            assert!((tangents.outgoing() - (d - b) * 0.5).norm() < TOLERANCE);
            let kb = KochanekBartels::position(&b, &c, &tangents, t);
            let catmull = crate::basis::CatmullRom::position(&a, &b, &c, &d, t);
            assert!((kb - catmull).norm() < TOLERANCE);
        }
    }

    #[test]
    fn full_tension_zeroes_tangents() {
        let (a, b, c, d) = wave();
        let tense = TensionContinuityBias::new(1.0, 0.0, 0.0);
        let tangents = KochanekTangents::blend(&a, &b, &c, &d, tense, tense, 0.5);
        assert!(tangents.incoming().norm() < TOLERANCE);
        assert!(tangents.outgoing().norm() < TOLERANCE);
    }

    #[test]
    fn velocity_matches_finite_difference_for_fixed_tangents() {
        let (a, b, c, d) = wave();
        let attrib = TensionContinuityBias::new(0.2, -0.3, 0.4);
        let h = 1e-6;
        let t = 0.45;
        let tangents = KochanekTangents::blend(&a, &b, &c, &d, attrib, attrib, t);
        let p0 = KochanekBartels::position(&b, &c, &tangents, t - h);
        let p1 = KochanekBartels::position(&b, &c, &tangents, t + h);
        let numeric = (p1 - p0) / (2.0 * h);
        let analytic = KochanekBartels::velocity(&b, &c, &tangents, t);
        assert!((numeric - analytic).norm() < 1e-6);
    }
}
