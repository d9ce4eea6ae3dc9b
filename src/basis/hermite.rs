use crate::math::{Point3, Vector3};
use crate::spline::{ControlPoint, SegmentSpan, SplineSample};

use super::{four_point_curve_count, Basis};

/// Per-point shape parameters for the cardinal Hermite basis.
///
/// `tension` tightens (`> 0`) or slackens (`< 0`) the tangents; `bias`
/// skews them toward the previous (`> 0`) or next (`< 0`) point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TensionBias {
    pub tension: f64,
    pub bias: f64,
}

impl TensionBias {
    #[must_use]
    pub fn new(tension: f64, bias: f64) -> Self {
        Self { tension, bias }
    }
}

/// Folded tension/bias weights for a single segment evaluation.
///
/// The shape parameters are blended between the segment's two active
/// points at the call's local parameter, so they vary continuously along
/// the spline. Computing the fold once and threading it into both the
/// position and derivative formulas keeps the pair consistent without any
/// mutable spline state.
#[derive(Debug, Clone, Copy)]
pub struct HermiteCoeffs {
    weight_prev: f64,
    weight_next: f64,
}

impl HermiteCoeffs {
    /// Blends `start` and `end` shape parameters at local parameter `t`
    /// and folds them into the two tangent weights.
    #[must_use]
    pub fn blend(start: TensionBias, end: TensionBias, t: f64) -> Self {
        let s = 1.0 - t;
        let tension = s * start.tension + t * end.tension;
        let bias = s * start.bias + t * end.bias;
        Self {
            weight_prev: (1.0 + bias) * (1.0 - tension) * 0.5,
            weight_next: (1.0 - bias) * (1.0 - tension) * 0.5,
        }
    }

    /// Tangents at the segment's two active points.
    fn tangents(&self, a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> (Vector3, Vector3) {
        let m1 = (b - a) * self.weight_prev + (c - b) * self.weight_next;
        let m2 = (c - b) * self.weight_prev + (d - c) * self.weight_next;
        (m1, m2)
    }
}

/// Cardinal Hermite basis with per-point tension and bias.
///
/// Four control points per segment with unit advance; the curve runs from
/// `b` to `c`, with `a` and `d` shaping the tangents. No closed-form
/// second derivative is provided.
#[derive(Debug, Clone, Copy)]
pub struct CardinalHermite;

impl CardinalHermite {
    /// Hermite blend of the segment at `t` using pre-folded weights.
    #[must_use]
    pub fn position(
        a: &Point3,
        b: &Point3,
        c: &Point3,
        d: &Point3,
        coeffs: &HermiteCoeffs,
        t: f64,
    ) -> Point3 {
        let t2 = t * t;
        let t3 = t2 * t;
        let h0 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h1 = t3 - 2.0 * t2 + t;
        let h2 = t3 - t2;
        let h3 = -2.0 * t3 + 3.0 * t2;
        let (m1, m2) = coeffs.tangents(a, b, c, d);
        Point3::from(b.coords * h0 + m1 * h1 + m2 * h2 + c.coords * h3)
    }

    /// First derivative of the blend using the same pre-folded weights.
    #[must_use]
    pub fn velocity(
        a: &Point3,
        b: &Point3,
        c: &Point3,
        d: &Point3,
        coeffs: &HermiteCoeffs,
        t: f64,
    ) -> Vector3 {
        let t2 = t * t;
        let h0 = 6.0 * t2 - 6.0 * t;
        let h1 = 3.0 * t2 - 4.0 * t + 1.0;
        let h2 = 3.0 * t2 - 2.0 * t;
        let h3 = 6.0 * t - 6.0 * t2;
        let (m1, m2) = coeffs.tangents(a, b, c, d);
        b.coords * h0 + m1 * h1 + m2 * h2 + c.coords * h3
    }
}

impl Basis for CardinalHermite {
    type Attrib = TensionBias;

    const ARITY: usize = 4;
    const ADVANCE: usize = 1;

    fn curve_count(point_count: usize, is_loop: bool) -> usize {
        four_point_curve_count(point_count, is_loop)
    }

    fn sample(points: &[ControlPoint<TensionBias>], span: &SegmentSpan) -> SplineSample {
        let [ai, bi, ci, di] = span.indices;
        let coeffs = HermiteCoeffs::blend(points[bi].attrib, points[ci].attrib, span.local_t);
        let (a, b, c, d) = (
            &points[ai].position,
            &points[bi].position,
            &points[ci].position,
            &points[di].position,
        );
        SplineSample {
            position: Self::position(a, b, c, d, &coeffs, span.local_t),
            velocity: Self::velocity(a, b, c, d, &coeffs, span.local_t),
            acceleration: None,
        }
    }
}
