use crate::basis::Basis;
use crate::error::{ArcLengthError, Result};
use crate::spline::Spline;

/// Sampled arc-length reparameterization table for a spline.
///
/// Built once per spline snapshot by sampling every segment at uniform
/// local-parameter steps; converts distance-based queries back into the
/// spline's global parameter. The table is immutable after build and does
/// not observe later point mutation — rebuild it after changing the
/// source spline.
#[derive(Debug, Clone)]
pub struct ArcLengthTable {
    curve_count: usize,
    samples_per_curve: usize,
    total_length: f64,
    /// Arc length from the spline start to each sample.
    cumulative: Vec<f64>,
    /// Arc length traveled since the previous sample.
    increment: Vec<f64>,
    /// Native parameter at each sample: curve index plus local t.
    native_t: Vec<f64>,
}

impl ArcLengthTable {
    /// Samples `spline` into a lookup table with `samples_per_curve`
    /// steps on every segment.
    ///
    /// # Errors
    ///
    /// Returns an error if `samples_per_curve` is zero or the spline has
    /// no curves to sample.
    pub fn build<B: Basis>(spline: &Spline<B>, samples_per_curve: usize) -> Result<Self> {
        if samples_per_curve == 0 {
            return Err(ArcLengthError::InvalidSampleDensity.into());
        }

        let curve_count = spline.curve_count();
        let sample_count = curve_count * samples_per_curve + 1;
        let mut cumulative = Vec::with_capacity(sample_count);
        let mut increment = Vec::with_capacity(sample_count);
        let mut native_t = Vec::with_capacity(sample_count);

        let mut prev = spline.sample_at(0.0)?.position;
        cumulative.push(0.0);
        increment.push(0.0);
        native_t.push(0.0);

        let mut total_length = 0.0;
        for segment in 0..curve_count {
            for step in 1..=samples_per_curve {
                let local_t = step as f64 / samples_per_curve as f64;
                let position = spline.sample_segment(segment, local_t)?.position;
                let step_length = (position - prev).norm();
                total_length += step_length;
                cumulative.push(total_length);
                increment.push(step_length);
                native_t.push(segment as f64 + local_t);
                prev = position;
            }
        }

        Ok(Self {
            curve_count,
            samples_per_curve,
            total_length,
            cumulative,
            increment,
            native_t,
        })
    }

    /// Total arc length of the sampled spline.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Number of curves the table was sampled from.
    #[must_use]
    pub fn curve_count(&self) -> usize {
        self.curve_count
    }

    /// Sample density per curve.
    #[must_use]
    pub fn samples_per_curve(&self) -> usize {
        self.samples_per_curve
    }

    /// Total number of table samples.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.cumulative.len()
    }

    /// Global parameter at a normalized arc-length fraction.
    ///
    /// The fraction is clamped to `[0, 1]`; uniform steps in the fraction
    /// travel the spline at uniform speed regardless of control-point
    /// spacing.
    #[must_use]
    pub fn parameter_at_fraction(&self, fraction: f64) -> f64 {
        if fraction >= 1.0 {
            1.0
        } else if fraction <= 0.0 {
            0.0
        } else {
            self.parameter_at_length(self.total_length * fraction)
        }
    }

    /// Global parameter at an absolute arc length from the spline start.
    ///
    /// Returns `0` when no table slot brackets the query (a degenerate or
    /// zero-length spline).
    #[must_use]
    pub fn parameter_at_length(&self, length: f64) -> f64 {
        self.lookup(length, 0, self.cumulative.len().saturating_sub(2))
    }

    /// Global parameter at an absolute arc length, with the bracket scan
    /// restricted to the slots `from_slot..=to_slot`.
    ///
    /// Slots are clamped onto the table. Returns `0` when no slot in the
    /// range brackets the query.
    #[must_use]
    pub fn parameter_at_length_between(
        &self,
        length: f64,
        from_slot: usize,
        to_slot: usize,
    ) -> f64 {
        let last_scannable = self.cumulative.len().saturating_sub(2);
        self.lookup(
            length,
            from_slot.min(last_scannable),
            to_slot.min(last_scannable),
        )
    }

    /// Global parameter at `weight` of the arc length between two control
    /// points, identified by their indices.
    ///
    /// Moves at uniform speed between two named points rather than across
    /// the whole spline. Point indices are clamped onto the table's
    /// sample range.
    #[must_use]
    pub fn parameter_at_range(&self, point_a: usize, point_b: usize, weight: f64) -> f64 {
        let last = self.cumulative.len() - 1;
        let slot_a = (point_a * self.samples_per_curve).min(last);
        let slot_b = (point_b * self.samples_per_curve).min(last);
        let length = self.cumulative[slot_a] * (1.0 - weight) + self.cumulative[slot_b] * weight;
        self.parameter_at_length_between(length, slot_a, slot_b)
    }

    /// Scans slots `hi..=lo` in descending order for the first whose
    /// cumulative length lies below `length`, then interpolates the
    /// native parameter inside the bracketing increment and normalizes it
    /// by the curve count.
    fn lookup(&self, length: f64, lo: usize, hi: usize) -> f64 {
        for i in (lo..=hi).rev() {
            if self.cumulative[i] < length && self.increment[i + 1] > 0.0 {
                let inner = (length - self.cumulative[i]) / self.increment[i + 1];
                let native = self.native_t[i] * (1.0 - inner) + self.native_t[i + 1] * inner;
                return native / self.curve_count as f64;
            }
        }
        0.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CurvetError;
    use crate::math::{Point3, TOLERANCE};
    use crate::spline::{BezierQuadSpline, CatmullRomSpline};

    /// Collinear, evenly spaced control points: arc length equals x.
    fn straight_quad() -> BezierQuadSpline {
        let mut spline = BezierQuadSpline::new();
        for i in 0..5 {
            spline.add(Point3::new(f64::from(i), 0.0, 0.0));
        }
        spline
    }

    fn bent_catmull() -> CatmullRomSpline {
        let mut spline = CatmullRomSpline::new();
        spline.add(Point3::new(-1.0, 0.0, 0.0));
        spline.add(Point3::new(0.0, 0.0, 0.0));
        spline.add(Point3::new(1.0, 2.0, 0.0));
        spline.add(Point3::new(3.0, 2.0, 0.0));
        spline.add(Point3::new(4.0, 0.0, 0.0));
        spline.add(Point3::new(5.0, 0.0, 0.0));
        spline
    }

    #[test]
    fn cumulative_lengths_are_non_decreasing() {
        let table = ArcLengthTable::build(&bent_catmull(), 16).unwrap();
        for pair in table.cumulative.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert_eq!(table.sample_count(), table.curve_count() * 16 + 1);
        assert!(
            (table.cumulative.last().unwrap() - table.total_length()).abs() < TOLERANCE,
            "last cumulative entry must equal the total length"
        );
    }

    #[test]
    fn straight_line_total_length() {
        let table = ArcLengthTable::build(&straight_quad(), 10).unwrap();
        assert!((table.total_length() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn fraction_endpoints_map_to_parameter_endpoints() {
        let table = ArcLengthTable::build(&bent_catmull(), 16).unwrap();
        assert!(table.parameter_at_fraction(0.0).abs() < TOLERANCE);
        assert!((table.parameter_at_fraction(1.0) - 1.0).abs() < TOLERANCE);
        assert!(table.parameter_at_fraction(-2.0).abs() < TOLERANCE);
        assert!((table.parameter_at_fraction(3.0) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn total_length_maps_back_to_one() {
        let table = ArcLengthTable::build(&bent_catmull(), 16).unwrap();
        let t = table.parameter_at_length(table.total_length());
        assert!((t - 1.0).abs() < 1e-9);
    }

    #[test]
    fn straight_line_fraction_is_identity() {
        // On a uniformly parameterized straight line, arc-length fraction
        // and global parameter coincide.
        let table = ArcLengthTable::build(&straight_quad(), 10).unwrap();
        for i in 1..10 {
            let fraction = f64::from(i) / 10.0;
            let t = table.parameter_at_fraction(fraction);
            assert!((t - fraction).abs() < 1e-9);
        }
    }

    #[test]
    fn fraction_steps_travel_uniform_distance() {
        let spline = bent_catmull();
        let table = ArcLengthTable::build(&spline, 64).unwrap();
        let steps = 8;
        let expected = table.total_length() / f64::from(steps);
        let mut prev = spline
            .position_at(table.parameter_at_fraction(0.0))
            .unwrap();
        for i in 1..=steps {
            let t = table.parameter_at_fraction(f64::from(i) / f64::from(steps));
            let position = spline.position_at(t).unwrap();
            let traveled = (position - prev).norm();
            // Chord length approximates arc length at this density.
            assert!(
                (traveled - expected).abs() < expected * 0.15,
                "step {i} traveled {traveled}, expected about {expected}"
            );
            prev = position;
        }
    }

    #[test]
    fn range_lookup_stays_between_points() {
        let table = ArcLengthTable::build(&bent_catmull(), 32).unwrap();
        // Control points 1 and 2 start curves 1 and 2 of 3, so the range
        // covers global parameters 1/3 to 2/3.
        let lo = table.parameter_at_range(1, 2, 0.25);
        let mid = table.parameter_at_range(1, 2, 0.5);
        let hi = table.parameter_at_range(1, 2, 0.75);
        let end = table.parameter_at_range(1, 2, 1.0);
        assert!(lo < mid && mid < hi && hi < end);
        assert!(lo > 1.0 / 3.0);
        assert!((end - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn bounded_length_lookup_matches_full_scan() {
        let table = ArcLengthTable::build(&straight_quad(), 10).unwrap();
        let t_full = table.parameter_at_length(1.5);
        let t_bounded = table.parameter_at_length_between(1.5, 0, table.sample_count());
        assert!((t_full - 0.375).abs() < 1e-9);
        assert!((t_full - t_bounded).abs() < TOLERANCE);
    }

    #[test]
    fn bounded_length_lookup_with_empty_range_finds_nothing() {
        let table = ArcLengthTable::build(&straight_quad(), 10).unwrap();
        // An inverted slot range scans nothing and falls through to 0.
        assert!(table.parameter_at_length_between(0.5, 6, 3).abs() < TOLERANCE);
    }

    #[test]
    fn zero_length_spline_maps_to_zero() {
        let mut spline = BezierQuadSpline::new();
        for _ in 0..3 {
            spline.add(Point3::new(1.0, 1.0, 1.0));
        }
        let table = ArcLengthTable::build(&spline, 4).unwrap();
        assert!(table.total_length().abs() < TOLERANCE);
        assert!(table.parameter_at_length(0.5).abs() < TOLERANCE);
        assert!(table.parameter_at_fraction(0.5).abs() < TOLERANCE);
    }

    #[test]
    fn zero_sample_density_is_rejected() {
        let err = ArcLengthTable::build(&straight_quad(), 0).unwrap_err();
        assert!(matches!(
            err,
            CurvetError::ArcLength(ArcLengthError::InvalidSampleDensity)
        ));
    }

    #[test]
    fn empty_spline_fails_to_build() {
        let spline = BezierQuadSpline::new();
        assert!(ArcLengthTable::build(&spline, 4).is_err());
    }
}
