pub mod resolver;

pub use resolver::SegmentSpan;

use std::marker::PhantomData;

use crate::basis::{
    Basis, BezierCubic, BezierQuad, BSplineCubic, CardinalHermite, CatmullRom, KochanekBartels,
};
use crate::error::{Result, SplineError};
use crate::math::{Point3, Vector3};

/// Quadratic Bezier spline.
pub type BezierQuadSpline = Spline<BezierQuad>;
/// Cubic Bezier spline.
pub type BezierCubicSpline = Spline<BezierCubic>;
/// Uniform cubic B-spline.
pub type CubicBSpline = Spline<BSplineCubic>;
/// Catmull-Rom spline.
pub type CatmullRomSpline = Spline<CatmullRom>;
/// Cardinal Hermite spline with per-point tension/bias.
pub type HermiteSpline = Spline<CardinalHermite>;
/// Kochanek-Bartels spline with per-point tension/continuity/bias.
pub type KochanekBartelsSpline = Spline<KochanekBartels>;

/// A spline control point: a position plus the per-point shape attributes
/// of the owning spline's basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint<A> {
    pub position: Point3,
    pub attrib: A,
}

impl<A> ControlPoint<A> {
    #[must_use]
    pub fn new(position: Point3, attrib: A) -> Self {
        Self { position, attrib }
    }
}

/// Position and derivatives of a spline at one parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineSample {
    pub position: Point3,
    /// First derivative with respect to the segment-local parameter.
    pub velocity: Vector3,
    /// Second derivative; `None` for bases without a closed form
    /// (B-spline, Hermite, Kochanek-Bartels).
    pub acceleration: Option<Vector3>,
}

/// A piecewise parametric curve over an ordered control-point sequence.
///
/// Insertion order defines the curve topology. The curve count is derived
/// from the point count, the loop flag, and the basis arity; it stays zero
/// until enough points exist, and evaluating in that state fails with
/// [`SplineError::InsufficientControlPoints`] rather than dividing by the
/// empty curve set.
///
/// Mutating points after an [`crate::arclen::ArcLengthTable`] was built
/// leaves that table stale; rebuilding it is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct Spline<B: Basis> {
    points: Vec<ControlPoint<B::Attrib>>,
    is_loop: bool,
    default_attrib: B::Attrib,
    _basis: PhantomData<B>,
}

impl<B: Basis> Default for Spline<B> {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            is_loop: false,
            default_attrib: B::Attrib::default(),
            _basis: PhantomData,
        }
    }
}

impl<B: Basis> Spline<B> {
    /// Creates an empty open spline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty open spline whose [`Spline::add`] stamps `attrib`
    /// onto every new point.
    #[must_use]
    pub fn with_default_attrib(attrib: B::Attrib) -> Self {
        Self {
            default_attrib: attrib,
            ..Self::default()
        }
    }

    // --- point management ---

    /// Appends a control point with the spline's default shape
    /// attributes, returning the new point's index.
    pub fn add(&mut self, position: Point3) -> usize {
        self.add_with(position, self.default_attrib)
    }

    /// Appends a control point with explicit shape attributes, returning
    /// the new point's index.
    pub fn add_with(&mut self, position: Point3, attrib: B::Attrib) -> usize {
        self.points.push(ControlPoint::new(position, attrib));
        self.points.len() - 1
    }

    /// Overwrites a point's position.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn set_position(&mut self, index: usize, position: Point3) -> Result<()> {
        let point_count = self.points.len();
        let point = self
            .points
            .get_mut(index)
            .ok_or(SplineError::PointOutOfRange { index, point_count })?;
        point.position = position;
        Ok(())
    }

    /// Overwrites a point's shape attributes.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn set_attrib(&mut self, index: usize, attrib: B::Attrib) -> Result<()> {
        let point_count = self.points.len();
        let point = self
            .points
            .get_mut(index)
            .ok_or(SplineError::PointOutOfRange { index, point_count })?;
        point.attrib = attrib;
        Ok(())
    }

    /// Returns the control point at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn point(&self, index: usize) -> Result<&ControlPoint<B::Attrib>> {
        self.points
            .get(index)
            .ok_or(SplineError::PointOutOfRange {
                index,
                point_count: self.points.len(),
            })
            .map_err(Into::into)
    }

    /// All control points, in insertion order.
    #[must_use]
    pub fn points(&self) -> &[ControlPoint<B::Attrib>] {
        &self.points
    }

    /// Total number of control points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of curve segments derived from the current point count and
    /// topology.
    #[must_use]
    pub fn curve_count(&self) -> usize {
        B::curve_count(self.points.len(), self.is_loop)
    }

    /// Whether the ends wrap around into an extra curve.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.is_loop
    }

    /// Opens or closes the spline. The derived curve count changes on the
    /// next read.
    pub fn set_loop(&mut self, is_loop: bool) {
        self.is_loop = is_loop;
    }

    // --- evaluation ---

    /// Evaluates the spline at global parameter `t`, clamped to `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::InsufficientControlPoints`] while the curve
    /// count is zero.
    pub fn sample_at(&self, t: f64) -> Result<SplineSample> {
        let curve_count = self.ensure_curves()?;
        let span = resolver::resolve(
            t.clamp(0.0, 1.0),
            self.points.len(),
            curve_count,
            B::ADVANCE,
        );
        Ok(B::sample(&self.points, &span))
    }

    /// Evaluates one segment at local parameter `local_t`, clamped to
    /// `[0, 1]`, bypassing the global-parameter resolver. The arc-length
    /// table builder uses this for guaranteed per-segment sampling.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::InsufficientControlPoints`] while the curve
    /// count is zero, or [`SplineError::SegmentOutOfRange`] for a segment
    /// index past the last curve.
    pub fn sample_segment(&self, segment: usize, local_t: f64) -> Result<SplineSample> {
        let curve_count = self.ensure_curves()?;
        if segment >= curve_count {
            return Err(SplineError::SegmentOutOfRange {
                segment,
                curve_count,
            }
            .into());
        }
        let span = resolver::segment_span(
            segment,
            local_t.clamp(0.0, 1.0),
            self.points.len(),
            B::ADVANCE,
        );
        Ok(B::sample(&self.points, &span))
    }

    /// Position at global parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::InsufficientControlPoints`] while the curve
    /// count is zero.
    pub fn position_at(&self, t: f64) -> Result<Point3> {
        Ok(self.sample_at(t)?.position)
    }

    /// First derivative at global parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::InsufficientControlPoints`] while the curve
    /// count is zero.
    pub fn velocity_at(&self, t: f64) -> Result<Vector3> {
        Ok(self.sample_at(t)?.velocity)
    }

    fn ensure_curves(&self) -> Result<usize> {
        let curve_count = self.curve_count();
        if curve_count == 0 {
            return Err(SplineError::InsufficientControlPoints {
                required: B::ARITY,
                actual: self.points.len(),
            }
            .into());
        }
        Ok(curve_count)
    }
}
