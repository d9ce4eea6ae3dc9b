use thiserror::Error;

/// Top-level error type for the curvet spline library.
#[derive(Debug, Error)]
pub enum CurvetError {
    #[error(transparent)]
    Spline(#[from] SplineError),

    #[error(transparent)]
    ArcLength(#[from] ArcLengthError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

/// Errors related to spline construction and evaluation.
#[derive(Debug, Error)]
pub enum SplineError {
    #[error("spline holds {actual} control points but the basis requires at least {required}")]
    InsufficientControlPoints { required: usize, actual: usize },

    #[error("point index {index} is out of range for {point_count} control points")]
    PointOutOfRange { index: usize, point_count: usize },

    #[error("segment {segment} is out of range for {curve_count} curves")]
    SegmentOutOfRange { segment: usize, curve_count: usize },
}

/// Errors related to arc-length table construction.
#[derive(Debug, Error)]
pub enum ArcLengthError {
    #[error("samples per curve must be at least 1")]
    InvalidSampleDensity,
}

/// Errors related to the closed-form curve generators.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("catenary span {span} exceeds rope length {rope_length}")]
    RopeTooShort { span: f64, rope_length: f64 },
}

/// Convenience type alias for results using [`CurvetError`].
pub type Result<T> = std::result::Result<T, CurvetError>;
