/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Floor modulo: the result lies in `[0, modulus)` even for negative input.
///
/// Looped splines index control points past the end of the sequence, and the
/// wrapped index must stay non-negative where `%` would not.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn wrap_index(value: isize, modulus: usize) -> usize {
    debug_assert!(modulus > 0, "wrap_index requires a non-zero modulus");
    value.rem_euclid(modulus as isize) as usize
}
