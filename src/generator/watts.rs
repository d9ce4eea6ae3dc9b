use std::f64::consts::TAU;

use crate::math::{Point3, TOLERANCE};

/// Watt's curve: the figure traced by the midpoint of a rod linking two
/// circles.
///
/// Polar parameterization from the distance between the circle centers,
/// the circle radius, and the rod length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Watts {
    pub center_distance: f64,
    pub radius: f64,
    pub rod_length: f64,
}

impl Default for Watts {
    fn default() -> Self {
        Self {
            center_distance: 1.0,
            radius: 2.0,
            rod_length: 1.0,
        }
    }
}

impl Watts {
    /// Point on the curve at parameter `t` (one full revolution over
    /// `[0, 1]`), in the z = 0 plane.
    ///
    /// The polar angle divides by `sin` of the revolution angle; where
    /// that vanishes the point lies on the x axis at the arm length.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        let angle = TAU * t;
        let cos_a = angle.cos();
        let arm = self.radius * cos_a;
        let sin_a = angle.sin();
        if sin_a.abs() < TOLERANCE {
            return Point3::new(arm, 0.0, 0.0);
        }

        let radius_sq = self.radius * self.radius;
        let reach =
            self.center_distance * self.center_distance + radius_sq - self.rod_length * self.rod_length;
        let theta = (reach - radius_sq * cos_a * cos_a) / (2.0 * self.center_distance * self.radius * sin_a);
        Point3::new(arm * theta.cos(), arm * theta.sin(), 0.0)
    }
}
