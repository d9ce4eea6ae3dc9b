use std::f64::consts::TAU;

use crate::math::Point3;

/// Three-dimensional Lissajous figure driven by five frequency
/// multipliers.
///
/// `x` and `y` each superpose two harmonics of the base angle, `z` runs a
/// single harmonic at doubled amplitude; the defaults trace the classic
/// 5-1-5-1-2 knot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lissajous {
    pub radius: f64,
    pub freq_a: f64,
    pub freq_b: f64,
    pub freq_c: f64,
    pub freq_d: f64,
    pub freq_e: f64,
}

impl Default for Lissajous {
    fn default() -> Self {
        Self {
            radius: 1.0,
            freq_a: 5.0,
            freq_b: 1.0,
            freq_c: 5.0,
            freq_d: 1.0,
            freq_e: 2.0,
        }
    }
}

impl Lissajous {
    /// Point on the figure at parameter `t`, with the whole figure
    /// rotated by `phase` radians.
    #[must_use]
    pub fn point_at(&self, t: f64, phase: f64) -> Point3 {
        let angle = t * TAU + phase;
        Point3::new(
            self.radius * (self.freq_a * angle).cos() + self.radius * (self.freq_b * angle).cos(),
            self.radius * (self.freq_c * angle).sin() + self.radius * (self.freq_d * angle).sin(),
            2.0 * self.radius * (self.freq_e * angle).sin(),
        )
    }
}

/// Per-axis sine figure: one sine per axis with independent frequency and
/// phase offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LissajousAlt {
    pub freq_x: f64,
    pub freq_y: f64,
    pub freq_z: f64,
    pub phase_x: f64,
    pub phase_y: f64,
    pub phase_z: f64,
}

impl Default for LissajousAlt {
    fn default() -> Self {
        Self {
            freq_x: 3.0,
            freq_y: 1.0,
            freq_z: 1.0,
            phase_x: 1.0,
            phase_y: 0.0,
            phase_z: 0.0,
        }
    }
}

impl LissajousAlt {
    /// Point on the figure at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        let angle = t * TAU;
        Point3::new(
            (self.freq_x * angle + self.phase_x).sin(),
            (self.freq_y * angle + self.phase_y).sin(),
            (self.freq_z * angle + self.phase_z).sin(),
        )
    }
}
