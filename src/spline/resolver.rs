use crate::math::wrap_index;

/// A resolved curve segment: four wrapped control-point indices plus the
/// local parameter to feed the basis evaluator.
///
/// Three-point bases ignore the fourth index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSpan {
    pub indices: [usize; 4],
    pub local_t: f64,
}

/// Maps a global parameter into a segment index plus local parameter.
///
/// `t` must already be clamped to `[0, 1]` and `curve_count` must be
/// non-zero; the spline container enforces both. `curve_count` already
/// reflects the spline topology (a loop's wrap-around segments included),
/// so open and looped splines share this one path.
///
/// `t == 1` selects the last segment at local parameter 1 rather than a
/// segment past the end; the same guard catches float rounding that
/// scales a near-1 `t` onto `curve_count`.
#[must_use]
pub fn resolve(t: f64, point_count: usize, curve_count: usize, advance: usize) -> SegmentSpan {
    debug_assert!(curve_count > 0, "resolve requires a non-empty curve set");
    let scaled = t * curve_count as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut segment = scaled as usize;
    let mut local_t = scaled - segment as f64;
    if segment >= curve_count {
        segment = curve_count - 1;
        local_t = 1.0;
    }
    segment_span(segment, local_t, point_count, advance)
}

/// Builds the span for an explicit segment index, bypassing the global
/// parameter scaling. The arc-length table builder uses this to sample
/// every segment at uniform local-parameter steps.
#[must_use]
pub fn segment_span(
    segment: usize,
    local_t: f64,
    point_count: usize,
    advance: usize,
) -> SegmentSpan {
    let first = segment * advance;
    #[allow(clippy::cast_possible_wrap)]
    let indices = std::array::from_fn(|k| wrap_index((first + k) as isize, point_count));
    SegmentSpan { indices, local_t }
}
