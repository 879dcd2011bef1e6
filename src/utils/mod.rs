//! Utility functions shared by the voice stages.

pub mod random;

/// Linear crossfade from `a` (`fade == 0.0`) to `b` (`fade == 1.0`).
#[inline]
pub fn crossfade(a: f32, b: f32, fade: f32) -> f32 {
    a * (1.0 - fade) + b * fade
}

/// Hard limit to the valid output range.
#[inline]
pub fn hard_clip(x: f32) -> f32 {
    x.clamp(-1.0, 1.0)
}

/// Per-sample step of a linear ramp covering the full `[0, 1]` range in `time_ms`.
///
/// A zero time yields an infinite step, which the callers clamp away in a single sample.
#[inline]
pub fn ramp_step(time_ms: f32) -> f32 {
    1.0 / (time_ms / 1000.0 * crate::SAMPLE_RATE)
}
