//! Tanh saturation with partial loudness compensation.

#[allow(unused_imports)]
use num_traits::float::Float;

/// Saturate `x` by `drive` in `[0.0, 1.0]`. A drive of zero leaves the signal untouched.
#[inline]
pub fn overdrive(x: f32, drive: f32) -> f32 {
    if drive > 0.0 {
        let pre_gain = 1.0 + drive * 4.0;
        let post_gain = 1.0 / (1.0 + drive * 1.5);
        (x * pre_gain).tanh() * post_gain
    } else {
        x
    }
}
