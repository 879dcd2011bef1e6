//! Phase accumulators and the waveforms evaluated on them.

pub mod click;
pub mod waveform;

#[allow(unused_imports)]
use num_traits::float::Float;

use core::f32::consts::TAU;

use crate::SAMPLE_RATE;

/// Sine of a normalized phase.
#[inline]
pub fn sine(phase: f32) -> f32 {
    (phase * TAU).sin()
}

/// Phase accumulator in `[0.0, 1.0)`.
#[derive(Debug, Default, Clone)]
pub struct Phasor {
    phase: f32,
}

impl Phasor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        self.phase = 0.0;
    }

    /// Advance by `frequency` Hz worth of one sample and return the new phase.
    ///
    /// Negative frequencies (deep FM) run the phase backwards and wrap from below.
    #[inline]
    pub fn advance(&mut self, frequency: f32) -> f32 {
        let phase = self.phase + frequency / SAMPLE_RATE;
        self.phase = phase - phase.floor();
        if !(0.0..1.0).contains(&self.phase) {
            self.phase = 0.0;
        }
        self.phase
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }
}
