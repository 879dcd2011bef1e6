//! Attack transient: a noise/sine blend sharpened by a first-order high-pass.

use super::{sine, Phasor};
use crate::utils::crossfade;
use crate::utils::random::Random;

const HIGH_PASS_COEFFICIENT: f32 = 0.7;
const MAKEUP_GAIN: f32 = 3.0;

#[derive(Debug, Default, Clone)]
pub struct Click {
    phasor: Phasor,
    previous: f32,
}

impl Click {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        self.phasor.init();
        self.previous = 0.0;
    }

    /// Clears the high-pass history. The oscillator phase keeps running.
    pub fn trigger(&mut self) {
        self.previous = 0.0;
    }

    /// Advance the tonal component by one sample.
    #[inline]
    pub fn advance(&mut self, frequency: f32) {
        self.phasor.advance(frequency);
    }

    /// Compute one transient sample. `tone` crossfades from noise (0.0) to sine (1.0).
    #[inline]
    pub fn render(&mut self, tone: f32, level: f32, envelope: f32, random: &mut Random) -> f32 {
        let noise = random.get_bipolar();
        let tonal = sine(self.phasor.phase());
        let source = crossfade(noise, tonal, tone);

        let high_passed = source - self.previous * HIGH_PASS_COEFFICIENT;
        self.previous = source;

        high_passed * level * envelope * MAKEUP_GAIN
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phasor.phase()
    }

    #[inline]
    pub fn previous(&self) -> f32 {
        self.previous
    }
}
