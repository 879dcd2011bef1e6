//! Resonant low-pass built from cascaded one-pole stages with global feedback.
//!
//! The coefficients are empirical. They stay stable for cutoff and resonance
//! in `[0.0, 1.0]`; values outside that range are not guarded against.

const CUTOFF_SCALE: f32 = 0.9;
const CUTOFF_OFFSET: f32 = 0.1;
const RESONANCE_SCALE: f32 = 0.98;
const FREQUENCY_SCALE: f32 = 1.16;
const INPUT_GAIN: f32 = 0.35013;
const POLE_FEEDBACK: f32 = 0.3;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FilterSlope {
    /// 2-pole, 12 dB/octave.
    #[default]
    TwelveDb,
    /// 4-pole, 24 dB/octave.
    TwentyFourDb,
}

/// Filter settings in normalized units.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FilterSettings {
    pub enabled: bool,
    /// Range: 0.0 - 1.0
    pub cutoff: f32,
    /// Range: 0.0 - 1.0
    pub resonance: f32,
    pub slope: FilterSlope,
}

#[derive(Debug, Default, Clone)]
pub struct LadderFilter {
    stages: [f32; 4],
}

impl LadderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        self.reset();
    }

    pub fn reset(&mut self) {
        self.stages = [0.0; 4];
    }

    /// Filter one sample. Returns `in_` unchanged when the filter is disabled.
    #[inline]
    pub fn process(&mut self, in_: f32, settings: &FilterSettings) -> f32 {
        if !settings.enabled {
            return in_;
        }

        let cutoff = settings.cutoff * CUTOFF_SCALE + CUTOFF_OFFSET;
        let resonance = settings.resonance * RESONANCE_SCALE;
        let f = cutoff * FREQUENCY_SCALE;
        let f2 = f * f;

        match settings.slope {
            FilterSlope::TwelveDb => {
                let feedback = resonance * 2.5 * (1.0 - 0.2 * f2);
                let input = (in_ - self.stages[1] * feedback) * INPUT_GAIN * f2;
                self.cascade(input, 2)
            }
            FilterSlope::TwentyFourDb => {
                let feedback = resonance * 4.0 * (1.0 - 0.15 * f2);
                let input = (in_ - self.stages[3] * feedback) * INPUT_GAIN * f2 * f2;
                self.cascade(input, 4)
            }
        }
    }

    /// Run `input` through the first `poles` stages and return the last one.
    #[inline]
    fn cascade(&mut self, input: f32, poles: usize) -> f32 {
        let mut x = input;
        for stage in self.stages.iter_mut().take(poles) {
            *stage = x + POLE_FEEDBACK * *stage;
            x = *stage;
        }
        x
    }

    #[inline]
    pub fn stages(&self) -> &[f32; 4] {
        &self.stages
    }
}
