//! Amplitude envelope state machine and the auxiliary linear decay trackers.
//!
//! All envelopes are linear ramps. The amplitude envelope moves through
//! `Idle -> Attack -> Decay -> Idle`, with `Release` entered from `Attack` or `Decay`
//! on note-off. The `Decay` stage uses the release time, not the pitch decay time.
//! This quirk is part of the sound of the unit and is kept as is.

use crate::utils::ramp_step;

/// Stage of the amplitude envelope.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopePhase {
    #[default]
    Idle,
    Attack,
    Decay,
    Release,
}

#[derive(Debug, Default, Clone)]
pub struct AmpEnvelope {
    phase: EnvelopePhase,
    value: f32,
}

impl AmpEnvelope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        self.phase = EnvelopePhase::Idle;
        self.value = 0.0;
    }

    /// Restart from zero in the attack stage.
    pub fn trigger(&mut self) {
        self.phase = EnvelopePhase::Attack;
        self.value = 0.0;
    }

    /// Enter the release stage. Has no effect when idle or already releasing.
    pub fn release(&mut self) {
        if matches!(self.phase, EnvelopePhase::Attack | EnvelopePhase::Decay) {
            self.phase = EnvelopePhase::Release;
        }
    }

    /// Advance by one sample.
    #[inline]
    pub fn process(&mut self, attack_ms: f32, release_ms: f32) {
        match self.phase {
            EnvelopePhase::Attack => {
                self.value += ramp_step(attack_ms);
                if self.value >= 1.0 {
                    self.value = 1.0;
                    self.phase = EnvelopePhase::Decay;
                }
            }
            EnvelopePhase::Decay | EnvelopePhase::Release => {
                self.value -= ramp_step(release_ms);
                if self.value <= 0.0 {
                    self.value = 0.0;
                    self.phase = EnvelopePhase::Idle;
                }
            }
            EnvelopePhase::Idle => {}
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn phase(&self) -> EnvelopePhase {
        self.phase
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase != EnvelopePhase::Idle
    }
}

/// Linear 1 -> 0 ramp, used for the pitch sweep, the secondary oscillator and the click.
#[derive(Debug, Default, Clone)]
pub struct DecayTracker {
    value: f32,
}

impl DecayTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        self.value = 0.0;
    }

    pub fn trigger(&mut self) {
        self.value = 1.0;
    }

    #[inline]
    pub fn process(&mut self, decay_ms: f32) {
        self.value = (self.value - ramp_step(decay_ms)).clamp(0.0, 1.0);
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }
}
