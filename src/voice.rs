//! Kick drum voice: envelopes, oscillators, drive, filter and output stage.
//!
//! The voice renders one sample at a time in a fixed order:
//!
//! 1. Amplitude envelope, then the pitch, secondary oscillator and click decays.
//! 2. Body sine swept by the pitch decay, optionally frequency modulated by the
//!    secondary oscillator, plus the secondary oscillator and click outputs.
//! 3. Sum and tanh drive.
//! 4. Optional 12 or 24 dB resonant low-pass.
//! 5. Makeup gain, envelope and velocity, hard limit.
//!
//! Control calls (`set_parameter`, `load_preset`, `note_on`, ...) are expected
//! between render calls from the same thread. Nothing here allocates or locks.

use crate::envelope::{AmpEnvelope, DecayTracker, EnvelopePhase};
use crate::fx::ladder_filter::LadderFilter;
use crate::fx::overdrive::overdrive;
use crate::oscillator::click::Click;
use crate::oscillator::{sine, Phasor};
use crate::patch::{ParamId, Patch, PLACEHOLDER};
use crate::preset::Preset;
use crate::unit::{RuntimeDesc, UnitError};
use crate::utils::hard_clip;
use crate::utils::random::Random;
use crate::{NOTE_ALL, NUM_OUTPUT_CHANNELS};

const FM_DEPTH_HZ: f32 = 100.0;
const OUTPUT_GAIN: f32 = 1.3;
const MAX_VELOCITY: f32 = 127.0;

#[derive(Debug, Clone)]
pub struct Voice {
    patch: Patch,
    preset_index: u8,

    body: Phasor,
    osc2: Phasor,
    click: Click,

    amp_envelope: AmpEnvelope,
    pitch_envelope: DecayTracker,
    osc2_envelope: DecayTracker,
    click_envelope: DecayTracker,

    filter: LadderFilter,
    random: Random,

    current_note: u8,
    current_velocity: f32,
}

impl Default for Voice {
    fn default() -> Self {
        Self::new()
    }
}

impl Voice {
    /// Idle voice with the default patch.
    pub fn new() -> Self {
        Self {
            patch: Patch::default(),
            preset_index: 0,
            body: Phasor::new(),
            osc2: Phasor::new(),
            click: Click::new(),
            amp_envelope: AmpEnvelope::new(),
            pitch_envelope: DecayTracker::new(),
            osc2_envelope: DecayTracker::new(),
            click_envelope: DecayTracker::new(),
            filter: LadderFilter::new(),
            random: Random::new(),
            current_note: 0,
            current_velocity: 0.0,
        }
    }

    /// Check the host runtime, then reset the voice and restore the default patch.
    pub fn init(&mut self, desc: &RuntimeDesc) -> Result<(), UnitError> {
        if let Err(err) = desc.validate() {
            log::warn!("Rejecting runtime: {err}");
            return Err(err);
        }

        self.reset();
        self.patch = Patch::default();
        self.preset_index = 0;
        log::info!(
            "Voice initialized at {} Hz, {} channels",
            desc.sample_rate,
            desc.output_channels
        );

        Ok(())
    }

    pub fn teardown(&mut self) {}

    pub fn suspend(&mut self) {}

    pub fn resume(&mut self) {}

    /// Zero all voice state. The patch is left untouched.
    pub fn reset(&mut self) {
        self.body.init();
        self.osc2.init();
        self.click.init();
        self.amp_envelope.init();
        self.pitch_envelope.init();
        self.osc2_envelope.init();
        self.click_envelope.init();
        self.filter.init();
        self.current_note = 0;
        self.current_velocity = 0.0;
    }

    /// Reseed the noise source used by the click and the noise waveform.
    pub fn seed(&mut self, seed: u32) {
        self.random.seed(seed);
    }

    /// Write `frames` interleaved stereo frames to `out`, identical on both channels.
    ///
    /// Frames that do not fit into `out` are skipped.
    #[inline]
    pub fn render(&mut self, out: &mut [f32], frames: usize) {
        for frame in out.chunks_exact_mut(NUM_OUTPUT_CHANNELS).take(frames) {
            let value = self.process();
            frame.fill(value);
        }
    }

    /// Compute the next mono sample.
    #[inline]
    pub fn process(&mut self) -> f32 {
        let patch = &self.patch;

        self.amp_envelope.process(patch.attack, patch.release);
        let active = self.amp_envelope.is_active();

        if active {
            self.pitch_envelope.process(patch.decay);
            self.osc2_envelope.process(patch.osc2_decay);
            self.click_envelope.process(patch.click_decay);
        }

        let body_frequency = self.body_frequency();
        let osc2_frequency = body_frequency * patch.osc2_pitch;

        let fm = if patch.osc2_enabled && patch.fm_amount > 0.0 {
            sine(self.osc2.phase()) * patch.fm_amount * self.osc2_envelope.value() * FM_DEPTH_HZ
        } else {
            0.0
        };

        let body_phase = self.body.advance(body_frequency + fm);
        let osc2_phase = self.osc2.advance(osc2_frequency * patch.fm_ratio);
        self.click.advance(patch.click_frequency);

        let body = sine(body_phase) * patch.body_level;

        let osc2 = if patch.osc2_enabled {
            patch.waveform().render(osc2_phase, &mut self.random)
                * patch.osc2_level
                * self.osc2_envelope.value()
        } else {
            0.0
        };

        let click_envelope = self.click_envelope.value();
        let click = if active && click_envelope > 0.0 {
            self.click.render(
                patch.click_tone,
                patch.click_level,
                click_envelope,
                &mut self.random,
            )
        } else {
            0.0
        };

        let mixed = overdrive(body + osc2 + click, patch.drive);
        let filtered = self.filter.process(mixed, &patch.filter);

        hard_clip(
            filtered * OUTPUT_GAIN * self.amp_envelope.value() * self.current_velocity,
        )
    }

    pub fn set_parameter(&mut self, index: u8, value: i32) {
        match ParamId::try_from(index) {
            Ok(id) => {
                log::trace!("Set {id:?} to {value}");
                self.patch.set(id, value);
            }
            Err(index) => log::debug!("Ignoring write to unknown parameter {index}"),
        }
    }

    /// Raw value of a parameter, or 0 for unknown indices.
    pub fn parameter_value(&self, index: u8) -> i32 {
        ParamId::try_from(index).map_or(0, |id| self.patch.get(id))
    }

    pub fn parameter_str_value(&self, index: u8, value: i32) -> &'static str {
        ParamId::try_from(index).map_or(PLACEHOLDER, |id| Patch::str_value(id, value))
    }

    pub fn parameter_bmp_value(&self, index: u8, value: i32) -> &'static [u8; 32] {
        match ParamId::try_from(index) {
            Ok(id) => Patch::bmp_value(id, value),
            Err(_) => Patch::bmp_value(ParamId::Osc2Waveform, 0),
        }
    }

    /// Retrigger the voice. All envelopes restart and the filter memory is cleared.
    pub fn note_on(&mut self, note: u8, velocity: u8) {
        self.current_note = note;
        self.current_velocity = velocity as f32 / MAX_VELOCITY;

        self.amp_envelope.trigger();
        self.pitch_envelope.trigger();
        self.osc2_envelope.trigger();
        self.click_envelope.trigger();

        self.click.trigger();
        self.filter.reset();
    }

    /// Release the voice if `note` is the sounding note or [`NOTE_ALL`].
    pub fn note_off(&mut self, note: u8) {
        if note == self.current_note || note == NOTE_ALL {
            self.amp_envelope.release();
        }
    }

    pub fn gate_on(&mut self, velocity: u8) {
        self.note_on(NOTE_ALL, velocity);
    }

    pub fn gate_off(&mut self) {
        self.note_off(NOTE_ALL);
    }

    pub fn all_note_off(&mut self) {
        self.note_off(NOTE_ALL);
    }

    pub fn pitch_bend(&mut self, _bend: u16) {}

    pub fn channel_pressure(&mut self, _pressure: u8) {}

    pub fn aftertouch(&mut self, _note: u8, _aftertouch: u8) {}

    /// Replace the whole patch with a factory preset. Unknown indices are ignored.
    pub fn load_preset(&mut self, index: u8) {
        match Preset::try_from(index) {
            Ok(preset) => {
                self.patch = preset.patch();
                self.preset_index = index;
                log::info!("Loaded preset {index}: {}", preset.name());
            }
            Err(index) => log::debug!("Ignoring unknown preset {index}"),
        }
    }

    pub fn preset_index(&self) -> u8 {
        self.preset_index
    }

    pub fn preset_name(index: u8) -> &'static str {
        Preset::name_for_index(index)
    }

    pub fn patch(&self) -> &Patch {
        &self.patch
    }

    pub fn set_patch(&mut self, patch: Patch) {
        self.patch = patch;
    }

    /// Body frequency in Hz before frequency modulation.
    #[inline]
    pub fn body_frequency(&self) -> f32 {
        self.patch.pitch * (1.0 - self.pitch_envelope.value() * self.patch.pitch_curve)
    }

    pub fn envelope_phase(&self) -> EnvelopePhase {
        self.amp_envelope.phase()
    }

    pub fn is_active(&self) -> bool {
        self.amp_envelope.is_active()
    }

    pub fn amp_envelope(&self) -> f32 {
        self.amp_envelope.value()
    }

    pub fn pitch_envelope(&self) -> f32 {
        self.pitch_envelope.value()
    }

    pub fn osc2_envelope(&self) -> f32 {
        self.osc2_envelope.value()
    }

    pub fn click_envelope(&self) -> f32 {
        self.click_envelope.value()
    }

    pub fn filter_state(&self) -> &[f32; 4] {
        self.filter.stages()
    }

    /// High-pass memory of the click transient.
    pub fn click_history(&self) -> f32 {
        self.click.previous()
    }

    pub fn current_note(&self) -> u8 {
        self.current_note
    }

    pub fn current_velocity(&self) -> f32 {
        self.current_velocity
    }
}
