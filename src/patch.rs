//! Parameter set of the voice and its integer-indexed host interface.
//!
//! Hosts address parameters by index with raw integer values. Ranges are the host's
//! business: values are converted and stored without clamping.

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::fx::ladder_filter::{FilterSettings, FilterSlope};
use crate::oscillator::waveform::Waveform;

/// Number of addressable parameters.
pub const NUM_PARAMS: usize = 22;

/// Returned by string lookups that have no meaningful text.
pub const PLACEHOLDER: &str = "---";

/// Parameter indices. The order is an external contract with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ParamId {
    Pitch = 0,
    Decay,
    BodyLevel,
    Drive,
    Attack,
    Release,
    PitchCurve,
    ClickLevel,
    ClickFrequency,
    ClickDecay,
    ClickTone,
    FilterEnabled,
    FilterCutoff,
    FilterResonance,
    FilterMode,
    Osc2Enabled,
    Osc2Waveform,
    Osc2Pitch,
    Osc2Level,
    FmAmount,
    FmRatio,
    Osc2Decay,
}

impl ParamId {
    pub const ALL: [ParamId; NUM_PARAMS] = [
        ParamId::Pitch,
        ParamId::Decay,
        ParamId::BodyLevel,
        ParamId::Drive,
        ParamId::Attack,
        ParamId::Release,
        ParamId::PitchCurve,
        ParamId::ClickLevel,
        ParamId::ClickFrequency,
        ParamId::ClickDecay,
        ParamId::ClickTone,
        ParamId::FilterEnabled,
        ParamId::FilterCutoff,
        ParamId::FilterResonance,
        ParamId::FilterMode,
        ParamId::Osc2Enabled,
        ParamId::Osc2Waveform,
        ParamId::Osc2Pitch,
        ParamId::Osc2Level,
        ParamId::FmAmount,
        ParamId::FmRatio,
        ParamId::Osc2Decay,
    ];

    fn scale(self) -> Scale {
        match self {
            ParamId::Pitch
            | ParamId::Decay
            | ParamId::Attack
            | ParamId::Release
            | ParamId::ClickFrequency
            | ParamId::ClickDecay
            | ParamId::Osc2Decay => Scale::Raw,
            ParamId::BodyLevel
            | ParamId::Drive
            | ParamId::PitchCurve
            | ParamId::ClickLevel
            | ParamId::ClickTone
            | ParamId::FilterCutoff
            | ParamId::FilterResonance
            | ParamId::Osc2Level
            | ParamId::FmAmount => Scale::Percent,
            ParamId::Osc2Pitch | ParamId::FmRatio => Scale::Ratio,
            ParamId::FilterEnabled
            | ParamId::FilterMode
            | ParamId::Osc2Enabled
            | ParamId::Osc2Waveform => Scale::Discrete,
        }
    }
}

impl TryFrom<u8> for ParamId {
    type Error = u8;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(index as usize).copied().ok_or(index)
    }
}

/// Conversion between raw host values and stored values.
#[derive(Debug, Clone, Copy)]
enum Scale {
    Raw,
    Percent,
    Ratio,
    Discrete,
}

impl Scale {
    #[inline]
    fn to_float(self, raw: i32) -> f32 {
        match self {
            Scale::Raw | Scale::Discrete => raw as f32,
            Scale::Percent => raw as f32 / 100.0,
            Scale::Ratio => raw as f32 / 10.0,
        }
    }

    #[inline]
    fn to_raw(self, value: f32) -> i32 {
        match self {
            Scale::Raw | Scale::Discrete => value.round() as i32,
            Scale::Percent => (value * 100.0).round() as i32,
            Scale::Ratio => (value * 10.0).round() as i32,
        }
    }
}

/// Patch parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    /// Body base frequency in Hz. Default is `55.0`.
    pub pitch: f32,

    /// Pitch sweep decay time in ms. Default is `130.0`.
    pub decay: f32,

    /// Body oscillator level in the range from `0.0` to `1.0`. Default is `0.9`.
    pub body_level: f32,

    /// Saturation amount in the range from `0.0` to `1.0`. Default is `0.4`.
    pub drive: f32,

    /// Amplitude attack time in ms. Default is `2.0`.
    pub attack: f32,

    /// Amplitude release time in ms, also used by the decay stage. Default is `300.0`.
    pub release: f32,

    /// Depth of the pitch sweep in the range from `0.0` to `1.0`. Default is `0.5`.
    pub pitch_curve: f32,

    /// Click level in the range from `0.0` to `1.0`. Default is `0.5`.
    pub click_level: f32,

    /// Click oscillator frequency in Hz. Default is `200.0`.
    pub click_frequency: f32,

    /// Click decay time in ms. Default is `20.0`.
    pub click_decay: f32,

    /// Click noise/tone balance in the range from `0.0` to `1.0`. Default is `0.6`.
    pub click_tone: f32,

    /// Low-pass filter settings. Disabled by default.
    pub filter: FilterSettings,

    /// Secondary oscillator switch. Default is `true`.
    pub osc2_enabled: bool,

    /// Secondary oscillator waveform as raw selector value. Default is sine.
    ///
    /// Values outside the known waveforms are kept for readback and render as sine.
    pub osc2_waveform: i32,

    /// Secondary oscillator frequency ratio to the body. Default is `2.0`.
    pub osc2_pitch: f32,

    /// Secondary oscillator level in the range from `0.0` to `1.0`. Default is `0.5`.
    pub osc2_level: f32,

    /// Frequency modulation depth in the range from `0.0` to `1.0`. Default is `0.0`.
    pub fm_amount: f32,

    /// Additional modulator frequency ratio. Default is `2.0`.
    pub fm_ratio: f32,

    /// Secondary oscillator decay time in ms. Default is `100.0`.
    pub osc2_decay: f32,
}

impl Default for Patch {
    fn default() -> Self {
        Self {
            pitch: 55.0,
            decay: 130.0,
            body_level: 0.9,
            drive: 0.4,
            attack: 2.0,
            release: 300.0,
            pitch_curve: 0.5,
            click_level: 0.5,
            click_frequency: 200.0,
            click_decay: 20.0,
            click_tone: 0.6,
            filter: FilterSettings {
                enabled: false,
                cutoff: 0.7,
                resonance: 0.2,
                slope: FilterSlope::TwelveDb,
            },
            osc2_enabled: true,
            osc2_waveform: Waveform::Sine as i32,
            osc2_pitch: 2.0,
            osc2_level: 0.5,
            fm_amount: 0.0,
            fm_ratio: 2.0,
            osc2_decay: 100.0,
        }
    }
}

impl Patch {
    /// Waveform selected for the secondary oscillator.
    #[inline]
    pub fn waveform(&self) -> Waveform {
        Waveform::from_value(self.osc2_waveform)
    }

    /// Store a raw host value.
    pub fn set(&mut self, id: ParamId, raw: i32) {
        let value = id.scale().to_float(raw);
        let on = raw > 0;

        match id {
            ParamId::Pitch => self.pitch = value,
            ParamId::Decay => self.decay = value,
            ParamId::BodyLevel => self.body_level = value,
            ParamId::Drive => self.drive = value,
            ParamId::Attack => self.attack = value,
            ParamId::Release => self.release = value,
            ParamId::PitchCurve => self.pitch_curve = value,
            ParamId::ClickLevel => self.click_level = value,
            ParamId::ClickFrequency => self.click_frequency = value,
            ParamId::ClickDecay => self.click_decay = value,
            ParamId::ClickTone => self.click_tone = value,
            ParamId::FilterEnabled => self.filter.enabled = on,
            ParamId::FilterCutoff => self.filter.cutoff = value,
            ParamId::FilterResonance => self.filter.resonance = value,
            ParamId::FilterMode => {
                self.filter.slope = if on {
                    FilterSlope::TwentyFourDb
                } else {
                    FilterSlope::TwelveDb
                }
            }
            ParamId::Osc2Enabled => self.osc2_enabled = on,
            ParamId::Osc2Waveform => self.osc2_waveform = raw,
            ParamId::Osc2Pitch => self.osc2_pitch = value,
            ParamId::Osc2Level => self.osc2_level = value,
            ParamId::FmAmount => self.fm_amount = value,
            ParamId::FmRatio => self.fm_ratio = value,
            ParamId::Osc2Decay => self.osc2_decay = value,
        }
    }

    /// Read back a parameter as a raw host value.
    pub fn get(&self, id: ParamId) -> i32 {
        let value = match id {
            ParamId::Pitch => self.pitch,
            ParamId::Decay => self.decay,
            ParamId::BodyLevel => self.body_level,
            ParamId::Drive => self.drive,
            ParamId::Attack => self.attack,
            ParamId::Release => self.release,
            ParamId::PitchCurve => self.pitch_curve,
            ParamId::ClickLevel => self.click_level,
            ParamId::ClickFrequency => self.click_frequency,
            ParamId::ClickDecay => self.click_decay,
            ParamId::ClickTone => self.click_tone,
            ParamId::FilterEnabled => return self.filter.enabled as i32,
            ParamId::FilterCutoff => self.filter.cutoff,
            ParamId::FilterResonance => self.filter.resonance,
            ParamId::FilterMode => {
                return (self.filter.slope == FilterSlope::TwentyFourDb) as i32;
            }
            ParamId::Osc2Enabled => return self.osc2_enabled as i32,
            ParamId::Osc2Waveform => return self.osc2_waveform,
            ParamId::Osc2Pitch => self.osc2_pitch,
            ParamId::Osc2Level => self.osc2_level,
            ParamId::FmAmount => self.fm_amount,
            ParamId::FmRatio => self.fm_ratio,
            ParamId::Osc2Decay => self.osc2_decay,
        };

        id.scale().to_raw(value)
    }

    /// Display text for a raw value. Only the waveform selector has one.
    pub fn str_value(id: ParamId, raw: i32) -> &'static str {
        match id {
            ParamId::Osc2Waveform => usize::try_from(raw)
                .ok()
                .and_then(|index| Waveform::ALL.get(index))
                .map_or(PLACEHOLDER, |waveform| waveform.name()),
            _ => PLACEHOLDER,
        }
    }

    /// Display glyph for a raw value. Falls back to the sine glyph.
    pub fn bmp_value(id: ParamId, raw: i32) -> &'static [u8; 32] {
        match id {
            ParamId::Osc2Waveform => Waveform::from_value(raw).glyph(),
            _ => Waveform::Sine.glyph(),
        }
    }
}
