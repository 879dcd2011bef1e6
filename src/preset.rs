//! Factory presets.

use crate::fx::ladder_filter::{FilterSettings, FilterSlope};
use crate::oscillator::waveform::Waveform;
use crate::patch::{Patch, PLACEHOLDER};

pub const NUM_PRESETS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Preset {
    Basic = 0,
    Punchy,
    SubBass,
    FmKick,
    NoiseAttack,
}

impl Preset {
    pub const ALL: [Preset; NUM_PRESETS] = [
        Preset::Basic,
        Preset::Punchy,
        Preset::SubBass,
        Preset::FmKick,
        Preset::NoiseAttack,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Basic => "Basic",
            Preset::Punchy => "Punchy",
            Preset::SubBass => "Sub Bass",
            Preset::FmKick => "FM Kick",
            Preset::NoiseAttack => "Noise Attack",
        }
    }

    /// Name for a preset index, or the placeholder for unknown indices.
    pub fn name_for_index(index: u8) -> &'static str {
        Preset::try_from(index).map_or(PLACEHOLDER, Preset::name)
    }

    /// Complete parameter set of this preset.
    pub fn patch(self) -> Patch {
        match self {
            Preset::Basic => Patch {
                pitch: 55.0,
                decay: 130.0,
                pitch_curve: 0.5,
                body_level: 0.9,
                drive: 0.4,
                attack: 3.0,
                release: 300.0,
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
                ..plain_body()
            },
            Preset::Punchy => Patch {
                pitch: 70.0,
                decay: 80.0,
                pitch_curve: 0.7,
                body_level: 0.9,
                drive: 0.6,
                attack: 1.0,
                release: 180.0,
                click_level: 0.8,
                click_frequency: 250.0,
                click_decay: 15.0,
                click_tone: 0.5,
                filter: FilterSettings {
                    enabled: true,
                    cutoff: 0.9,
                    resonance: 0.3,
                    slope: FilterSlope::TwelveDb,
                },
                ..plain_body()
            },
            Preset::SubBass => Patch {
                pitch: 45.0,
                decay: 250.0,
                pitch_curve: 0.3,
                body_level: 0.95,
                drive: 0.35,
                attack: 8.0,
                release: 500.0,
                click_level: 0.3,
                click_frequency: 180.0,
                click_decay: 25.0,
                click_tone: 0.7,
                filter: FilterSettings {
                    enabled: true,
                    cutoff: 0.6,
                    resonance: 0.1,
                    slope: FilterSlope::TwentyFourDb,
                },
                ..plain_body()
            },
            Preset::FmKick => Patch {
                pitch: 55.0,
                decay: 180.0,
                pitch_curve: 0.6,
                body_level: 0.7,
                drive: 0.5,
                attack: 3.0,
                release: 250.0,
                click_level: 0.4,
                click_frequency: 220.0,
                click_decay: 18.0,
                click_tone: 0.8,
                filter: FilterSettings {
                    enabled: true,
                    cutoff: 0.85,
                    resonance: 0.4,
                    slope: FilterSlope::TwelveDb,
                },
                osc2_enabled: true,
                osc2_waveform: Waveform::Sine as i32,
                osc2_pitch: 3.0,
                osc2_level: 0.6,
                fm_amount: 0.7,
                fm_ratio: 2.7,
                osc2_decay: 80.0,
            },
            Preset::NoiseAttack => Patch {
                pitch: 50.0,
                decay: 200.0,
                pitch_curve: 0.5,
                body_level: 0.85,
                drive: 0.4,
                attack: 2.0,
                release: 280.0,
                click_level: 0.7,
                click_frequency: 300.0,
                click_decay: 12.0,
                click_tone: 0.3,
                filter: FilterSettings {
                    enabled: true,
                    cutoff: 0.95,
                    resonance: 0.3,
                    slope: FilterSlope::TwelveDb,
                },
                osc2_enabled: true,
                osc2_waveform: Waveform::Noise as i32,
                osc2_pitch: 1.0,
                osc2_level: 0.7,
                fm_amount: 0.0,
                fm_ratio: 1.0,
                osc2_decay: 20.0,
            },
        }
    }
}

impl TryFrom<u8> for Preset {
    type Error = u8;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(index as usize).copied().ok_or(index)
    }
}

/// Body-only presets run with the secondary oscillator switched off.
fn plain_body() -> Patch {
    Patch {
        osc2_enabled: false,
        osc2_waveform: Waveform::Sine as i32,
        osc2_pitch: 2.0,
        osc2_level: 0.0,
        fm_amount: 0.0,
        fm_ratio: 2.0,
        osc2_decay: 100.0,
        ..Patch::default()
    }
}
