//! Waveforms selectable for the secondary oscillator.

#[allow(unused_imports)]
use num_traits::float::Float;

use super::sine;
use crate::utils::random::Random;

/// Fixed pulse width of the pulse waveform.
pub const PULSE_WIDTH: f32 = 0.5;

pub const NUM_WAVEFORMS: usize = 5;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    #[default]
    Sine = 0,
    Saw = 1,
    Triangle = 2,
    Pulse = 3,
    Noise = 4,
}

impl Waveform {
    pub const ALL: [Waveform; NUM_WAVEFORMS] = [
        Waveform::Sine,
        Waveform::Saw,
        Waveform::Triangle,
        Waveform::Pulse,
        Waveform::Noise,
    ];

    /// Waveform for a raw parameter value. Unknown values select the sine.
    pub fn from_value(value: i32) -> Self {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "Sine",
            Waveform::Saw => "Saw",
            Waveform::Triangle => "Triangle",
            Waveform::Pulse => "Pulse",
            Waveform::Noise => "Noise",
        }
    }

    /// 16x16 display glyph, two bytes per row.
    pub fn glyph(self) -> &'static [u8; 32] {
        &GLYPHS[self as usize]
    }

    /// Evaluate the waveform at `phase`. The noise waveform ignores the phase.
    #[inline]
    pub fn render(self, phase: f32, random: &mut Random) -> f32 {
        match self {
            Waveform::Sine => sine(phase),
            Waveform::Saw => 2.0 * phase - 1.0,
            Waveform::Triangle => 2.0 * ((2.0 * phase - 1.0).abs() - 0.5),
            Waveform::Pulse => {
                if phase < PULSE_WIDTH {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Noise => random.get_bipolar(),
        }
    }
}

static GLYPHS: [[u8; 32]; NUM_WAVEFORMS] = [
    // Sine
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x03, 0x0C, 0x0C, 0x02, 0x10, 0x01, 0x20, 0x01, 0x40,
        0x00, 0x40, 0x00, 0x40, 0x00, 0x40, 0x00, 0x20, 0x01, 0x10, 0x01, 0x0C, 0x02, 0x03, 0x0C,
        0x00, 0xF0,
    ],
    // Saw
    [
        0x00, 0x00, 0x80, 0x00, 0x40, 0x01, 0x20, 0x02, 0x10, 0x04, 0x08, 0x08, 0x04, 0x10, 0x02,
        0x20, 0x01, 0x40, 0x00, 0x80, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00,
    ],
    // Triangle
    [
        0x00, 0x00, 0x00, 0x80, 0x00, 0x40, 0x00, 0x20, 0x00, 0x10, 0x00, 0x08, 0x00, 0x04, 0x00,
        0x02, 0x00, 0x01, 0x80, 0x00, 0x40, 0x00, 0x20, 0x00, 0x10, 0x00, 0x08, 0x00, 0x04, 0x00,
        0x02, 0x00,
    ],
    // Pulse
    [
        0x00, 0x00, 0xFF, 0x7F, 0x01, 0x40, 0x01, 0x40, 0x01, 0x40, 0x01, 0x40, 0x01, 0x40, 0x01,
        0x40, 0x01, 0x40, 0x01, 0x40, 0x01, 0x40, 0x01, 0x40, 0x01, 0x40, 0x01, 0x40, 0xFF, 0x7F,
        0x00, 0x00,
    ],
    // Noise
    [
        0x00, 0x00, 0x24, 0x82, 0x58, 0x25, 0xA2, 0x50, 0x14, 0x8A, 0x42, 0x51, 0x85, 0x24, 0x50,
        0x8A, 0x24, 0x51, 0x82, 0x24, 0x50, 0x8A, 0x24, 0x51, 0x44, 0x2A, 0xA8, 0x14, 0x52, 0x42,
        0x00, 0x00,
    ],
];
