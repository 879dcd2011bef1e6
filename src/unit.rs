//! Host runtime description and initialization errors.

use core::fmt;

use crate::NUM_OUTPUT_CHANNELS;

/// Name of the unit as displayed by the host.
pub const UNIT_NAME: &str = "KICKZ Drum";

/// Unit version as `major << 16 | minor << 8 | patch`.
pub const UNIT_VERSION: u32 = 0x0001_0000;

/// The only sample rate the voice supports.
pub const SUPPORTED_SAMPLE_RATE: u32 = 48000;

/// Runtime properties the host reports when loading the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeDesc {
    pub sample_rate: u32,
    pub output_channels: u8,
}

impl Default for RuntimeDesc {
    fn default() -> Self {
        Self {
            sample_rate: SUPPORTED_SAMPLE_RATE,
            output_channels: NUM_OUTPUT_CHANNELS as u8,
        }
    }
}

impl RuntimeDesc {
    /// Check the host runtime against what the voice was built for.
    pub fn validate(&self) -> Result<(), UnitError> {
        if self.sample_rate != SUPPORTED_SAMPLE_RATE {
            return Err(UnitError::SampleRate(self.sample_rate));
        }
        if self.output_channels as usize != NUM_OUTPUT_CHANNELS {
            return Err(UnitError::Geometry(self.output_channels));
        }
        Ok(())
    }
}

/// Reasons the host runtime cannot run the voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitError {
    /// Unsupported sample rate in Hz.
    SampleRate(u32),
    /// Unsupported number of output channels.
    Geometry(u8),
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::SampleRate(rate) => write!(
                f,
                "unsupported sample rate {rate} Hz, expected {SUPPORTED_SAMPLE_RATE} Hz"
            ),
            UnitError::Geometry(channels) => write!(
                f,
                "unsupported output geometry of {channels} channels, expected {NUM_OUTPUT_CHANNELS}"
            ),
        }
    }
}

impl core::error::Error for UnitError {}
