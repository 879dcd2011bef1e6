#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

pub mod envelope;
pub mod fx;
pub mod oscillator;
pub mod patch;
pub mod preset;
pub mod unit;
pub mod utils;
pub mod voice;

/// Audio sample rate in Hz. All time constants are derived from this clock.
pub const SAMPLE_RATE: f32 = 48000.0;

/// Number of interleaved output channels written by the render call.
pub const NUM_OUTPUT_CHANNELS: usize = 2;

/// Note number that matches any sounding note on note-off.
pub const NOTE_ALL: u8 = 0xFF;
