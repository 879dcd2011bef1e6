//! Post-mix processing: saturation and the resonant low-pass filter.

pub mod ladder_filter;
pub mod overdrive;
