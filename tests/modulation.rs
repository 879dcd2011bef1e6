//! Modulation sources

/// Returns a ramp in range 0.0..1.0
#[allow(dead_code)]
pub fn ramp_up(block_no: usize, block_count: usize) -> f32 {
    block_no as f32 / block_count as f32
}
