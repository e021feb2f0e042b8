//! Fusion IQ, the derived intelligence score.
//!
//! A display metric only: recomputed from current state, never stored.

pub const BASE_SCORE: u64 = 42;
pub const PULSE_WEIGHT: u64 = 9;
pub const ACTIVE_STEP_WEIGHT: u64 = 7;
pub const MAX_SCORE: u64 = 100;

/// `min(100, 42 + 9·pulses + 7·active_steps)`
pub fn intelligence_score(pulse_count: usize, active_step_count: usize) -> u8 {
    let raw = BASE_SCORE
        .saturating_add(PULSE_WEIGHT.saturating_mul(pulse_count as u64))
        .saturating_add(ACTIVE_STEP_WEIGHT.saturating_mul(active_step_count as u64));
    raw.min(MAX_SCORE) as u8
}
