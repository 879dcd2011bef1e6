//! Tests for the envelopes

use kickz_dsp::envelope::{AmpEnvelope, DecayTracker, EnvelopePhase};
use kickz_dsp::SAMPLE_RATE;

const ATTACK_MS: f32 = 2.0;
const RELEASE_MS: f32 = 300.0;

fn samples_for(ms: f32) -> usize {
    (ms / 1000.0 * SAMPLE_RATE) as usize
}

#[test]
fn attack_rises_to_full_level_then_decays_to_zero() {
    let mut env = AmpEnvelope::new();
    env.init();
    env.trigger();

    assert_eq!(env.phase(), EnvelopePhase::Attack);
    assert_eq!(env.value(), 0.0);

    let mut previous = env.value();
    let mut samples = 0;
    while env.phase() == EnvelopePhase::Attack {
        env.process(ATTACK_MS, RELEASE_MS);
        assert!(env.value() > previous, "attack must rise every sample");
        assert!((0.0..=1.0).contains(&env.value()));
        previous = env.value();
        samples += 1;
        assert!(samples <= samples_for(ATTACK_MS) + 2);
    }

    assert_eq!(env.phase(), EnvelopePhase::Decay);
    assert_eq!(env.value(), 1.0);

    let mut samples = 0;
    while env.phase() == EnvelopePhase::Decay {
        env.process(ATTACK_MS, RELEASE_MS);
        assert!(env.value() < previous, "decay must fall every sample");
        assert!((0.0..=1.0).contains(&env.value()));
        previous = env.value();
        samples += 1;
        assert!(samples <= samples_for(RELEASE_MS) + 2);
    }

    assert_eq!(env.phase(), EnvelopePhase::Idle);
    assert_eq!(env.value(), 0.0);
}

#[test]
fn decay_stage_uses_release_time() {
    let mut env = AmpEnvelope::new();
    env.trigger();

    // Zero attack reaches the peak in one sample.
    env.process(0.0, 100.0);
    assert_eq!(env.phase(), EnvelopePhase::Decay);

    let mut samples: usize = 0;
    while env.is_active() {
        env.process(0.0, 100.0);
        samples += 1;
    }

    let expected = samples_for(100.0);
    assert!(samples.abs_diff(expected) <= 2, "decay took {samples} samples");
}

#[test]
fn release_from_attack_falls_strictly() {
    let mut env = AmpEnvelope::new();
    env.trigger();

    for _ in 0..samples_for(1.0) {
        env.process(10.0, 50.0);
    }
    assert_eq!(env.phase(), EnvelopePhase::Attack);

    env.release();
    assert_eq!(env.phase(), EnvelopePhase::Release);

    let mut previous = env.value();
    while env.is_active() {
        env.process(10.0, 50.0);
        assert!(env.value() < previous);
        previous = env.value();
    }

    assert_eq!(env.value(), 0.0);
    assert_eq!(env.phase(), EnvelopePhase::Idle);
}

#[test]
fn release_when_idle_is_ignored() {
    let mut env = AmpEnvelope::new();
    env.release();
    assert_eq!(env.phase(), EnvelopePhase::Idle);

    env.process(ATTACK_MS, RELEASE_MS);
    assert_eq!(env.value(), 0.0);
}

#[test]
fn zero_release_time_clamps_in_one_sample() {
    let mut env = AmpEnvelope::new();
    env.trigger();
    env.process(0.0, 0.0);
    assert_eq!(env.value(), 1.0);

    env.process(0.0, 0.0);
    assert_eq!(env.value(), 0.0);
    assert_eq!(env.phase(), EnvelopePhase::Idle);
}

#[test]
fn decay_tracker_reaches_zero_and_stays() {
    let mut tracker = DecayTracker::new();
    tracker.init();
    assert_eq!(tracker.value(), 0.0);

    tracker.trigger();
    assert_eq!(tracker.value(), 1.0);

    let decay_ms = 20.0;
    let mut previous = tracker.value();
    for _ in 0..samples_for(decay_ms) / 2 {
        tracker.process(decay_ms);
        assert!(tracker.value() < previous);
        previous = tracker.value();
    }
    assert!((tracker.value() - 0.5).abs() < 0.01);

    for _ in 0..samples_for(decay_ms) {
        tracker.process(decay_ms);
    }
    assert_eq!(tracker.value(), 0.0);

    tracker.process(0.0);
    assert_eq!(tracker.value(), 0.0);
}
