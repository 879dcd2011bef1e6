//! Tests for the parameter interface

use kickz_dsp::fx::ladder_filter::FilterSlope;
use kickz_dsp::oscillator::waveform::Waveform;
use kickz_dsp::patch::{ParamId, Patch, NUM_PARAMS, PLACEHOLDER};
use kickz_dsp::voice::Voice;

#[test]
fn index_order_is_stable() {
    for (index, id) in ParamId::ALL.iter().enumerate() {
        assert_eq!(*id as usize, index);
        assert_eq!(ParamId::try_from(index as u8), Ok(*id));
    }

    assert_eq!(ParamId::try_from(0u8), Ok(ParamId::Pitch));
    assert_eq!(ParamId::try_from(7u8), Ok(ParamId::ClickLevel));
    assert_eq!(ParamId::try_from(11u8), Ok(ParamId::FilterEnabled));
    assert_eq!(ParamId::try_from(16u8), Ok(ParamId::Osc2Waveform));
    assert_eq!(ParamId::try_from(21u8), Ok(ParamId::Osc2Decay));
    assert_eq!(ParamId::try_from(NUM_PARAMS as u8), Err(NUM_PARAMS as u8));
}

#[test]
fn default_raw_values() {
    let voice = Voice::new();
    let expected = [
        55, 130, 90, 40, 2, 300, 50, 50, 200, 20, 60, 0, 70, 20, 0, 1, 0, 20, 50, 0, 20, 100,
    ];

    for (index, value) in expected.iter().enumerate() {
        assert_eq!(
            voice.parameter_value(index as u8),
            *value,
            "parameter {:?}",
            ParamId::ALL[index]
        );
    }
}

#[test]
fn values_are_scaled_by_type() {
    let mut voice = Voice::new();

    voice.set_parameter(ParamId::Pitch as u8, 72);
    voice.set_parameter(ParamId::Drive as u8, 75);
    voice.set_parameter(ParamId::Osc2Pitch as u8, 27);
    voice.set_parameter(ParamId::FmRatio as u8, 5);
    voice.set_parameter(ParamId::ClickDecay as u8, 1);

    let patch = voice.patch();
    assert_eq!(patch.pitch, 72.0);
    assert_eq!(patch.drive, 0.75);
    assert_eq!(patch.osc2_pitch, 2.7);
    assert_eq!(patch.fm_ratio, 0.5);
    assert_eq!(patch.click_decay, 1.0);

    assert_eq!(voice.parameter_value(ParamId::Pitch as u8), 72);
    assert_eq!(voice.parameter_value(ParamId::Drive as u8), 75);
    assert_eq!(voice.parameter_value(ParamId::Osc2Pitch as u8), 27);
    assert_eq!(voice.parameter_value(ParamId::FmRatio as u8), 5);
}

#[test]
fn percent_values_read_back_exactly() {
    let mut voice = Voice::new();
    let percent = [
        ParamId::BodyLevel,
        ParamId::Drive,
        ParamId::PitchCurve,
        ParamId::ClickLevel,
        ParamId::ClickTone,
        ParamId::FilterCutoff,
        ParamId::FilterResonance,
        ParamId::Osc2Level,
        ParamId::FmAmount,
    ];

    for id in percent {
        for value in [0, 1, 33, 57, 99, 100] {
            voice.set_parameter(id as u8, value);
            assert_eq!(voice.parameter_value(id as u8), value, "{id:?}");
        }
    }
}

#[test]
fn switches_accept_any_positive_value() {
    let mut voice = Voice::new();

    voice.set_parameter(ParamId::FilterEnabled as u8, 5);
    voice.set_parameter(ParamId::FilterMode as u8, 1);
    voice.set_parameter(ParamId::Osc2Enabled as u8, 0);

    assert!(voice.patch().filter.enabled);
    assert_eq!(voice.patch().filter.slope, FilterSlope::TwentyFourDb);
    assert!(!voice.patch().osc2_enabled);
    assert_eq!(voice.parameter_value(ParamId::FilterEnabled as u8), 1);
    assert_eq!(voice.parameter_value(ParamId::Osc2Enabled as u8), 0);

    voice.set_parameter(ParamId::FilterEnabled as u8, -3);
    voice.set_parameter(ParamId::FilterMode as u8, 0);
    assert!(!voice.patch().filter.enabled);
    assert_eq!(voice.patch().filter.slope, FilterSlope::TwelveDb);
}

#[test]
fn out_of_range_values_are_applied() {
    let mut voice = Voice::new();

    voice.set_parameter(ParamId::Pitch as u8, 1000);
    voice.set_parameter(ParamId::Drive as u8, 250);

    assert_eq!(voice.parameter_value(ParamId::Pitch as u8), 1000);
    assert_eq!(voice.patch().drive, 2.5);
}

#[test]
fn unknown_waveform_falls_back_to_sine() {
    let mut voice = Voice::new();

    voice.set_parameter(ParamId::Osc2Waveform as u8, 3);
    assert_eq!(voice.patch().waveform(), Waveform::Pulse);

    voice.set_parameter(ParamId::Osc2Waveform as u8, 9);
    assert_eq!(voice.patch().waveform(), Waveform::Sine);
}

#[test]
fn unknown_waveform_reads_back_as_given() {
    let mut voice = Voice::new();
    let index = ParamId::Osc2Waveform as u8;

    voice.set_parameter(index, 7);
    assert_eq!(voice.parameter_value(index), 7);
    assert_eq!(voice.patch().waveform(), Waveform::Sine);

    voice.set_parameter(index, -2);
    assert_eq!(voice.parameter_value(index), -2);

    voice.set_parameter(index, 4);
    assert_eq!(voice.parameter_value(index), 4);
    assert_eq!(voice.patch().waveform(), Waveform::Noise);
}

#[test]
fn unknown_index_is_ignored() {
    let mut voice = Voice::new();
    let patch = voice.patch().clone();

    voice.set_parameter(NUM_PARAMS as u8, 42);
    voice.set_parameter(255, 42);

    assert_eq!(voice.patch(), &patch);
    assert_eq!(voice.parameter_value(NUM_PARAMS as u8), 0);
    assert_eq!(voice.parameter_value(255), 0);
}

#[test]
fn waveform_names() {
    let voice = Voice::new();
    let index = ParamId::Osc2Waveform as u8;
    let names = ["Sine", "Saw", "Triangle", "Pulse", "Noise"];

    for (value, name) in names.iter().enumerate() {
        assert_eq!(voice.parameter_str_value(index, value as i32), *name);
    }

    assert_eq!(voice.parameter_str_value(index, 5), PLACEHOLDER);
    assert_eq!(voice.parameter_str_value(index, -1), PLACEHOLDER);
    assert_eq!(voice.parameter_str_value(index, 256), PLACEHOLDER);
    assert_eq!(voice.parameter_str_value(ParamId::Pitch as u8, 0), PLACEHOLDER);
    assert_eq!(voice.parameter_str_value(200, 0), PLACEHOLDER);
}

#[test]
fn waveform_glyphs() {
    let voice = Voice::new();
    let index = ParamId::Osc2Waveform as u8;

    for waveform in Waveform::ALL {
        assert_eq!(
            voice.parameter_bmp_value(index, waveform as i32),
            waveform.glyph()
        );
    }

    let sine = Waveform::Sine.glyph();
    assert_eq!(voice.parameter_bmp_value(index, 17), sine);
    assert_eq!(voice.parameter_bmp_value(ParamId::Drive as u8, 4), sine);
    assert_eq!(voice.parameter_bmp_value(200, 4), sine);
}

#[test]
fn patch_get_matches_set_for_every_parameter() {
    let mut patch = Patch::default();

    for id in ParamId::ALL {
        let value = match id {
            ParamId::FilterEnabled | ParamId::FilterMode | ParamId::Osc2Enabled => 1,
            ParamId::Osc2Waveform => 2,
            _ => 42,
        };
        patch.set(id, value);
        assert_eq!(patch.get(id), value, "{id:?}");
    }
}
