//! Render every factory preset to a stereo WAV file in `out/presets/`.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use simple_logger::SimpleLogger;

use kickz_dsp::preset::Preset;
use kickz_dsp::unit::RuntimeDesc;
use kickz_dsp::voice::Voice;
use kickz_dsp::{NUM_OUTPUT_CHANNELS, SAMPLE_RATE};

const BLOCK_SIZE: usize = 64;
const NOTE: u8 = 36;
const GATE_TIME: f32 = 0.25;
const DURATION: f32 = 1.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    std::fs::create_dir_all("out/presets")?;

    let mut voice = Voice::new();
    voice.init(&RuntimeDesc::default())?;

    let spec = WavSpec {
        channels: NUM_OUTPUT_CHANNELS as u16,
        sample_rate: SAMPLE_RATE as u32,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let blocks = (DURATION * SAMPLE_RATE / BLOCK_SIZE as f32) as usize;
    let gate_blocks = (GATE_TIME * SAMPLE_RATE / BLOCK_SIZE as f32) as usize;
    let mut out = [0.0; BLOCK_SIZE * NUM_OUTPUT_CHANNELS];

    for preset in Preset::ALL {
        voice.reset();
        voice.load_preset(preset as u8);
        voice.note_on(NOTE, 127);

        let file_name = format!("{}.wav", preset.name().to_lowercase().replace(' ', "_"));
        let path = Path::new("out/presets").join(file_name);
        let mut writer = WavWriter::create(&path, spec)?;
        let mut peak = 0.0f32;

        for n in 0..blocks {
            if n == gate_blocks {
                voice.note_off(NOTE);
            }
            voice.render(&mut out, BLOCK_SIZE);
            for sample in out {
                peak = peak.max(sample.abs());
                writer.write_sample(sample)?;
            }
        }

        writer.finalize()?;
        log::info!("{} -> {} (peak {peak:.3})", preset.name(), path.display());
    }

    Ok(())
}
