//! Kick voice with MIDI note, program change and parameter control.

use audio_midi_shell::{AudioGenerator, AudioMidiShell};
use simple_logger::SimpleLogger;

use kickz_dsp::patch::ParamId;
use kickz_dsp::unit::{RuntimeDesc, UNIT_NAME, UNIT_VERSION};
use kickz_dsp::voice::Voice;
use kickz_dsp::NUM_OUTPUT_CHANNELS;

const SAMPLE_RATE: u32 = 48000;
const BLOCK_SIZE: usize = 32;

/// Controller number, target parameter and its raw host range.
const CC_MAP: [(u8, ParamId, i32, i32); 7] = [
    (21, ParamId::Pitch, 40, 150),
    (22, ParamId::Decay, 10, 500),
    (23, ParamId::Drive, 0, 100),
    (24, ParamId::ClickLevel, 0, 100),
    (25, ParamId::FilterCutoff, 0, 100),
    (26, ParamId::FmAmount, 0, 100),
    (27, ParamId::Osc2Level, 0, 100),
];

const CC_VOLUME: u8 = 28;

fn main() -> ! {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    log::info!(
        "{UNIT_NAME} v{}.{}.{}",
        UNIT_VERSION >> 16,
        (UNIT_VERSION >> 8) & 0xFF,
        UNIT_VERSION & 0xFF
    );

    AudioMidiShell::run_forever(SAMPLE_RATE, BLOCK_SIZE, App::new());
}

#[derive(Debug)]
struct App {
    voice: Voice,
    volume: f32,
}

impl App {
    pub fn new() -> Self {
        Self {
            voice: Voice::new(),
            volume: 1.0,
        }
    }
}

impl AudioGenerator for App {
    fn init(&mut self, _block_size: usize) {
        let desc = RuntimeDesc {
            sample_rate: SAMPLE_RATE,
            output_channels: NUM_OUTPUT_CHANNELS as u8,
        };
        self.voice.init(&desc).unwrap();
    }

    fn process(&mut self, samples_left: &mut [f32], samples_right: &mut [f32]) {
        let mut out = [0.0; BLOCK_SIZE * NUM_OUTPUT_CHANNELS];
        let frames = samples_left.len().min(BLOCK_SIZE);

        self.voice.render(&mut out, frames);

        for (frame, (left, right)) in samples_left
            .iter_mut()
            .zip(samples_right.iter_mut())
            .take(frames)
            .enumerate()
        {
            *left = out[frame * 2] * self.volume;
            *right = out[frame * 2 + 1] * self.volume;
        }
    }

    fn process_midi(&mut self, message: Vec<u8>) {
        match message[0] & 0xF0 {
            0x80 => {
                self.voice.note_off(message[1]);
                log::info!("Note off: {}", message[1]);
            }
            0x90 if message[2] != 0 => {
                self.voice.note_on(message[1], message[2]);
                log::info!("Note on: {}", message[1]);
            }
            0x90 => {
                self.voice.note_off(message[1]);
                log::info!("Note off: {}", message[1]);
            }
            0xB0 => {
                let value = message[2] as f32 / 127.0;
                if message[1] == CC_VOLUME {
                    self.volume = value;
                    log::info!("Volume: {}", self.volume);
                } else if let Some((_, id, min, max)) =
                    CC_MAP.iter().find(|(cc, ..)| *cc == message[1])
                {
                    let raw = min + ((max - min) as f32 * value).round() as i32;
                    self.voice.set_parameter(*id as u8, raw);
                    log::info!("{:?}: {}", id, raw);
                }
            }
            0xC0 => {
                self.voice.load_preset(message[1]);
                log::info!("Preset: {}", Voice::preset_name(message[1]));
            }
            _ => {}
        }
    }
}
