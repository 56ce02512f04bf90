//! Renders a few seconds of the default voice swarm to a WAV file.

use hound::{SampleFormat, WavSpec, WavWriter};
use simple_logger::SimpleLogger;

use wavetable_swarm::engine::SwarmEngine;
use wavetable_swarm::{DEFAULT_TABLE_SIZE, DEFAULT_VOICE_COUNT};

const SAMPLE_RATE: u32 = 48000;
const BLOCK_SIZE: usize = 64;
const DURATION: f32 = 5.0;
const FILENAME: &str = "swarm.wav";

fn main() {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let mut engine = SwarmEngine::new(DEFAULT_TABLE_SIZE);
    engine.init(SAMPLE_RATE as f32, DEFAULT_VOICE_COUNT);
    log::info!(
        "prepared {} voices at {} Hz",
        engine.num_voices(),
        SAMPLE_RATE
    );

    let spec = WavSpec {
        channels: 2,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(FILENAME, spec).unwrap();

    let blocks = (DURATION * SAMPLE_RATE as f32 / BLOCK_SIZE as f32) as usize;
    let mut left = [0.0; BLOCK_SIZE];
    let mut right = [0.0; BLOCK_SIZE];

    for _ in 0..blocks {
        left.fill(0.0);
        right.fill(0.0);
        engine.render(&mut left, &mut right);

        for frame in 0..BLOCK_SIZE {
            writer.write_sample(left[frame]).unwrap();
            writer.write_sample(right[frame]).unwrap();
        }
    }

    writer.finalize().unwrap();
    log::info!("wrote {DURATION} seconds to {FILENAME}");
}
