//! Tests for the swarm engine


use wavetable_swarm::engine::{SwarmEngine, HEADROOM};
use wavetable_swarm::utils::random;
use wavetable_swarm::{DEFAULT_TABLE_SIZE, DEFAULT_VOICE_COUNT};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZE: usize = 64;

fn assert_additive(voice_count: usize) {
    random::seed(0xcafe);

    let mut engine = SwarmEngine::new(DEFAULT_TABLE_SIZE);
    engine.init(SAMPLE_RATE, voice_count);
    assert_eq!(engine.num_voices(), voice_count);

    // Snapshot the freshly tuned voices and the shared table, then compute
    // the mix independently, voice by voice in index order.
    let table = engine.wavetable().clone();
    let mut reference_voices = engine.voices().to_vec();
    let level = engine.level();

    let mut left = [0.0; BLOCK_SIZE];
    let mut right = [0.0; BLOCK_SIZE];
    engine.render(&mut left, &mut right);

    let mut expected = [0.0_f32; BLOCK_SIZE];
    for voice in &mut reference_voices {
        for expected_sample in expected.iter_mut() {
            *expected_sample += voice.next_sample(&table) * level;
        }
    }

    for frame in 0..BLOCK_SIZE {
        assert_eq!(left[frame], expected[frame], "frame {frame}");
        assert_eq!(right[frame], expected[frame], "frame {frame}");
    }
}

#[test]
fn mix_is_sum_of_single_voice() {
    assert_additive(1);
}

#[test]
fn mix_is_sum_of_two_voices() {
    assert_additive(2);
}

#[test]
fn mix_is_sum_of_full_swarm() {
    assert_additive(DEFAULT_VOICE_COUNT);
}

#[test]
fn empty_voice_set_renders_silence() {
    let mut engine = SwarmEngine::new(DEFAULT_TABLE_SIZE);
    engine.init(SAMPLE_RATE, 0);
    assert_eq!(engine.level(), 0.0);

    let mut left = [0.0; BLOCK_SIZE];
    let mut right = [0.0; BLOCK_SIZE];
    engine.render(&mut left, &mut right);

    assert!(left.iter().all(|s| *s == 0.0));
    assert!(right.iter().all(|s| *s == 0.0));
}

#[test]
fn render_before_init_renders_silence() {
    let mut engine = SwarmEngine::new(DEFAULT_TABLE_SIZE);

    let mut left = [0.0; BLOCK_SIZE];
    let mut right = [0.0; BLOCK_SIZE];
    engine.render(&mut left, &mut right);

    assert!(left.iter().all(|s| *s == 0.0));
    assert!(right.iter().all(|s| *s == 0.0));
}

#[test]
fn unit_increment_voice_reproduces_the_table() {
    let mut engine = SwarmEngine::new(128);
    engine.init(SAMPLE_RATE, 1);

    // 375 Hz at 48 kHz traverses the 128-sample table with an increment of
    // exactly 1.0, so the output is the raw table scaled by the mix level.
    engine.set_voice_frequency(0, 375.0);
    assert_eq!(engine.level(), HEADROOM);

    let table = engine.wavetable().clone();
    let mut left = [0.0; 128];
    let mut right = [0.0; 128];
    engine.render(&mut left, &mut right);

    for i in 0..128 {
        assert_eq!(left[i], table[i] * HEADROOM, "frame {i}");
        assert_eq!(right[i], left[i], "frame {i}");
    }
}

#[test]
fn full_swarm_stays_within_headroom() {
    random::seed(0x5eed);

    let mut engine = SwarmEngine::new(DEFAULT_TABLE_SIZE);
    engine.init(SAMPLE_RATE, DEFAULT_VOICE_COUNT);

    let duration = 2.0;
    let blocks = (duration * SAMPLE_RATE / BLOCK_SIZE as f32) as usize;

    let mut left = [0.0; BLOCK_SIZE];
    let mut right = [0.0; BLOCK_SIZE];
    let mut peak = 0.0_f32;
    let mut wav_data = Vec::new();

    for _ in 0..blocks {
        left.fill(0.0);
        right.fill(0.0);
        engine.render(&mut left, &mut right);

        for sample in left {
            peak = peak.max(sample.abs());
        }
        wav_data.extend_from_slice(&left);
    }

    assert!(peak <= HEADROOM + 1e-6, "peak {peak} exceeds headroom");

    wav_writer::write("engine/swarm.wav", &wav_data, SAMPLE_RATE as u32).ok();
}

#[test]
#[should_panic(expected = "equal length")]
fn rejects_mismatched_channel_buffers() {
    let mut engine = SwarmEngine::new(DEFAULT_TABLE_SIZE);
    engine.init(SAMPLE_RATE, 1);

    let mut left = [0.0; BLOCK_SIZE];
    let mut right = [0.0; BLOCK_SIZE / 2];
    engine.render(&mut left, &mut right);
}
