//! Swarm of sine voices summed into a stereo output.

use alloc::vec::Vec;

use crate::oscillator::WavetableOscillator;
use crate::utils::{note_to_frequency, random};
use crate::wavetable::Wavetable;

/// Upper bound on the summed output amplitude. The per-voice mix level is
/// this headroom divided by the voice count, so the mix cannot clip no
/// matter how the voice phases line up.
pub const HEADROOM: f32 = 0.25;

/// Lowest MIDI note a voice can be tuned to.
pub const NOTE_RANGE_LOW: f32 = 48.0;

/// Width of the tuning range in semitones; notes are drawn uniformly from
/// `[NOTE_RANGE_LOW, NOTE_RANGE_LOW + NOTE_RANGE_SPAN)`.
pub const NOTE_RANGE_SPAN: f32 = 36.0;

/// Polyphonic additive engine: a fixed set of oscillators reading one
/// shared [`Wavetable`], mixed equally into both output channels.
///
/// All methods take `&mut self`; the caller serializes configuration and
/// rendering (start/stop audio boundaries), so the render path needs no
/// internal locking.
#[derive(Debug)]
pub struct SwarmEngine {
    wavetable: Wavetable,
    voices: Vec<WavetableOscillator>,
    level: f32,
    sample_rate: f32,
}

impl SwarmEngine {
    /// Builds the shared table. The voice set starts empty; call
    /// [`init`](Self::init) before rendering.
    ///
    /// Panics if `table_size < 2`.
    pub fn new(table_size: usize) -> Self {
        Self {
            wavetable: Wavetable::new(table_size),
            voices: Vec::new(),
            level: 0.0,
            sample_rate: 0.0,
        }
    }

    /// (Re)builds the voice set for a sample rate: each voice is tuned to a
    /// random equal-tempered pitch in the swarm's note range, and the mix
    /// level is set to keep the sum within [`HEADROOM`].
    ///
    /// Allocates; must complete before rendering (re)starts. Call again
    /// whenever the sample rate changes.
    pub fn init(&mut self, sample_rate: f32, voice_count: usize) {
        self.sample_rate = sample_rate;
        self.voices.clear();
        self.voices.reserve(voice_count);

        for _ in 0..voice_count {
            let note = NOTE_RANGE_LOW + random::get_float() * NOTE_RANGE_SPAN;

            let mut voice = WavetableOscillator::new();
            voice.set_frequency(note_to_frequency(note), sample_rate, &self.wavetable);
            self.voices.push(voice);
        }

        self.level = if voice_count == 0 {
            0.0
        } else {
            HEADROOM / voice_count as f32
        };
    }

    /// Retunes a single voice at the current sample rate.
    ///
    /// Configuration-context only, like [`init`](Self::init).
    ///
    /// Panics if `voice` is out of range.
    pub fn set_voice_frequency(&mut self, voice: usize, frequency: f32) {
        self.voices[voice].set_frequency(frequency, self.sample_rate, &self.wavetable);
    }

    /// Renders one block, adding every voice's output into both channels.
    ///
    /// Purely additive: the caller zeroes the buffers beforehand. With an
    /// empty voice set the buffers are left untouched. Allocation-free and
    /// lock-free; safe on the audio thread.
    ///
    /// Panics if the channel buffers differ in length.
    pub fn render(&mut self, left: &mut [f32], right: &mut [f32]) {
        assert_eq!(
            left.len(),
            right.len(),
            "channel buffers must have equal length"
        );

        for voice in &mut self.voices {
            for (left_sample, right_sample) in left.iter_mut().zip(right.iter_mut()) {
                let sample = voice.next_sample(&self.wavetable) * self.level;

                *left_sample += sample;
                *right_sample += sample;
            }
        }
    }

    #[inline]
    pub fn wavetable(&self) -> &Wavetable {
        &self.wavetable
    }

    #[inline]
    pub fn voices(&self) -> &[WavetableOscillator] {
        &self.voices
    }

    #[inline]
    pub fn num_voices(&self) -> usize {
        self.voices.len()
    }

    #[inline]
    pub fn level(&self) -> f32 {
        self.level
    }
}
