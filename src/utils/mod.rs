//! Utility functions.

pub mod random;

#[allow(unused_imports)]
use num_traits::float::Float;

/// Converts a MIDI note number to a frequency in Hz (equal temperament,
/// A4 = 440 Hz). Fractional note numbers are valid.
#[inline]
pub fn note_to_frequency(midi_note: f32) -> f32 {
    440.0 * 2.0_f32.powf((midi_note - 69.0) / 12.0)
}
