//! Wavetable oscillator with linear-interpolated lookup.

use crate::wavetable::Wavetable;

/// Single voice reading a shared [`Wavetable`] at a fixed rate.
///
/// The oscillator holds only its phase state; the table is owned by the
/// engine and passed into every call, so any number of voices can share one
/// table without copies.
#[derive(Debug, Default, Clone)]
pub struct WavetableOscillator {
    // Fractional index into the table. Stays below the table length except
    // transiently between calls, where it may reach the length itself.
    phase: f32,

    // Table indices advanced per output sample.
    phase_increment: f32,
}

impl WavetableOscillator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        self.phase = 0.0;
        self.phase_increment = 0.0;
    }

    /// Tunes the oscillator. Must be called before the first
    /// [`next_sample`](Self::next_sample); configuration-context only, never
    /// while a render is in flight.
    pub fn set_frequency(&mut self, frequency: f32, sample_rate: f32, table: &Wavetable) {
        self.phase_increment = frequency * table.len() as f32 / sample_rate;
    }

    /// Returns the next interpolated sample and advances the phase.
    ///
    /// The wrap at the end of the step subtracts the table length once
    /// instead of taking a true modulo. This assumes the increment stays
    /// below the table length; the phase may sit in `(len - 1, len]` between
    /// calls, which the lookup resolves through the table's periodicity
    /// (logical index `len` equals index 0).
    #[inline]
    pub fn next_sample(&mut self, table: &Wavetable) -> f32 {
        let size = table.len();

        // A transient phase of exactly `size` reads the periodic extension:
        // clamping the integer part leaves frac = 1.0, which interpolates
        // all the way to table[0].
        let index_0 = (self.phase as usize).min(size - 1);
        let index_1 = if index_0 == size - 1 { 0 } else { index_0 + 1 };

        let frac = self.phase - index_0 as f32;

        let value_0 = table[index_0];
        let value_1 = table[index_1];

        let sample = value_0 + frac * (value_1 - value_0);

        self.phase += self.phase_increment;

        if self.phase > size as f32 {
            self.phase -= size as f32;
        }

        sample
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Moves the phase to an arbitrary fractional table index.
    pub fn set_phase(&mut self, phase: f32) {
        self.phase = phase;
    }

    #[inline]
    pub fn phase_increment(&self) -> f32 {
        self.phase_increment
    }
}
