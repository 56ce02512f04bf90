//! Shared single-cycle sine wavetable.

use alloc::vec::Vec;
use core::ops::Index;

#[allow(unused_imports)]
use num_traits::float::Float;

/// One cycle of a sine wave, sampled once at construction and read-only
/// afterwards. The table is logically periodic: the sample at index `len()`
/// is defined to equal the sample at index 0.
#[derive(Debug, Clone)]
pub struct Wavetable {
    samples: Vec<f32>,
}

impl Wavetable {
    /// Builds a sine table of `size` samples.
    ///
    /// The cycle is divided by `size - 1` rather than `size`, so both
    /// endpoints land on sin(0) = 0 and the wraparound from the last sample
    /// back to index 0 stays continuous.
    ///
    /// Panics if `size < 2`.
    pub fn new(size: usize) -> Self {
        assert!(size >= 2, "wavetable needs at least 2 samples");

        let angle_delta = core::f64::consts::TAU / (size - 1) as f64;
        let mut samples = Vec::with_capacity(size);

        for i in 0..size {
            samples.push((angle_delta * i as f64).sin() as f32);
        }

        Self { samples }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.samples
    }
}

impl Index<usize> for Wavetable {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.samples[index]
    }
}
