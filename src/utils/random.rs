//! Fast 32-bit pseudo random number generator.

use core::sync::atomic::{AtomicU32, Ordering};

static RNG_STATE: AtomicU32 = AtomicU32::new(0x21);

/// Reseeds the generator, making subsequent draws reproducible.
#[inline]
pub fn seed(seed: u32) {
    RNG_STATE.store(seed, Ordering::Relaxed);
}

#[inline]
pub fn get_word() -> u32 {
    let next = RNG_STATE
        .load(Ordering::Relaxed)
        .wrapping_mul(1664525)
        .wrapping_add(1013904223);
    RNG_STATE.store(next, Ordering::Relaxed);

    next
}

/// Uniform draw from `[0.0, 1.0)`.
#[inline]
pub fn get_float() -> f32 {
    get_word() as f32 / 4294967296.0
}
