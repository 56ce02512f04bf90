#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod engine;
pub mod oscillator;
pub mod utils;
pub mod wavetable;

/// Number of samples in the default wavetable (one sine cycle).
pub const DEFAULT_TABLE_SIZE: usize = 1 << 7;

/// Number of voices in the default swarm.
pub const DEFAULT_VOICE_COUNT: usize = 200;
