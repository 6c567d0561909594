//! Phasor is a phase-accumulation oscillator core.
//!
//! It renders sine, square, saw, and triangle tones into caller-owned
//! `f32` buffers. The host owns everything else: allocation, timing, and
//! when to call. An oscillator persists nothing between calls but its
//! phase, which is what makes consecutive calls splice into one
//! click-free stream no matter how the host sizes its buffers.
//!
//! Hosts that can hold a voice by value use [`Oscillator`] directly.
//! Hosts that route voices by token, typically across an FFI or
//! scripting boundary, put them in an [`OscillatorBank`] and drive them
//! by [`OscillatorId`]. One-shot buffers come from [`generate_once`].
//!
//! ```
//! use phasor::{Oscillator, ToneParams, Waveform};
//!
//! let mut oscillator = Oscillator::new();
//! let params = ToneParams {
//!     frequency: 440.0,
//!     waveform: Waveform::Square,
//!     ..ToneParams::default()
//! };
//!
//! let mut buffer = [0.0_f32; 128];
//! oscillator.generate(&params, &mut buffer)?;
//! # Ok::<(), phasor::GenerateError>(())
//! ```
//!
//! The render path never allocates, blocks, or logs, so it is safe to
//! call from an audio callback. Bank bookkeeping logs voice lifecycle at
//! debug level under the `phasor::bank` target.

pub mod bank;
pub mod oscillator;
pub mod waveform;

pub use bank::{OscillatorBank, OscillatorId};
pub use oscillator::{
    DEFAULT_FREQUENCY, DEFAULT_SAMPLE_RATE, GenerateError, Oscillator, ToneParams, generate_once,
};
pub use waveform::Waveform;
