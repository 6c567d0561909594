use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::waveform::Waveform;

const RADS_PER_CYCLE: f64 = std::f64::consts::TAU;
const DEFAULT_PHASE: f64 = 0.0;
const DEFAULT_VOLUME: f32 = 1.0;

/// Sample rate the parameter defaults assume, in samples per second.
pub const DEFAULT_SAMPLE_RATE: f32 = 44_100.0;
/// Middle C, the customary frequency for a freshly patched voice.
pub const DEFAULT_FREQUENCY: f32 = 261.625;

/// Parameter faults a generate call refuses to proceed past.
///
/// Nothing is written through a fault: on error the output region and the
/// oscillator phase are both left exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GenerateError {
    /// The sample rate was zero, negative, or not finite. The phase
    /// increment is a division by the sample rate, so such a rate would
    /// turn the whole call into non-finite audio.
    #[error("sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(f32),

    /// The frequency was not finite, which would corrupt the phase the
    /// same way an invalid sample rate does.
    #[error("frequency must be finite, got {0}")]
    InvalidFrequency(f32),
}

/// Per-call voicing of a generate call: which shape to trace, how fast,
/// and how loud.
///
/// None of this is oscillator identity. An oscillator carries phase and
/// nothing else, so the same oscillator may be driven with different
/// parameters from one call to the next; the stream stays continuous in
/// phase either way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneParams {
    /// Cycles per second of the rendered tone.
    pub frequency: f32,
    /// Samples per second of the host's output stream. Must be positive
    /// and finite.
    pub sample_rate: f32,
    /// Flat scalar applied to every sample. Deliberately unclamped, so a
    /// host may scale past [-1.0, 1.0] at its own risk.
    pub volume: f32,
    /// Shape to trace.
    pub waveform: Waveform,
}

impl Default for ToneParams {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            sample_rate: DEFAULT_SAMPLE_RATE,
            volume: DEFAULT_VOLUME,
            waveform: Waveform::default(),
        }
    }
}

impl ToneParams {
    /// Checks the fields a generate call depends on, without generating.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(GenerateError::InvalidSampleRate(self.sample_rate));
        }

        if !self.frequency.is_finite() {
            return Err(GenerateError::InvalidFrequency(self.frequency));
        }

        Ok(())
    }

    /// Radians the phase advances per output sample.
    fn phase_increment(&self) -> f64 {
        RADS_PER_CYCLE * f64::from(self.frequency) / f64::from(self.sample_rate)
    }
}

/// A phase accumulator: the complete state of one running voice.
///
/// The phase lives in [0, 2π) radians and is advanced sample by sample by
/// [`Oscillator::generate`]. Nothing else persists between calls, which is
/// what makes back-to-back calls splice without clicks: generating `n1`
/// samples and then `n2` more writes exactly the stream a single call for
/// `n1 + n2` samples would have written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Oscillator {
    phase: f64,
}

impl Oscillator {
    /// A fresh voice, parked at phase zero.
    pub fn new() -> Self {
        Self {
            phase: DEFAULT_PHASE,
        }
    }

    /// Current position within the cycle, in radians.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Rewinds the voice to phase zero, as if freshly created.
    pub fn reset(&mut self) {
        self.phase = DEFAULT_PHASE;
    }

    /// Fills `out` with the next `out.len()` samples of the requested tone
    /// and moves the phase past them.
    ///
    /// Each slot is written front to back as `waveform(phase) * volume`,
    /// with the phase renormalized into [0, 2π) after every sample. An
    /// empty `out` writes nothing and holds the phase. The loop itself
    /// never allocates, blocks, or logs.
    pub fn generate(&mut self, params: &ToneParams, out: &mut [f32]) -> Result<(), GenerateError> {
        params.validate()?;
        let increment = params.phase_increment();

        for slot in out.iter_mut() {
            *slot = params.waveform.sample(self.phase) * params.volume;
            self.advance(increment);
        }

        Ok(())
    }

    fn advance(&mut self, increment: f64) {
        self.phase += increment;

        if self.phase < 0.0 || self.phase >= RADS_PER_CYCLE {
            self.phase = self.phase.rem_euclid(RADS_PER_CYCLE);

            // rem_euclid of a tiny negative operand can round up to the
            // modulus itself; fold that back onto the cycle start.
            if self.phase >= RADS_PER_CYCLE {
                self.phase = DEFAULT_PHASE;
            }
        }
    }
}

/// Generates `out.len()` samples through a throwaway oscillator starting
/// at phase zero, for hosts that want a buffer of tone without keeping a
/// voice around.
pub fn generate_once(params: &ToneParams, out: &mut [f32]) -> Result<(), GenerateError> {
    Oscillator::new().generate(params, out)
}
