use slotmap::SlotMap;

use crate::oscillator::{GenerateError, Oscillator, ToneParams};
use crate::waveform::Waveform;

slotmap::new_key_type! {
    /// Token for one voice owned by an [`OscillatorBank`].
    ///
    /// Tokens are generational: once a voice is destroyed its token goes
    /// stale forever, even if the slot is later reused. Every bank method
    /// treats a stale token as a silent no-op rather than an error.
    pub struct OscillatorId;
}

/// Owns a set of oscillators and hands out [`OscillatorId`] tokens for
/// hosts that route voices by value rather than by reference, typically
/// across an FFI or scripting boundary.
///
/// Hosts that can hold an [`Oscillator`] directly do not need a bank.
#[derive(Debug, Default)]
pub struct OscillatorBank {
    oscillators: SlotMap<OscillatorId, Oscillator>,
}

impl OscillatorBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            oscillators: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Adds a fresh voice at phase zero and returns its token.
    pub fn create(&mut self) -> OscillatorId {
        let id = self.oscillators.insert(Oscillator::new());
        log::debug!(
            target: "phasor::bank",
            oscillator:? = id,
            total = self.oscillators.len();
            "Created oscillator"
        );
        id
    }

    /// Removes the voice behind `id`, returning whether it was still live.
    /// Destroying a stale token does nothing.
    pub fn destroy(&mut self, id: OscillatorId) -> bool {
        let removed = self.oscillators.remove(id).is_some();
        if removed {
            log::debug!(
                target: "phasor::bank",
                oscillator:? = id,
                total = self.oscillators.len();
                "Destroyed oscillator"
            );
        }
        removed
    }

    pub fn contains(&self, id: OscillatorId) -> bool {
        self.oscillators.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.oscillators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.oscillators.is_empty()
    }

    /// Current phase of the voice behind `id`, if it is still live.
    pub fn phase(&self, id: OscillatorId) -> Option<f64> {
        self.oscillators.get(id).map(Oscillator::phase)
    }

    /// Renders the next `out.len()` samples of the voice behind `id`, with
    /// the same contract as [`Oscillator::generate`].
    ///
    /// A stale token returns `Ok` and leaves `out` exactly as it was, so a
    /// host racing its own teardown hears whatever it last mixed rather
    /// than a crash.
    pub fn generate(
        &mut self,
        id: OscillatorId,
        params: &ToneParams,
        out: &mut [f32],
    ) -> Result<(), GenerateError> {
        match self.oscillators.get_mut(id) {
            Some(oscillator) => oscillator.generate(params, out),
            None => Ok(()),
        }
    }

    /// Renders a tone selected by raw integer, for hosts whose waveform
    /// choice arrives as a plain number.
    ///
    /// A selector with no [`Waveform`] behind it is a deliberate silence:
    /// the buffer is zeroed, the phase holds still, and the other
    /// parameters are not even inspected. Hosts exploit this by wiring a
    /// disabled voice to an out-of-range selector.
    pub fn generate_raw(
        &mut self,
        id: OscillatorId,
        frequency: f32,
        sample_rate: f32,
        volume: f32,
        selector: i32,
        out: &mut [f32],
    ) -> Result<(), GenerateError> {
        let Some(waveform) = Waveform::from_i32(selector) else {
            if self.oscillators.contains_key(id) {
                out.fill(0.0);
            }
            return Ok(());
        };

        let params = ToneParams {
            frequency,
            sample_rate,
            volume,
            waveform,
        };
        self.generate(id, &params, out)
    }
}
