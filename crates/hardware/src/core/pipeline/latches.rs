//! Registered decode output.
//!
//! `DecodeLatch` places a one-cycle register after the combinational decoder:
//! each `tick` presents the result sampled on the previous tick and captures the
//! current input. A reset or flush forces the held output to the cleared state.

use tracing::debug;

use crate::config::DecoderConfig;
use crate::core::pipeline::stages::decode::{DecodeOutput, Decoder};
use crate::core::pipeline::traits::PipelineLatch;

/// Decoder followed by a one-cycle output register.
#[derive(Clone, Debug, Default)]
pub struct DecodeLatch {
    decoder: Decoder,
    held: DecodeOutput,
}

impl DecodeLatch {
    /// Creates a latch around a decoder with the given configuration.
    pub fn new(config: DecoderConfig) -> Self {
        Self::with_decoder(Decoder::new(config))
    }

    /// Creates a latch around an existing decoder.
    pub fn with_decoder(decoder: Decoder) -> Self {
        Self {
            decoder,
            held: DecodeOutput::default(),
        }
    }

    /// Advances one clock edge.
    ///
    /// Returns the output captured on the previous tick (cleared on the first tick
    /// and after a reset) and captures the decode of this tick's input.
    pub fn tick(&mut self, valid_in: bool, pc: u32, inst: u32) -> DecodeOutput {
        let next = self.decoder.decode(valid_in, pc, inst);
        std::mem::replace(&mut self.held, next)
    }

    /// The output currently held by the register.
    pub const fn output(&self) -> &DecodeOutput {
        &self.held
    }

    /// Forces the held output to the cleared state.
    pub fn reset(&mut self) {
        debug!(
            pc = format_args!("{:#010x}", self.held.uop.pc),
            was_valid = self.held.uop.valid,
            "decode latch reset"
        );
        self.held = DecodeOutput::default();
    }

    /// The wrapped decoder.
    pub const fn decoder(&self) -> &Decoder {
        &self.decoder
    }
}

impl PipelineLatch for DecodeLatch {
    fn flush(&mut self) {
        self.reset();
    }

    fn is_empty(&self) -> bool {
        !self.held.uop.valid
    }
}
