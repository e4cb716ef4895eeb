//! Pipeline stage implementations.
//!
//! The decode front end is the only stage modelled here. It turns a raw word
//! into a micro-op and the port/dispatch signals the scheduler consumes.

/// Instruction decode stage implementation.
pub mod decode;

/// Stateless decode entry points and the configurable decoder.
pub use decode::{DecodeOutput, Decoder, decode, resolve};
