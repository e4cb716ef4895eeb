//! Common utilities and types used throughout the decoder.
//!
//! This module provides building blocks shared across the crate. It includes:
//! 1. **Constants:** Instruction and register-file constants.
//! 2. **Error Handling:** The `DecodeError` type and word parsing.
//! 3. **Register Management:** The register-file contract consuming port signals.

/// Common constants used throughout the decoder.
pub mod constants;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::{DecodeError, Result, parse_word};
pub use reg::{Operands, RegisterFile};
