//! Configuration for the decode front end.
//!
//! This module defines the knobs that select between documented decoder
//! behaviours. It provides:
//! 1. **Reserved-encoding policy:** Whether reserved sub-encodings fall back to a default
//!    sub-operation or invalidate the instruction.
//! 2. **Register-file variant:** Whether `f0` is hardwired to zero.
//! 3. **Tracing:** Per-instruction trace events.
//!
//! Configuration is supplied as JSON (`DecoderConfig::from_json`) or built with
//! `DecoderConfig::default()`.

use serde::{Deserialize, Serialize};

use crate::common::error::Result;

/// Handling of reserved sub-encodings inside a recognised major opcode.
///
/// Examples: an `OP_FP` funct5 with no assigned operation, funct3 `010` on a
/// branch, a load width of `011`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum ReservedPolicy {
    /// Fall back to the opcode's default sub-operation and keep the micro-op valid.
    #[default]
    Permissive,
    /// Invalidate the micro-op.
    Strict,
}

/// Decoder configuration.
///
/// # Examples
///
/// ```
/// use rvdecode_core::config::{DecoderConfig, ReservedPolicy};
///
/// let json = r#"{ "reserved_encodings": "Strict", "trace": true }"#;
/// let config = DecoderConfig::from_json(json).unwrap();
/// assert_eq!(config.reserved_encodings, ReservedPolicy::Strict);
/// assert!(!config.fp_zero_hardwired);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Reserved sub-encoding handling.
    pub reserved_encodings: ReservedPolicy,

    /// Hardwire `f0` to zero in the floating-point register file.
    ///
    /// Off by default: `f0` is an ordinary writable register.
    pub fp_zero_hardwired: bool,

    /// Emit a `trace` event for every decoded instruction.
    pub trace: bool,
}

impl DecoderConfig {
    /// Parses a configuration from a JSON document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::DecodeError::Config`] when the document does not deserialize.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Configuration that invalidates reserved sub-encodings.
    pub fn strict() -> Self {
        Self {
            reserved_encodings: ReservedPolicy::Strict,
            ..Self::default()
        }
    }

    /// Returns `true` when reserved sub-encodings invalidate the micro-op.
    pub fn is_strict(&self) -> bool {
        self.reserved_encodings == ReservedPolicy::Strict
    }
}
