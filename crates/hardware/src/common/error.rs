//! Error definitions.
//!
//! Decoding itself is total: every 32-bit word maps to a descriptor, and an
//! unrecognised encoding is a classification (`valid = false`), not an error.
//! `DecodeError` covers the fallible edges of the library: typed opcode
//! conversion, register-file addressing, word parsing and configuration.

use thiserror::Error;

/// Errors raised at the boundaries of the decode front end.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A 7-bit opcode value that is not an RV32IMF major opcode.
    #[error("unknown major opcode {0:#09b}")]
    UnknownOpcode(u32),

    /// A register-file port addressed a register outside `0..32`.
    #[error("register index {0} out of range")]
    InvalidRegister(usize),

    /// Text that does not parse as a 32-bit instruction word.
    #[error("invalid instruction word `{0}`")]
    InvalidWord(String),

    /// A decoder configuration document that does not deserialize.
    #[error("invalid decoder configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias for fallible decoder operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Parses an instruction word written as `0x`-prefixed hex or as decimal.
///
/// Underscores are accepted as digit separators.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidWord`] when the text is not a 32-bit value.
pub fn parse_word(text: &str) -> Result<u32> {
    let cleaned: String = text.trim().chars().filter(|&c| c != '_').collect();
    cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
        .map_or_else(|| cleaned.parse::<u32>(), |hex| u32::from_str_radix(hex, 16))
        .map_err(|_| DecodeError::InvalidWord(text.to_string()))
}
