//! RISC-V General-Purpose Register File.
//!
//! This module implements the integer register bank. It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Debugging:** Provides a formatted dump of the register state.

use std::fmt::Write as _;

use crate::common::constants::NUM_REGS;
use crate::common::error::{DecodeError, Result};

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers used for integer operations. Register `x0`
/// is hardwired to zero: reads return 0 and writes are discarded.
#[derive(Clone, Debug, Default)]
pub struct Gpr {
    regs: [u32; NUM_REGS],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidRegister`] for an index outside `0..32`.
    pub fn read(&self, idx: usize) -> Result<u32> {
        match self.regs.get(idx) {
            Some(_) if idx == 0 => Ok(0),
            Some(&val) => Ok(val),
            None => Err(DecodeError::InvalidRegister(idx)),
        }
    }

    /// Writes a value to a general-purpose register. Writes to `x0` are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidRegister`] for an index outside `0..32`.
    pub fn write(&mut self, idx: usize, val: u32) -> Result<()> {
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or(DecodeError::InvalidRegister(idx))?;
        if idx != 0 {
            *slot = val;
        }
        Ok(())
    }

    /// Renders all registers, four per line, in hexadecimal.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (i, chunk) in self.regs.chunks(4).enumerate() {
            for (j, val) in chunk.iter().enumerate() {
                let _ = write!(out, "x{:<2}={val:#010x} ", i * 4 + j);
            }
            out.push('\n');
        }
        out
    }
}
