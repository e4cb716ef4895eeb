//! RISC-V Floating-Point Register File.
//!
//! This module implements the floating-point register bank. It performs the following:
//! 1. **Storage:** Maintains 32 single-precision registers (`f0`-`f31`) as raw IEEE 754 bits.
//! 2. **Variant Selection:** `f0` is an ordinary register unless the bank is built with
//!    a hardwired zero.

use crate::common::constants::NUM_REGS;
use crate::common::error::{DecodeError, Result};

/// Floating-Point Register file.
#[derive(Clone, Debug, Default)]
pub struct Fpr {
    fregs: [u32; NUM_REGS],
    zero_hardwired: bool,
}

impl Fpr {
    /// Creates a floating-point register file with a writable `f0`.
    pub const fn new() -> Self {
        Self::with_zero_hardwired(false)
    }

    /// Creates a floating-point register file, optionally hardwiring `f0` to zero.
    pub const fn with_zero_hardwired(zero_hardwired: bool) -> Self {
        Self {
            fregs: [0; NUM_REGS],
            zero_hardwired,
        }
    }

    /// Returns `true` when `f0` reads as zero and ignores writes.
    pub const fn zero_hardwired(&self) -> bool {
        self.zero_hardwired
    }

    /// Reads a floating-point register as raw bits.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidRegister`] for an index outside `0..32`.
    pub fn read(&self, idx: usize) -> Result<u32> {
        match self.fregs.get(idx) {
            Some(_) if idx == 0 && self.zero_hardwired => Ok(0),
            Some(&val) => Ok(val),
            None => Err(DecodeError::InvalidRegister(idx)),
        }
    }

    /// Reads a floating-point register as an `f32`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidRegister`] for an index outside `0..32`.
    pub fn read_f32(&self, idx: usize) -> Result<f32> {
        self.read(idx).map(f32::from_bits)
    }

    /// Writes raw bits to a floating-point register.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidRegister`] for an index outside `0..32`.
    pub fn write(&mut self, idx: usize, val: u32) -> Result<()> {
        let hardwired = idx == 0 && self.zero_hardwired;
        let slot = self
            .fregs
            .get_mut(idx)
            .ok_or(DecodeError::InvalidRegister(idx))?;
        if !hardwired {
            *slot = val;
        }
        Ok(())
    }
}
