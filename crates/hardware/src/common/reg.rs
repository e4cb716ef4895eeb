//! Unified Register File.
//!
//! This module provides the `RegisterFile` struct, which pairs the integer and
//! floating-point banks behind the port interface the decoder drives. It provides:
//! 1. **Port Reads:** Three read ports per bank, each fed by the decode signal bundle.
//! 2. **Port Write:** A single write per cycle through whichever bank's write enable is set.
//! 3. **Direct Access:** Plain reads and writes for setup and inspection.

use crate::common::error::Result;
use crate::config::DecoderConfig;
use crate::core::arch::fpr::Fpr;
use crate::core::arch::gpr::Gpr;
use crate::core::pipeline::ports::{BankPorts, PortSignals};

/// Source operand values read through the three read ports.
///
/// Each value comes from whichever bank enabled that port; a port enabled in
/// neither bank yields 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operands {
    /// Read port 0 (rs1).
    pub rs1: u32,
    /// Read port 1 (rs2).
    pub rs2: u32,
    /// Read port 2 (rs3).
    pub rs3: u32,
}

/// Unified register file containing both general-purpose and floating-point registers.
#[derive(Clone, Debug, Default)]
pub struct RegisterFile {
    gpr: Gpr,
    fpr: Fpr,
}

impl RegisterFile {
    /// Creates a register file with all registers zero and a writable `f0`.
    pub const fn new() -> Self {
        Self {
            gpr: Gpr::new(),
            fpr: Fpr::new(),
        }
    }

    /// Creates a register file with the `f0` variant selected by the configuration.
    pub const fn from_config(config: &DecoderConfig) -> Self {
        Self {
            gpr: Gpr::new(),
            fpr: Fpr::with_zero_hardwired(config.fp_zero_hardwired),
        }
    }

    /// Performs the three read-port reads requested by a signal bundle.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::DecodeError::InvalidRegister`] if an enabled port
    /// addresses a register outside `0..32`.
    pub fn read_operands(&self, signals: &PortSignals) -> Result<Operands> {
        let mut values = [0u32; 3];
        for (port, value) in values.iter_mut().enumerate() {
            *value = if signals.int.read[port].enable {
                self.gpr.read(signals.int.read[port].addr)?
            } else if signals.fp.read[port].enable {
                self.fpr.read(signals.fp.read[port].addr)?
            } else {
                0
            };
        }
        let [rs1, rs2, rs3] = values;
        Ok(Operands { rs1, rs2, rs3 })
    }

    /// Performs the write-port write requested by a signal bundle.
    ///
    /// A no-op when neither bank's write enable is set.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::DecodeError::InvalidRegister`] if the enabled write
    /// port addresses a register outside `0..32`.
    pub fn write_result(&mut self, signals: &PortSignals, val: u32) -> Result<()> {
        let BankPorts { write: int, .. } = signals.int;
        let BankPorts { write: fp, .. } = signals.fp;
        if int.enable {
            self.gpr.write(int.addr, val)
        } else if fp.enable {
            self.fpr.write(fp.addr, val)
        } else {
            Ok(())
        }
    }

    /// Reads a general-purpose register.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::DecodeError::InvalidRegister`] for an index outside `0..32`.
    pub fn read(&self, idx: usize) -> Result<u32> {
        self.gpr.read(idx)
    }

    /// Writes a general-purpose register. Writes to `x0` are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::DecodeError::InvalidRegister`] for an index outside `0..32`.
    pub fn write(&mut self, idx: usize, val: u32) -> Result<()> {
        self.gpr.write(idx, val)
    }

    /// Reads a floating-point register as raw bits.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::DecodeError::InvalidRegister`] for an index outside `0..32`.
    pub fn read_f(&self, idx: usize) -> Result<u32> {
        self.fpr.read(idx)
    }

    /// Writes raw bits to a floating-point register.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::DecodeError::InvalidRegister`] for an index outside `0..32`.
    pub fn write_f(&mut self, idx: usize, val: u32) -> Result<()> {
        self.fpr.write(idx, val)
    }

    /// The integer bank.
    pub const fn gpr(&self) -> &Gpr {
        &self.gpr
    }

    /// The floating-point bank.
    pub const fn fpr(&self) -> &Fpr {
        &self.fpr
    }
}
