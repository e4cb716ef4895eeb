//! Global Decoder Constants.
//!
//! This module defines constants shared across the decode front end. It includes:
//! 1. **Instruction Constants:** Instruction size and canonical encodings.
//! 2. **Register File Constants:** Register counts and port counts.

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE_32: u32 = 4;

/// ADDI x0, x0, 0 instruction encoding (canonical NOP).
pub const INSTRUCTION_NOP: u32 = 0x0000_0013;

/// Number of architectural registers in each register file.
pub const NUM_REGS: usize = 32;

/// Read ports per register file (rs1, rs2, rs3).
pub const READ_PORTS: usize = 3;
