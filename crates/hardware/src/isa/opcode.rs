//! RV32IMF major opcodes and instruction format classification.
//!
//! `Opcode` is the closed set of major opcodes this front end recognises.
//! Matches over it are exhaustive, so adding an opcode forces every decode
//! table to handle it.

use serde::Serialize;

use crate::common::error::DecodeError;
use crate::isa::rv32f::opcodes as f_op;
use crate::isa::rv32i::opcodes as i_op;

/// RISC-V instruction encoding formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Format {
    /// Register-register (also covers the R4 fused multiply-add layout).
    R,
    /// Register-immediate, loads, `JALR`, system.
    I,
    /// Stores.
    S,
    /// Conditional branches.
    B,
    /// Upper immediate.
    U,
    /// Unconditional jump.
    J,
    /// Opcode outside the recognised set.
    #[default]
    Unknown,
}

impl Format {
    /// Returns `true` for formats that carry an immediate.
    pub const fn has_immediate(self) -> bool {
        matches!(self, Self::I | Self::S | Self::B | Self::U | Self::J)
    }
}

/// RV32IMF major opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Opcode {
    /// Integer loads.
    Load,
    /// Floating-point load (`FLW`).
    LoadFp,
    /// Register-immediate arithmetic.
    Imm,
    /// Add upper immediate to PC.
    Auipc,
    /// Integer stores.
    Store,
    /// Floating-point store (`FSW`).
    StoreFp,
    /// Register-register arithmetic, including the M extension.
    Reg,
    /// Load upper immediate.
    Lui,
    /// Fused multiply-add.
    Fmadd,
    /// Fused multiply-subtract.
    Fmsub,
    /// Fused negated multiply-subtract.
    Fnmsub,
    /// Fused negated multiply-add.
    Fnmadd,
    /// Floating-point arithmetic, selected by funct5.
    Fp,
    /// Conditional branches.
    Branch,
    /// Jump and link register.
    Jalr,
    /// Jump and link.
    Jal,
    /// System instructions. Classified but never resolved to a valid micro-op.
    System,
}

impl Opcode {
    /// Maps a 7-bit opcode field to its major opcode, if recognised.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        Some(match bits {
            i_op::OP_LOAD => Self::Load,
            f_op::OP_LOAD_FP => Self::LoadFp,
            i_op::OP_IMM => Self::Imm,
            i_op::OP_AUIPC => Self::Auipc,
            i_op::OP_STORE => Self::Store,
            f_op::OP_STORE_FP => Self::StoreFp,
            i_op::OP_REG => Self::Reg,
            i_op::OP_LUI => Self::Lui,
            f_op::OP_FMADD => Self::Fmadd,
            f_op::OP_FMSUB => Self::Fmsub,
            f_op::OP_FNMSUB => Self::Fnmsub,
            f_op::OP_FNMADD => Self::Fnmadd,
            f_op::OP_FP => Self::Fp,
            i_op::OP_BRANCH => Self::Branch,
            i_op::OP_JALR => Self::Jalr,
            i_op::OP_JAL => Self::Jal,
            i_op::OP_SYSTEM => Self::System,
            _ => return None,
        })
    }

    /// Returns the 7-bit encoding of this opcode.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Load => i_op::OP_LOAD,
            Self::LoadFp => f_op::OP_LOAD_FP,
            Self::Imm => i_op::OP_IMM,
            Self::Auipc => i_op::OP_AUIPC,
            Self::Store => i_op::OP_STORE,
            Self::StoreFp => f_op::OP_STORE_FP,
            Self::Reg => i_op::OP_REG,
            Self::Lui => i_op::OP_LUI,
            Self::Fmadd => f_op::OP_FMADD,
            Self::Fmsub => f_op::OP_FMSUB,
            Self::Fnmsub => f_op::OP_FNMSUB,
            Self::Fnmadd => f_op::OP_FNMADD,
            Self::Fp => f_op::OP_FP,
            Self::Branch => i_op::OP_BRANCH,
            Self::Jalr => i_op::OP_JALR,
            Self::Jal => i_op::OP_JAL,
            Self::System => i_op::OP_SYSTEM,
        }
    }

    /// Encoding format of this opcode.
    pub const fn format(self) -> Format {
        match self {
            Self::Load | Self::LoadFp | Self::Imm | Self::Jalr | Self::System => Format::I,
            Self::Store | Self::StoreFp => Format::S,
            Self::Branch => Format::B,
            Self::Lui | Self::Auipc => Format::U,
            Self::Jal => Format::J,
            Self::Reg | Self::Fp | Self::Fmadd | Self::Fmsub | Self::Fnmsub | Self::Fnmadd => {
                Format::R
            }
        }
    }

    /// Returns `true` for the R4-type fused multiply-add opcodes.
    pub const fn is_fused(self) -> bool {
        matches!(self, Self::Fmadd | Self::Fmsub | Self::Fnmsub | Self::Fnmadd)
    }
}

impl TryFrom<u32> for Opcode {
    type Error = DecodeError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or(DecodeError::UnknownOpcode(bits))
    }
}

/// Classifies a 7-bit opcode field into its instruction format.
///
/// Unrecognised opcodes classify as [`Format::Unknown`].
pub fn classify(opcode: u32) -> Format {
    Opcode::from_bits(opcode).map_or(Format::Unknown, Opcode::format)
}
