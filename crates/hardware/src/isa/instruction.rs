//! Instruction field extraction.
//!
//! Provides bit extraction functions and the `Fields` record for pulling
//! fixed-position RISC-V instruction fields out of a 32-bit encoding.
//! Every 32-bit pattern extracts to some tuple of fields; nothing here fails.

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting a 5-bit register field (rd, rs1, rs2, rs3).
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for extracting the funct5 field (bits 27-31).
pub const FUNCT5_MASK: u32 = 0x1F;
/// Bit mask for extracting the floating-point format field (bits 25-26).
pub const FMT_MASK: u32 = 0x3;

const RD_SHIFT: u32 = 7;
const FUNCT3_SHIFT: u32 = 12;
const RS1_SHIFT: u32 = 15;
const RS2_SHIFT: u32 = 20;
const FMT_SHIFT: u32 = 25;
const FUNCT7_SHIFT: u32 = 25;
const HI5_SHIFT: u32 = 27;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Provides methods to extract all standard RV32IMF instruction fields
/// from a 32-bit instruction encoding.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    ///
    /// The opcode determines the instruction format and operation category.
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the third source register field (bits 27-31, for FMA instructions).
    ///
    /// Shares its bits with [`InstructionBits::funct5`].
    fn rs3(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;

    /// Extracts the funct5 field (bits 27-31, for `OP_FP` instructions).
    ///
    /// Shares its bits with [`InstructionBits::rs3`].
    fn funct5(&self) -> u32;

    /// Extracts the floating-point format field (bits 25-26).
    fn fmt(&self) -> u32;

    /// Extracts the rounding-mode field (bits 12-14, aliasing funct3).
    fn rm(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs3(&self) -> usize {
        ((self >> HI5_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }

    #[inline(always)]
    fn funct5(&self) -> u32 {
        (self >> HI5_SHIFT) & FUNCT5_MASK
    }

    #[inline(always)]
    fn fmt(&self) -> u32 {
        (self >> FMT_SHIFT) & FMT_MASK
    }

    #[inline(always)]
    fn rm(&self) -> u32 {
        self.funct3()
    }
}

/// Fields extracted from one instruction word.
///
/// Bits 31-27 are stored once and exposed through two accessors,
/// [`Fields::rs3`] and [`Fields::funct5`]; the opcode decides which reading
/// applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fields {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Major opcode (bits 6-0).
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// Function code field 3 (also the FP rounding mode).
    pub funct3: u32,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 7.
    pub funct7: u32,
    /// Floating-point format (bits 26-25).
    pub fmt: u32,
    hi5: u32,
}

impl Fields {
    /// Extracts every field of `inst`.
    pub fn extract(inst: u32) -> Self {
        Self {
            raw: inst,
            opcode: inst.opcode(),
            rd: inst.rd(),
            funct3: inst.funct3(),
            rs1: inst.rs1(),
            rs2: inst.rs2(),
            funct7: inst.funct7(),
            fmt: inst.fmt(),
            hi5: inst.funct5(),
        }
    }

    /// Bits 31-27 read as the third source register (R4-type).
    #[inline]
    pub const fn rs3(&self) -> usize {
        self.hi5 as usize
    }

    /// Bits 31-27 read as the `OP_FP` operation selector.
    #[inline]
    pub const fn funct5(&self) -> u32 {
        self.hi5
    }

    /// Rounding mode (aliases funct3).
    #[inline]
    pub const fn rm(&self) -> u32 {
        self.funct3
    }
}

/// Extracts the instruction fields of `inst`. Shorthand for [`Fields::extract`].
#[inline]
pub fn extract(inst: u32) -> Fields {
    Fields::extract(inst)
}
