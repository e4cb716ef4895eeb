//! Micro-operation tags.
//!
//! This module defines the enumerations carried by a decoded micro-op:
//! 1. **Unit Selection:** The execution unit an instruction is dispatched to.
//! 2. **Operation Classification:** Integer ALU, floating-point and branch sub-operations.
//! 3. **Memory Control:** Access width for loads and stores.
//!
//! Each sub-operation tag is meaningful only when the micro-op's `exec_unit`
//! selects the matching unit; otherwise it holds its default.

use serde::Serialize;

/// Execution unit an instruction is dispatched to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ExecUnit {
    /// Integer ALU (also multiply/divide).
    Alu,
    /// Branch unit (conditional branches, `JAL`, `JALR`).
    Branch,
    /// Load side of the load/store unit.
    Load,
    /// Store side of the load/store unit.
    Store,
    /// Floating-point add/compare/convert/move unit.
    FpAlu,
    /// Floating-point multiplier (also fused multiply-add).
    FpMul,
    /// Floating-point divide / square-root unit.
    FpDiv,
    /// No unit; the micro-op is invalid.
    #[default]
    Unknown,
}

/// Integer ALU operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum AluOp {
    /// Addition (also AUIPC's PC + imm).
    #[default]
    Add,

    /// Integer subtraction.
    Sub,

    /// Shift left logical.
    Sll,

    /// Set less than (signed).
    Slt,

    /// Set less than unsigned.
    Sltu,

    /// Bitwise XOR.
    Xor,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic.
    Sra,

    /// Bitwise OR.
    Or,

    /// Bitwise AND.
    And,

    /// Integer multiply (every M-extension funct3 other than `DIV`).
    Mul,

    /// Integer divide.
    Div,

    /// Pass operand A through (`mv rd, rs`).
    CopyA,

    /// Pass operand B through (`LUI`'s immediate).
    CopyB,
}

/// Floating-point operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum FpOp {
    /// Floating-point addition.
    #[default]
    Add,

    /// Floating-point subtraction.
    Sub,

    /// Floating-point multiplication.
    Mul,

    /// Floating-point division.
    Div,

    /// Floating-point square root.
    Sqrt,

    /// Sign injection (copy sign); `fmv.s` when `rs1 == rs2`.
    SgnJ,

    /// Sign injection (negate sign).
    SgnJN,

    /// Sign injection (XOR sign).
    SgnJX,

    /// Floating-point minimum.
    Min,

    /// Floating-point maximum.
    Max,

    /// Equality comparison.
    Eq,

    /// Less-than comparison.
    Lt,

    /// Less-than-or-equal comparison.
    Le,

    /// Classify.
    Class,

    /// Move integer register bits to a floating-point register.
    MvWX,

    /// Move floating-point register bits to an integer register.
    MvXW,

    /// Convert single to signed word.
    CvtWS,

    /// Convert single to unsigned word.
    CvtWuS,

    /// Convert signed word to single.
    CvtSW,

    /// Convert unsigned word to single.
    CvtSWu,

    /// Fused multiply-add.
    MAdd,

    /// Fused multiply-subtract.
    MSub,

    /// Fused negated multiply-subtract.
    NMSub,

    /// Fused negated multiply-add.
    NMAdd,
}

/// Branch unit operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum BranchOp {
    /// Branch if equal.
    #[default]
    Eq,

    /// Branch if not equal.
    Ne,

    /// Branch if less than (signed).
    Lt,

    /// Branch if greater or equal (signed).
    Ge,

    /// Branch if less than (unsigned).
    Ltu,

    /// Branch if greater or equal (unsigned).
    Geu,

    /// Direct jump and link.
    Jal,

    /// Indirect jump and link.
    Jalr,
}

/// Memory access width for load and store operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum MemWidth {
    /// No memory operation.
    #[default]
    Nop,

    /// 8-bit byte access.
    Byte,

    /// 16-bit half-word access.
    Half,

    /// 32-bit word access.
    Word,
}
