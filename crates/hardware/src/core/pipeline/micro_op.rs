//! Decoded instruction descriptor.
//!
//! A `MicroOp` is produced fresh for every decoded word and never carries
//! state over from a previous decode. An invalid micro-op keeps only `pc` and
//! `raw_instruction` (plus `format` and `opcode` for a recognised opcode that
//! was rejected); every enable is cleared and `exec_unit` is `Unknown`.

use serde::Serialize;

use crate::core::pipeline::signals::{AluOp, BranchOp, ExecUnit, FpOp, MemWidth};
use crate::isa::opcode::{Format, Opcode};

/// Fully-resolved micro-operation for one instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MicroOp {
    /// The descriptor holds a recognised instruction.
    pub valid: bool,
    /// Program counter of the instruction (pass-through).
    pub pc: u32,
    /// 32-bit instruction encoding (pass-through).
    pub raw_instruction: u32,
    /// Encoding format.
    pub format: Format,
    /// Major opcode, `None` when unrecognised.
    pub opcode: Option<Opcode>,
    /// Execution unit the instruction dispatches to.
    pub exec_unit: ExecUnit,

    /// First source register index.
    pub rs1_addr: usize,
    /// Second source register index.
    pub rs2_addr: usize,
    /// Third source register index (fused multiply-add only).
    pub rs3_addr: usize,
    /// Destination register index.
    pub rd_addr: usize,

    /// `rs1` is read.
    pub rs1_en: bool,
    /// `rs2` is read.
    pub rs2_en: bool,
    /// `rs3` is read.
    pub rs3_en: bool,
    /// `rd` is written.
    pub rd_en: bool,

    /// `rs1` lives in the floating-point register file.
    pub is_fp_rs1: bool,
    /// `rs2` lives in the floating-point register file.
    pub is_fp_rs2: bool,
    /// `rs3` lives in the floating-point register file.
    pub is_fp_rs3: bool,
    /// `rd` lives in the floating-point register file.
    pub is_fp_rd: bool,

    /// Sign-extended immediate (0 for R-type).
    pub imm: i32,
    /// Integer ALU sub-operation.
    pub alu_op: AluOp,
    /// Floating-point sub-operation.
    pub fp_alu_op: FpOp,
    /// Branch sub-operation.
    pub branch_op: BranchOp,
    /// Memory access width for loads and stores.
    pub mem_width: MemWidth,
    /// Load zero-extends (`LBU`, `LHU`).
    pub load_unsigned: bool,

    /// Instruction reads memory.
    pub is_load: bool,
    /// Instruction writes memory.
    pub is_store: bool,
    /// Instruction is a conditional branch.
    pub is_branch: bool,
    /// Instruction is an unconditional jump (`JAL`/`JALR`).
    pub is_jump: bool,
}

impl MicroOp {
    /// An invalid micro-op for the given pass-through values.
    pub const fn invalid(pc: u32, raw_instruction: u32) -> Self {
        Self {
            valid: false,
            pc,
            raw_instruction,
            format: Format::Unknown,
            opcode: None,
            exec_unit: ExecUnit::Unknown,
            rs1_addr: 0,
            rs2_addr: 0,
            rs3_addr: 0,
            rd_addr: 0,
            rs1_en: false,
            rs2_en: false,
            rs3_en: false,
            rd_en: false,
            is_fp_rs1: false,
            is_fp_rs2: false,
            is_fp_rs3: false,
            is_fp_rd: false,
            imm: 0,
            alu_op: AluOp::Add,
            fp_alu_op: FpOp::Add,
            branch_op: BranchOp::Eq,
            mem_width: MemWidth::Nop,
            load_unsigned: false,
            is_load: false,
            is_store: false,
            is_branch: false,
            is_jump: false,
        }
    }

    /// Returns `true` when the decoder rewrote the instruction into a register move
    /// (`mv rd, rs`, including `nop`).
    pub fn is_move(&self) -> bool {
        self.valid && self.exec_unit == ExecUnit::Alu && self.alu_op == AluOp::CopyA
    }

    /// Returns `true` when the instruction reads or writes memory.
    pub const fn is_mem(&self) -> bool {
        self.is_load || self.is_store
    }
}
