//! Fluent RV32IMF instruction encoder.
//!
//! `InstructionBuilder` assembles raw instruction words from their fields so
//! tests can state the instruction they mean instead of a hex constant.

use rvdecode_core::isa::rv32f::{funct3 as f3f, funct5, opcodes as fop};
use rvdecode_core::isa::rv32i::funct3 as f3;
use rvdecode_core::isa::rv32i::funct7;
use rvdecode_core::isa::rv32i::opcodes::*;
use rvdecode_core::isa::rv32m::{funct3 as f3m, opcodes::M_EXTENSION};

/// Builder for a single 32-bit instruction word.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstructionBuilder {
    opcode: u32,
    rd: u32,
    funct3: u32,
    rs1: u32,
    rs2: u32,
    rs3: u32,
    funct7: u32,
    imm: i32,
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn rd(mut self, rd: u32) -> Self {
        self.rd = rd;
        self
    }

    pub fn rs1(mut self, rs1: u32) -> Self {
        self.rs1 = rs1;
        self
    }

    pub fn rs2(mut self, rs2: u32) -> Self {
        self.rs2 = rs2;
        self
    }

    pub fn rs3(mut self, rs3: u32) -> Self {
        self.rs3 = rs3;
        self
    }

    pub fn funct3(mut self, funct3: u32) -> Self {
        self.funct3 = funct3;
        self
    }

    pub fn funct7(mut self, funct7: u32) -> Self {
        self.funct7 = funct7;
        self
    }

    pub fn imm(mut self, imm: i32) -> Self {
        self.imm = imm;
        self
    }

    // --- RV32I register-register ---

    fn reg(self, funct3: u32, funct7: u32, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.opcode(OP_REG)
            .funct3(funct3)
            .funct7(funct7)
            .rd(rd)
            .rs1(rs1)
            .rs2(rs2)
    }

    pub fn add(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(f3::ADD_SUB, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn sub(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(f3::ADD_SUB, funct7::SUB, rd, rs1, rs2)
    }

    pub fn sll(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(f3::SLL, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn slt(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(f3::SLT, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn sltu(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(f3::SLTU, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn xor(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(f3::XOR, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn srl(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(f3::SRL_SRA, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn sra(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(f3::SRL_SRA, funct7::SRA, rd, rs1, rs2)
    }

    pub fn or(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(f3::OR, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn and(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(f3::AND, funct7::DEFAULT, rd, rs1, rs2)
    }

    // --- RV32M ---

    pub fn mul(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(f3m::MUL, M_EXTENSION, rd, rs1, rs2)
    }

    pub fn mulhu(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(f3m::MULHU, M_EXTENSION, rd, rs1, rs2)
    }

    pub fn div(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(f3m::DIV, M_EXTENSION, rd, rs1, rs2)
    }

    pub fn divu(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(f3m::DIVU, M_EXTENSION, rd, rs1, rs2)
    }

    pub fn rem(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(f3m::REM, M_EXTENSION, rd, rs1, rs2)
    }

    // --- RV32I immediates ---

    fn op_imm(self, funct3: u32, rd: u32, rs1: u32, imm: i32) -> Self {
        self.opcode(OP_IMM).funct3(funct3).rd(rd).rs1(rs1).imm(imm)
    }

    pub fn addi(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.op_imm(f3::ADD_SUB, rd, rs1, imm)
    }

    pub fn slti(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.op_imm(f3::SLT, rd, rs1, imm)
    }

    pub fn sltiu(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.op_imm(f3::SLTU, rd, rs1, imm)
    }

    pub fn xori(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.op_imm(f3::XOR, rd, rs1, imm)
    }

    pub fn ori(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.op_imm(f3::OR, rd, rs1, imm)
    }

    pub fn andi(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.op_imm(f3::AND, rd, rs1, imm)
    }

    pub fn slli(self, rd: u32, rs1: u32, shamt: u32) -> Self {
        self.op_imm(f3::SLL, rd, rs1, (shamt & 0x1F) as i32)
    }

    pub fn srli(self, rd: u32, rs1: u32, shamt: u32) -> Self {
        self.op_imm(f3::SRL_SRA, rd, rs1, (shamt & 0x1F) as i32)
    }

    pub fn srai(self, rd: u32, rs1: u32, shamt: u32) -> Self {
        self.op_imm(f3::SRL_SRA, rd, rs1, ((funct7::SRA << 5) | (shamt & 0x1F)) as i32)
    }

    /// NOP is ADDI x0, x0, 0
    pub fn nop(self) -> Self {
        self.addi(0, 0, 0)
    }

    // --- Loads and stores ---

    fn load(self, funct3: u32, rd: u32, rs1: u32, imm: i32) -> Self {
        self.opcode(OP_LOAD).funct3(funct3).rd(rd).rs1(rs1).imm(imm)
    }

    pub fn lb(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.load(f3::LB, rd, rs1, imm)
    }

    pub fn lh(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.load(f3::LH, rd, rs1, imm)
    }

    pub fn lw(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.load(f3::LW, rd, rs1, imm)
    }

    pub fn lbu(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.load(f3::LBU, rd, rs1, imm)
    }

    pub fn lhu(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.load(f3::LHU, rd, rs1, imm)
    }

    fn store(self, funct3: u32, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.opcode(OP_STORE).funct3(funct3).rs1(rs1).rs2(rs2).imm(imm)
    }

    pub fn sb(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.store(f3::SB, rs1, rs2, imm)
    }

    pub fn sh(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.store(f3::SH, rs1, rs2, imm)
    }

    pub fn sw(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.store(f3::SW, rs1, rs2, imm)
    }

    pub fn flw(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.opcode(fop::OP_LOAD_FP)
            .funct3(f3f::WIDTH_WORD)
            .rd(rd)
            .rs1(rs1)
            .imm(imm)
    }

    pub fn fsw(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.opcode(fop::OP_STORE_FP)
            .funct3(f3f::WIDTH_WORD)
            .rs1(rs1)
            .rs2(rs2)
            .imm(imm)
    }

    // --- Control flow ---

    fn branch(self, funct3: u32, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.opcode(OP_BRANCH).funct3(funct3).rs1(rs1).rs2(rs2).imm(imm)
    }

    pub fn beq(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.branch(f3::BEQ, rs1, rs2, imm)
    }

    pub fn bne(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.branch(f3::BNE, rs1, rs2, imm)
    }

    pub fn blt(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.branch(f3::BLT, rs1, rs2, imm)
    }

    pub fn bge(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.branch(f3::BGE, rs1, rs2, imm)
    }

    pub fn bltu(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.branch(f3::BLTU, rs1, rs2, imm)
    }

    pub fn bgeu(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.branch(f3::BGEU, rs1, rs2, imm)
    }

    pub fn jal(self, rd: u32, imm: i32) -> Self {
        self.opcode(OP_JAL).rd(rd).imm(imm)
    }

    pub fn jalr(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.opcode(OP_JALR)
            .funct3(f3::JALR)
            .rd(rd)
            .rs1(rs1)
            .imm(imm)
    }

    /// `imm` is the 20-bit upper immediate, not the shifted value.
    pub fn lui(self, rd: u32, imm: i32) -> Self {
        self.opcode(OP_LUI).rd(rd).imm(imm)
    }

    /// `imm` is the 20-bit upper immediate, not the shifted value.
    pub fn auipc(self, rd: u32, imm: i32) -> Self {
        self.opcode(OP_AUIPC).rd(rd).imm(imm)
    }

    pub fn ecall(self) -> Self {
        self.opcode(OP_SYSTEM)
    }

    // --- RV32F ---

    fn fp(self, funct5: u32, funct3: u32, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.opcode(fop::OP_FP)
            .funct7((funct5 << 2) | fop::FMT_S)
            .funct3(funct3)
            .rd(rd)
            .rs1(rs1)
            .rs2(rs2)
    }

    pub fn fadd_s(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.fp(funct5::FADD, 0, rd, rs1, rs2)
    }

    pub fn fsub_s(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.fp(funct5::FSUB, 0, rd, rs1, rs2)
    }

    pub fn fmul_s(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.fp(funct5::FMUL, 0, rd, rs1, rs2)
    }

    pub fn fdiv_s(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.fp(funct5::FDIV, 0, rd, rs1, rs2)
    }

    pub fn fsqrt_s(self, rd: u32, rs1: u32) -> Self {
        self.fp(funct5::FSQRT, 0, rd, rs1, 0)
    }

    pub fn fsgnj_s(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.fp(funct5::FSGNJ, f3f::FSGNJ, rd, rs1, rs2)
    }

    pub fn fsgnjn_s(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.fp(funct5::FSGNJ, f3f::FSGNJN, rd, rs1, rs2)
    }

    pub fn fsgnjx_s(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.fp(funct5::FSGNJ, f3f::FSGNJX, rd, rs1, rs2)
    }

    pub fn fmin_s(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.fp(funct5::FMIN_MAX, f3f::FMIN, rd, rs1, rs2)
    }

    pub fn fmax_s(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.fp(funct5::FMIN_MAX, f3f::FMAX, rd, rs1, rs2)
    }

    pub fn feq_s(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.fp(funct5::FCMP, f3f::FEQ, rd, rs1, rs2)
    }

    pub fn flt_s(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.fp(funct5::FCMP, f3f::FLT, rd, rs1, rs2)
    }

    pub fn fle_s(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.fp(funct5::FCMP, f3f::FLE, rd, rs1, rs2)
    }

    pub fn fcvt_w_s(self, rd: u32, rs1: u32) -> Self {
        self.fp(funct5::FCVT_W_S, 0, rd, rs1, 0)
    }

    pub fn fcvt_wu_s(self, rd: u32, rs1: u32) -> Self {
        self.fp(funct5::FCVT_W_S, 0, rd, rs1, 1)
    }

    pub fn fcvt_s_w(self, rd: u32, rs1: u32) -> Self {
        self.fp(funct5::FCVT_S_W, 0, rd, rs1, 0)
    }

    pub fn fcvt_s_wu(self, rd: u32, rs1: u32) -> Self {
        self.fp(funct5::FCVT_S_W, 0, rd, rs1, 1)
    }

    pub fn fmv_x_w(self, rd: u32, rs1: u32) -> Self {
        self.fp(funct5::FMV_X_W, f3f::FMV_X_W, rd, rs1, 0)
    }

    pub fn fclass_s(self, rd: u32, rs1: u32) -> Self {
        self.fp(funct5::FMV_X_W, f3f::FCLASS, rd, rs1, 0)
    }

    pub fn fmv_w_x(self, rd: u32, rs1: u32) -> Self {
        self.fp(funct5::FMV_W_X, f3f::FMV_W_X, rd, rs1, 0)
    }

    fn fused(self, opcode: u32, rd: u32, rs1: u32, rs2: u32, rs3: u32) -> Self {
        self.opcode(opcode)
            .funct7(fop::FMT_S)
            .rd(rd)
            .rs1(rs1)
            .rs2(rs2)
            .rs3(rs3)
    }

    pub fn fmadd_s(self, rd: u32, rs1: u32, rs2: u32, rs3: u32) -> Self {
        self.fused(fop::OP_FMADD, rd, rs1, rs2, rs3)
    }

    pub fn fmsub_s(self, rd: u32, rs1: u32, rs2: u32, rs3: u32) -> Self {
        self.fused(fop::OP_FMSUB, rd, rs1, rs2, rs3)
    }

    pub fn fnmsub_s(self, rd: u32, rs1: u32, rs2: u32, rs3: u32) -> Self {
        self.fused(fop::OP_FNMSUB, rd, rs1, rs2, rs3)
    }

    pub fn fnmadd_s(self, rd: u32, rs1: u32, rs2: u32, rs3: u32) -> Self {
        self.fused(fop::OP_FNMADD, rd, rs1, rs2, rs3)
    }

    pub fn build(self) -> u32 {
        let opcode = self.opcode & 0x7F;
        let rd = (self.rd & 0x1F) << 7;
        let funct3 = (self.funct3 & 0x7) << 12;
        let rs1 = (self.rs1 & 0x1F) << 15;
        let rs2 = (self.rs2 & 0x1F) << 20;
        let funct7 = (self.funct7 & 0x7F) << 25;

        match opcode {
            OP_IMM | OP_LOAD | OP_JALR | OP_SYSTEM | fop::OP_LOAD_FP => {
                // I-type: imm[11:0] | rs1 | funct3 | rd | opcode
                let imm_val = (self.imm as u32) & 0xFFF;
                (imm_val << 20) | rs1 | funct3 | rd | opcode
            }
            OP_STORE | fop::OP_STORE_FP => {
                // S-type: imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode
                let imm_val = self.imm as u32;
                let imm_11_5 = ((imm_val >> 5) & 0x7F) << 25;
                let imm_4_0 = (imm_val & 0x1F) << 7;
                imm_11_5 | rs2 | rs1 | funct3 | imm_4_0 | opcode
            }
            OP_BRANCH => {
                // B-type: imm[12|10:5] | rs2 | rs1 | funct3 | imm[4:1|11] | opcode
                let imm_val = self.imm as u32;
                let bit_12 = ((imm_val >> 12) & 0x1) << 31;
                let bits_10_5 = ((imm_val >> 5) & 0x3F) << 25;
                let bits_4_1 = ((imm_val >> 1) & 0xF) << 8;
                let bit_11 = ((imm_val >> 11) & 0x1) << 7;
                bit_12 | bits_10_5 | rs2 | rs1 | funct3 | bits_4_1 | bit_11 | opcode
            }
            OP_LUI | OP_AUIPC => {
                // U-type: imm[31:12] | rd | opcode
                let imm_val = (self.imm as u32) & 0xFFFFF;
                (imm_val << 12) | rd | opcode
            }
            OP_JAL => {
                // J-type: imm[20|10:1|11|19:12] | rd | opcode
                let imm_val = self.imm as u32;
                let bit_20 = ((imm_val >> 20) & 0x1) << 31;
                let bits_10_1 = ((imm_val >> 1) & 0x3FF) << 21;
                let bit_11 = ((imm_val >> 11) & 0x1) << 20;
                let bits_19_12 = ((imm_val >> 12) & 0xFF) << 12;
                bit_20 | bits_10_1 | bit_11 | bits_19_12 | rd | opcode
            }
            fop::OP_FMADD | fop::OP_FMSUB | fop::OP_FNMSUB | fop::OP_FNMADD => {
                // R4-type: rs3 | fmt | rs2 | rs1 | rm | rd | opcode
                let rs3 = (self.rs3 & 0x1F) << 27;
                let fmt = (self.funct7 & 0x3) << 25;
                rs3 | fmt | rs2 | rs1 | funct3 | rd | opcode
            }
            // R-type layout for OP_REG, OP_FP and any unrecognised opcode.
            _ => funct7 | rs2 | rs1 | funct3 | rd | opcode,
        }
    }
}
