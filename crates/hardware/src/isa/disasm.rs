//! Micro-op Disassembler.
//!
//! Renders a resolved `MicroOp` as assembler text for trace events, the
//! command-line front end and test diagnostics. Where the decoder recognised a
//! pseudo-instruction the pseudo spelling is used (`nop`, `mv`, `li`, `j`,
//! `jr`, `ret`, `fmv.s`, `fneg.s`, `fabs.s`).
//!
//! # Usage
//!
//! ```
//! use rvdecode_core::core::pipeline::stages::decode;
//! use rvdecode_core::isa::disasm::disassemble;
//!
//! let out = decode(true, 0, 0x0640_0093); // addi x1, x0, 100
//! assert_eq!(disassemble(&out.uop), "li ra, 100");
//! ```

use crate::core::pipeline::micro_op::MicroOp;
use crate::core::pipeline::signals::{AluOp, BranchOp, FpOp, MemWidth};
use crate::isa::abi::{REG_RA, REG_ZERO, freg, reg_name, xreg};
use crate::isa::instruction::InstructionBits;
use crate::isa::opcode::Opcode;

/// Shift amount mask for shift-immediate instructions.
const SHAMT_MASK: i32 = 0x1F;

/// Upper-immediate shift (LUI / AUIPC print `imm >> 12`).
const U_IMM_SHIFT: u32 = 12;

/// M-extension mnemonics indexed by funct3.
const M_MNEMONICS: [&str; 8] = ["mul", "mulh", "mulhsu", "mulhu", "div", "divu", "rem", "remu"];

/// Disassembles a micro-op.
///
/// Returns `"unknown"` for invalid micro-ops.
pub fn disassemble(u: &MicroOp) -> String {
    let Some(opcode) = u.opcode.filter(|_| u.valid) else {
        return "unknown".to_string();
    };
    let (rd, rs1, rs2, imm) = (u.rd_addr, u.rs1_addr, u.rs2_addr, u.imm);

    match opcode {
        Opcode::Lui => format!("lui {}, {:#x}", xreg(rd), (imm as u32) >> U_IMM_SHIFT),
        Opcode::Auipc => format!("auipc {}, {:#x}", xreg(rd), (imm as u32) >> U_IMM_SHIFT),
        Opcode::Jal => match rd {
            REG_ZERO => format!("j {imm}"),
            REG_RA => format!("jal {imm}"),
            _ => format!("jal {}, {imm}", xreg(rd)),
        },
        Opcode::Jalr => match (rd, rs1, imm) {
            (REG_ZERO, REG_RA, 0) => "ret".to_string(),
            (REG_ZERO, _, 0) => format!("jr {}", xreg(rs1)),
            (REG_RA, _, 0) => format!("jalr {}", xreg(rs1)),
            _ => format!("jalr {}, {imm}({})", xreg(rd), xreg(rs1)),
        },
        Opcode::Branch => format!(
            "{} {}, {}, {imm}",
            branch_mnemonic(u.branch_op),
            xreg(rs1),
            xreg(rs2)
        ),
        Opcode::Load => format!(
            "{} {}, {imm}({})",
            load_mnemonic(u.mem_width, u.load_unsigned),
            xreg(rd),
            xreg(rs1)
        ),
        Opcode::LoadFp => format!("flw {}, {imm}({})", freg(rd), xreg(rs1)),
        Opcode::Store => format!(
            "{} {}, {imm}({})",
            store_mnemonic(u.mem_width),
            xreg(rs2),
            xreg(rs1)
        ),
        Opcode::StoreFp => format!("fsw {}, {imm}({})", freg(rs2), xreg(rs1)),
        Opcode::Imm => imm_text(u),
        Opcode::Reg => {
            let mnemonic = match u.alu_op {
                AluOp::Mul | AluOp::Div => M_MNEMONICS[u.raw_instruction.funct3() as usize],
                op => alu_mnemonic(op),
            };
            format!("{mnemonic} {}, {}, {}", xreg(rd), xreg(rs1), xreg(rs2))
        }
        Opcode::Fp => fp_text(u),
        Opcode::Fmadd | Opcode::Fmsub | Opcode::Fnmsub | Opcode::Fnmadd => format!(
            "{} {}, {}, {}, {}",
            fp_mnemonic(u.fp_alu_op),
            freg(rd),
            freg(rs1),
            freg(rs2),
            freg(u.rs3_addr)
        ),
        Opcode::System => "unknown".to_string(),
    }
}

fn imm_text(u: &MicroOp) -> String {
    let (rd, rs1, imm) = (u.rd_addr, u.rs1_addr, u.imm);
    match u.alu_op {
        AluOp::CopyA if rd == REG_ZERO && rs1 == REG_ZERO => "nop".to_string(),
        AluOp::CopyA if rs1 == REG_ZERO => format!("li {}, 0", xreg(rd)),
        AluOp::CopyA => format!("mv {}, {}", xreg(rd), xreg(rs1)),
        AluOp::Add if rs1 == REG_ZERO => format!("li {}, {imm}", xreg(rd)),
        AluOp::Sll | AluOp::Srl | AluOp::Sra => format!(
            "{}i {}, {}, {}",
            alu_mnemonic(u.alu_op),
            xreg(rd),
            xreg(rs1),
            imm & SHAMT_MASK
        ),
        op => format!("{}i {}, {}, {imm}", alu_mnemonic(op), xreg(rd), xreg(rs1)),
    }
}

fn fp_text(u: &MicroOp) -> String {
    let rd = reg_name(u.rd_addr, u.is_fp_rd);
    let rs1 = reg_name(u.rs1_addr, u.is_fp_rs1);
    let rs2 = reg_name(u.rs2_addr, u.is_fp_rs2);
    let same = u.rs1_addr == u.rs2_addr;
    match u.fp_alu_op {
        FpOp::SgnJ if same => format!("fmv.s {rd}, {rs1}"),
        FpOp::SgnJN if same => format!("fneg.s {rd}, {rs1}"),
        FpOp::SgnJX if same => format!("fabs.s {rd}, {rs1}"),
        op if u.rs2_en => format!("{} {rd}, {rs1}, {rs2}", fp_mnemonic(op)),
        op => format!("{} {rd}, {rs1}", fp_mnemonic(op)),
    }
}

const fn alu_mnemonic(op: AluOp) -> &'static str {
    match op {
        AluOp::Add => "add",
        AluOp::Sub => "sub",
        AluOp::Sll => "sll",
        AluOp::Slt => "slt",
        AluOp::Sltu => "sltu",
        AluOp::Xor => "xor",
        AluOp::Srl => "srl",
        AluOp::Sra => "sra",
        AluOp::Or => "or",
        AluOp::And => "and",
        AluOp::Mul => "mul",
        AluOp::Div => "div",
        AluOp::CopyA => "mv",
        AluOp::CopyB => "lui",
    }
}

const fn fp_mnemonic(op: FpOp) -> &'static str {
    match op {
        FpOp::Add => "fadd.s",
        FpOp::Sub => "fsub.s",
        FpOp::Mul => "fmul.s",
        FpOp::Div => "fdiv.s",
        FpOp::Sqrt => "fsqrt.s",
        FpOp::SgnJ => "fsgnj.s",
        FpOp::SgnJN => "fsgnjn.s",
        FpOp::SgnJX => "fsgnjx.s",
        FpOp::Min => "fmin.s",
        FpOp::Max => "fmax.s",
        FpOp::Eq => "feq.s",
        FpOp::Lt => "flt.s",
        FpOp::Le => "fle.s",
        FpOp::Class => "fclass.s",
        FpOp::MvWX => "fmv.w.x",
        FpOp::MvXW => "fmv.x.w",
        FpOp::CvtWS => "fcvt.w.s",
        FpOp::CvtWuS => "fcvt.wu.s",
        FpOp::CvtSW => "fcvt.s.w",
        FpOp::CvtSWu => "fcvt.s.wu",
        FpOp::MAdd => "fmadd.s",
        FpOp::MSub => "fmsub.s",
        FpOp::NMSub => "fnmsub.s",
        FpOp::NMAdd => "fnmadd.s",
    }
}

const fn branch_mnemonic(op: BranchOp) -> &'static str {
    match op {
        BranchOp::Eq => "beq",
        BranchOp::Ne => "bne",
        BranchOp::Lt => "blt",
        BranchOp::Ge => "bge",
        BranchOp::Ltu => "bltu",
        BranchOp::Geu => "bgeu",
        BranchOp::Jal => "jal",
        BranchOp::Jalr => "jalr",
    }
}

const fn load_mnemonic(width: MemWidth, unsigned: bool) -> &'static str {
    match (width, unsigned) {
        (MemWidth::Byte, false) => "lb",
        (MemWidth::Byte, true) => "lbu",
        (MemWidth::Half, false) => "lh",
        (MemWidth::Half, true) => "lhu",
        (MemWidth::Word | MemWidth::Nop, _) => "lw",
    }
}

const fn store_mnemonic(width: MemWidth) -> &'static str {
    match width {
        MemWidth::Byte => "sb",
        MemWidth::Half => "sh",
        MemWidth::Word | MemWidth::Nop => "sw",
    }
}
