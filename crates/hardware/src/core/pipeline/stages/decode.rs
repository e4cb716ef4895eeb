//! Instruction Decode (ID) Stage.
//!
//! This module implements the decode front end of the out-of-order core. It performs:
//! 1. **Field Extraction:** Splits the raw word into opcode, register and function fields.
//! 2. **Classification:** Maps the opcode to its encoding format.
//! 3. **Immediate Generation:** Reassembles the sign-extended immediate.
//! 4. **Micro-op Resolution:** Selects the execution unit, sub-operation, operand enables
//!    and register classes per opcode, including pseudo-instruction rewrites.
//! 5. **Signal Generation:** Fans the micro-op out to register ports and dispatch strobes.
//!
//! Decoding is a pure function of `(valid_in, pc, inst)` and the configuration;
//! the decoder holds no per-instruction state.

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::{DecoderConfig, ReservedPolicy};
use crate::core::pipeline::micro_op::MicroOp;
use crate::core::pipeline::ports::PortSignals;
use crate::core::pipeline::signals::{AluOp, BranchOp, ExecUnit, FpOp, MemWidth};
use crate::isa::decode::immediate;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Fields;
use crate::isa::opcode::{Format, Opcode, classify};

use crate::isa::rv32f::{funct3 as f_funct3, funct5 as f_funct5, opcodes as f_opcodes};
use crate::isa::rv32i::{funct3 as i_funct3, funct7 as i_funct7};
use crate::isa::rv32m::{funct3 as m_funct3, opcodes as m_opcodes};

/// Result of decoding one instruction: the micro-op and its signal bundle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DecodeOutput {
    /// Resolved micro-op descriptor.
    pub uop: MicroOp,
    /// Register-port, dispatch and dependency signals derived from `uop`.
    pub signals: PortSignals,
}

impl DecodeOutput {
    /// Pairs a micro-op with its generated signals.
    pub fn from_micro_op(uop: MicroOp) -> Self {
        Self {
            uop,
            signals: PortSignals::from_micro_op(&uop),
        }
    }
}

/// Why a recognised opcode still produced an invalid micro-op.
#[derive(Clone, Copy, Debug)]
enum Rejection {
    /// The opcode has no micro-op (SYSTEM).
    Unsupported,
    /// A reserved sub-encoding under the strict policy.
    Reserved(&'static str),
}

impl Rejection {
    const fn describe(self) -> &'static str {
        match self {
            Self::Unsupported => "opcode has no micro-op",
            Self::Reserved(what) => what,
        }
    }
}

type Resolution = Result<(), Rejection>;

/// RV32IMF instruction decoder.
#[derive(Clone, Debug, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Creates a decoder with the given configuration.
    pub const fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// The decoder's configuration.
    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes one instruction into a micro-op and its signal bundle.
    ///
    /// # Arguments
    ///
    /// * `valid_in` - The instruction slot holds an instruction. When `false` the
    ///   result is invalid and every signal is deasserted.
    /// * `pc` - Program counter of the instruction.
    /// * `inst` - The 32-bit instruction encoding.
    pub fn decode(&self, valid_in: bool, pc: u32, inst: u32) -> DecodeOutput {
        DecodeOutput::from_micro_op(self.decode_uop(valid_in, pc, inst))
    }

    /// Decodes one instruction into its micro-op only.
    pub fn decode_uop(&self, valid_in: bool, pc: u32, inst: u32) -> MicroOp {
        if !valid_in {
            return MicroOp::invalid(pc, inst);
        }
        let fields = Fields::extract(inst);
        let format = classify(fields.opcode);
        let imm = immediate(inst, format);
        let uop = self.resolve(&fields, format, imm, pc);

        if self.config.trace {
            trace!(
                pc = format_args!("{pc:#010x}"),
                inst = format_args!("{inst:#010x}"),
                unit = ?uop.exec_unit,
                "{}",
                disassemble(&uop)
            );
        }
        uop
    }

    /// Resolves extracted fields into a micro-op.
    ///
    /// # Arguments
    ///
    /// * `f` - Fields extracted from the instruction.
    /// * `format` - Format the opcode classified as.
    /// * `imm` - Immediate generated for that format.
    /// * `pc` - Program counter of the instruction.
    pub fn resolve(&self, f: &Fields, format: Format, imm: i32, pc: u32) -> MicroOp {
        let Some(opcode) = Opcode::from_bits(f.opcode) else {
            debug!(
                pc = format_args!("{pc:#010x}"),
                inst = format_args!("{:#010x}", f.raw),
                opcode = format_args!("{:#09b}", f.opcode),
                "unrecognised major opcode"
            );
            return MicroOp::invalid(pc, f.raw);
        };

        let mut u = MicroOp {
            valid: true,
            pc,
            raw_instruction: f.raw,
            format,
            opcode: Some(opcode),
            rs1_addr: f.rs1,
            rs2_addr: f.rs2,
            rd_addr: f.rd,
            imm,
            ..MicroOp::default()
        };

        let resolution = match opcode {
            Opcode::Imm => self.resolve_imm(f, &mut u),
            Opcode::Reg => self.resolve_reg(f, &mut u),
            Opcode::Load => self.resolve_load(f, &mut u),
            Opcode::LoadFp => self.resolve_load_fp(f, &mut u),
            Opcode::Store => self.resolve_store(f, &mut u),
            Opcode::StoreFp => self.resolve_store_fp(f, &mut u),
            Opcode::Branch => self.resolve_branch(f, &mut u),
            Opcode::Jal => {
                resolve_jump(&mut u, BranchOp::Jal);
                Ok(())
            }
            Opcode::Jalr => self.resolve_jalr(f, &mut u),
            Opcode::Lui => {
                u.exec_unit = ExecUnit::Alu;
                u.rd_en = true;
                u.alu_op = AluOp::CopyB;
                Ok(())
            }
            Opcode::Auipc => {
                // PC + imm; rs1's bits belong to the immediate.
                u.exec_unit = ExecUnit::Alu;
                u.rd_en = true;
                u.alu_op = AluOp::Add;
                Ok(())
            }
            Opcode::Fp => self.resolve_fp(f, &mut u),
            Opcode::Fmadd => self.resolve_fused(f, &mut u, FpOp::MAdd),
            Opcode::Fmsub => self.resolve_fused(f, &mut u, FpOp::MSub),
            Opcode::Fnmsub => self.resolve_fused(f, &mut u, FpOp::NMSub),
            Opcode::Fnmadd => self.resolve_fused(f, &mut u, FpOp::NMAdd),
            Opcode::System => Err(Rejection::Unsupported),
        };

        match resolution {
            Ok(()) => u,
            Err(reason) => {
                debug!(
                    pc = format_args!("{pc:#010x}"),
                    inst = format_args!("{:#010x}", f.raw),
                    ?opcode,
                    reason = reason.describe(),
                    "instruction invalidated"
                );
                MicroOp {
                    format,
                    opcode: Some(opcode),
                    ..MicroOp::invalid(pc, f.raw)
                }
            }
        }
    }

    /// Applies the reserved-encoding policy: the default under `Permissive`,
    /// a rejection under `Strict`.
    fn reserved<T>(&self, f: &Fields, what: &'static str, default: T) -> Result<T, Rejection> {
        match self.config.reserved_encodings {
            ReservedPolicy::Permissive => {
                debug!(
                    inst = format_args!("{:#010x}", f.raw),
                    what, "reserved encoding, using default sub-operation"
                );
                Ok(default)
            }
            ReservedPolicy::Strict => Err(Rejection::Reserved(what)),
        }
    }

    fn resolve_imm(&self, f: &Fields, u: &mut MicroOp) -> Resolution {
        u.exec_unit = ExecUnit::Alu;
        u.rs1_en = true;
        u.rd_en = true;
        u.alu_op = match f.funct3 {
            // addi rd, rs, 0 is `mv` (and `nop` for x0, x0).
            i_funct3::ADD_SUB if u.imm == 0 => AluOp::CopyA,
            i_funct3::ADD_SUB => AluOp::Add,
            i_funct3::SLT => AluOp::Slt,
            i_funct3::SLTU => AluOp::Sltu,
            i_funct3::XOR => AluOp::Xor,
            i_funct3::OR => AluOp::Or,
            i_funct3::AND => AluOp::And,
            i_funct3::SLL => {
                if f.funct7 != i_funct7::DEFAULT {
                    self.reserved(f, "slli funct7", ())?;
                }
                AluOp::Sll
            }
            // funct3 is three bits wide; the remaining value is SRL_SRA.
            _ => {
                if f.funct7 & !i_funct7::ALT_BIT != 0 {
                    self.reserved(f, "srli/srai funct7", ())?;
                }
                if f.funct7 & i_funct7::ALT_BIT != 0 {
                    AluOp::Sra
                } else {
                    AluOp::Srl
                }
            }
        };
        Ok(())
    }

    fn resolve_reg(&self, f: &Fields, u: &mut MicroOp) -> Resolution {
        u.exec_unit = ExecUnit::Alu;
        u.rs1_en = true;
        u.rs2_en = true;
        u.rd_en = true;

        if f.funct7 == m_opcodes::M_EXTENSION {
            u.alu_op = if f.funct3 == m_funct3::DIV {
                AluOp::Div
            } else {
                AluOp::Mul
            };
            return Ok(());
        }

        let canonical = matches!(
            (f.funct7, f.funct3),
            (i_funct7::DEFAULT, _) | (i_funct7::SUB, i_funct3::ADD_SUB | i_funct3::SRL_SRA)
        );
        if !canonical {
            self.reserved(f, "op funct7", ())?;
        }

        let alt = f.funct7 & i_funct7::ALT_BIT != 0;
        u.alu_op = match f.funct3 {
            i_funct3::ADD_SUB if alt => AluOp::Sub,
            i_funct3::ADD_SUB => AluOp::Add,
            i_funct3::SLL => AluOp::Sll,
            i_funct3::SLT => AluOp::Slt,
            i_funct3::SLTU => AluOp::Sltu,
            i_funct3::XOR => AluOp::Xor,
            i_funct3::OR => AluOp::Or,
            i_funct3::AND => AluOp::And,
            // funct3 is three bits wide; the remaining value is SRL_SRA.
            _ if alt => AluOp::Sra,
            _ => AluOp::Srl,
        };
        Ok(())
    }

    fn resolve_load(&self, f: &Fields, u: &mut MicroOp) -> Resolution {
        u.exec_unit = ExecUnit::Load;
        u.rs1_en = true;
        u.rd_en = true;
        u.is_load = true;
        (u.mem_width, u.load_unsigned) = match f.funct3 {
            i_funct3::LB => (MemWidth::Byte, false),
            i_funct3::LH => (MemWidth::Half, false),
            i_funct3::LW => (MemWidth::Word, false),
            i_funct3::LBU => (MemWidth::Byte, true),
            i_funct3::LHU => (MemWidth::Half, true),
            _ => self.reserved(f, "load width", (MemWidth::Word, false))?,
        };
        Ok(())
    }

    fn resolve_load_fp(&self, f: &Fields, u: &mut MicroOp) -> Resolution {
        u.exec_unit = ExecUnit::Load;
        u.rs1_en = true;
        u.rd_en = true;
        u.is_fp_rd = true;
        u.is_load = true;
        u.mem_width = self.fp_width(f)?;
        Ok(())
    }

    fn resolve_store(&self, f: &Fields, u: &mut MicroOp) -> Resolution {
        u.exec_unit = ExecUnit::Store;
        u.rs1_en = true;
        u.rs2_en = true;
        u.is_store = true;
        u.mem_width = match f.funct3 {
            i_funct3::SB => MemWidth::Byte,
            i_funct3::SH => MemWidth::Half,
            i_funct3::SW => MemWidth::Word,
            _ => self.reserved(f, "store width", MemWidth::Word)?,
        };
        Ok(())
    }

    fn resolve_store_fp(&self, f: &Fields, u: &mut MicroOp) -> Resolution {
        u.exec_unit = ExecUnit::Store;
        u.rs1_en = true;
        u.rs2_en = true;
        u.is_fp_rs2 = true;
        u.is_store = true;
        u.mem_width = self.fp_width(f)?;
        Ok(())
    }

    fn fp_width(&self, f: &Fields) -> Result<MemWidth, Rejection> {
        if f.funct3 == f_funct3::WIDTH_WORD {
            Ok(MemWidth::Word)
        } else {
            self.reserved(f, "fp load/store width", MemWidth::Word)
        }
    }

    fn resolve_branch(&self, f: &Fields, u: &mut MicroOp) -> Resolution {
        u.exec_unit = ExecUnit::Branch;
        u.rs1_en = true;
        u.rs2_en = true;
        u.is_branch = true;
        u.branch_op = match f.funct3 {
            i_funct3::BEQ => BranchOp::Eq,
            i_funct3::BNE => BranchOp::Ne,
            i_funct3::BLT => BranchOp::Lt,
            i_funct3::BGE => BranchOp::Ge,
            i_funct3::BLTU => BranchOp::Ltu,
            i_funct3::BGEU => BranchOp::Geu,
            _ => self.reserved(f, "branch funct3", BranchOp::Eq)?,
        };
        Ok(())
    }

    fn resolve_jalr(&self, f: &Fields, u: &mut MicroOp) -> Resolution {
        if f.funct3 != i_funct3::JALR {
            self.reserved(f, "jalr funct3", ())?;
        }
        resolve_jump(u, BranchOp::Jalr);
        u.rs1_en = true;
        Ok(())
    }

    fn resolve_fp(&self, f: &Fields, u: &mut MicroOp) -> Resolution {
        self.check_single_precision(f)?;

        u.rs1_en = true;
        u.rs2_en = true;
        u.rd_en = true;
        u.is_fp_rs1 = true;
        u.is_fp_rs2 = true;
        u.is_fp_rd = true;

        let (unit, op) = match f.funct5() {
            f_funct5::FADD => (ExecUnit::FpAlu, FpOp::Add),
            f_funct5::FSUB => (ExecUnit::FpAlu, FpOp::Sub),
            f_funct5::FMUL => (ExecUnit::FpMul, FpOp::Mul),
            f_funct5::FDIV => (ExecUnit::FpDiv, FpOp::Div),
            f_funct5::FSQRT => {
                if f.rs2 != 0 {
                    self.reserved(f, "fsqrt rs2", ())?;
                }
                u.rs2_en = false;
                (ExecUnit::FpDiv, FpOp::Sqrt)
            }
            f_funct5::FSGNJ => {
                let op = match f.funct3 {
                    f_funct3::FSGNJ => FpOp::SgnJ,
                    f_funct3::FSGNJN => FpOp::SgnJN,
                    f_funct3::FSGNJX => FpOp::SgnJX,
                    _ => self.reserved(f, "fsgnj funct3", FpOp::SgnJ)?,
                };
                (ExecUnit::FpAlu, op)
            }
            f_funct5::FMIN_MAX => {
                if f.funct3 > f_funct3::FMAX {
                    self.reserved(f, "fmin/fmax funct3", ())?;
                }
                let op = if f.funct3 & 1 == f_funct3::FMIN {
                    FpOp::Min
                } else {
                    FpOp::Max
                };
                (ExecUnit::FpAlu, op)
            }
            f_funct5::FCMP => {
                u.is_fp_rd = false;
                let op = match f.funct3 {
                    f_funct3::FEQ => FpOp::Eq,
                    f_funct3::FLT => FpOp::Lt,
                    f_funct3::FLE => FpOp::Le,
                    _ => self.reserved(f, "fcmp funct3", FpOp::Eq)?,
                };
                (ExecUnit::FpAlu, op)
            }
            f_funct5::FCVT_W_S => {
                self.check_cvt_source(f)?;
                u.is_fp_rd = false;
                u.rs2_en = false;
                let op = if f.rs2 == f_funct5::CVT_UNSIGNED {
                    FpOp::CvtWuS
                } else {
                    FpOp::CvtWS
                };
                (ExecUnit::FpAlu, op)
            }
            f_funct5::FCVT_S_W => {
                self.check_cvt_source(f)?;
                u.is_fp_rs1 = false;
                u.rs2_en = false;
                let op = if f.rs2 == f_funct5::CVT_UNSIGNED {
                    FpOp::CvtSWu
                } else {
                    FpOp::CvtSW
                };
                (ExecUnit::FpAlu, op)
            }
            f_funct5::FMV_X_W => {
                if f.rs2 != 0 {
                    self.reserved(f, "fmv.x.w rs2", ())?;
                }
                u.is_fp_rd = false;
                u.rs2_en = false;
                let op = match f.funct3 {
                    f_funct3::FMV_X_W => FpOp::MvXW,
                    f_funct3::FCLASS => FpOp::Class,
                    _ => self.reserved(f, "fmv.x.w funct3", FpOp::MvXW)?,
                };
                (ExecUnit::FpAlu, op)
            }
            f_funct5::FMV_W_X => {
                if f.rs2 != 0 || f.funct3 != f_funct3::FMV_W_X {
                    self.reserved(f, "fmv.w.x rs2/funct3", ())?;
                }
                u.is_fp_rs1 = false;
                u.rs2_en = false;
                (ExecUnit::FpAlu, FpOp::MvWX)
            }
            _ => self.reserved(f, "fp funct5", (ExecUnit::FpAlu, FpOp::Add))?,
        };
        u.exec_unit = unit;
        u.fp_alu_op = op;
        Ok(())
    }

    fn resolve_fused(&self, f: &Fields, u: &mut MicroOp, op: FpOp) -> Resolution {
        self.check_single_precision(f)?;

        u.exec_unit = ExecUnit::FpMul;
        u.fp_alu_op = op;
        u.rs3_addr = f.rs3();
        u.rs1_en = true;
        u.rs2_en = true;
        u.rs3_en = true;
        u.rd_en = true;
        u.is_fp_rs1 = true;
        u.is_fp_rs2 = true;
        u.is_fp_rs3 = true;
        u.is_fp_rd = true;
        Ok(())
    }

    /// FCVT selects the integer type in rs2: 0 is signed, 1 unsigned. The
    /// remaining values name 64-bit conversions.
    fn check_cvt_source(&self, f: &Fields) -> Resolution {
        if f.rs2 > f_funct5::CVT_UNSIGNED {
            self.reserved(f, "fcvt rs2", ())?;
        }
        Ok(())
    }

    fn check_single_precision(&self, f: &Fields) -> Resolution {
        if f.fmt != f_opcodes::FMT_S {
            self.reserved(f, "fp fmt", ())?;
        }
        Ok(())
    }
}

/// `JAL`/`JALR` common part. `rd == x0` (the `j` / `jr` / `ret` forms) creates no
/// destination dependency.
const fn resolve_jump(u: &mut MicroOp, op: BranchOp) {
    u.exec_unit = ExecUnit::Branch;
    u.branch_op = op;
    u.is_jump = true;
    u.rd_en = u.rd_addr != 0;
}

/// Decodes one instruction with the default configuration.
///
/// # Examples
///
/// ```
/// use rvdecode_core::core::pipeline::stages::decode;
///
/// // add x3, x1, x2
/// let out = decode(true, 0x8000_0000, 0x0020_81B3);
/// assert!(out.uop.valid);
/// assert!(out.signals.dispatch.alu);
/// assert_eq!(out.signals.int.write.addr, 3);
/// ```
pub fn decode(valid_in: bool, pc: u32, inst: u32) -> DecodeOutput {
    Decoder::default().decode(valid_in, pc, inst)
}

/// Resolves extracted fields into a micro-op with the default configuration.
pub fn resolve(fields: &Fields, format: Format, imm: i32, pc: u32) -> MicroOp {
    Decoder::default().resolve(fields, format, imm, pc)
}
