//! Decode Properties: Quantified Over Every Instruction Word.
//!
//! Property tests for the invariants every decode must satisfy, independent of
//! which instruction the word encodes.

use proptest::prelude::*;

use rvdecode_core::config::DecoderConfig;
use rvdecode_core::core::pipeline::ports::BankPorts;
use rvdecode_core::core::pipeline::signals::{AluOp, BranchOp, ExecUnit, FpOp};
use rvdecode_core::core::pipeline::stages::{Decoder, decode};
use rvdecode_core::isa::opcode::{Format, Opcode};
use rvdecode_core::isa::rv32f::opcodes as f_op;
use rvdecode_core::isa::rv32i::opcodes as i_op;

/// Words whose opcode field is one of the recognised major opcodes.
fn recognised_word() -> impl Strategy<Value = u32> {
    let opcodes = prop::sample::select(vec![
        i_op::OP_LOAD,
        f_op::OP_LOAD_FP,
        i_op::OP_IMM,
        i_op::OP_AUIPC,
        i_op::OP_STORE,
        f_op::OP_STORE_FP,
        i_op::OP_REG,
        i_op::OP_LUI,
        f_op::OP_FMADD,
        f_op::OP_FMSUB,
        f_op::OP_FNMSUB,
        f_op::OP_FNMADD,
        f_op::OP_FP,
        i_op::OP_BRANCH,
        i_op::OP_JALR,
        i_op::OP_JAL,
    ]);
    (opcodes, any::<u32>()).prop_map(|(op, hi)| (hi & !0x7F) | op)
}

fn bank_ports_enabled(bank: &BankPorts) -> usize {
    bank.read.iter().filter(|p| p.enable).count() + usize::from(bank.write.enable)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2048))]

    #[test]
    fn absent_input_yields_cleared_output(inst in any::<u32>(), pc in any::<u32>()) {
        let out = decode(false, pc, inst);
        prop_assert!(!out.uop.valid);
        prop_assert!(out.signals.is_idle());
        prop_assert_eq!(out.uop.exec_unit, ExecUnit::Unknown);
        prop_assert!(!(out.uop.rs1_en || out.uop.rs2_en || out.uop.rs3_en || out.uop.rd_en));
        prop_assert_eq!((out.uop.pc, out.uop.raw_instruction), (pc, inst));
    }

    #[test]
    fn valid_descriptors_raise_exactly_one_strobe(inst in any::<u32>()) {
        let out = decode(true, 0, inst);
        let strobes = out.signals.dispatch.count();
        if out.uop.valid {
            prop_assert_ne!(out.uop.exec_unit, ExecUnit::Unknown);
            prop_assert_eq!(strobes, 1);
        } else {
            prop_assert_eq!(strobes, 0);
            prop_assert!(out.signals.is_idle());
        }
    }

    #[test]
    fn recognised_opcodes_resolve_to_a_unit(inst in recognised_word()) {
        let out = decode(true, 0, inst);
        prop_assert!(out.uop.valid);
        prop_assert!(out.uop.opcode.is_some());
        prop_assert_ne!(out.uop.format, Format::Unknown);
        prop_assert_eq!(out.signals.dispatch.count(), 1);
    }

    #[test]
    fn strobes_match_exec_unit(inst in recognised_word()) {
        let out = decode(true, 0, inst);
        let d = out.signals.dispatch;
        let unit = out.uop.exec_unit;
        prop_assert_eq!(d.alu, unit == ExecUnit::Alu);
        prop_assert_eq!(d.branch, unit == ExecUnit::Branch);
        prop_assert_eq!(d.load_store, matches!(unit, ExecUnit::Load | ExecUnit::Store));
        prop_assert_eq!(d.fp_alu, unit == ExecUnit::FpAlu);
        prop_assert_eq!(d.fp_mul, unit == ExecUnit::FpMul);
        prop_assert_eq!(d.fp_div, unit == ExecUnit::FpDiv);
    }

    #[test]
    fn branch_and_jump_immediates_are_even(inst in recognised_word()) {
        let u = decode(true, 0, inst).uop;
        if matches!(u.format, Format::B | Format::J) {
            prop_assert_eq!(u.imm & 1, 0);
        }
    }

    #[test]
    fn decoding_is_idempotent(inst in any::<u32>(), pc in any::<u32>(), valid_in in any::<bool>()) {
        prop_assert_eq!(decode(valid_in, pc, inst), decode(valid_in, pc, inst));
    }

    #[test]
    fn no_state_carries_between_decodes(first in any::<u32>(), second in any::<u32>()) {
        let decoder = Decoder::new(DecoderConfig::default());
        let fresh = decoder.decode(true, 4, second);
        let _ = decoder.decode(true, 0, first);
        prop_assert_eq!(decoder.decode(true, 4, second), fresh);
    }

    #[test]
    fn each_operand_claims_at_most_one_bank(inst in any::<u32>()) {
        let out = decode(true, 0, inst);
        let s = &out.signals;
        let u = &out.uop;
        let sources = [(u.rs1_en, u.rs1_addr, u.is_fp_rs1), (u.rs2_en, u.rs2_addr, u.is_fp_rs2), (u.rs3_en, u.rs3_addr, u.is_fp_rs3)];
        for (port, (enable, addr, is_fp)) in sources.into_iter().enumerate() {
            prop_assert!(!(s.int.read[port].enable && s.fp.read[port].enable));
            let used = s.bank(is_fp).read[port];
            let other = s.bank(!is_fp).read[port];
            prop_assert_eq!(used.enable, enable && u.valid);
            prop_assert!(!other.enable);
            if used.enable {
                prop_assert_eq!(used.addr, addr);
            }
        }
        prop_assert!(!(s.int.write.enable && s.fp.write.enable));
        prop_assert_eq!(s.int.write.enable || s.fp.write.enable, s.deps.produces_result);
    }

    #[test]
    fn dependency_flags_mirror_enables(inst in any::<u32>()) {
        let out = decode(true, 0, inst);
        let (u, d) = (&out.uop, &out.signals.deps);
        prop_assert_eq!(d.produces_result, u.rd_en);
        prop_assert_eq!(d.uses_rs1, u.rs1_en);
        prop_assert_eq!(d.uses_rs2, u.rs2_en);
        prop_assert_eq!(d.uses_rs3, u.rs3_en);
        prop_assert!(bank_ports_enabled(&out.signals.int) + bank_ports_enabled(&out.signals.fp) <= 4);
    }

    #[test]
    fn only_fused_ops_read_rs3(inst in any::<u32>()) {
        let u = decode(true, 0, inst).uop;
        prop_assert_eq!(u.rs3_en, u.opcode.is_some_and(Opcode::is_fused) && u.valid);
    }

    #[test]
    fn unselected_sub_op_tags_stay_default(inst in any::<u32>()) {
        let u = decode(true, 0, inst).uop;
        if u.exec_unit != ExecUnit::Alu {
            prop_assert_eq!(u.alu_op, AluOp::Add);
        }
        if !matches!(u.exec_unit, ExecUnit::FpAlu | ExecUnit::FpMul | ExecUnit::FpDiv) {
            prop_assert_eq!(u.fp_alu_op, FpOp::Add);
        }
        if u.exec_unit != ExecUnit::Branch {
            prop_assert_eq!(u.branch_op, BranchOp::Eq);
        }
    }

    #[test]
    fn only_jumps_to_x0_suppress_rd(inst in recognised_word()) {
        let u = decode(true, 0, inst).uop;
        let writes = !matches!(u.exec_unit, ExecUnit::Store | ExecUnit::Branch);
        if u.is_jump {
            prop_assert_eq!(u.rd_en, u.rd_addr != 0);
        } else if writes {
            prop_assert!(u.rd_en);
        }
    }
}
