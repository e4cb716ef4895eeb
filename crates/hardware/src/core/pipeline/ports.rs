//! Register-port and dispatch signal generation.
//!
//! Translates a resolved `MicroOp` into the flat signal bundle an out-of-order
//! scheduler consumes:
//! 1. **Read Ports:** rs1, rs2 and rs3 drive read ports 0, 1 and 2 of the integer or
//!    floating-point register file, as their register-class tags select.
//! 2. **Write Port:** rd drives the write port of exactly one register file.
//! 3. **Dispatch:** One-hot strobes over the six execution-unit queues.
//! 4. **Dependencies:** `produces_result` and `uses_rs1/2/3` for hazard tracking.
//!
//! The mapping is purely combinational. An invalid micro-op yields an all-zero bundle.

use serde::Serialize;

use crate::common::constants::READ_PORTS;
use crate::core::pipeline::micro_op::MicroOp;
use crate::core::pipeline::signals::ExecUnit;

/// Register-file read port request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReadPort {
    /// Port is read this cycle.
    pub enable: bool,
    /// Register index (0 when disabled).
    pub addr: usize,
}

/// Register-file write port request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WritePort {
    /// Port is written when the result retires.
    pub enable: bool,
    /// Register index (0 when disabled).
    pub addr: usize,
}

/// Port requests for one register file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BankPorts {
    /// Read ports 0..3, carrying rs1, rs2 and rs3 respectively.
    pub read: [ReadPort; READ_PORTS],
    /// Single write port, carrying rd.
    pub write: WritePort,
}

impl BankPorts {
    /// Returns `true` if any port of this bank is enabled.
    pub fn any_enabled(&self) -> bool {
        self.write.enable || self.read.iter().any(|p| p.enable)
    }
}

/// One-hot dispatch strobes.
///
/// Loads and stores share `load_store`; the micro-op's `is_load` / `is_store`
/// disambiguates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DispatchStrobes {
    /// Integer ALU.
    pub alu: bool,
    /// Branch unit.
    pub branch: bool,
    /// Load/store unit.
    pub load_store: bool,
    /// Floating-point ALU.
    pub fp_alu: bool,
    /// Floating-point multiplier.
    pub fp_mul: bool,
    /// Floating-point divide / square root.
    pub fp_div: bool,
}

impl DispatchStrobes {
    /// Strobes for an execution unit. `Unknown` raises none.
    pub const fn for_unit(unit: ExecUnit) -> Self {
        let mut s = Self {
            alu: false,
            branch: false,
            load_store: false,
            fp_alu: false,
            fp_mul: false,
            fp_div: false,
        };
        match unit {
            ExecUnit::Alu => s.alu = true,
            ExecUnit::Branch => s.branch = true,
            ExecUnit::Load | ExecUnit::Store => s.load_store = true,
            ExecUnit::FpAlu => s.fp_alu = true,
            ExecUnit::FpMul => s.fp_mul = true,
            ExecUnit::FpDiv => s.fp_div = true,
            ExecUnit::Unknown => {}
        }
        s
    }

    /// Number of raised strobes (0 or 1 for any generated bundle).
    pub fn count(&self) -> usize {
        [
            self.alu,
            self.branch,
            self.load_store,
            self.fp_alu,
            self.fp_mul,
            self.fp_div,
        ]
        .into_iter()
        .filter(|&s| s)
        .count()
    }
}

/// Operand dependency flags for the scheduler's hazard tracker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Dependencies {
    /// The instruction writes a destination register.
    pub produces_result: bool,
    /// The instruction reads rs1.
    pub uses_rs1: bool,
    /// The instruction reads rs2.
    pub uses_rs2: bool,
    /// The instruction reads rs3.
    pub uses_rs3: bool,
}

/// Complete decode-to-scheduler signal bundle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PortSignals {
    /// Integer register file ports.
    pub int: BankPorts,
    /// Floating-point register file ports.
    pub fp: BankPorts,
    /// Execution-unit dispatch strobes.
    pub dispatch: DispatchStrobes,
    /// Operand dependency flags.
    pub deps: Dependencies,
}

impl PortSignals {
    /// Generates the signal bundle for a micro-op.
    pub fn from_micro_op(uop: &MicroOp) -> Self {
        let mut s = Self::default();
        if !uop.valid {
            return s;
        }

        s.deps = Dependencies {
            produces_result: uop.rd_en,
            uses_rs1: uop.rs1_en,
            uses_rs2: uop.rs2_en,
            uses_rs3: uop.rs3_en,
        };

        let sources = [
            (uop.rs1_en, uop.rs1_addr, uop.is_fp_rs1),
            (uop.rs2_en, uop.rs2_addr, uop.is_fp_rs2),
            (uop.rs3_en, uop.rs3_addr, uop.is_fp_rs3),
        ];
        for (port, (enable, addr, is_fp)) in sources.into_iter().enumerate() {
            if enable {
                s.bank_mut(is_fp).read[port] = ReadPort { enable, addr };
            }
        }

        if uop.rd_en {
            s.bank_mut(uop.is_fp_rd).write = WritePort {
                enable: true,
                addr: uop.rd_addr,
            };
        }

        s.dispatch = DispatchStrobes::for_unit(uop.exec_unit);
        s
    }

    /// Ports of the floating-point (`true`) or integer (`false`) register file.
    pub const fn bank(&self, is_fp: bool) -> &BankPorts {
        if is_fp { &self.fp } else { &self.int }
    }

    const fn bank_mut(&mut self, is_fp: bool) -> &mut BankPorts {
        if is_fp { &mut self.fp } else { &mut self.int }
    }

    /// Returns `true` if nothing in the bundle is asserted.
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Generates the signal bundle for a micro-op. Shorthand for [`PortSignals::from_micro_op`].
#[inline]
pub fn generate(uop: &MicroOp) -> PortSignals {
    PortSignals::from_micro_op(uop)
}
