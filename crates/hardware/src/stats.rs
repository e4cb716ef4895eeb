//! Decode statistics collection and reporting.
//!
//! This module tracks what a decoded instruction stream looks like. It provides:
//! 1. **Totals:** Words decoded and descriptors that came out invalid.
//! 2. **Dispatch mix:** Counts per execution-unit strobe.
//! 3. **Control and memory:** Loads, stores, jumps and conditional branches.
//! 4. **Rewrites:** Instructions the decoder turned into register moves.

use std::fmt;

use serde::Serialize;

use crate::core::pipeline::stages::decode::DecodeOutput;

/// Decode statistics accumulated over a stream of [`DecodeOutput`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DecodeStats {
    /// Words decoded.
    pub total: u64,
    /// Descriptors with `valid == false`.
    pub invalid: u64,

    /// Integer ALU dispatches.
    pub alu: u64,
    /// Branch unit dispatches.
    pub branch: u64,
    /// Load/store unit dispatches.
    pub load_store: u64,
    /// Floating-point ALU dispatches.
    pub fp_alu: u64,
    /// Floating-point multiplier dispatches.
    pub fp_mul: u64,
    /// Floating-point divide/sqrt dispatches.
    pub fp_div: u64,

    /// Integer and floating-point loads.
    pub loads: u64,
    /// Integer and floating-point stores.
    pub stores: u64,
    /// `JAL` and `JALR`.
    pub jumps: u64,
    /// Conditional branches.
    pub branches: u64,

    /// Instructions rewritten to a register move (`mv`, `nop`).
    pub moves: u64,
}

impl DecodeStats {
    /// Creates an empty set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts for one decoded instruction.
    pub fn record(&mut self, out: &DecodeOutput) {
        let uop = &out.uop;
        let dispatch = &out.signals.dispatch;
        self.total += 1;
        if !uop.valid {
            self.invalid += 1;
            return;
        }

        self.alu += u64::from(dispatch.alu);
        self.branch += u64::from(dispatch.branch);
        self.load_store += u64::from(dispatch.load_store);
        self.fp_alu += u64::from(dispatch.fp_alu);
        self.fp_mul += u64::from(dispatch.fp_mul);
        self.fp_div += u64::from(dispatch.fp_div);

        self.loads += u64::from(uop.is_load);
        self.stores += u64::from(uop.is_store);
        self.jumps += u64::from(uop.is_jump);
        self.branches += u64::from(uop.is_branch);
        self.moves += u64::from(uop.is_move());
    }

    /// Number of valid descriptors.
    pub const fn valid(&self) -> u64 {
        self.total - self.invalid
    }

    /// Fraction of decoded words that produced a valid descriptor (0.0 when empty).
    pub const fn valid_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.valid() as f64 / self.total as f64
        }
    }
}

impl Extend<DecodeOutput> for DecodeStats {
    fn extend<I: IntoIterator<Item = DecodeOutput>>(&mut self, iter: I) {
        for out in iter {
            self.record(&out);
        }
    }
}

impl fmt::Display for DecodeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let valid = self.valid().max(1) as f64;
        let pct = |n: u64| n as f64 / valid * 100.0;

        writeln!(f, "==========================================================")?;
        writeln!(f, "RV32IMF DECODE STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "decode.words             {}", self.total)?;
        writeln!(f, "decode.valid             {}", self.valid())?;
        writeln!(f, "decode.invalid           {}", self.invalid)?;
        writeln!(f, "decode.valid_ratio       {:.4}", self.valid_ratio())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "DISPATCH")?;
        for (name, n) in [
            ("alu", self.alu),
            ("branch", self.branch),
            ("load_store", self.load_store),
            ("fp_alu", self.fp_alu),
            ("fp_mul", self.fp_mul),
            ("fp_div", self.fp_div),
        ] {
            writeln!(f, "  unit.{name:<17} {n} ({:.2}%)", pct(n))?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for (name, n) in [
            ("load", self.loads),
            ("store", self.stores),
            ("jump", self.jumps),
            ("branch", self.branches),
            ("move", self.moves),
        ] {
            writeln!(f, "  op.{name:<19} {n} ({:.2}%)", pct(n))?;
        }
        write!(f, "==========================================================")
    }
}
