//! RV32IMF instruction-decode front end library.
//!
//! This crate implements the decode stage of an out-of-order RV32IMF core with the following:
//! 1. **ISA:** Field extraction, format classification and immediate generation.
//! 2. **Core:** Micro-op resolution, register-port and dispatch signal generation,
//!    an optional registered stage latch, and the GPR/FPR register files it drives.
//! 3. **Configuration:** Reserved-encoding policy and register-file variant selection.
//! 4. **Statistics:** Counters over a decoded instruction stream.
//!
//! # Examples
//!
//! ```
//! use rvdecode_core::{Decoder, DecoderConfig};
//! use rvdecode_core::core::pipeline::signals::ExecUnit;
//!
//! let decoder = Decoder::new(DecoderConfig::default());
//! // fmul.s f4, f1, f2
//! let out = decoder.decode(true, 0x1000, 0x1020_8253);
//! assert_eq!(out.uop.exec_unit, ExecUnit::FpMul);
//! assert!(out.signals.fp.write.enable);
//! assert!(!out.signals.int.write.enable);
//! ```

/// Common types and constants (errors, register-file contract).
pub mod common;
/// Decoder configuration (reserved-encoding policy, register-file variant, tracing).
pub mod config;
/// Decode pipeline and architectural register files.
pub mod core;
/// Instruction set (fields, opcodes, immediates, ABI names, disassembly).
pub mod isa;
/// Decode statistics collection and reporting.
pub mod stats;

/// Error type for the library's fallible edges.
pub use crate::common::error::{DecodeError, Result};
/// Register file consuming port signals; build with `RegisterFile::from_config`.
pub use crate::common::reg::{Operands, RegisterFile};
/// Decoder configuration; use `DecoderConfig::default()` or `DecoderConfig::from_json`.
pub use crate::config::{DecoderConfig, ReservedPolicy};
/// Decoded instruction descriptor.
pub use crate::core::pipeline::micro_op::MicroOp;
/// Decode-to-scheduler signal bundle.
pub use crate::core::pipeline::ports::PortSignals;
/// Stateless decoder and its output.
pub use crate::core::pipeline::stages::decode::{DecodeOutput, Decoder, decode};
/// Decode statistics.
pub use crate::stats::DecodeStats;
