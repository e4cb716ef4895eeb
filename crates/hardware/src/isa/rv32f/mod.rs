//! RISC-V Single-Precision Floating-Point Extension (F).
//!
//! Defines instructions for single-precision (32-bit) floating-point arithmetic.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes for floating-point load, store, arithmetic and fused ops.
//! - `funct3`: Function codes for comparison types, sign injection and load/store width.
//! - `funct5`: Operation selector (bits 31-27) for `OP_FP` instructions.

/// Function code 3 definitions for single-precision operations.
pub mod funct3;

/// Function code 5 definitions for single-precision operations.
pub mod funct5;

/// Single-precision floating-point opcodes.
pub mod opcodes;
