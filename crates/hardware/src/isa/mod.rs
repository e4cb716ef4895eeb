//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, field extraction, format
//! classification and immediate generation, organized by RISC-V extension.
//!
//! # Extensions
//!
//! * `rv32i`: Base Integer Instruction Set (32-bit).
//! * `rv32m`: Standard Extension for Integer Multiplication and Division.
//! * `rv32f`: Standard Extension for Single-Precision Floating-Point.

/// Application Binary Interface (ABI) register names.
pub mod abi;

/// Immediate generation for all RISC-V instruction formats.
pub mod decode;

/// Micro-op disassembler for trace output and diagnostics.
pub mod disasm;

/// Instruction field extraction.
pub mod instruction;

/// Major opcode enumeration and format classification.
pub mod opcode;

/// Single-precision floating-point extension.
pub mod rv32f;

/// Base integer instruction set.
pub mod rv32i;

/// Integer multiply/divide extension.
pub mod rv32m;
