//! RISC-V architectural register files.
//!
//! The decoder's register-file collaborator: two independent banks of 32
//! registers, each with three read ports and one write port driven by the
//! decode signal bundle (see `common::reg`).

/// Floating-Point Register file implementation.
pub mod fpr;

/// General-Purpose Register file implementation.
pub mod gpr;
