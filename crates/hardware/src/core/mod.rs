//! Core processor front end.
//!
//! This module contains the decode pipeline and the architectural register
//! files it drives.

/// Architectural register files (GPR, FPR).
pub mod arch;

/// Decode pipeline (signals, micro-op, decoder, ports, latch).
pub mod pipeline;
