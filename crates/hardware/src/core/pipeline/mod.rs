//! Instruction decode pipeline.
//!
//! This module contains the decode front end of an out-of-order RV32IMF core.
//! It includes the following components:
//! 1. **Signals:** Execution-unit and sub-operation tags carried by a micro-op.
//! 2. **Micro-op:** The fully-resolved instruction descriptor.
//! 3. **Stages:** The decoder itself (field extraction through micro-op resolution).
//! 4. **Ports:** Register-port, dispatch and dependency signal generation.
//! 5. **Latches:** An optional registered output for the decoder.
//! 6. **Traits:** Common interface for pipeline latches.

/// Registered decode output.
pub mod latches;

/// Decoded instruction descriptor.
pub mod micro_op;

/// Register-port and dispatch signal generation.
pub mod ports;

/// Tags generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations (decode).
pub mod stages;

/// Traits for pipeline components.
pub mod traits;
