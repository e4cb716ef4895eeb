//! Builders for test inputs.

/// Fluent RV32IMF instruction encoder.
pub mod instruction;
