//! Shared test infrastructure.

/// Instruction builders.
pub mod builder;
