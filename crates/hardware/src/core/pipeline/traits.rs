//! Pipeline Latch Interface.
//!
//! This module defines the common trait for registered pipeline components:
//! flushing and status checking.

/// Represents a pipeline latch (inter-stage buffer).
///
/// Latches hold the state of instructions as they move between stages. They support
/// flushing and status checks.
pub trait PipelineLatch {
    /// Clears all entries in the latch.
    ///
    /// Typically called when a branch misprediction redirects the front end.
    fn flush(&mut self);

    /// Checks if the latch is empty.
    ///
    /// # Returns
    ///
    /// `true` if there is no valid instruction in the latch, `false` otherwise.
    fn is_empty(&self) -> bool;
}
