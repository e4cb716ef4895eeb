//! # Unit Components
//!
//! This module serves as the central hub for the decoder's unit tests. It mirrors
//! the library's module tree: common types, the decode pipeline, ISA helpers,
//! configuration and statistics.
