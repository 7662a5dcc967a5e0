//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and the `automaton!` macro for
//! assembling a complete automaton in one expression, mostly for tests and
//! demos. Interactive sessions build automata incrementally through the
//! command front-end instead.

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;
