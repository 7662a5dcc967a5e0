//! Automaton engine.
//!
//! This module contains the semantic core of the designer:
//! - Symbols and state names, canonicalized on construction
//! - The `Automaton` aggregate and its invariants
//! - Deterministic execution producing a `Trace`
//!
//! Nothing here performs I/O; persistence and the command front-end are
//! layered on top.

mod automaton;
mod error;
mod render;
mod state;
mod symbol;
mod trace;
mod transition;

pub use automaton::{Automaton, Declared, Designation, TransitionChange};
pub use error::AutomatonError;
pub use state::StateName;
pub use symbol::Symbol;
pub use trace::{Trace, TraceStep, Verdict};
pub use transition::Transition;
