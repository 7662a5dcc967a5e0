//! Engine error types.

use thiserror::Error;

/// Errors raised by the automaton engine.
///
/// Most engine operations report through tagged results instead
/// ([`Declared`](super::Declared), [`Designation`](super::Designation));
/// these errors cover malformed names and references to undeclared
/// symbols or states, which must never reach the transition table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("Invalid symbol '{0}'")]
    InvalidSymbol(String),

    #[error("Invalid state '{0}'")]
    InvalidStateName(String),

    #[error("Undefined symbol '{0}'")]
    UndefinedSymbol(String),

    #[error("Undefined state '{0}'")]
    UndefinedState(String),

    #[error("Initial state '{0}' is not a declared state")]
    DanglingInitialState(String),

    #[error("Final state '{0}' is not a declared state")]
    DanglingFinalState(String),

    #[error("Transition ({from}, {symbol}) -> {to} references an undeclared symbol or state")]
    DanglingTransition {
        symbol: String,
        from: String,
        to: String,
    },

    #[error("Transition ({from}, {symbol}) is defined more than once")]
    DuplicateTransition { symbol: String, from: String },
}
