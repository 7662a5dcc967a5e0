//! Build errors for the automaton builder.

use crate::core::AutomatonError;
use thiserror::Error;

/// Errors that can occur when building an automaton in one expression.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Invalid symbol '{0}'. Symbols are single alphanumeric characters")]
    InvalidSymbol(String),

    #[error("Invalid state '{0}'. State names are alphanumeric")]
    InvalidStateName(String),

    #[error("Transition uses undefined symbol '{0}'. Declare it with .symbol()")]
    UndefinedSymbol(String),

    #[error("Transition uses undefined state '{0}'. Declare it with .state()")]
    UndefinedState(String),

    #[error("Transition ({from}, {symbol}) defined more than once")]
    DuplicateTransition { symbol: String, from: String },
}

impl From<AutomatonError> for BuildError {
    fn from(err: AutomatonError) -> Self {
        match err {
            AutomatonError::InvalidSymbol(s) => Self::InvalidSymbol(s),
            AutomatonError::InvalidStateName(s) => Self::InvalidStateName(s),
            AutomatonError::UndefinedSymbol(s) => Self::UndefinedSymbol(s),
            AutomatonError::UndefinedState(s)
            | AutomatonError::DanglingInitialState(s)
            | AutomatonError::DanglingFinalState(s) => Self::UndefinedState(s),
            AutomatonError::DanglingTransition { to, .. } => Self::UndefinedState(to),
            AutomatonError::DuplicateTransition { symbol, from } => {
                Self::DuplicateTransition { symbol, from }
            }
        }
    }
}
