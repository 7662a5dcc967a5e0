//! Command front-end error types.

use thiserror::Error;

/// Errors reported for a malformed or unresolvable command.
///
/// None of these abort a session; the offending item is skipped and the
/// message shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command")]
    UnknownCommand(String),

    #[error("{command} requires {what}.")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("Invalid symbol '{0}'")]
    InvalidSymbol(String),

    #[error("Invalid state '{0}'")]
    InvalidState(String),

    #[error("Each transition must have exactly 3 parts (symbol, fromState, toState): '{0}'")]
    MalformedTransition(String),

    #[error("Undefined symbol '{0}'")]
    UndefinedSymbol(String),

    #[error("Undefined state '{0}'")]
    UndefinedState(String),

    #[error("EXECUTE requires a single alphanumeric input string.")]
    ExecuteArity,

    #[error("Invalid characters in input string.")]
    InvalidInput(String),
}
