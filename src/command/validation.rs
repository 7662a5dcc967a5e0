//! Argument validation for commands that reference the automaton.
//!
//! Transition triples are checked with `Validation` so that every undefined
//! reference in a triple is reported at once instead of only the first.

use crate::command::error::CommandError;
use crate::core::{Automaton, StateName, Symbol, Transition};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Checked<T> = Validation<T, NonEmptyVec<CommandError>>;

/// Validate one `SYMBOL FROM TO` triple against the current automaton.
///
/// A triple with the wrong number of parts fails on its own. Otherwise the
/// symbol and both states are checked independently and all failures are
/// accumulated.
pub fn validate_transition(automaton: &Automaton, part: &str) -> Checked<Transition> {
    let tokens: Vec<&str> = part.split_whitespace().collect();
    let [symbol, from, to] = tokens.as_slice() else {
        return Validation::fail(CommandError::MalformedTransition(part.trim().to_string()));
    };

    let checks = vec![
        defined_symbol(automaton, symbol),
        defined_state(automaton, from),
        defined_state(automaton, to),
    ];

    match Validation::all_vec(checks) {
        Validation::Success(_) => {
            match (
                Symbol::parse(symbol),
                StateName::parse(from),
                StateName::parse(to),
            ) {
                (Some(symbol), Some(from), Some(to)) => {
                    Validation::success(Transition { symbol, from, to })
                }
                _ => Validation::fail(CommandError::MalformedTransition(part.trim().to_string())),
            }
        }
        Validation::Failure(errors) => Validation::Failure(errors),
    }
}

/// Check an `EXECUTE` argument list and return the canonical input string.
pub fn validate_execute_input(args: &[String]) -> Result<String, CommandError> {
    let [input] = args else {
        return Err(CommandError::ExecuteArity);
    };
    let input = input.to_ascii_uppercase();
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CommandError::InvalidInput(input));
    }
    Ok(input)
}

fn defined_symbol(automaton: &Automaton, text: &str) -> Checked<()> {
    if automaton.is_symbol_defined(text) {
        Validation::success(())
    } else {
        Validation::fail(CommandError::UndefinedSymbol(text.to_ascii_uppercase()))
    }
}

fn defined_state(automaton: &Automaton, text: &str) -> Checked<()> {
    if automaton.is_state_defined(text) {
        Validation::success(())
    } else {
        Validation::fail(CommandError::UndefinedState(text.to_ascii_uppercase()))
    }
}
