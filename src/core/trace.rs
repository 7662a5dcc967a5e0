//! Execution traces.
//!
//! A trace records every state visited while an input string is consumed,
//! terminated by an accept/reject verdict. An input symbol outside the
//! alphabet is not an error at this level: it is recorded inline and the
//! run ends with a rejection.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::state::StateName;

/// Final outcome of running an input through the automaton.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Verdict {
    Accept,
    Reject,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accept => "YES",
            Self::Reject => "NO",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of an execution trace.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TraceStep {
    /// The automaton entered (or started in) this state.
    Visit(StateName),
    /// The input contained a character outside the alphabet.
    InvalidSymbol(char),
    /// Terminal accept/reject marker. Always the last step.
    Verdict(Verdict),
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visit(state) => write!(f, "{state}"),
            Self::InvalidSymbol(c) => write!(f, "ERROR: invalid symbol '{c}'"),
            Self::Verdict(verdict) => write!(f, "{verdict}"),
        }
    }
}

/// Ordered record of one execution.
///
/// Traces are built by [`Automaton::execute`](super::Automaton::execute) and
/// are always complete: the last step is a [`TraceStep::Verdict`].
///
/// # Example
///
/// ```rust
/// use fsm_designer::automaton;
/// use fsm_designer::core::Verdict;
///
/// let dfa = automaton! {
///     symbols: [A, B],
///     states: [S, T],
///     initial: S,
///     finals: [T],
///     transitions: [(A, S, T), (B, T, T)],
/// }
/// .unwrap();
///
/// let trace = dfa.execute("AB");
/// assert_eq!(trace.to_strings(), ["S", "T", "T", "YES"]);
/// assert_eq!(trace.verdict(), Verdict::Accept);
/// assert_eq!(trace.to_string(), "S T T YES");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    /// Trace of an automaton that has no initial state.
    pub(crate) fn rejected_without_start() -> Self {
        Self {
            steps: vec![TraceStep::Verdict(Verdict::Reject)],
        }
    }

    pub(crate) fn starting_at(state: StateName) -> Self {
        Self {
            steps: vec![TraceStep::Visit(state)],
        }
    }

    pub(crate) fn visit(&mut self, state: StateName) {
        self.steps.push(TraceStep::Visit(state));
    }

    pub(crate) fn invalid_symbol(mut self, c: char) -> Self {
        self.steps.push(TraceStep::InvalidSymbol(c));
        self.finish(Verdict::Reject)
    }

    pub(crate) fn finish(mut self, verdict: Verdict) -> Self {
        self.steps.push(TraceStep::Verdict(verdict));
        self
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// The terminal verdict of this run.
    pub fn verdict(&self) -> Verdict {
        match self.steps.last() {
            Some(TraceStep::Verdict(verdict)) => *verdict,
            _ => Verdict::Reject,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.verdict() == Verdict::Accept
    }

    /// States visited, in order, excluding markers.
    pub fn path(&self) -> Vec<&StateName> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                TraceStep::Visit(state) => Some(state),
                _ => None,
            })
            .collect()
    }

    /// Render every step as text, one string per step.
    pub fn to_strings(&self) -> Vec<String> {
        self.steps.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
