//! Transition triples.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::state::StateName;
use super::symbol::Symbol;

/// A single deterministic move: reading `symbol` in `from` leads to `to`.
///
/// The automaton stores transitions as a table keyed by `(from, symbol)`;
/// this type is the flattened view used for display and persistence.
/// It renders as a `SYMBOL FROM TO` triple.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Transition {
    pub symbol: Symbol,
    pub from: StateName,
    pub to: StateName,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.symbol, self.from, self.to)
    }
}
