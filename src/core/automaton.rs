//! The automaton aggregate and its execution algorithm.
//!
//! An [`Automaton`] owns the alphabet, the state table, the initial and
//! final designations and the transition table. States live once in the
//! state table; every other structure refers to them by [`StateName`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use super::error::AutomatonError;
use super::state::StateName;
use super::symbol::Symbol;
use super::trace::{Trace, Verdict};
use super::transition::Transition;

/// Outcome of declaring a symbol or a state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Declared {
    /// Newly added.
    Added,
    /// Already present; nothing changed.
    AlreadyDeclared,
    /// Malformed name; nothing changed.
    Invalid,
}

impl Declared {
    pub fn is_added(self) -> bool {
        self == Self::Added
    }
}

/// Outcome of designating a state as initial or final.
///
/// Designations never fail on an unknown name: the state is created and
/// the caller is told so through [`Designation::ImplicitlyDeclared`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Designation {
    /// The state existed and the designation was applied.
    Applied,
    /// The state already carried this designation; nothing changed.
    AlreadyApplied,
    /// The state did not exist; it was created and designated.
    ImplicitlyDeclared,
    /// Malformed name; nothing changed.
    Invalid,
}

/// Effect of [`Automaton::add_transition`] on the transition table.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TransitionChange {
    Inserted,
    /// The `(from, symbol)` pair was already mapped; `previous` was replaced.
    Overwritten { previous: StateName },
}

/// A deterministic finite automaton under construction.
///
/// # Example
///
/// ```rust
/// use fsm_designer::core::{Automaton, Declared, Designation, Symbol, StateName};
///
/// let mut dfa = Automaton::new();
/// assert_eq!(dfa.add_symbol("a"), Declared::Added);
/// assert_eq!(dfa.add_state("s"), Declared::Added);
/// assert_eq!(dfa.add_final_state("t"), Designation::ImplicitlyDeclared);
///
/// // The first declared state is the initial state.
/// assert_eq!(dfa.initial_state().map(StateName::as_str), Some("S"));
///
/// let a = Symbol::parse("a").unwrap();
/// let s = StateName::parse("s").unwrap();
/// let t = StateName::parse("t").unwrap();
/// dfa.add_transition(a, s, t).unwrap();
///
/// assert_eq!(dfa.execute("A").to_strings(), ["S", "T", "YES"]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "AutomatonRepr", into = "AutomatonRepr")]
pub struct Automaton {
    alphabet: BTreeSet<Symbol>,
    states: BTreeSet<StateName>,
    initial: Option<StateName>,
    finals: BTreeSet<StateName>,
    transitions: BTreeMap<(StateName, Symbol), StateName>,
}

impl Automaton {
    /// Create an empty automaton.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol to the alphabet.
    pub fn add_symbol(&mut self, text: &str) -> Declared {
        let Some(symbol) = Symbol::parse(text) else {
            return Declared::Invalid;
        };
        if self.alphabet.insert(symbol) {
            debug!(%symbol, "symbol declared");
            Declared::Added
        } else {
            Declared::AlreadyDeclared
        }
    }

    /// Add a state. The first state ever added also becomes the initial state.
    pub fn add_state(&mut self, text: &str) -> Declared {
        let Some(name) = StateName::parse(text) else {
            return Declared::Invalid;
        };
        if self.states.contains(&name) {
            return Declared::AlreadyDeclared;
        }
        self.insert_state(name);
        Declared::Added
    }

    /// Make `text` the initial state, replacing any previous one.
    pub fn set_initial_state(&mut self, text: &str) -> Designation {
        let Some(name) = StateName::parse(text) else {
            return Designation::Invalid;
        };
        let designation = if self.states.contains(&name) {
            Designation::Applied
        } else {
            self.insert_state(name.clone());
            Designation::ImplicitlyDeclared
        };
        debug!(state = %name, "initial state set");
        self.initial = Some(name);
        designation
    }

    /// Mark `text` as a final (accepting) state.
    pub fn add_final_state(&mut self, text: &str) -> Designation {
        let Some(name) = StateName::parse(text) else {
            return Designation::Invalid;
        };
        let designation = if !self.states.contains(&name) {
            self.insert_state(name.clone());
            Designation::ImplicitlyDeclared
        } else if self.finals.contains(&name) {
            return Designation::AlreadyApplied;
        } else {
            Designation::Applied
        };
        debug!(state = %name, "final state marked");
        self.finals.insert(name);
        designation
    }

    pub fn is_symbol_defined(&self, text: &str) -> bool {
        Symbol::parse(text).is_some_and(|symbol| self.alphabet.contains(&symbol))
    }

    pub fn is_state_defined(&self, text: &str) -> bool {
        StateName::parse(text).is_some_and(|name| self.states.contains(&name))
    }

    /// Map `(from, symbol)` to `to`.
    ///
    /// The symbol and both endpoints must already be declared; otherwise the
    /// table is left untouched and the first undefined reference is returned.
    /// Redefining an existing pair replaces its target and reports the
    /// previous one.
    pub fn add_transition(
        &mut self,
        symbol: Symbol,
        from: StateName,
        to: StateName,
    ) -> Result<TransitionChange, AutomatonError> {
        if !self.alphabet.contains(&symbol) {
            return Err(AutomatonError::UndefinedSymbol(symbol.to_string()));
        }
        for endpoint in [&from, &to] {
            if !self.states.contains(endpoint) {
                return Err(AutomatonError::UndefinedState(endpoint.to_string()));
            }
        }

        debug!(%symbol, %from, %to, "transition defined");
        match self.transitions.insert((from, symbol), to) {
            Some(previous) => Ok(TransitionChange::Overwritten { previous }),
            None => Ok(TransitionChange::Inserted),
        }
    }

    /// Run `input` through the automaton and record every visited state.
    ///
    /// The input is consumed symbol by symbol from the initial state. A
    /// character outside the alphabet ends the run with an inline error
    /// marker and a rejection; a missing transition ends it with a plain
    /// rejection. Otherwise the verdict depends on whether the last state is
    /// final.
    pub fn execute(&self, input: &str) -> Trace {
        let Some(start) = &self.initial else {
            return Trace::rejected_without_start();
        };

        let mut trace = Trace::starting_at(start.clone());
        let mut current = start.clone();

        for c in input.chars() {
            let Some(symbol) = Symbol::from_char(c).filter(|s| self.alphabet.contains(s)) else {
                return trace.invalid_symbol(c.to_ascii_uppercase());
            };
            let Some(next) = self.transitions.get(&(current, symbol)) else {
                return trace.finish(Verdict::Reject);
            };
            trace.visit(next.clone());
            current = next.clone();
        }

        let verdict = if self.finals.contains(&current) {
            Verdict::Accept
        } else {
            Verdict::Reject
        };
        trace.finish(verdict)
    }

    /// Reset to an empty automaton.
    pub fn clear_all(&mut self) {
        debug!("automaton cleared");
        *self = Self::default();
    }

    /// Replace this automaton wholesale with a copy of `other`.
    pub fn copy_from(&mut self, other: &Automaton) {
        *self = other.clone();
    }

    /// Full copy of the current definition, for persistence.
    pub fn snapshot(&self) -> Automaton {
        self.clone()
    }

    pub fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    pub fn states(&self) -> &BTreeSet<StateName> {
        &self.states
    }

    pub fn initial_state(&self) -> Option<&StateName> {
        self.initial.as_ref()
    }

    pub fn final_states(&self) -> &BTreeSet<StateName> {
        &self.finals
    }

    pub fn is_final(&self, state: &StateName) -> bool {
        self.finals.contains(state)
    }

    /// Target of `(state, symbol)`, if mapped.
    pub fn target(&self, state: &StateName, symbol: Symbol) -> Option<&StateName> {
        self.transitions.get(&(state.clone(), symbol))
    }

    /// All transitions, ordered by source state then symbol.
    pub fn transitions(&self) -> impl Iterator<Item = Transition> + '_ {
        self.transitions
            .iter()
            .map(|((from, symbol), to)| Transition {
                symbol: *symbol,
                from: from.clone(),
                to: to.clone(),
            })
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alphabet.is_empty() && self.states.is_empty()
    }

    /// Check every structural invariant of the data model.
    ///
    /// Automata built through the public API always pass; this guards
    /// definitions arriving from outside, such as loaded snapshots.
    pub fn validate(&self) -> Result<(), AutomatonError> {
        if let Some(initial) = &self.initial {
            if !self.states.contains(initial) {
                return Err(AutomatonError::DanglingInitialState(initial.to_string()));
            }
        }
        if let Some(stray) = self.finals.iter().find(|f| !self.states.contains(*f)) {
            return Err(AutomatonError::DanglingFinalState(stray.to_string()));
        }
        for ((from, symbol), to) in &self.transitions {
            if !self.alphabet.contains(symbol)
                || !self.states.contains(from)
                || !self.states.contains(to)
            {
                return Err(AutomatonError::DanglingTransition {
                    symbol: symbol.to_string(),
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
        }
        Ok(())
    }

    fn insert_state(&mut self, name: StateName) {
        debug!(state = %name, "state declared");
        if self.states.is_empty() && self.initial.is_none() {
            self.initial = Some(name.clone());
        }
        self.states.insert(name);
    }
}

/// Serialized layout of an [`Automaton`].
///
/// The transition table is flattened into a list of triples so that every
/// serde format can carry it, and is re-validated on the way back in.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct AutomatonRepr {
    alphabet: Vec<Symbol>,
    states: Vec<StateName>,
    initial: Option<StateName>,
    finals: Vec<StateName>,
    transitions: Vec<Transition>,
}

impl From<Automaton> for AutomatonRepr {
    fn from(automaton: Automaton) -> Self {
        let transitions = automaton.transitions().collect();
        Self {
            alphabet: automaton.alphabet.into_iter().collect(),
            states: automaton.states.into_iter().collect(),
            initial: automaton.initial,
            finals: automaton.finals.into_iter().collect(),
            transitions,
        }
    }
}

impl TryFrom<AutomatonRepr> for Automaton {
    type Error = AutomatonError;

    fn try_from(repr: AutomatonRepr) -> Result<Self, Self::Error> {
        let mut transitions = BTreeMap::new();
        for Transition { symbol, from, to } in repr.transitions {
            if transitions.contains_key(&(from.clone(), symbol)) {
                return Err(AutomatonError::DuplicateTransition {
                    symbol: symbol.to_string(),
                    from: from.to_string(),
                });
            }
            transitions.insert((from, symbol), to);
        }

        let automaton = Automaton {
            alphabet: repr.alphabet.into_iter().collect(),
            states: repr.states.into_iter().collect(),
            initial: repr.initial,
            finals: repr.finals.into_iter().collect(),
            transitions,
        };
        automaton.validate()?;
        Ok(automaton)
    }
}
