//! Builder for constructing automata.

use crate::builder::error::BuildError;
use crate::core::{Automaton, Declared, Designation, StateName, Symbol, TransitionChange};

/// Builder for constructing an [`Automaton`] with a fluent API.
///
/// Declarations are collected as written and replayed through the engine in
/// `build()`: symbols, then states, then the initial and final designations,
/// then transitions. Names are validated and canonicalized there.
///
/// # Example
///
/// ```
/// use fsm_designer::builder::AutomatonBuilder;
///
/// let dfa = AutomatonBuilder::new()
///     .symbols(["0", "1"])
///     .states(["even", "odd"])
///     .final_state("even")
///     .transition("0", "even", "odd")
///     .transition("0", "odd", "even")
///     .transition("1", "even", "even")
///     .transition("1", "odd", "odd")
///     .build()
///     .unwrap();
///
/// assert!(dfa.execute("1001").is_accepted());
/// assert!(!dfa.execute("10").is_accepted());
/// ```
#[derive(Debug, Default)]
pub struct AutomatonBuilder {
    symbols: Vec<String>,
    states: Vec<String>,
    initial: Option<String>,
    finals: Vec<String>,
    transitions: Vec<(String, String, String)>,
}

impl AutomatonBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare one alphabet symbol.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    /// Declare several alphabet symbols.
    pub fn symbols<I, T>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.symbols.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Declare one state. The first declared state is initial unless
    /// `.initial()` says otherwise.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.push(name.into());
        self
    }

    /// Declare several states.
    pub fn states<I, T>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.states.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set the initial state, declaring it if needed.
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Mark a final state, declaring it if needed.
    pub fn final_state(mut self, name: impl Into<String>) -> Self {
        self.finals.push(name.into());
        self
    }

    /// Add a transition `(from, symbol) -> to`.
    pub fn transition(
        mut self,
        symbol: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.transitions.push((symbol.into(), from.into(), to.into()));
        self
    }

    /// Build the automaton.
    /// Returns the first structural problem found, if any.
    pub fn build(self) -> Result<Automaton, BuildError> {
        let mut automaton = Automaton::new();

        for symbol in &self.symbols {
            if automaton.add_symbol(symbol) == Declared::Invalid {
                return Err(BuildError::InvalidSymbol(symbol.clone()));
            }
        }
        for name in &self.states {
            if automaton.add_state(name) == Declared::Invalid {
                return Err(BuildError::InvalidStateName(name.clone()));
            }
        }
        if let Some(name) = &self.initial {
            if automaton.set_initial_state(name) == Designation::Invalid {
                return Err(BuildError::InvalidStateName(name.clone()));
            }
        }
        for name in &self.finals {
            if automaton.add_final_state(name) == Designation::Invalid {
                return Err(BuildError::InvalidStateName(name.clone()));
            }
        }

        for (symbol, from, to) in self.transitions {
            let parsed_symbol =
                Symbol::parse(&symbol).ok_or_else(|| BuildError::InvalidSymbol(symbol.clone()))?;
            let parsed_from =
                StateName::parse(&from).ok_or_else(|| BuildError::InvalidStateName(from.clone()))?;
            let parsed_to =
                StateName::parse(&to).ok_or_else(|| BuildError::InvalidStateName(to.clone()))?;

            let change = automaton.add_transition(parsed_symbol, parsed_from, parsed_to)?;
            if let TransitionChange::Overwritten { .. } = change {
                return Err(BuildError::DuplicateTransition {
                    symbol: parsed_symbol.to_string(),
                    from: from.to_ascii_uppercase(),
                });
            }
        }

        Ok(automaton)
    }
}
