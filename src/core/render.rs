//! Human-readable renderings of an automaton.
//!
//! These are pure views over the data model used by the `SYMBOLS`,
//! `STATES` and `PRINT` commands.

use std::fmt;

use super::automaton::Automaton;

const NONE: &str = "(none)";

impl Automaton {
    /// `SYMBOLS: A, B, C`
    pub fn render_symbols(&self) -> String {
        let symbols: Vec<String> = self.alphabet().iter().map(ToString::to_string).collect();
        format!("SYMBOLS: {}", join_or_none(&symbols))
    }

    /// `STATES: S (Initial), T (Final)`
    pub fn render_states(&self) -> String {
        let states: Vec<String> = self
            .states()
            .iter()
            .map(|state| {
                let mut label = state.to_string();
                if self.initial_state() == Some(state) {
                    label.push_str(" (Initial)");
                }
                if self.is_final(state) {
                    label.push_str(" (Final)");
                }
                label
            })
            .collect();
        format!("STATES: {}", join_or_none(&states))
    }

    /// One `SYMBOL FROM TO` triple per line under a `TRANSITIONS:` header.
    pub fn render_transitions(&self) -> String {
        let mut out = String::from("TRANSITIONS:");
        if self.transition_count() == 0 {
            out.push(' ');
            out.push_str(NONE);
        }
        for transition in self.transitions() {
            out.push_str("\n  ");
            out.push_str(&transition.to_string());
        }
        out
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        NONE.to_string()
    } else {
        items.join(", ")
    }
}

/// Full structured dump, as printed by `PRINT`.
impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.render_symbols())?;
        writeln!(f, "{}", self.render_states())?;
        match self.initial_state() {
            Some(initial) => writeln!(f, "INITIAL STATE: {initial}")?,
            None => writeln!(f, "INITIAL STATE: {NONE}")?,
        }
        let finals: Vec<String> = self.final_states().iter().map(ToString::to_string).collect();
        writeln!(f, "FINAL STATES: {}", join_or_none(&finals))?;
        write!(f, "{}", self.render_transitions())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{Automaton, StateName, Symbol};

    fn sample() -> Automaton {
        let mut dfa = Automaton::new();
        dfa.add_symbol("b");
        dfa.add_symbol("a");
        dfa.add_state("s");
        dfa.add_state("t");
        dfa.add_final_state("t");
        dfa.add_transition(
            Symbol::parse("a").unwrap(),
            StateName::parse("s").unwrap(),
            StateName::parse("t").unwrap(),
        )
        .unwrap();
        dfa
    }

    #[test]
    fn empty_automaton_renders_placeholders() {
        let dfa = Automaton::new();
        assert_eq!(dfa.render_symbols(), "SYMBOLS: (none)");
        assert_eq!(dfa.render_states(), "STATES: (none)");
        assert_eq!(dfa.render_transitions(), "TRANSITIONS: (none)");
    }

    #[test]
    fn symbols_render_sorted() {
        assert_eq!(sample().render_symbols(), "SYMBOLS: A, B");
    }

    #[test]
    fn states_carry_designation_tags() {
        assert_eq!(sample().render_states(), "STATES: S (Initial), T (Final)");
    }

    #[test]
    fn state_can_be_initial_and_final() {
        let mut dfa = Automaton::new();
        dfa.add_final_state("q");
        assert_eq!(dfa.render_states(), "STATES: Q (Initial) (Final)");
    }

    #[test]
    fn print_dumps_every_field() {
        let expected = "SYMBOLS: A, B\n\
                        STATES: S (Initial), T (Final)\n\
                        INITIAL STATE: S\n\
                        FINAL STATES: T\n\
                        TRANSITIONS:\n  A S T";
        assert_eq!(sample().to_string(), expected);
    }
}
