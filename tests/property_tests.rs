//! Property-based tests for the automaton engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use fsm_designer::checkpoint::{Checkpoint, SnapshotFormat};
use fsm_designer::core::{Automaton, Declared, Designation, StateName, Symbol, TransitionChange};
use proptest::prelude::*;

const STATE_POOL: [&str; 4] = ["Q0", "Q1", "Q2", "Q3"];
const ALPHABET: [&str; 2] = ["A", "B"];

prop_compose! {
    fn arbitrary_transitions()(
        triples in prop::collection::vec((0..2usize, 0..4usize, 0..4usize), 0..12)
    ) -> Vec<(usize, usize, usize)> {
        triples
    }
}

prop_compose! {
    fn arbitrary_automaton()(
        transitions in arbitrary_transitions(),
        initial in 0..4usize,
        finals in prop::collection::vec(0..4usize, 0..4),
    ) -> Automaton {
        let mut dfa = Automaton::new();
        for symbol in ALPHABET {
            dfa.add_symbol(symbol);
        }
        for state in STATE_POOL {
            dfa.add_state(state);
        }
        dfa.set_initial_state(STATE_POOL[initial]);
        for f in finals {
            dfa.add_final_state(STATE_POOL[f]);
        }
        for (s, from, to) in transitions {
            dfa.add_transition(
                Symbol::parse(ALPHABET[s]).unwrap(),
                StateName::parse(STATE_POOL[from]).unwrap(),
                StateName::parse(STATE_POOL[to]).unwrap(),
            )
            .unwrap();
        }
        dfa
    }
}

/// Every string over {A, B} of length 0 through 4, plus a few with an
/// out-of-alphabet symbol.
fn exhaustive_inputs() -> Vec<String> {
    let mut inputs = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..4 {
        let mut next = Vec::new();
        for prefix in &frontier {
            for symbol in ALPHABET {
                next.push(format!("{prefix}{symbol}"));
            }
        }
        inputs.extend(next.iter().cloned());
        frontier = next;
    }
    inputs.extend(["C".to_string(), "AC".to_string(), "BAZ".to_string()]);
    inputs
}

proptest! {
    #[test]
    fn added_symbol_is_defined_and_not_readded(symbol in "[A-Za-z0-9]") {
        let mut dfa = Automaton::new();
        prop_assert_eq!(dfa.add_symbol(&symbol), Declared::Added);
        prop_assert!(dfa.is_symbol_defined(&symbol));
        prop_assert!(dfa.is_symbol_defined(&symbol.to_ascii_lowercase()));

        prop_assert_eq!(dfa.add_symbol(&symbol), Declared::AlreadyDeclared);
        prop_assert_eq!(dfa.alphabet().len(), 1);
    }

    #[test]
    fn malformed_symbol_is_never_added(symbol in "[A-Za-z0-9]{2,4}|[^A-Za-z0-9]") {
        let mut dfa = Automaton::new();
        prop_assert_eq!(dfa.add_symbol(&symbol), Declared::Invalid);
        prop_assert!(dfa.alphabet().is_empty());
    }

    #[test]
    fn added_state_is_defined_and_not_readded(name in "[A-Za-z0-9]{1,8}") {
        let mut dfa = Automaton::new();
        prop_assert_eq!(dfa.add_state(&name), Declared::Added);
        prop_assert!(dfa.is_state_defined(&name));
        prop_assert_eq!(dfa.add_state(&name.to_ascii_lowercase()), Declared::AlreadyDeclared);
        prop_assert_eq!(dfa.states().len(), 1);
    }

    #[test]
    fn first_state_is_initial_until_overridden(
        names in prop::collection::btree_set("[A-Z][A-Z0-9]{0,4}", 2..6)
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let mut dfa = Automaton::new();
        for name in &names {
            dfa.add_state(name);
        }
        prop_assert_eq!(dfa.initial_state().map(StateName::as_str), Some(names[0].as_str()));

        let last = names.last().unwrap();
        prop_assert_eq!(dfa.set_initial_state(last), Designation::Applied);
        prop_assert_eq!(dfa.initial_state().map(StateName::as_str), Some(last.as_str()));
    }

    #[test]
    fn implicit_initial_state_is_declared(name in "[A-Za-z0-9]{1,6}") {
        let mut dfa = Automaton::new();
        prop_assert_eq!(dfa.set_initial_state(&name), Designation::ImplicitlyDeclared);
        prop_assert!(dfa.is_state_defined(&name));
        let expected_upper = name.to_ascii_uppercase();
        prop_assert_eq!(
            dfa.initial_state().map(StateName::as_str),
            Some(expected_upper.as_str())
        );
    }

    #[test]
    fn redefinition_overwrites_destination(first in 0..4usize, second in 0..4usize) {
        let mut dfa = Automaton::new();
        dfa.add_symbol("S");
        for state in STATE_POOL {
            dfa.add_state(state);
        }
        let symbol = Symbol::parse("S").unwrap();
        let from = StateName::parse("Q0").unwrap();
        let x = StateName::parse(STATE_POOL[first]).unwrap();
        let y = StateName::parse(STATE_POOL[second]).unwrap();

        dfa.add_transition(symbol, from.clone(), x.clone()).unwrap();
        let change = dfa.add_transition(symbol, from.clone(), y.clone()).unwrap();

        prop_assert_eq!(change, TransitionChange::Overwritten { previous: x });
        prop_assert_eq!(dfa.target(&from, symbol), Some(&y));
        let trace = dfa.execute("S");
        prop_assert_eq!(trace.path()[1], &y);
    }

    #[test]
    fn trace_is_well_formed(dfa in arbitrary_automaton(), input in "[AB]{0,6}") {
        let trace = dfa.execute(&input);
        let strings = trace.to_strings();
        let last = strings.last().unwrap().as_str();
        prop_assert!(last == "YES" || last == "NO");

        // Never more visits than the start plus one per consumed symbol.
        prop_assert!(trace.path().len() <= input.len() + 1);
        prop_assert!(!trace.path().is_empty());
    }

    #[test]
    fn cleared_automaton_forgets_everything(dfa in arbitrary_automaton()) {
        let mut dfa = dfa;
        dfa.clear_all();
        for state in STATE_POOL {
            prop_assert!(!dfa.is_state_defined(state));
        }
        for symbol in ALPHABET {
            prop_assert!(!dfa.is_symbol_defined(symbol));
        }
        prop_assert_eq!(dfa.execute("AB").to_strings(), vec!["NO".to_string()]);
    }

    #[test]
    fn snapshot_reload_preserves_behaviour(dfa in arbitrary_automaton()) {
        let inputs = exhaustive_inputs();
        let expected: Vec<_> = inputs.iter().map(|i| dfa.execute(i)).collect();

        for format in [SnapshotFormat::Binary, SnapshotFormat::Json] {
            let bytes = Checkpoint::capture(&dfa).to_bytes(format).unwrap();

            let mut live = dfa.clone();
            live.clear_all();
            let loaded = Checkpoint::from_bytes(&bytes, format).unwrap();
            live.copy_from(&loaded.automaton);

            prop_assert_eq!(&live, &dfa);
            for (input, trace) in inputs.iter().zip(&expected) {
                prop_assert_eq!(&live.execute(input), trace);
            }
        }
    }
}
