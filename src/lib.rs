//! FSM Designer: interactive construction and execution of deterministic
//! finite automata.
//!
//! A user declares an alphabet, states, an initial state, final states and
//! a transition function, then runs input strings through the automaton to
//! see every visited state and an accept/reject verdict.
//!
//! # Layout
//!
//! - [`core`]: the automaton engine (data model, invariants, execution)
//! - [`builder`]: one-expression construction via a builder or `automaton!`
//! - [`command`]: the textual command front-end
//! - [`checkpoint`]: binary and JSON snapshots on disk
//! - [`session`]: session state, dispatch and the transcript log
//! - [`config`]: TOML configuration
//!
//! # Example
//!
//! ```rust
//! use fsm_designer::core::{Automaton, StateName, Symbol, Verdict};
//!
//! let mut dfa = Automaton::new();
//! dfa.add_symbol("a");
//! dfa.add_symbol("b");
//! dfa.add_state("s");
//! dfa.add_state("t");
//! dfa.add_final_state("t");
//!
//! let a = Symbol::parse("a").unwrap();
//! let b = Symbol::parse("b").unwrap();
//! let s = StateName::parse("s").unwrap();
//! let t = StateName::parse("t").unwrap();
//! dfa.add_transition(a, s, t.clone()).unwrap();
//! dfa.add_transition(b, t.clone(), t).unwrap();
//!
//! let trace = dfa.execute("AB");
//! assert_eq!(trace.to_strings(), ["S", "T", "T", "YES"]);
//! assert_eq!(trace.verdict(), Verdict::Accept);
//!
//! assert_eq!(dfa.execute("B").to_strings(), ["S", "NO"]);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod command;
pub mod config;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Automaton, StateName, Symbol, Trace, Verdict};
pub use builder::{AutomatonBuilder, BuildError};
pub use session::{Outcome, Session};
