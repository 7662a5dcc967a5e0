//! Macros for ergonomic automaton construction.

/// Build an automaton from a literal definition.
///
/// Every section is optional but must appear in the order shown. Symbols and
/// state names are written bare and canonicalized like interactive input.
/// Transitions are `(SYMBOL, FROM, TO)` triples. Expands to a
/// `Result<Automaton, BuildError>`.
///
/// # Example
///
/// ```
/// use fsm_designer::automaton;
///
/// let dfa = automaton! {
///     symbols: [0, 1],
///     states: [even, odd],
///     initial: even,
///     finals: [even],
///     transitions: [
///         (0, even, odd),
///         (0, odd, even),
///         (1, even, even),
///         (1, odd, odd),
///     ],
/// }
/// .unwrap();
///
/// assert_eq!(dfa.execute("00").to_string(), "EVEN ODD EVEN YES");
/// ```
#[macro_export]
macro_rules! automaton {
    (
        $(symbols: [$($symbol:tt),* $(,)?] $(,)?)?
        $(states: [$($state:tt),* $(,)?] $(,)?)?
        $(initial: $initial:tt $(,)?)?
        $(finals: [$($final:tt),* $(,)?] $(,)?)?
        $(transitions: [$(($t_symbol:tt, $t_from:tt, $t_to:tt)),* $(,)?] $(,)?)?
    ) => {{
        let builder = $crate::builder::AutomatonBuilder::new();
        $($(let builder = builder.symbol(stringify!($symbol));)*)?
        $($(let builder = builder.state(stringify!($state));)*)?
        $(let builder = builder.initial(stringify!($initial));)?
        $($(let builder = builder.final_state(stringify!($final));)*)?
        $($(
            let builder = builder.transition(
                stringify!($t_symbol),
                stringify!($t_from),
                stringify!($t_to),
            );
        )*)?
        builder.build()
    }};
}
