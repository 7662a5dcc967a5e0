//! Interactive session state and command dispatch.
//!
//! A [`Session`] owns the live automaton, the transcript and the
//! configuration. [`Session::execute`] runs one statement and returns the
//! lines it produced; nothing is printed here, so the REPL and tests see
//! exactly the same output.

pub mod transcript;

use crate::checkpoint::{self, SnapshotFormat};
use crate::command::{
    single_line, validate_execute_input, validate_transition, Command, CommandError,
};
use crate::config::DesignerConfig;
use crate::core::{Automaton, Declared, Designation, TransitionChange};
use std::fs;
use std::path::Path;
use stillwater::validation::Validation;
use tracing::{debug, info, warn};

pub use transcript::{Transcript, TranscriptError};

/// Lines produced by one statement, and whether the session should end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub lines: Vec<String>,
    pub exit: bool,
}

/// One interactive designer session.
#[derive(Debug)]
pub struct Session {
    automaton: Automaton,
    transcript: Transcript,
    config: DesignerConfig,
    script_depth: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DesignerConfig::default())
    }
}

impl Session {
    pub fn new(config: DesignerConfig) -> Self {
        Self {
            automaton: Automaton::new(),
            transcript: Transcript::new(),
            config,
            script_depth: 0,
        }
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn automaton_mut(&mut self) -> &mut Automaton {
        &mut self.automaton
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    pub fn config(&self) -> &DesignerConfig {
        &self.config
    }

    /// Run one complete statement.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsm_designer::session::Session;
    ///
    /// let mut session = Session::default();
    /// session.execute("SYMBOLS a b;");
    /// session.execute("STATES s t;");
    /// session.execute("FINAL-STATES t;");
    /// session.execute("TRANSITIONS a s t, b t t;");
    ///
    /// let outcome = session.execute("EXECUTE ab;");
    /// assert_eq!(outcome.lines, ["S T T YES"]);
    /// assert!(!outcome.exit);
    ///
    /// assert!(session.execute("EXIT;").exit);
    /// ```
    pub fn execute(&mut self, raw: &str) -> Outcome {
        let mut lines = Vec::new();
        let exit = self.run(raw, &mut lines);
        Outcome { lines, exit }
    }

    /// Replay a script file through the normal command path, one command
    /// per line. `EXIT` inside a script ends the script, not the session.
    pub fn replay_script(&mut self, path: &Path) -> Outcome {
        let mut lines = Vec::new();
        self.load_script(path, &mut lines);
        Outcome { lines, exit: false }
    }

    fn run(&mut self, raw: &str, out: &mut Vec<String>) -> bool {
        self.record(&format!("> {}", single_line(raw)), out);

        let command = Command::parse(raw);
        debug!(?command, "dispatching");

        match command {
            Command::Empty => {}
            Command::Exit => return true,
            Command::Symbols(args) => self.symbols(&args, out),
            Command::States(args) => self.states(&args, out),
            Command::InitialState(args) => self.initial_state(&args, out),
            Command::FinalStates(args) => self.final_states(&args, out),
            Command::Transitions(triples) => self.transitions(&triples, out),
            Command::Print => {
                let dump = self.automaton.to_string();
                for line in dump.lines() {
                    self.emit(out, line.to_string());
                }
            }
            Command::Execute(args) => self.execute_input(&args, out),
            Command::Clear => {
                self.automaton.clear_all();
                self.emit(out, "FSM CLEARED.".to_string());
            }
            Command::Log(file) => self.log(file.as_deref(), out),
            Command::Compile(file) => match file {
                Some(file) => self.compile(Path::new(&file), out),
                None => self.error(
                    out,
                    CommandError::MissingArgument {
                        command: "COMPILE",
                        what: "a filename",
                    },
                ),
            },
            Command::Load(file) => match file {
                Some(file) => self.load(Path::new(&file), out),
                None => self.error(
                    out,
                    CommandError::MissingArgument {
                        command: "LOAD",
                        what: "a filename",
                    },
                ),
            },
            Command::Unknown(keyword) => {
                self.warn(out, CommandError::UnknownCommand(keyword).to_string());
            }
        }
        false
    }

    fn symbols(&mut self, args: &[String], out: &mut Vec<String>) {
        if args.is_empty() {
            let rendered = self.automaton.render_symbols();
            self.emit(out, rendered);
            return;
        }
        for symbol in args {
            match self.automaton.add_symbol(symbol) {
                Declared::Added => {}
                Declared::AlreadyDeclared => {
                    self.warn(out, format!("Symbol '{symbol}' already declared"));
                }
                Declared::Invalid => {
                    self.warn(out, CommandError::InvalidSymbol(symbol.clone()).to_string());
                }
            }
        }
    }

    fn states(&mut self, args: &[String], out: &mut Vec<String>) {
        if args.is_empty() {
            let rendered = self.automaton.render_states();
            self.emit(out, rendered);
            return;
        }
        for state in args {
            match self.automaton.add_state(state) {
                Declared::Added => {}
                Declared::AlreadyDeclared => {
                    self.warn(out, format!("State '{state}' already declared"));
                }
                Declared::Invalid => {
                    self.warn(out, CommandError::InvalidState(state.clone()).to_string());
                }
            }
        }
    }

    fn initial_state(&mut self, args: &[String], out: &mut Vec<String>) {
        let Some(state) = args.first() else {
            self.warn(out, "No initial state provided".to_string());
            return;
        };
        match self.automaton.set_initial_state(state) {
            Designation::Applied | Designation::AlreadyApplied => {}
            Designation::ImplicitlyDeclared => self.warn(
                out,
                format!("State '{state}' was not previously declared. Declaring it now."),
            ),
            Designation::Invalid => {
                self.warn(out, CommandError::InvalidState(state.clone()).to_string());
            }
        }
    }

    fn final_states(&mut self, args: &[String], out: &mut Vec<String>) {
        if args.is_empty() {
            self.warn(out, "No final states provided".to_string());
            return;
        }
        for state in args {
            match self.automaton.add_final_state(state) {
                Designation::Applied => {}
                Designation::AlreadyApplied => {
                    self.warn(out, format!("Final state '{state}' was already declared as final"));
                }
                Designation::ImplicitlyDeclared => self.warn(
                    out,
                    format!("State '{state}' was not previously declared. Declaring it now."),
                ),
                Designation::Invalid => {
                    self.warn(out, CommandError::InvalidState(state.clone()).to_string());
                }
            }
        }
    }

    fn transitions(&mut self, triples: &str, out: &mut Vec<String>) {
        if triples.is_empty() {
            let rendered = self.automaton.render_transitions();
            for line in rendered.lines() {
                self.emit(out, line.to_string());
            }
            return;
        }

        for part in triples.split(',').filter(|part| !part.trim().is_empty()) {
            let transition = match validate_transition(&self.automaton, part) {
                Validation::Success(transition) => transition,
                Validation::Failure(errors) => {
                    for error in errors.iter() {
                        self.error(out, error.clone());
                    }
                    continue;
                }
            };

            let (symbol, from, to) = (transition.symbol, transition.from, transition.to);
            let summary = format!("Transition ({from}, {symbol}) redefined: was ");
            match self.automaton.add_transition(symbol, from, to.clone()) {
                Ok(TransitionChange::Inserted) => {}
                Ok(TransitionChange::Overwritten { previous }) => {
                    self.warn(out, format!("{summary}{previous}, now {to}"));
                }
                Err(err) => self.error_text(out, err.to_string()),
            }
        }
    }

    fn execute_input(&mut self, args: &[String], out: &mut Vec<String>) {
        match validate_execute_input(args) {
            Ok(input) => {
                let trace = self.automaton.execute(&input);
                debug!(%input, verdict = %trace.verdict(), "executed");
                self.emit(out, trace.to_string());
            }
            Err(err) => self.error(out, err),
        }
    }

    fn log(&mut self, file: Option<&str>, out: &mut Vec<String>) {
        match file {
            Some(file) => match self.transcript.start(Path::new(file)) {
                Ok(()) => self.emit(out, format!("STARTED LOGGING to {file}")),
                Err(err) => self.error_text(out, err.to_string()),
            },
            None => match self.transcript.stop() {
                Ok(true) => self.emit(out, "STOPPED LOGGING".to_string()),
                Ok(false) => self.emit(out, "LOGGING was not enabled".to_string()),
                Err(err) => self.error_text(out, err.to_string()),
            },
        }
    }

    fn compile(&mut self, path: &Path, out: &mut Vec<String>) {
        let format = SnapshotFormat::from_path(path);
        match checkpoint::save_checkpoint(path, &self.automaton, format) {
            Ok(_) => {
                self.emit(out, "Compile successful".to_string());
                if !is_snapshot_path(path) {
                    self.warn(
                        out,
                        format!(
                            "{} does not end in .fsm or .json; LOAD will treat it as a script",
                            path.display()
                        ),
                    );
                }
                let note = format!("Compiled to file: {}", path.display());
                if let Err(err) = self.transcript.record(&note) {
                    warn!(error = %err, "transcript write failed");
                }
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "compile failed");
                self.error_text(
                    out,
                    format!("Could not write to file {}: {err}", path.display()),
                );
            }
        }
    }

    fn load(&mut self, path: &Path, out: &mut Vec<String>) {
        if is_snapshot_path(path) {
            match checkpoint::load_checkpoint(path, SnapshotFormat::from_path(path)) {
                Ok(loaded) => {
                    self.automaton.copy_from(&loaded.automaton);
                    info!(path = %path.display(), id = %loaded.id, "snapshot installed");
                    self.emit(out, format!("FSM loaded successfully from {}", path.display()));
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "snapshot load failed");
                    self.error_text(out, format!("Failed to load FSM from snapshot: {err}"));
                }
            }
        } else if self.load_script(path, out) {
            self.emit(out, "Commands loaded and executed from text file.".to_string());
        }
    }

    /// Returns `false` if the script could not be run at all.
    fn load_script(&mut self, path: &Path, out: &mut Vec<String>) -> bool {
        if self.script_depth >= self.config.max_script_depth {
            self.error_text(
                out,
                format!(
                    "Script nesting deeper than {} levels; not loading {}",
                    self.config.max_script_depth,
                    path.display()
                ),
            );
            return false;
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "script read failed");
                self.error_text(out, format!("Could not read file {}", path.display()));
                return false;
            }
        };

        info!(path = %path.display(), depth = self.script_depth, "replaying script");
        self.script_depth += 1;
        for line in content.lines() {
            if self.run(line.trim(), out) {
                break;
            }
        }
        self.script_depth -= 1;
        true
    }

    fn emit(&mut self, out: &mut Vec<String>, line: String) {
        self.record(&line, out);
        out.push(line);
    }

    fn warn(&mut self, out: &mut Vec<String>, message: String) {
        self.emit(out, format!("Warning: {message}"));
    }

    fn error(&mut self, out: &mut Vec<String>, err: CommandError) {
        self.error_text(out, err.to_string());
    }

    fn error_text(&mut self, out: &mut Vec<String>, message: String) {
        self.emit(out, format!("Error: {message}"));
    }

    fn record(&mut self, line: &str, out: &mut Vec<String>) {
        if let Err(err) = self.transcript.record(line) {
            out.push(format!("Error: {err}"));
        }
    }
}

fn is_snapshot_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("fsm") || ext.eq_ignore_ascii_case("json")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_all(session: &mut Session, statements: &[&str]) -> Vec<String> {
        statements
            .iter()
            .flat_map(|s| session.execute(s).lines)
            .collect()
    }

    fn designed() -> Session {
        let mut session = Session::default();
        let lines = run_all(
            &mut session,
            &[
                "SYMBOLS a b;",
                "STATES s t;",
                "FINAL-STATES t;",
                "TRANSITIONS a s t, b t t;",
            ],
        );
        assert!(lines.is_empty(), "unexpected output: {lines:?}");
        session
    }

    #[test]
    fn empty_statement_produces_nothing() {
        let mut session = Session::default();
        assert_eq!(session.execute("; only a comment"), Outcome::default());
    }

    #[test]
    fn exit_ends_session() {
        let mut session = Session::default();
        let outcome = session.execute("exit;");
        assert!(outcome.exit);
        assert!(outcome.lines.is_empty());
    }

    #[test]
    fn unknown_command_warns() {
        let mut session = Session::default();
        assert_eq!(session.execute("FLY away;").lines, ["Warning: Unknown command"]);
    }

    #[test]
    fn symbols_warn_per_item_and_continue() {
        let mut session = Session::default();
        let lines = session.execute("SYMBOLS a bb c a;").lines;
        assert_eq!(
            lines,
            [
                "Warning: Invalid symbol 'bb'",
                "Warning: Symbol 'a' already declared",
            ]
        );
        assert!(session.automaton().is_symbol_defined("C"));
        assert_eq!(session.execute("SYMBOLS;").lines, ["SYMBOLS: A, C"]);
    }

    #[test]
    fn states_listing_shows_tags() {
        let mut session = designed();
        assert_eq!(
            session.execute("STATES;").lines,
            ["STATES: S (Initial), T (Final)"]
        );
        assert_eq!(
            session.execute("STATES s x-y;").lines,
            [
                "Warning: State 's' already declared",
                "Warning: Invalid state 'x-y'",
            ]
        );
    }

    #[test]
    fn initial_state_warns_on_implicit_declaration() {
        let mut session = designed();
        assert!(session.execute("INITIAL-STATE t;").lines.is_empty());
        assert_eq!(
            session.execute("INITIAL-STATE q99;").lines,
            ["Warning: State 'q99' was not previously declared. Declaring it now."]
        );
        assert!(session.automaton().is_state_defined("Q99"));
        assert_eq!(
            session.execute("INITIAL-STATE;").lines,
            ["Warning: No initial state provided"]
        );
    }

    #[test]
    fn final_states_report_each_condition() {
        let mut session = designed();
        assert_eq!(
            session.execute("FINAL-STATES t s u;").lines,
            [
                "Warning: Final state 't' was already declared as final",
                "Warning: State 'u' was not previously declared. Declaring it now.",
            ]
        );
        assert_eq!(
            session.execute("FINAL-STATES;").lines,
            ["Warning: No final states provided"]
        );
    }

    #[test]
    fn bad_transition_triples_are_skipped_individually() {
        let mut session = designed();
        let lines = session
            .execute("TRANSITIONS a s, c s t, b s s, a x y;")
            .lines;
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Error: Each transition must have exactly 3 parts"));
        assert_eq!(lines[1], "Error: Undefined symbol 'C'");
        assert_eq!(lines[2], "Error: Undefined state 'X'");
        assert_eq!(lines[3], "Error: Undefined state 'Y'");

        // The valid sibling was still applied.
        assert_eq!(session.execute("EXECUTE b;").lines, ["S S NO"]);
    }

    #[test]
    fn redefined_transition_warns_and_overwrites() {
        let mut session = designed();
        assert_eq!(
            session.execute("TRANSITIONS a s s;").lines,
            ["Warning: Transition (S, A) redefined: was T, now S"]
        );
        assert_eq!(session.execute("EXECUTE a;").lines, ["S S NO"]);
    }

    #[test]
    fn transitions_without_arguments_lists_table() {
        let mut session = designed();
        assert_eq!(
            session.execute("TRANSITIONS;").lines,
            ["TRANSITIONS:", "  A S T", "  B T T"]
        );
    }

    #[test]
    fn execute_prints_trace() {
        let mut session = designed();
        assert_eq!(session.execute("EXECUTE ab;").lines, ["S T T YES"]);
        assert_eq!(session.execute("execute A;").lines, ["S T YES"]);
        assert_eq!(session.execute("EXECUTE b;").lines, ["S NO"]);
        assert_eq!(
            session.execute("EXECUTE ac;").lines,
            ["S T ERROR: invalid symbol 'C' NO"]
        );
    }

    #[test]
    fn execute_validates_arguments() {
        let mut session = designed();
        assert_eq!(
            session.execute("EXECUTE;").lines,
            ["Error: EXECUTE requires a single alphanumeric input string."]
        );
        assert_eq!(
            session.execute("EXECUTE a+b;").lines,
            ["Error: Invalid characters in input string."]
        );
    }

    #[test]
    fn execute_without_initial_state_rejects() {
        let mut session = Session::default();
        assert_eq!(session.execute("EXECUTE a;").lines, ["NO"]);
    }

    #[test]
    fn print_dumps_definition() {
        let mut session = designed();
        assert_eq!(
            session.execute("PRINT;").lines,
            [
                "SYMBOLS: A, B",
                "STATES: S (Initial), T (Final)",
                "INITIAL STATE: S",
                "FINAL STATES: T",
                "TRANSITIONS:",
                "  A S T",
                "  B T T",
            ]
        );
    }

    #[test]
    fn clear_resets_automaton() {
        let mut session = designed();
        assert_eq!(session.execute("CLEAR;").lines, ["FSM CLEARED."]);
        assert!(!session.automaton().is_state_defined("S"));
        assert!(!session.automaton().is_symbol_defined("A"));
    }

    #[test]
    fn file_commands_require_a_name() {
        let mut session = Session::default();
        assert_eq!(
            session.execute("COMPILE;").lines,
            ["Error: COMPILE requires a filename."]
        );
        assert_eq!(
            session.execute("LOAD;").lines,
            ["Error: LOAD requires a filename."]
        );
    }

    #[test]
    fn log_without_active_transcript_reports_it() {
        let mut session = Session::default();
        assert_eq!(session.execute("LOG;").lines, ["LOGGING was not enabled"]);
    }

    #[test]
    fn snapshot_paths_are_recognized() {
        assert!(is_snapshot_path(Path::new("m.fsm")));
        assert!(is_snapshot_path(Path::new("m.JSON")));
        assert!(!is_snapshot_path(Path::new("m.txt")));
        assert!(!is_snapshot_path(Path::new("script")));
    }
}
