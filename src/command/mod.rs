//! Textual command front-end.
//!
//! Turns user text into a [`Command`]: comments are stripped, the first
//! token selects the command (case-insensitively) and the rest become its
//! arguments. Argument syntax is checked later, per item, so that one bad
//! item never prevents its siblings from being applied.
//!
//! ```text
//! SYMBOLS a b c;            INITIAL-STATE s;        EXECUTE abba;
//! STATES s t;               FINAL-STATES t;         PRINT;  CLEAR;
//! TRANSITIONS a s t, b t s; LOG file; COMPILE file; LOAD file; EXIT;
//! ```

pub mod error;
pub mod lexer;
pub mod validation;

pub use error::CommandError;
pub use lexer::{decode_line, single_line, strip_comments, StatementBuffer};
pub use validation::{validate_execute_input, validate_transition};

/// A parsed front-end command with its raw arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Nothing but whitespace and comments.
    Empty,
    Exit,
    Symbols(Vec<String>),
    States(Vec<String>),
    InitialState(Vec<String>),
    FinalStates(Vec<String>),
    /// Comma-separated `SYMBOL FROM TO` triples, unsplit.
    Transitions(String),
    Print,
    Execute(Vec<String>),
    Clear,
    Log(Option<String>),
    Compile(Option<String>),
    Load(Option<String>),
    Unknown(String),
}

impl Command {
    /// Parse one complete statement.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsm_designer::command::Command;
    ///
    /// assert_eq!(
    ///     Command::parse("symbols a b ; the alphabet"),
    ///     Command::Symbols(vec!["a".into(), "b".into()])
    /// );
    /// assert_eq!(
    ///     Command::parse("TRANSITIONS a s t,\n b t t;"),
    ///     Command::Transitions("a s t,\n b t t".into())
    /// );
    /// assert_eq!(Command::parse("; just a comment"), Command::Empty);
    /// ```
    pub fn parse(raw: &str) -> Self {
        let clean = strip_comments(raw);
        let clean = clean.trim();
        let mut tokens = clean.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Self::Empty;
        };
        let args: Vec<String> = tokens.map(str::to_string).collect();
        let first_arg = args.first().cloned();

        match keyword.to_ascii_uppercase().as_str() {
            "EXIT" => Self::Exit,
            "SYMBOLS" => Self::Symbols(args),
            "STATES" => Self::States(args),
            "INITIAL-STATE" => Self::InitialState(args),
            "FINAL-STATES" => Self::FinalStates(args),
            "TRANSITIONS" => Self::Transitions(clean[keyword.len()..].trim().to_string()),
            "PRINT" => Self::Print,
            "EXECUTE" => Self::Execute(args),
            "CLEAR" => Self::Clear,
            "LOG" => Self::Log(first_arg),
            "COMPILE" => Self::Compile(first_arg),
            "LOAD" => Self::Load(first_arg),
            _ => Self::Unknown(keyword.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(Command::parse("exit"), Command::Exit);
        assert_eq!(Command::parse("Print;"), Command::Print);
        assert_eq!(Command::parse("cLeAr"), Command::Clear);
    }

    #[test]
    fn arguments_are_split_on_whitespace() {
        assert_eq!(
            Command::parse("STATES  q0\tq1\nq2;"),
            Command::States(vec!["q0".into(), "q1".into(), "q2".into()])
        );
    }

    #[test]
    fn hyphenated_keywords_parse() {
        assert_eq!(
            Command::parse("INITIAL-STATE s"),
            Command::InitialState(vec!["s".into()])
        );
        assert_eq!(
            Command::parse("final-states a b"),
            Command::FinalStates(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn transitions_keep_raw_remainder() {
        assert_eq!(
            Command::parse("transitions a s t , b t s ; done"),
            Command::Transitions("a s t , b t s".into())
        );
        assert_eq!(Command::parse("TRANSITIONS;"), Command::Transitions(String::new()));
    }

    #[test]
    fn file_commands_take_first_argument() {
        assert_eq!(Command::parse("LOG"), Command::Log(None));
        assert_eq!(Command::parse("LOG out.txt"), Command::Log(Some("out.txt".into())));
        assert_eq!(Command::parse("COMPILE m.fsm extra"), Command::Compile(Some("m.fsm".into())));
        assert_eq!(Command::parse("LOAD"), Command::Load(None));
    }

    #[test]
    fn unknown_keyword_is_preserved() {
        assert_eq!(Command::parse("FROB x"), Command::Unknown("FROB".into()));
    }

    #[test]
    fn comment_only_input_is_empty() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("  ; nothing here\n ;"), Command::Empty);
    }
}
