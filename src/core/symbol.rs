//! Alphabet symbols.
//!
//! A symbol is a single ASCII alphanumeric character, canonicalized to
//! uppercase so that `a` and `A` name the same symbol.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::AutomatonError;

/// One character of an automaton's input alphabet.
///
/// Values are always uppercase ASCII alphanumerics; the only ways to build
/// one go through [`Symbol::parse`] or [`Symbol::from_char`], which
/// canonicalize and reject anything else.
///
/// # Example
///
/// ```rust
/// use fsm_designer::core::Symbol;
///
/// let a = Symbol::parse("a").unwrap();
/// assert_eq!(a, Symbol::parse("A").unwrap());
/// assert_eq!(a.as_char(), 'A');
///
/// assert!(Symbol::parse("ab").is_none());
/// assert!(Symbol::parse("#").is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Symbol(char);

impl Symbol {
    /// Parse a symbol from text that must be exactly one alphanumeric character.
    pub fn parse(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Canonicalize a single character, rejecting non-alphanumerics.
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphanumeric()
            .then(|| Symbol(c.to_ascii_uppercase()))
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for Symbol {
    type Error = AutomatonError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or_else(|| AutomatonError::InvalidSymbol(c.to_string()))
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonicalizes_to_uppercase() {
        assert_eq!(Symbol::parse("x").unwrap().as_char(), 'X');
        assert_eq!(Symbol::parse("7").unwrap().as_char(), '7');
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(Symbol::parse("").is_none());
        assert!(Symbol::parse("ab").is_none());
    }

    #[test]
    fn parse_rejects_non_alphanumeric() {
        assert!(Symbol::parse("-").is_none());
        assert!(Symbol::parse(" ").is_none());
        assert!(Symbol::parse("é").is_none());
    }

    #[test]
    fn symbol_serializes_as_plain_char() {
        let symbol = Symbol::parse("q").unwrap();
        let json = serde_json::to_string(&symbol).unwrap();
        assert_eq!(json, "\"Q\"");

        let deserialized: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(symbol, deserialized);
    }

    #[test]
    fn deserialize_rejects_invalid_char() {
        let result: Result<Symbol, _> = serde_json::from_str("\"!\"");
        assert!(result.is_err());
    }
}
