//! State names.
//!
//! States are identified purely by name. A name is a non-empty ASCII
//! alphanumeric string, canonicalized to uppercase, and two states are the
//! same state exactly when their canonical names are equal.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use super::error::AutomatonError;

/// Canonical name of an automaton state.
///
/// The name is the state's only identity: the automaton stores each name
/// once in its state table, and the final-state set and transition table
/// refer to states by this value.
///
/// # Example
///
/// ```rust
/// use fsm_designer::core::StateName;
///
/// let q0 = StateName::parse("q0").unwrap();
/// assert_eq!(q0.as_str(), "Q0");
/// assert_eq!(q0, StateName::parse("Q0").unwrap());
///
/// assert!(StateName::parse("").is_none());
/// assert!(StateName::parse("q-1").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StateName(String);

impl StateName {
    /// Parse and canonicalize a state name.
    ///
    /// Returns `None` for an empty string or one containing anything other
    /// than ASCII letters and digits.
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() || !text.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        Some(StateName(text.to_ascii_uppercase()))
    }

    /// Get the canonical (uppercase) name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StateName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StateName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StateName {
    type Error = AutomatonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or(AutomatonError::InvalidStateName(value))
    }
}

impl From<StateName> for String {
    fn from(name: StateName) -> Self {
        name.0
    }
}
