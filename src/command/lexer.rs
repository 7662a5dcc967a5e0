//! Text handling below the command level: comments and statement assembly.
//!
//! A `;` starts a comment that runs to the end of its line. Interactively,
//! a line containing `;` also terminates the statement being typed, so a
//! command may span several lines.

use std::borrow::Cow;

/// Remove `;` comments from every line of `input`.
pub fn strip_comments(input: &str) -> String {
    input
        .lines()
        .map(|line| match line.find(';') {
            Some(idx) => &line[..idx],
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode one raw input line, dropping its `\n` or `\r\n` terminator.
///
/// Bytes that are not valid UTF-8 become U+FFFD; the result is then
/// `Cow::Owned`, which lets callers notice the substitution.
pub fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}

/// Flatten a possibly multi-line statement onto a single line.
pub fn single_line(input: &str) -> String {
    input.lines().collect::<Vec<_>>().join(" ")
}

/// Accumulates typed lines until a `;`-terminated statement is complete.
///
/// # Example
///
/// ```rust
/// use fsm_designer::command::StatementBuffer;
///
/// let mut buffer = StatementBuffer::new();
/// assert_eq!(buffer.push_line("SYMBOLS a b"), None);
/// assert_eq!(
///     buffer.push_line("c ; the alphabet").as_deref(),
///     Some("SYMBOLS a b\nc ; the alphabet")
/// );
/// assert!(buffer.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct StatementBuffer {
    pending: String,
}

impl StatementBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line; returns the full statement once a line contains `;`.
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        self.pending.push_str(line);
        self.pending.push('\n');
        if line.contains(';') {
            self.finish()
        } else {
            None
        }
    }

    /// Take whatever has been typed so far, e.g. at end of input.
    pub fn finish(&mut self) -> Option<String> {
        let statement = std::mem::take(&mut self.pending);
        let statement = statement.trim();
        (!statement.is_empty()).then(|| statement.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.pending.trim().is_empty()
    }
}
