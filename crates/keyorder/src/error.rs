use alloc::string::String;

use thiserror::Error;

/// Error returned by a failed parse.
///
/// Carries the byte offset, counted from the first byte fed to the scanner,
/// at which scanning stopped.
#[derive(Debug, Error)]
#[error("{kind} at byte {offset}")]
pub struct ScanError {
    kind: ErrorKind,
    offset: usize,
}

impl ScanError {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// The failure classification.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Byte offset at which scanning stopped.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Classification of a [`ScanError`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input does not follow the JSON object grammar.
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    /// The byte source failed; the underlying error is surfaced unchanged.
    #[cfg(feature = "std")]
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

/// A byte that does not fit the grammar for the state the scanner was in.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// The scanner met a byte its current state cannot accept.
    #[error("invalid character '{found}' while scanning {state}")]
    InvalidCharacter {
        /// The offending byte, shown as a character.
        found: char,
        /// Human-readable name of the scanner state that rejected it.
        state: &'static str,
    },

    /// The input ended before the root object closed.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}

/// Lookup failure: no object was recorded under the requested path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("no keys recorded under path '{0}'")]
pub struct PathNotFound(pub String);
