//! Byte-at-a-time scanner that recovers JSON object key order.
//!
//! The scanner is a hand-rolled finite-state machine: each input byte, under
//! the current [`State`], either advances the machine, grows the key scratch
//! buffer, or adjusts the key-path stack. It recognizes structural tokens
//! only — no value is ever materialized, string and array contents are
//! discarded, and numbers are never parsed.
//!
//! All scanning state lives in the [`Scanner`] value, so input may be fed in
//! arbitrary chunks: a key, a string value, or an escape sequence split
//! across a chunk boundary resumes exactly where it left off. Each parse owns
//! its own `Scanner` and its own output [`KeyMap`]; nothing is shared between
//! parses.
//!
//! Two transitions consume a byte that belongs to the *next* token (the first
//! byte of a bare value, and the `,`/`}` that terminates one). [`Flow::Replay`]
//! signals the feed loop to present the same byte again under the new state;
//! this is the only lookahead in the protocol.

use alloc::string::String;
use alloc::vec::Vec;
use core::mem;

use bstr::{BString, ByteVec};
use log::trace;

use crate::error::{ErrorKind, ScanError, SyntaxError};
use crate::key_map::KeyMap;
use crate::key_path::KeyPath;
use crate::options::ScannerOptions;

/// Grammar position of the scanner, one variant per state of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Before the opening `{` of the document.
    BeginObject,
    /// Before the opening `"` of a key.
    BeginKey,
    /// Inside a key, accumulating bytes into the scratch buffer.
    Key,
    /// After the closing `"` of a key, before the `:` separator.
    EndKey,
    /// After `:`, before the first significant byte of the value.
    BeginValue,
    /// Inside a quoted string value; contents are discarded.
    StringValue,
    /// Inside an array value; skipped with bracket and quote awareness.
    ArrayValue,
    /// Inside a bare value (number, boolean, null).
    BareValue,
    /// After a value, before `,` or `}`.
    EndValue,
    /// The root object has closed; every remaining byte is ignored.
    Done,
}

impl State {
    fn name(self) -> &'static str {
        match self {
            State::BeginObject => "object start",
            State::BeginKey => "key start",
            State::Key => "key characters",
            State::EndKey => "key separator",
            State::BeginValue => "value start",
            State::StringValue => "string value",
            State::ArrayValue => "array value",
            State::BareValue => "bare value",
            State::EndValue => "value end",
            State::Done => "trailing bytes",
        }
    }
}

/// What the feed loop should do with the byte it just presented.
enum Flow {
    /// The byte was consumed; move on to the next one.
    Consumed,
    /// The byte belongs to the state just entered; present it again.
    Replay,
}

/// The four whitespace bytes JSON allows between tokens.
const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Per-parse state machine extracting key declaration order.
///
/// Construct one scanner per document, [`feed`](Scanner::feed) it bytes in
/// any chunking, then call [`finish`](Scanner::finish) to take the completed
/// [`KeyMap`]. A scanner is not reusable across documents; independent parses
/// must use independent scanners.
///
/// # Examples
///
/// ```rust
/// use keyorder::{Scanner, ScannerOptions};
///
/// let mut scanner = Scanner::new(ScannerOptions::default());
/// scanner.feed(br#"{"a":1,"#)?;
/// scanner.feed(br#""b":2}"#)?;
/// let map = scanner.finish()?;
/// assert_eq!(map.lookup("root")?, ["a", "b"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Scanner {
    state: State,
    /// One-shot flag: the previous in-string byte was an unconsumed `\`.
    /// Shared by the key, string-value, and array-string contexts, which
    /// never overlap.
    escaped: bool,
    /// Bracket nesting inside an array value; zero outside arrays.
    array_depth: usize,
    /// Inside a quoted string within an array value.
    array_in_string: bool,
    /// Scratch buffer for the key currently being scanned. Bytes are stored
    /// verbatim, so the content need not be valid UTF-8 until committed.
    key_buf: BString,
    /// Most recently committed key; becomes the next path segment if the
    /// value that follows opens an object.
    last_key: String,
    path: KeyPath,
    map: KeyMap,
    offset: usize,
    options: ScannerOptions,
}

impl Scanner {
    /// Creates a scanner for a single parse.
    #[must_use]
    pub fn new(options: ScannerOptions) -> Self {
        Self {
            state: State::BeginObject,
            escaped: false,
            array_depth: 0,
            array_in_string: false,
            key_buf: BString::default(),
            last_key: String::new(),
            path: KeyPath::default(),
            map: KeyMap::default(),
            offset: 0,
            options,
        }
    }

    /// Feeds one chunk of the document through the state machine.
    ///
    /// May be called any number of times; chunk boundaries carry no meaning.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] with the offending byte's offset as soon as a
    /// byte violates the grammar. The error is terminal for this parse.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<(), ScanError> {
        for &byte in chunk {
            loop {
                match self.step(byte) {
                    Ok(Flow::Consumed) => break,
                    Ok(Flow::Replay) => {}
                    Err(err) => {
                        return Err(ScanError::new(ErrorKind::Syntax(err), self.offset));
                    }
                }
            }
            self.offset += 1;
        }
        Ok(())
    }

    /// Completes the parse and returns the accumulated mapping.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::UnexpectedEndOfInput`] if the root object has
    /// not closed yet. No partial mapping is returned.
    pub fn finish(self) -> Result<KeyMap, ScanError> {
        if self.state == State::Done {
            Ok(self.map)
        } else {
            Err(ScanError::new(
                SyntaxError::UnexpectedEndOfInput.into(),
                self.offset,
            ))
        }
    }

    /// Total number of bytes consumed so far.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn step(&mut self, byte: u8) -> Result<Flow, SyntaxError> {
        match self.state {
            State::BeginObject => match byte {
                b'{' => {
                    self.path
                        .push(self.options.root_path_name.clone().into_owned());
                    trace!("object open, path {}", self.path.dotted());
                    self.state = State::BeginKey;
                    Ok(Flow::Consumed)
                }
                b if is_whitespace(b) => Ok(Flow::Consumed),
                _ => Err(self.invalid(byte)),
            },
            State::BeginKey => match byte {
                b'"' => {
                    self.escaped = false;
                    self.state = State::Key;
                    Ok(Flow::Consumed)
                }
                b if is_whitespace(b) => Ok(Flow::Consumed),
                _ => Err(self.invalid(byte)),
            },
            State::Key => {
                if self.escaped {
                    // The byte after a backslash is always literal, `"` and
                    // `\` included. `\uXXXX` is not decoded and contributes
                    // the bytes `uXXXX`.
                    self.escaped = false;
                    self.key_buf.push(byte);
                } else {
                    match byte {
                        b'"' => self.commit_key(),
                        b'\\' => self.escaped = true,
                        _ => self.key_buf.push(byte),
                    }
                }
                Ok(Flow::Consumed)
            }
            State::EndKey => match byte {
                b':' => {
                    self.state = State::BeginValue;
                    Ok(Flow::Consumed)
                }
                b if is_whitespace(b) => Ok(Flow::Consumed),
                _ => Err(self.invalid(byte)),
            },
            State::BeginValue => match byte {
                b'"' => {
                    self.escaped = false;
                    self.state = State::StringValue;
                    Ok(Flow::Consumed)
                }
                b'[' => {
                    self.array_depth = 1;
                    self.array_in_string = false;
                    self.escaped = false;
                    self.state = State::ArrayValue;
                    Ok(Flow::Consumed)
                }
                b'{' => {
                    // Object as value: nesting is encoded in the path stack,
                    // not the call stack.
                    self.path.push(mem::take(&mut self.last_key));
                    trace!("object open, path {}", self.path.dotted());
                    self.state = State::BeginKey;
                    Ok(Flow::Consumed)
                }
                b if is_whitespace(b) => Ok(Flow::Consumed),
                _ => {
                    // First byte of a bare value belongs to the value state.
                    self.state = State::BareValue;
                    Ok(Flow::Replay)
                }
            },
            State::StringValue => {
                if self.escaped {
                    self.escaped = false;
                } else {
                    match byte {
                        b'"' => self.state = State::EndValue,
                        b'\\' => self.escaped = true,
                        _ => {}
                    }
                }
                Ok(Flow::Consumed)
            }
            State::ArrayValue => {
                // Arrays are skipped, not parsed, but the skip is bracket and
                // quote aware so a `]` inside a string or a nested array never
                // ends the value early. Keys of objects inside arrays are
                // intentionally not recorded.
                if self.array_in_string {
                    if self.escaped {
                        self.escaped = false;
                    } else {
                        match byte {
                            b'"' => self.array_in_string = false,
                            b'\\' => self.escaped = true,
                            _ => {}
                        }
                    }
                } else {
                    match byte {
                        b'"' => self.array_in_string = true,
                        b'[' => self.array_depth += 1,
                        b']' => {
                            self.array_depth -= 1;
                            if self.array_depth == 0 {
                                self.state = State::EndValue;
                            }
                        }
                        _ => {}
                    }
                }
                Ok(Flow::Consumed)
            }
            State::BareValue => match byte {
                // The terminator belongs to the value-end state.
                b',' | b'}' => {
                    self.state = State::EndValue;
                    Ok(Flow::Replay)
                }
                _ => Ok(Flow::Consumed),
            },
            State::EndValue => match byte {
                b',' => {
                    self.state = State::BeginKey;
                    Ok(Flow::Consumed)
                }
                b'}' => {
                    let popped = self.path.pop();
                    debug_assert!(popped, "object close with empty key path");
                    trace!("object close, depth {}", self.path.depth());
                    if self.path.is_at_root() {
                        self.state = State::Done;
                    }
                    // Otherwise stay in the value-end state: an object used
                    // as a value terminates like any other value.
                    Ok(Flow::Consumed)
                }
                b if is_whitespace(b) => Ok(Flow::Consumed),
                _ => Err(self.invalid(byte)),
            },
            State::Done => Ok(Flow::Consumed),
        }
    }

    /// Commits the scratch buffer as one key of the current object and
    /// remembers it as the candidate path segment for a nested object.
    fn commit_key(&mut self) {
        let key = Vec::from(mem::take(&mut self.key_buf)).into_string_lossy();
        let path = self.path.dotted();
        trace!("key {key:?} under {path}");
        self.map.record(path, key.clone());
        self.last_key = key;
        self.state = State::EndKey;
    }

    fn invalid(&self, byte: u8) -> SyntaxError {
        SyntaxError::InvalidCharacter {
            found: char::from(byte),
            state: self.state.name(),
        }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(ScannerOptions::default())
    }
}

#[cfg(test)]
mod tests;
