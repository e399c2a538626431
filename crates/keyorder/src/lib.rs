//! Recover the declaration order of JSON object keys.
//!
//! Decoding JSON into an associative container discards the order in which
//! the source declared its keys. `keyorder` instead streams the raw bytes
//! through a small finite-state scanner that never builds a value tree: for
//! every object in the document it records the keys that object declared, in
//! source order, under the object's dotted path from the document root.
//!
//! ```rust
//! use keyorder::parse_slice;
//!
//! let doc = br#"{"name":"Tom","age":25,"favoriteFruits":{"a":"x","b":"y"}}"#;
//! let map = parse_slice(doc)?;
//! assert_eq!(map.lookup("root")?, ["name", "age", "favoriteFruits"]);
//! assert_eq!(map.lookup("root.favoriteFruits")?, ["a", "b"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Values are skipped, never decoded: numbers, booleans, strings and arrays
//! leave no trace in the result. Key order inside arrays of objects is not
//! recorded.
//!
//! Input can also be supplied incrementally: [`Scanner::feed`] accepts
//! arbitrary chunks, and all scanning state (including a key or an escape
//! sequence split mid-way) lives in the [`Scanner`], not in the chunk. The
//! `std` feature (on by default) adds [`parse_reader`] and [`parse_file`] on
//! top of the same loop.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
mod key_map;
mod key_path;
mod options;
#[cfg(feature = "std")]
mod reader;
mod scanner;

pub use error::{ErrorKind, PathNotFound, ScanError, SyntaxError};
pub use key_map::KeyMap;
pub use options::{ScannerOptions, DEFAULT_ROOT_PATH};
#[cfg(feature = "std")]
pub use reader::{parse_file, parse_reader, parse_reader_with};
pub use scanner::Scanner;

/// Scans a complete JSON document held in memory with default options.
///
/// # Errors
///
/// Returns [`ScanError`] if the document is malformed or incomplete. No
/// partial mapping is ever returned.
pub fn parse_slice(data: &[u8]) -> Result<KeyMap, ScanError> {
    parse_slice_with(data, ScannerOptions::default())
}

/// Scans a complete in-memory JSON document with explicit options.
///
/// # Errors
///
/// Returns [`ScanError`] if the document is malformed or incomplete.
pub fn parse_slice_with(data: &[u8], options: ScannerOptions) -> Result<KeyMap, ScanError> {
    let mut scanner = Scanner::new(options);
    scanner.feed(data)?;
    scanner.finish()
}
