//! Streaming entry points over `std::io` byte sources.
//!
//! These drive the same scanning loop as the in-memory entry points: bytes
//! are read in bounded chunks and handed to [`Scanner::feed`], so a key, a
//! value, or an escape sequence split across a read boundary is handled by
//! the scanner's own state, not by the chunking.

use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;

use crate::error::{ErrorKind, ScanError};
use crate::key_map::KeyMap;
use crate::options::ScannerOptions;
use crate::scanner::Scanner;

/// Read buffer size for the streaming entry points.
const CHUNK_SIZE: usize = 8 * 1024;

/// Scans a JSON document from a byte source with explicit options.
///
/// # Errors
///
/// Syntax errors abort the parse as in [`parse_slice`](crate::parse_slice);
/// read failures surface unchanged inside [`ErrorKind::Io`]. Interrupted
/// reads are retried.
pub fn parse_reader_with<R: Read>(
    mut source: R,
    options: ScannerOptions,
) -> Result<KeyMap, ScanError> {
    let mut scanner = Scanner::new(options);
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = match source.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(ScanError::new(ErrorKind::Io(err), scanner.offset())),
        };
        scanner.feed(&buf[..n])?;
    }
    scanner.finish()
}

/// Scans a JSON document from a byte source with default options.
///
/// # Errors
///
/// See [`parse_reader_with`].
pub fn parse_reader<R: Read>(source: R) -> Result<KeyMap, ScanError> {
    parse_reader_with(source, ScannerOptions::default())
}

/// Opens `path` and scans its contents with default options.
///
/// # Errors
///
/// A failure to open the file is reported as [`ErrorKind::Io`] at offset 0.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<KeyMap, ScanError> {
    let file = File::open(path).map_err(|err| ScanError::new(ErrorKind::Io(err), 0))?;
    parse_reader(file)
}
