use alloc::string::String;
use alloc::vec::Vec;

/// Stack of key names leading from the document root to the object currently
/// being scanned.
///
/// Grows only when an object opens and shrinks only when one closes, so its
/// depth always equals the number of objects still open. It is independent of
/// the scanner's token-level state.
#[derive(Debug, Default, Clone)]
pub(crate) struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    pub(crate) fn push(&mut self, segment: String) {
        self.segments.push(segment);
    }

    /// Drops the innermost segment. Returns `false` if the stack was already
    /// empty, which no well-formed transition sequence can produce.
    pub(crate) fn pop(&mut self) -> bool {
        self.segments.pop().is_some()
    }

    pub(crate) fn is_at_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub(crate) fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Dotted path from the root to the current object.
    ///
    /// Recomputed on demand; the stack only changes at object boundaries.
    pub(crate) fn dotted(&self) -> String {
        self.segments.join(".")
    }
}
