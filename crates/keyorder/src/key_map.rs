use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::PathNotFound;

/// Mapping from a dotted object path to the keys that object declared, in
/// source order.
///
/// Duplicate keys are recorded as often as they appear; nothing is sorted or
/// deduplicated within a list. Every parse produces a fresh map, so a
/// completed map never reflects input from an earlier parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyMap {
    entries: BTreeMap<String, Vec<String>>,
}

impl KeyMap {
    /// Appends `key` to the ordered list recorded under `path`.
    pub(crate) fn record(&mut self, path: String, key: String) {
        self.entries.entry(path).or_default().push(key);
    }

    /// Ordered keys of the object at `path`, or `None` if no object was
    /// scanned there.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&[String]> {
        self.entries.get(path).map(Vec::as_slice)
    }

    /// Like [`KeyMap::get`], but failing with [`PathNotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`PathNotFound`] when nothing was recorded under `path`.
    pub fn lookup(&self, path: &str) -> Result<&[String], PathNotFound> {
        self.get(path).ok_or_else(|| PathNotFound(path.to_string()))
    }

    /// Iterates over `(path, ordered keys)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(path, keys)| (path.as_str(), keys.as_slice()))
    }

    /// Number of distinct object paths recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no object has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the map, exposing the underlying container.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.entries
    }
}

impl FromIterator<(String, Vec<String>)> for KeyMap {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
