use alloc::borrow::Cow;

/// Default path label for the outermost, unnamed object.
pub const DEFAULT_ROOT_PATH: &str = "root";

/// Configuration for a [`Scanner`](crate::Scanner).
///
/// # Examples
///
/// ```rust
/// use keyorder::{parse_slice_with, ScannerOptions};
///
/// let options = ScannerOptions {
///     root_path_name: "$".into(),
/// };
/// let map = parse_slice_with(br#"{"a":1}"#, options).unwrap();
/// assert_eq!(map.lookup("$").unwrap(), ["a"]);
/// ```
#[derive(Debug, Clone)]
pub struct ScannerOptions {
    /// Sentinel path segment standing in for the document's root object.
    ///
    /// Keys of the outermost object are recorded under this name, and the
    /// paths of nested objects are prefixed with it (`root.settings`, ...).
    ///
    /// # Default
    ///
    /// [`DEFAULT_ROOT_PATH`] (`"root"`).
    pub root_path_name: Cow<'static, str>,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            root_path_name: Cow::Borrowed(DEFAULT_ROOT_PATH),
        }
    }
}
