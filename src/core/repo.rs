//! Normalized GitHub repository references.

use std::fmt;

/// A normalized `owner/name` reference to a GitHub repository.
///
/// References are derived from descriptor SCM sections or the plugin lookup
/// table and are never constructed from raw user input. Equality is
/// case-sensitive string equality, and the `Ord` implementation gives the
/// repository set a stable iteration order.
///
/// # Examples
///
/// ```rust
/// use thanks_cli::core::RepoRef;
///
/// let repo = RepoRef::new("rust-lang/rust");
/// assert_eq!(repo.as_str(), "rust-lang/rust");
/// assert_eq!(repo.to_string(), "rust-lang/rust");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RepoRef(String);

impl RepoRef {
    /// Create a reference from an already-normalized `owner/name` string.
    pub fn new(repo: impl Into<String>) -> Self {
        Self(repo.into())
    }

    /// The `owner/name` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
