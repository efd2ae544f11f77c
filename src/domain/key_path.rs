// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted key paths into nested configuration.
//!
//! A `KeyPath` names a value inside a nested document using dot notation, e.g.
//! `data_ingestion.root_dir` or `servers.0`. It drives attribute-style access on
//! [`ConfigBox`](crate::domain::ConfigBox) and names the offending value in errors.

use std::fmt;

/// A dotted path from the root of a document to one of its values.
///
/// The empty path denotes the root itself.
///
/// # Examples
///
/// ```
/// use artifact_io::domain::key_path::KeyPath;
///
/// let path = KeyPath::from("model.params.alpha");
/// assert_eq!(path.segments().collect::<Vec<_>>(), vec!["model", "params", "alpha"]);
/// assert_eq!(path.join("beta").as_str(), "model.params.alpha.beta");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyPath(String);

impl KeyPath {
    /// The path of the document root.
    pub fn root() -> Self {
        KeyPath(String::new())
    }

    /// Returns true for the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the non-empty segments of the path.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|s| !s.is_empty())
    }

    /// Returns a new path with `segment` appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use artifact_io::domain::key_path::KeyPath;
    ///
    /// assert_eq!(KeyPath::root().join("nested").as_str(), "nested");
    /// ```
    pub fn join(&self, segment: &str) -> KeyPath {
        if self.is_root() {
            KeyPath(segment.to_string())
        } else {
            KeyPath(format!("{}.{}", self.0, segment))
        }
    }
}

impl From<String> for KeyPath {
    fn from(s: String) -> Self {
        KeyPath(s)
    }
}

impl From<&str> for KeyPath {
    fn from(s: &str) -> Self {
        KeyPath(s.to_string())
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(path: &KeyPath) -> Self {
        path.clone()
    }
}

impl AsRef<str> for KeyPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "<root>")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path() {
        let path = KeyPath::root();
        assert!(path.is_root());
        assert_eq!(path.segments().count(), 0);
        assert_eq!(path.to_string(), "<root>");
    }

    #[test]
    fn test_segments() {
        let path = KeyPath::from("servers.0.host");
        let segments: Vec<&str> = path.segments().collect();
        assert_eq!(segments, vec!["servers", "0", "host"]);
    }

    #[test]
    fn test_segments_skip_empty() {
        let path = KeyPath::from(".a..b.");
        let segments: Vec<&str> = path.segments().collect();
        assert_eq!(segments, vec!["a", "b"]);
    }

    #[test]
    fn test_join() {
        let path = KeyPath::from("nested");
        assert_eq!(path.join("a").as_str(), "nested.a");
        assert_eq!(path.join("a").to_string(), "nested.a");
    }

    #[test]
    fn test_equality() {
        assert_eq!(KeyPath::from("a.b"), KeyPath::from("a.b".to_string()));
        assert_ne!(KeyPath::from("a.b"), KeyPath::from("a.c"));
    }
}
