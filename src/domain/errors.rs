// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the artifact I/O crate.
//!
//! Every operation in the crate returns [`ArtifactError`]. Underlying errors are
//! never swallowed: each variant that wraps a lower-level failure keeps it as its
//! `source`.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Boxed lower-level error carried as a `source`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The main error type for artifact operations.
///
/// Marked `#[non_exhaustive]` so new failure kinds can be added without breaking
/// callers that match on it.
///
/// # Examples
///
/// ```
/// use artifact_io::domain::errors::ArtifactError;
///
/// fn lookup() -> Result<String, ArtifactError> {
///     Err(ArtifactError::KeyNotFound {
///         key: "data_ingestion.root_dir".to_string(),
///     })
/// }
/// assert!(lookup().is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArtifactError {
    /// A value handed over at a loose boundary does not have the expected shape.
    #[error("Type mismatch for '{name}': expected {expected}, found {found}")]
    TypeMismatch {
        /// Name of the argument or key path being checked
        name: String,
        /// The expected shape
        expected: String,
        /// The shape actually found
        found: String,
    },

    /// A YAML configuration document contained nothing.
    #[error("yaml file is empty: {}", .path.display())]
    EmptyDocument {
        /// The file that was read
        path: PathBuf,
    },

    /// Attribute-style access to a key that does not exist.
    #[error("Key not found: {key}")]
    KeyNotFound {
        /// Full dotted path of the missing key
        key: String,
    },

    /// A filesystem path does not exist.
    #[error("No such file or directory: {}", .path.display())]
    NotFound {
        /// The path that was accessed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Any other filesystem failure.
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        /// The path that was accessed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A text document is syntactically malformed.
    #[error("Failed to parse {format}: {message}")]
    Parse {
        /// Document format name ("yaml", "json")
        format: &'static str,
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<BoxError>,
    },

    /// A value could not be encoded.
    #[error("Failed to serialize {format}: {message}")]
    Serialization {
        /// Output format name
        format: &'static str,
        /// The error message
        message: String,
        /// The underlying encoder error
        #[source]
        source: Option<BoxError>,
    },

    /// Stored bytes could not be decoded into the requested value.
    #[error("Failed to deserialize {format}: {message}")]
    Deserialization {
        /// Input format name
        format: &'static str,
        /// The error message
        message: String,
        /// The underlying decoder error
        #[source]
        source: Option<BoxError>,
    },
}

impl ArtifactError {
    /// Wraps an I/O error for `path`, separating "not found" from other failures.
    pub fn io(path: impl AsRef<Path>, err: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if err.kind() == io::ErrorKind::NotFound {
            ArtifactError::NotFound { path, source: err }
        } else {
            ArtifactError::Io { path, source: err }
        }
    }

    /// Creates a `TypeMismatch` error.
    pub fn type_mismatch(
        name: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        ArtifactError::TypeMismatch {
            name: name.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Returns true if this error reports a missing path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ArtifactError::NotFound { .. })
    }
}

/// A specialized Result type for artifact operations.
pub type Result<T> = std::result::Result<T, ArtifactError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_type_mismatch_error() {
        let error = ArtifactError::type_mismatch("paths", "sequence of paths", "string");
        assert_eq!(
            error.to_string(),
            "Type mismatch for 'paths': expected sequence of paths, found string"
        );
    }

    #[test]
    fn test_empty_document_error() {
        let error = ArtifactError::EmptyDocument {
            path: PathBuf::from("config/config.yaml"),
        };
        assert_eq!(error.to_string(), "yaml file is empty: config/config.yaml");
    }

    #[test]
    fn test_key_not_found_error() {
        let error = ArtifactError::KeyNotFound {
            key: "model.params.alpha".to_string(),
        };
        assert_eq!(error.to_string(), "Key not found: model.params.alpha");
    }

    #[test]
    fn test_io_classifies_not_found() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "gone");
        let error = ArtifactError::io("missing.json", io_error);
        assert!(error.is_not_found());
        assert!(error.to_string().contains("missing.json"));
    }

    #[test]
    fn test_io_keeps_other_kinds() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = ArtifactError::io("/root/secret", io_error);
        match &error {
            ArtifactError::Io { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied)
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(error.source().is_some());
    }

    #[test]
    fn test_parse_error() {
        let error = ArtifactError::Parse {
            format: "yaml",
            message: "mapping values are not allowed here".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse yaml: mapping values are not allowed here"
        );
    }

    #[test]
    fn test_deserialization_error_keeps_source() {
        let inner = "x".parse::<i32>().unwrap_err();
        let error = ArtifactError::Deserialization {
            format: "binary",
            message: "bad payload".to_string(),
            source: Some(Box::new(inner)),
        };
        assert!(error.source().is_some());
        assert_eq!(error.to_string(), "Failed to deserialize binary: bad payload");
    }
}
