// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validated sequences of filesystem paths.
//!
//! Paths that arrive through a loosely typed value (a list in a YAML config, a
//! JSON request body) are checked here before any directory is touched.

use crate::domain::config_box::{value_kind, ConfigBox};
use crate::domain::errors::{ArtifactError, Result};
use serde_json::Value;
use std::path::PathBuf;

/// An ordered list of paths taken from a sequence of strings.
///
/// # Examples
///
/// ```
/// use artifact_io::domain::PathList;
/// use serde_json::json;
///
/// let paths = PathList::try_from(&json!(["artifacts", "artifacts/data"])).unwrap();
/// assert_eq!(paths.len(), 2);
///
/// // A bare string is not a sequence of paths.
/// assert!(PathList::try_from(&json!("artifacts")).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathList(Vec<PathBuf>);

impl PathList {
    /// Returns the validated paths.
    pub fn paths(&self) -> &[PathBuf] {
        &self.0
    }

    /// Number of paths.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the list holds no path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn from_value(name: &str, value: &Value) -> Result<Self> {
        let items = value.as_array().ok_or_else(|| {
            ArtifactError::type_mismatch(name, "sequence of paths", value_kind(value))
        })?;

        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_str().map(PathBuf::from).ok_or_else(|| {
                    ArtifactError::type_mismatch(
                        format!("{}[{}]", name, i),
                        "path string",
                        value_kind(item),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(PathList)
    }
}

impl TryFrom<&Value> for PathList {
    type Error = ArtifactError;

    fn try_from(value: &Value) -> Result<Self> {
        PathList::from_value("paths", value)
    }
}

impl TryFrom<&ConfigBox> for PathList {
    type Error = ArtifactError;

    fn try_from(cfg: &ConfigBox) -> Result<Self> {
        let name = if cfg.key_path().is_root() {
            "paths".to_string()
        } else {
            cfg.key_path().to_string()
        };
        PathList::from_value(&name, cfg.as_value())
    }
}

impl From<Vec<PathBuf>> for PathList {
    fn from(paths: Vec<PathBuf>) -> Self {
        PathList(paths)
    }
}

impl IntoIterator for PathList {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PathList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
