// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dual-access container for parsed documents.
//!
//! This module provides the `ConfigBox` type, which wraps a parsed YAML or JSON
//! document and offers two ways of reaching the same nested data: key lookup
//! (`cfg["nested"]["a"]`) and attribute-style access (`cfg.attr("nested")?.attr("a")?`
//! or `cfg.path("nested.a")?`).

use crate::domain::errors::{ArtifactError, Result};
use crate::domain::key_path::KeyPath;
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::ops::Index;
use std::path::PathBuf;

/// A parsed document node together with the key path it was reached by.
///
/// Key lookup never fails: a missing key yields `Value::Null`, like
/// `serde_json::Value` indexing. Attribute-style access fails with
/// [`ArtifactError::KeyNotFound`] naming the full dotted path, and the typed
/// accessors fail with [`ArtifactError::TypeMismatch`].
///
/// # Examples
///
/// ```
/// use artifact_io::domain::ConfigBox;
/// use serde_json::json;
///
/// let cfg = ConfigBox::from_mapping(json!({"key": "value", "nested": {"a": 1}})).unwrap();
///
/// assert_eq!(cfg["nested"]["a"], 1);
/// assert_eq!(cfg.attr("nested").unwrap().attr("a").unwrap().as_i64().unwrap(), 1);
/// assert_eq!(cfg.path("nested.a").unwrap().as_i64().unwrap(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct ConfigBox {
    value: Value,
    key: KeyPath,
}

impl ConfigBox {
    /// Wraps any value as a root node.
    pub fn new(value: Value) -> Self {
        ConfigBox {
            value,
            key: KeyPath::root(),
        }
    }

    /// Wraps a document root, which must be a mapping.
    pub fn from_mapping(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(ArtifactError::type_mismatch(
                KeyPath::root().to_string(),
                "mapping",
                value_kind(&value),
            ));
        }
        Ok(ConfigBox::new(value))
    }

    fn child(&self, segment: &str, value: Value) -> Self {
        ConfigBox {
            value,
            key: self.key.join(segment),
        }
    }

    /// Returns the key path this node was reached by.
    pub fn key_path(&self) -> &KeyPath {
        &self.key
    }

    /// Returns the wrapped value.
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Consumes the box and returns the wrapped value.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Key lookup that distinguishes a missing key from a `null` value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.get(key)
    }

    /// Returns true if this node is a mapping containing `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.value.as_object().is_some_and(|m| m.contains_key(key))
    }

    /// Returns the keys of a mapping node in document order; empty otherwise.
    pub fn keys(&self) -> Vec<&str> {
        self.value
            .as_object()
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Number of entries in a mapping or sequence node; 0 for scalars.
    pub fn len(&self) -> usize {
        match &self.value {
            Value::Object(m) => m.len(),
            Value::Array(a) => a.len(),
            _ => 0,
        }
    }

    /// Returns true if the node holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Attribute-style access to a single child.
    ///
    /// On a mapping `name` is a key; on a sequence it must be an index.
    pub fn attr(&self, name: &str) -> Result<ConfigBox> {
        match &self.value {
            Value::Object(map) => map
                .get(name)
                .map(|v| self.child(name, v.clone()))
                .ok_or_else(|| ArtifactError::KeyNotFound {
                    key: self.key.join(name).to_string(),
                }),
            Value::Array(items) => name
                .parse::<usize>()
                .ok()
                .and_then(|i| items.get(i))
                .map(|v| self.child(name, v.clone()))
                .ok_or_else(|| ArtifactError::KeyNotFound {
                    key: self.key.join(name).to_string(),
                }),
            other => Err(ArtifactError::type_mismatch(
                self.key.to_string(),
                "mapping or sequence",
                value_kind(other),
            )),
        }
    }

    /// Attribute-style access along a dotted path, e.g. `"nested.a"`.
    pub fn path(&self, path: impl Into<KeyPath>) -> Result<ConfigBox> {
        let path = path.into();
        let mut node = self.clone();
        for segment in path.segments() {
            node = node.attr(segment)?;
        }
        Ok(node)
    }

    fn mismatch(&self, expected: &str) -> ArtifactError {
        ArtifactError::type_mismatch(self.key.to_string(), expected, value_kind(&self.value))
    }

    /// Returns the node as a string slice.
    pub fn as_str(&self) -> Result<&str> {
        self.value.as_str().ok_or_else(|| self.mismatch("string"))
    }

    /// Returns the node as a boolean.
    pub fn as_bool(&self) -> Result<bool> {
        self.value.as_bool().ok_or_else(|| self.mismatch("boolean"))
    }

    /// Returns the node as an `i64`.
    pub fn as_i64(&self) -> Result<i64> {
        self.value.as_i64().ok_or_else(|| self.mismatch("integer"))
    }

    /// Returns the node as a `u64`.
    pub fn as_u64(&self) -> Result<u64> {
        self.value
            .as_u64()
            .ok_or_else(|| self.mismatch("unsigned integer"))
    }

    /// Returns the node as an `f64`. Integers are widened.
    pub fn as_f64(&self) -> Result<f64> {
        self.value.as_f64().ok_or_else(|| self.mismatch("number"))
    }

    /// Returns a string node as a filesystem path.
    pub fn as_path_buf(&self) -> Result<PathBuf> {
        self.value
            .as_str()
            .map(PathBuf::from)
            .ok_or_else(|| self.mismatch("path string"))
    }

    /// Deserializes the node into a typed configuration struct.
    ///
    /// # Examples
    ///
    /// ```
    /// use artifact_io::domain::ConfigBox;
    /// use serde::Deserialize;
    /// use serde_json::json;
    ///
    /// #[derive(Deserialize)]
    /// struct Ingestion {
    ///     root_dir: String,
    /// }
    ///
    /// let cfg = ConfigBox::new(json!({"data_ingestion": {"root_dir": "artifacts/data"}}));
    /// let ingestion: Ingestion = cfg.attr("data_ingestion").unwrap().deserialize().unwrap();
    /// assert_eq!(ingestion.root_dir, "artifacts/data");
    /// ```
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(&self.value).map_err(|e| ArtifactError::Deserialization {
            format: "config",
            message: format!("{} at '{}'", e, self.key),
            source: Some(Box::new(e)),
        })
    }
}

/// Human-readable name for the shape of a value.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

impl Index<&str> for ConfigBox {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        &self.value[key]
    }
}

impl Index<usize> for ConfigBox {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.value[index]
    }
}

impl PartialEq for ConfigBox {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq<Value> for ConfigBox {
    fn eq(&self, other: &Value) -> bool {
        &self.value == other
    }
}

impl Serialize for ConfigBox {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl From<ConfigBox> for Value {
    fn from(cfg: ConfigBox) -> Self {
        cfg.value
    }
}

impl fmt::Display for ConfigBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
