// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document parser adapter.
//!
//! This module provides the parser used to read structured configuration files.

use crate::domain::{ArtifactError, KeyPath, Result};
use crate::ports::DocumentParser;
use serde_json::{Map, Number, Value};
use serde_yaml::Value as YamlValue;

/// YAML parser implementation.
///
/// Parses a single YAML document and converts it into a `serde_json::Value`,
/// keeping the nesting and the order of mapping keys.
///
/// Conversion rules:
/// - scalar mapping keys (numbers, booleans, null) are turned into strings;
/// - tags (`!custom value`) are dropped and the tagged value is kept;
/// - non-finite floats, compound mapping keys and keys that collide once
///   stringified have no JSON form and are rejected with `TypeMismatch`.
///
/// # Examples
///
/// ```rust
/// use artifact_io::adapters::YamlParser;
/// use artifact_io::ports::DocumentParser;
///
/// let parser = YamlParser::new();
/// let value = parser.parse("database:\n  host: localhost\n  port: 5432").unwrap();
/// assert_eq!(value["database"]["host"], "localhost");
/// assert_eq!(value["database"]["port"], 5432);
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Returns true if `content` holds no YAML node at all: only whitespace,
    /// comments, directives and document markers.
    ///
    /// This is checked on the raw text so that an empty file is told apart from
    /// a parse failure whatever the YAML library reports for an empty stream.
    pub fn is_blank(content: &str) -> bool {
        content
            .trim_start_matches('\u{feff}')
            .lines()
            .map(str::trim)
            .all(|line| {
                line.is_empty()
                    || line.starts_with('#')
                    || line.starts_with('%')
                    || line == "---"
                    || line == "..."
            })
    }

    /// Converts a YAML value into the equivalent JSON value.
    fn to_json(value: YamlValue, path: &KeyPath) -> Result<Value> {
        match value {
            YamlValue::Null => Ok(Value::Null),
            YamlValue::Bool(b) => Ok(Value::Bool(b)),
            YamlValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::from(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Value::from(u))
                } else {
                    n.as_f64()
                        .and_then(Number::from_f64)
                        .map(Value::Number)
                        .ok_or_else(|| {
                            ArtifactError::type_mismatch(
                                path.to_string(),
                                "finite number",
                                n.to_string(),
                            )
                        })
                }
            }
            YamlValue::String(s) => Ok(Value::String(s)),
            YamlValue::Sequence(seq) => seq
                .into_iter()
                .enumerate()
                .map(|(i, item)| Self::to_json(item, &path.join(&i.to_string())))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            YamlValue::Mapping(mapping) => {
                let mut map = Map::with_capacity(mapping.len());
                for (key, val) in mapping {
                    let key = Self::key_to_string(key, path)?;
                    let key_path = path.join(&key);
                    let val = Self::to_json(val, &key_path)?;
                    // `1` and `"1"` are distinct YAML keys but share one JSON key
                    if map.insert(key, val).is_some() {
                        return Err(ArtifactError::type_mismatch(
                            key_path.to_string(),
                            "unique mapping key",
                            "duplicate key after stringification",
                        ));
                    }
                }
                Ok(Value::Object(map))
            }
            YamlValue::Tagged(tagged) => Self::to_json(tagged.value, path),
        }
    }

    fn key_to_string(key: YamlValue, path: &KeyPath) -> Result<String> {
        match key {
            YamlValue::String(s) => Ok(s),
            YamlValue::Number(n) => Ok(n.to_string()),
            YamlValue::Bool(b) => Ok(b.to_string()),
            YamlValue::Null => Ok("null".to_string()),
            YamlValue::Tagged(tagged) => Self::key_to_string(tagged.value, path),
            YamlValue::Sequence(_) | YamlValue::Mapping(_) => Err(ArtifactError::type_mismatch(
                path.to_string(),
                "scalar mapping key",
                "compound key",
            )),
        }
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for YamlParser {
    fn parse(&self, content: &str) -> Result<Value> {
        if Self::is_blank(content) {
            return Ok(Value::Null);
        }

        let value: YamlValue = serde_yaml::from_str(content).map_err(|e| ArtifactError::Parse {
            format: self.format_name(),
            message: e.to_string(),
            source: Some(Box::new(e)),
        })?;

        Self::to_json(value, &KeyPath::root())
    }

    fn format_name(&self) -> &'static str {
        "yaml"
    }
}
