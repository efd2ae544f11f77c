// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document parser trait definition.
//!
//! This module defines the `DocumentParser` trait, the seam through which text
//! documents in different formats (YAML, JSON) are turned into one uniform nested
//! value.

use crate::domain::Result;
use serde_json::Value;

/// A trait for parsing text documents into a nested value.
///
/// Unlike a flat key-value parser, implementations keep the document's nesting:
/// mappings become `Value::Object` (in document order), sequences become
/// `Value::Array`, and scalars keep their type.
///
/// # Empty documents
///
/// A syntactically valid document with no content parses to `Value::Null`. It is
/// up to the caller to decide whether that is an error; parsers report only
/// malformed input as [`ArtifactError::Parse`](crate::domain::ArtifactError::Parse).
///
/// # Examples
///
/// ```rust
/// use artifact_io::ports::DocumentParser;
/// use artifact_io::domain::Result;
/// use serde_json::{json, Value};
///
/// struct KeyEqualsValue;
///
/// impl DocumentParser for KeyEqualsValue {
///     fn parse(&self, content: &str) -> Result<Value> {
///         let mut map = serde_json::Map::new();
///         for line in content.lines() {
///             if let Some((k, v)) = line.split_once('=') {
///                 map.insert(k.trim().to_string(), Value::from(v.trim()));
///             }
///         }
///         Ok(Value::Object(map))
///     }
///
///     fn format_name(&self) -> &'static str {
///         "properties"
///     }
/// }
///
/// let value = KeyEqualsValue.parse("name = demo").unwrap();
/// assert_eq!(value, json!({"name": "demo"}));
/// ```
pub trait DocumentParser {
    /// Parses the full text of a document.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The parsed document, `Value::Null` for an empty one
    /// * `Err(ArtifactError)` - The content is malformed
    fn parse(&self, content: &str) -> Result<Value>;

    /// Short format name used as the `<kind>` of log lines and as the `format`
    /// of errors (e.g. `"yaml"`).
    fn format_name(&self) -> &'static str;
}
