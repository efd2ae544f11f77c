// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON document adapter.
//!
//! Reads JSON text into a nested value and writes values back as indented JSON.

use crate::domain::{ArtifactError, Result};
use crate::ports::DocumentParser;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

const INDENT: &[u8] = b"    ";

/// JSON parser and writer.
///
/// Output is indented with four spaces; object keys keep the order of the
/// input value.
///
/// # Examples
///
/// ```rust
/// use artifact_io::adapters::JsonParser;
/// use artifact_io::ports::DocumentParser;
/// use serde_json::json;
///
/// let parser = JsonParser::new();
/// let text = parser.to_pretty_string(&json!({"x": 1})).unwrap();
/// assert_eq!(text, "{\n    \"x\": 1\n}");
/// assert_eq!(parser.parse(&text).unwrap(), json!({"x": 1}));
/// ```
#[derive(Debug, Clone)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON parser.
    pub fn new() -> Self {
        JsonParser
    }

    /// Serializes `data` as 4-space indented JSON bytes.
    ///
    /// Values JSON cannot represent, such as maps with non-string keys, fail with
    /// `Serialization`.
    pub fn to_pretty_vec<T: Serialize + ?Sized>(&self, data: &T) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(128);
        let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
        data.serialize(&mut ser)
            .map_err(|e| ArtifactError::Serialization {
                format: self.format_name(),
                message: e.to_string(),
                source: Some(Box::new(e)),
            })?;
        Ok(out)
    }

    /// Serializes `data` as 4-space indented JSON text.
    pub fn to_pretty_string<T: Serialize + ?Sized>(&self, data: &T) -> Result<String> {
        let bytes = self.to_pretty_vec(data)?;
        // serde_json only ever emits UTF-8
        String::from_utf8(bytes).map_err(|e| ArtifactError::Serialization {
            format: self.format_name(),
            message: e.to_string(),
            source: Some(Box::new(e)),
        })
    }

    /// Parses JSON text straight into `T`.
    ///
    /// Syntax errors are reported as `Parse`; text that is valid JSON but does
    /// not fit `T` is reported as `Deserialization`.
    pub fn parse_as<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        serde_json::from_str(content).map_err(|e| self.classify(e))
    }

    fn classify(&self, e: serde_json::Error) -> ArtifactError {
        use serde_json::error::Category;

        let format = self.format_name();
        let message = e.to_string();
        match e.classify() {
            Category::Data => ArtifactError::Deserialization {
                format,
                message,
                source: Some(Box::new(e)),
            },
            Category::Syntax | Category::Eof | Category::Io => ArtifactError::Parse {
                format,
                message,
                source: Some(Box::new(e)),
            },
        }
    }
}

impl Default for JsonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for JsonParser {
    fn parse(&self, content: &str) -> Result<Value> {
        self.parse_as(content)
    }

    fn format_name(&self) -> &'static str {
        "json"
    }
}
