// SPDX-License-Identifier: MIT OR Apache-2.0

//! Binary artifact codec.
//!
//! Artifacts are framed as:
//!
//! ```text
//! +----------------+-------------------+------------------------+
//! | magic (8 B)    | version (u16, LE) | bincode payload        |
//! | "ARTIFACT"     | 1                 | DefaultOptions, varint |
//! +----------------+-------------------+------------------------+
//! ```
//!
//! The format is private to this crate and is not promised to stay readable
//! across format versions; a version mismatch is reported, never guessed at.

use crate::domain::{ArtifactError, Result};
use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Leading bytes of every binary artifact.
pub const MAGIC: &[u8; 8] = b"ARTIFACT";

/// Version of the payload encoding written by this build.
pub const FORMAT_VERSION: u16 = 1;

const HEADER_LEN: usize = MAGIC.len() + 2;

/// Encoder/decoder for opaque binary artifacts.
///
/// Any `Serialize` value can be stored and read back as the same type.
///
/// # Examples
///
/// ```rust
/// use artifact_io::adapters::BinaryCodec;
/// use std::collections::HashMap;
///
/// let codec = BinaryCodec::new();
/// let mut weights = HashMap::new();
/// weights.insert("bias".to_string(), vec![0.5f64, -1.25]);
///
/// let bytes = codec.encode(&weights).unwrap();
/// let back: HashMap<String, Vec<f64>> = codec.decode(&bytes).unwrap();
/// assert_eq!(back, weights);
/// ```
#[derive(Debug, Clone)]
pub struct BinaryCodec;

impl BinaryCodec {
    /// Format name used in log lines and error messages.
    pub const FORMAT_NAME: &'static str = "binary";

    /// Creates a new codec.
    pub fn new() -> Self {
        BinaryCodec
    }

    /// Encodes `data` into a framed artifact.
    pub fn encode<T: Serialize + ?Sized>(&self, data: &T) -> Result<Vec<u8>> {
        let payload = bincode::DefaultOptions::new()
            .serialize(data)
            .map_err(|e| ArtifactError::Serialization {
                format: Self::FORMAT_NAME,
                message: e.to_string(),
                source: Some(Box::new(e)),
            })?;

        let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
        out.extend_from_slice(MAGIC);
        out.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
        out.extend_from_slice(&payload);
        Ok(out)
    }

    /// Decodes a framed artifact into `T`.
    ///
    /// Fails with `Deserialization` when the header is missing or foreign, when
    /// the version is not [`FORMAT_VERSION`], or when the payload does not decode
    /// as `T` (including trailing bytes).
    pub fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        let payload = Self::check_header(bytes)?;

        // Bound allocations by what is actually on disk.
        bincode::DefaultOptions::new()
            .with_limit(payload.len() as u64)
            .deserialize(payload)
            .map_err(|e| ArtifactError::Deserialization {
                format: Self::FORMAT_NAME,
                message: e.to_string(),
                source: Some(Box::new(e)),
            })
    }

    fn check_header(bytes: &[u8]) -> Result<&[u8]> {
        if bytes.len() < HEADER_LEN || &bytes[..MAGIC.len()] != MAGIC {
            return Err(invalid("not a binary artifact (missing header)".to_string()));
        }

        let version = u16::from_le_bytes([bytes[MAGIC.len()], bytes[MAGIC.len() + 1]]);
        if version != FORMAT_VERSION {
            return Err(invalid(format!(
                "unsupported binary artifact version {} (expected {})",
                version, FORMAT_VERSION
            )));
        }

        Ok(&bytes[HEADER_LEN..])
    }
}

fn invalid(message: String) -> ArtifactError {
    ArtifactError::Deserialization {
        format: BinaryCodec::FORMAT_NAME,
        message,
        source: None,
    }
}

impl Default for BinaryCodec {
    fn default() -> Self {
        Self::new()
    }
}
