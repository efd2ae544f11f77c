// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing format implementations.
//!
//! This module contains the concrete parsers and codecs behind the file helpers.
//! Text formats implement the `DocumentParser` port; the binary codec is used
//! directly.

#[cfg(feature = "binary")]
pub mod binary;
pub mod json;
#[cfg(feature = "yaml")]
pub mod yaml;

// Re-export adapters based on feature flags
#[cfg(feature = "binary")]
pub use binary::BinaryCodec;
pub use json::JsonParser;
#[cfg(feature = "yaml")]
pub use yaml::YamlParser;
