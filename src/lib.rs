// SPDX-License-Identifier: MIT OR Apache-2.0

//! File I/O helpers for machine-learning pipeline artifacts.
//!
//! This crate gathers the small, stateless file routines that every stage of a
//! training pipeline needs: reading the YAML configuration, creating artifact
//! directories, saving and loading JSON and binary artifacts, and reporting file
//! sizes.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigBox`, `KeyPath`, `PathList`, `FileSize`, errors)
//! - **Ports**: Trait definitions (`DocumentParser`)
//! - **Adapters**: Format implementations (`YamlParser`, `JsonParser`, `BinaryCodec`)
//! - **Service**: The file helpers themselves (`read_yaml`, `save_json`, ...)
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML configuration support (default)
//! - `binary`: Enable binary artifacts via `bincode` (default)
//! - `logging`: Enable the process-wide log sink in [`logging`] (default)
//!
//! # Quick Start
//!
//! ```rust
//! use artifact_io::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> Result<()> {
//! let dir = tempfile::tempdir().unwrap();
//! let artifacts = dir.path().join("artifacts");
//! create_directories(&[&artifacts], true)?;
//!
//! let metrics = artifacts.join("metrics.json");
//! save_json(&metrics, &json!({"rmse": 0.42, "epochs": [1, 2, 3]}))?;
//!
//! let loaded = load_json(&metrics)?;
//! assert_eq!(loaded["epochs"][2], 3);
//! assert_eq!(loaded.attr("rmse")?.as_f64()?, 0.42);
//! assert_eq!(get_size(&metrics)?, "~0 KB");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
#[cfg(feature = "logging")]
pub mod logging;
pub mod ports;
pub mod service;

pub use service::*;

/// Commonly used types and functions.
///
/// This module re-exports the most commonly used items for convenient access.
pub mod prelude {
    pub use crate::domain::{ArtifactError, ConfigBox, FileSize, KeyPath, PathList, Result};
    pub use crate::ports::DocumentParser;
    pub use crate::service::*;

    // Re-export adapters based on feature flags
    #[cfg(feature = "binary")]
    pub use crate::adapters::BinaryCodec;
    pub use crate::adapters::JsonParser;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
