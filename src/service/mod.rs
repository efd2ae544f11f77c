// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the public file helpers.
//!
//! This module wires the format adapters to the filesystem and is the surface
//! pipeline stages call into.

pub mod file_utils;

// Re-export commonly used functions
#[cfg(feature = "yaml")]
pub use file_utils::read_yaml;
#[cfg(feature = "binary")]
pub use file_utils::{load_binary, save_binary};
pub use file_utils::{
    create_directories, create_directories_from, file_size, get_size, load_json, load_json_as,
    save_json,
};
