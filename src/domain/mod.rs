// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module holds the value types and errors shared by every operation in the
//! crate. Nothing here touches a document format; only `FileSize::of` reads
//! filesystem metadata.

pub mod config_box;
pub mod errors;
pub mod file_size;
pub mod key_path;
pub mod path_list;

// Re-export commonly used types
pub use config_box::ConfigBox;
pub use errors::{ArtifactError, Result};
pub use file_size::FileSize;
pub use key_path::KeyPath;
pub use path_list::PathList;
