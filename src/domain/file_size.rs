// SPDX-License-Identifier: MIT OR Apache-2.0

//! Approximate file sizes for artifact reports.

use crate::domain::errors::{ArtifactError, Result};
use std::fmt;
use std::fs;
use std::path::Path;

const KIB: u64 = 1024;

/// A size in bytes, displayed in whole kibibytes as `~<N> KB`.
///
/// # Examples
///
/// ```
/// use artifact_io::domain::FileSize;
///
/// assert_eq!(FileSize::from_bytes(0).to_string(), "~0 KB");
/// assert_eq!(FileSize::from_bytes(4096).to_string(), "~4 KB");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileSize(u64);

impl FileSize {
    /// Creates a size from a byte count.
    pub fn from_bytes(bytes: u64) -> Self {
        FileSize(bytes)
    }

    /// Reads the size of the file (or directory entry) at `path` from its metadata.
    pub fn of(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = fs::metadata(path).map_err(|e| ArtifactError::io(path, e))?;
        Ok(FileSize(metadata.len()))
    }

    /// The size in bytes.
    pub fn bytes(&self) -> u64 {
        self.0
    }

    /// The size in kibibytes, rounded to the nearest integer with ties to even.
    pub fn kib(&self) -> u64 {
        let whole = self.0 / KIB;
        let rest = self.0 % KIB;
        let half = KIB / 2;
        if rest > half || (rest == half && whole % 2 == 1) {
            whole + 1
        } else {
            whole
        }
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "~{} KB", self.kib())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding() {
        assert_eq!(FileSize::from_bytes(0).kib(), 0);
        assert_eq!(FileSize::from_bytes(511).kib(), 0);
        assert_eq!(FileSize::from_bytes(512).kib(), 0);
        assert_eq!(FileSize::from_bytes(513).kib(), 1);
        assert_eq!(FileSize::from_bytes(1024).kib(), 1);
        assert_eq!(FileSize::from_bytes(1536).kib(), 2);
        assert_eq!(FileSize::from_bytes(2560).kib(), 2);
        assert_eq!(FileSize::from_bytes(2561).kib(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(FileSize::from_bytes(10 * 1024).to_string(), "~10 KB");
    }

    #[test]
    fn test_of_missing_path() {
        let err = FileSize::of("/nonexistent/artifact.bin").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_of_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), vec![0u8; 3000]).unwrap();
        let size = FileSize::of(file.path()).unwrap();
        assert_eq!(size.bytes(), 3000);
        assert_eq!(size.to_string(), "~3 KB");
    }
}
