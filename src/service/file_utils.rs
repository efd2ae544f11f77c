// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stateless file helpers shared by pipeline stages.
//!
//! Every function opens what it needs, finishes with it before returning, and
//! keeps no state between calls. Each successful call except the size queries
//! emits one `INFO` event of the form `<kind> file:<path> <action> successfully`.
//!
//! Nothing here coordinates concurrent access: two calls writing the same path
//! race, and the last writer wins.

#[cfg(feature = "binary")]
use crate::adapters::BinaryCodec;
use crate::adapters::JsonParser;
#[cfg(feature = "yaml")]
use crate::adapters::YamlParser;
use crate::domain::{ArtifactError, ConfigBox, FileSize, PathList, Result};
use crate::ports::DocumentParser;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufReader, Read, Write};
use std::path::Path;

fn read_text(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| ArtifactError::io(path, e))?;
    let mut content = String::new();
    BufReader::new(file)
        .read_to_string(&mut content)
        .map_err(|e| ArtifactError::io(path, e))?;
    Ok(content)
}

#[cfg(feature = "binary")]
fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path).map_err(|e| ArtifactError::io(path, e))?;
    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|e| ArtifactError::io(path, e))?;
    Ok(bytes)
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| ArtifactError::io(path, e))?;
    file.write_all(bytes)
        .and_then(|_| file.flush())
        .map_err(|e| ArtifactError::io(path, e))?;
    tracing::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

fn load_document(parser: &impl DocumentParser, path: &Path) -> Result<Value> {
    let content = read_text(path)?;
    parser.parse(&content)
}

fn log_success(kind: &str, path: &Path, action: &str) {
    tracing::info!("{} file:{} {} successfully", kind, path.display(), action);
}

/// Reads a YAML configuration file into a [`ConfigBox`].
///
/// # Errors
///
/// * `EmptyDocument` - the file is blank, holds only comments, or is `null`
/// * `Parse` - the YAML is malformed or holds more than one document
/// * `TypeMismatch` - the document root is not a mapping
/// * `NotFound` / `Io` - the file cannot be read
///
/// # Examples
///
/// ```rust,no_run
/// use artifact_io::read_yaml;
///
/// let config = read_yaml("config/config.yaml").unwrap();
/// let root = config.path("data_ingestion.root_dir").unwrap();
/// println!("{}", root.as_str().unwrap());
/// ```
#[cfg(feature = "yaml")]
pub fn read_yaml(path: impl AsRef<Path>) -> Result<ConfigBox> {
    let path = path.as_ref();
    let parser = YamlParser::new();
    let value = load_document(&parser, path)?;
    if value.is_null() {
        return Err(ArtifactError::EmptyDocument {
            path: path.to_path_buf(),
        });
    }
    let config = ConfigBox::from_mapping(value)?;
    log_success(parser.format_name(), path, "loaded");
    Ok(config)
}

/// Creates each directory in `paths`, including missing parents.
///
/// Existing directories are fine. Processing stops at the first failure, which
/// is returned; directories created before it are left in place.
///
/// Paths are taken as a slice so that a single `&Path` (which iterates over its
/// components) cannot be passed by mistake.
///
/// # Examples
///
/// ```rust
/// use artifact_io::create_directories;
///
/// let root = tempfile::tempdir().unwrap();
/// let data = root.path().join("artifacts/data");
/// let models = root.path().join("artifacts/models");
///
/// create_directories(&[&data, &models], true).unwrap();
/// assert!(data.is_dir() && models.is_dir());
/// ```
pub fn create_directories<P: AsRef<Path>>(paths: &[P], verbose: bool) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path).map_err(|e| ArtifactError::io(path, e))?;
        if verbose {
            tracing::info!("directory:{} created successfully", path.display());
        }
    }
    Ok(())
}

/// Creates the directories listed in a loosely typed value.
///
/// The value is checked before any directory is touched: it must be a sequence
/// of strings, otherwise `TypeMismatch` is returned.
///
/// # Examples
///
/// ```rust
/// use artifact_io::create_directories_from;
/// use serde_json::json;
///
/// let err = create_directories_from(&json!("artifacts"), false).unwrap_err();
/// assert!(matches!(err, artifact_io::domain::ArtifactError::TypeMismatch { .. }));
/// ```
pub fn create_directories_from<V>(value: V, verbose: bool) -> Result<()>
where
    V: TryInto<PathList, Error = ArtifactError>,
{
    let paths = value.try_into()?;
    create_directories(paths.paths(), verbose)
}

/// Writes `data` as 4-space indented JSON, replacing any existing file.
///
/// The text is produced in memory first, so a value that cannot be encoded
/// leaves the target file untouched.
pub fn save_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, data: &T) -> Result<()> {
    let path = path.as_ref();
    let parser = JsonParser::new();
    let bytes = parser.to_pretty_vec(data)?;
    write_bytes(path, &bytes)?;
    log_success(parser.format_name(), path, "saved");
    Ok(())
}

/// Reads a JSON file whose root is an object into a [`ConfigBox`].
pub fn load_json(path: impl AsRef<Path>) -> Result<ConfigBox> {
    let path = path.as_ref();
    let parser = JsonParser::new();
    let value = load_document(&parser, path)?;
    let config = ConfigBox::from_mapping(value)?;
    log_success(parser.format_name(), path, "loaded");
    Ok(config)
}

/// Reads a JSON file straight into `T`.
pub fn load_json_as<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let parser = JsonParser::new();
    let data = parser.parse_as(&read_text(path)?)?;
    log_success(parser.format_name(), path, "loaded");
    Ok(data)
}

/// Writes `data` as a binary artifact, replacing any existing file.
///
/// # Examples
///
/// ```rust
/// use artifact_io::{load_binary, save_binary};
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("model.bin");
///
/// save_binary(&vec![0.25f32, 0.75], &path).unwrap();
/// let weights: Vec<f32> = load_binary(&path).unwrap();
/// assert_eq!(weights, vec![0.25, 0.75]);
/// ```
#[cfg(feature = "binary")]
pub fn save_binary<T: Serialize + ?Sized>(data: &T, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = BinaryCodec::new().encode(data)?;
    write_bytes(path, &bytes)?;
    log_success(BinaryCodec::FORMAT_NAME, path, "saved");
    Ok(())
}

/// Reads a binary artifact written by [`save_binary`] back as `T`.
///
/// `T` must be the type (or a layout-compatible type) that was saved.
#[cfg(feature = "binary")]
pub fn load_binary<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let bytes = read_bytes(path)?;
    let data = BinaryCodec::new().decode(&bytes)?;
    log_success(BinaryCodec::FORMAT_NAME, path, "loaded");
    Ok(data)
}

/// Returns the approximate size of `path` as `~<N> KB`.
pub fn get_size(path: impl AsRef<Path>) -> Result<String> {
    Ok(file_size(path)?.to_string())
}

/// Returns the size of `path`.
pub fn file_size(path: impl AsRef<Path>) -> Result<FileSize> {
    FileSize::of(path)
}
