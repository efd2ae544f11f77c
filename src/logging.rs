// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide log sink.
//!
//! The file helpers only emit `tracing` events. This module installs the one
//! subscriber that turns them into lines on stdout and, optionally, in a log
//! file. It is meant to be called once at program start; later calls are no-ops.

use crate::domain::{ArtifactError, Result};
use crate::service::create_directories;
use directories::ProjectDirs;
use once_cell::sync::OnceCell;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

static INIT: OnceCell<()> = OnceCell::new();

/// Default name of the log file inside the log directory.
pub const LOG_FILE_NAME: &str = "running_logs.log";

/// Settings for the process-wide subscriber.
///
/// `RUST_LOG`, when set, overrides `level`.
///
/// # Examples
///
/// ```rust
/// use artifact_io::logging::LoggingConfig;
///
/// let config = LoggingConfig::default().with_level("debug");
/// assert_eq!(config.log_file().unwrap().to_str().unwrap(), "logs/running_logs.log");
///
/// assert!(LoggingConfig::stdout_only().log_file().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `"info"` or `"artifact_io=debug"`
    pub level: String,
    /// Directory for the log file; `None` logs to stdout only
    pub log_dir: Option<PathBuf>,
    /// Name of the log file inside `log_dir`
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: Some(PathBuf::from("logs")),
            file_name: LOG_FILE_NAME.to_string(),
        }
    }
}

impl LoggingConfig {
    /// Logs to stdout only.
    pub fn stdout_only() -> Self {
        Self {
            log_dir: None,
            ..Self::default()
        }
    }

    /// Places the log directory under the OS-appropriate data directory of the
    /// application, e.g. `~/.local/share/<app_name>/logs` on Linux.
    pub fn for_project(qualifier: &str, app_name: &str) -> Result<Self> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            ArtifactError::io(
                app_name,
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "Failed to determine project directories",
                ),
            )
        })?;

        Ok(Self {
            log_dir: Some(proj_dirs.data_local_dir().join("logs")),
            ..Self::default()
        })
    }

    /// Sets the default filter directive.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Sets the log directory.
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Full path of the log file, if file logging is enabled.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_dir.as_ref().map(|dir| dir.join(&self.file_name))
    }
}

/// Installs the process-wide subscriber.
///
/// Only the first call does anything. If another subscriber is already the
/// global default (as in tests), it is left in place.
pub fn init(config: &LoggingConfig) -> Result<()> {
    INIT.get_or_try_init(|| install(config)).map(|_| ())
}

fn install(config: &LoggingConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_layer = match (&config.log_dir, config.log_file()) {
        (Some(dir), Some(path)) => {
            create_directories(&[dir], false)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| ArtifactError::io(&path, e))?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        _ => None,
    };

    let subscriber = Registry::default()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer);

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        // Ignore error if a subscriber is already set (e.g., tests).
        tracing::debug!("global tracing subscriber already installed");
    }
    Ok(())
}
