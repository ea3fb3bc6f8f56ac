//! Error types for config loading and validation.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors returned while loading or decoding config.
///
/// Every variant carries the path of the document involved (or the
/// `<string>` label for in-memory documents).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config path does not exist.
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },
    /// The path is not a regular file, or the document root is not a mapping.
    #[error("invalid config at {}: {message}", path.display())]
    Validation { path: PathBuf, message: String },
    /// The OS refused access to the config file.
    #[error("permission denied reading config {}: {source}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document is not well-formed YAML.
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    /// Any other failure while reading or parsing.
    #[error("failed to load config {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Converting a loaded config into a typed value failed.
    #[error("failed to decode config {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ConfigError {
    /// Path of the config document this error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::Validation { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::Parse { path, .. }
            | Self::Load { path, .. }
            | Self::Decode { path, .. } => path,
        }
    }

    /// One-based `(line, column)` reported by the YAML parser.
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            Self::Parse { source, .. } | Self::Decode { source, .. } => source
                .location()
                .map(|location| (location.line(), location.column())),
            _ => None,
        }
    }

    pub(crate) fn validation(path: &Path, message: impl Into<String>) -> Self {
        Self::Validation {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}
