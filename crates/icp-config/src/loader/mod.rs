//! Single-document YAML config loader.
//!
//! Reads one file, parses it with `serde_yaml` (which never constructs
//! objects from tags), resolves YAML 1.1 merge keys, and checks that the
//! document root is a mapping.

mod file_io;
mod root;


use crate::model::INLINE_SOURCE_LABEL;
use crate::{ConfigError, Configuration};
use log::{debug, info};
use serde_yaml::Value;
use std::path::Path;

/// Load a YAML config file and return its root mapping.
///
/// An empty document (or one holding only comments) yields an empty
/// [`Configuration`]. Directories and other non-regular files are rejected
/// with [`ConfigError::Validation`].
pub fn load_config(path: impl AsRef<Path>) -> Result<Configuration, ConfigError> {
    let path = path.as_ref();
    info!("loading config from path: {}", path.display());
    let contents = file_io::read_document(path)?;
    let config = parse_document(&contents, path)?;
    debug!(
        "config loaded (path={}, keys={})",
        path.display(),
        config.len()
    );
    Ok(config)
}

/// Load a config from in-memory YAML contents.
pub fn load_config_from_str(contents: &str) -> Result<Configuration, ConfigError> {
    debug!("loading config from raw contents (len={})", contents.len());
    parse_document(contents, Path::new(INLINE_SOURCE_LABEL))
}

/// Parse one document and resolve `<<` merge keys before the root check.
fn parse_document(contents: &str, path: &Path) -> Result<Configuration, ConfigError> {
    let parse_error = |source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    };
    let mut value: Value = serde_yaml::from_str(contents).map_err(parse_error)?;
    value.apply_merge().map_err(parse_error)?;
    root::into_configuration(value, path)
}
