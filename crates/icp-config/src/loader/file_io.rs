//! IO helpers for reading config documents from disk.

use crate::ConfigError;
use std::fs::{self, File};
use std::io::{self, ErrorKind, Read};
use std::path::Path;

/// Read a config file as UTF-8 after confirming it is a regular file.
///
/// Symlinks are followed. The file handle is dropped before returning on
/// every path.
pub(super) fn read_document(path: &Path) -> Result<String, ConfigError> {
    let metadata = fs::metadata(path).map_err(|err| classify_io_error(path, err))?;
    if !metadata.is_file() {
        let message = if metadata.is_dir() {
            "path is a directory, expected a regular file"
        } else {
            "path is not a regular file"
        };
        return Err(ConfigError::validation(path, message));
    }

    let mut file = File::open(path).map_err(|err| classify_io_error(path, err))?;
    let mut contents = String::with_capacity(usize::try_from(metadata.len()).unwrap_or(0));
    file.read_to_string(&mut contents)
        .map_err(|err| classify_io_error(path, err))?;
    Ok(contents)
}

/// Map an IO failure onto the loader's error kinds.
///
/// Missing entries and permission failures get their own variants;
/// everything else (including invalid UTF-8) falls through to `Load`.
fn classify_io_error(path: &Path, err: io::Error) -> ConfigError {
    match err.kind() {
        ErrorKind::NotFound | ErrorKind::NotADirectory => ConfigError::NotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => ConfigError::PermissionDenied {
            path: path.to_path_buf(),
            source: err,
        },
        _ => ConfigError::Load {
            path: path.to_path_buf(),
            source: Box::new(err),
        },
    }
}
