//! Root-node checks for parsed config documents.

use crate::{ConfigError, Configuration};
use serde_yaml::Value;
use std::path::Path;

/// Convert a parsed document into a [`Configuration`].
///
/// `null` becomes the empty configuration and a mapping is returned as-is,
/// whatever its key types. Any other root is rejected.
pub(super) fn into_configuration(value: Value, path: &Path) -> Result<Configuration, ConfigError> {
    let config = match value {
        Value::Null => Configuration::new(),
        Value::Mapping(mapping) => Configuration::from(mapping),
        other => {
            return Err(ConfigError::validation(
                path,
                format!(
                    "config root must be a mapping, found {}",
                    describe(&other)
                ),
            ));
        }
    };
    Ok(config.with_origin(path))
}

/// Human-readable name of a YAML node type.
fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
