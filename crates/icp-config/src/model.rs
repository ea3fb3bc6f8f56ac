//! In-memory model for a loaded configuration document.

use crate::ConfigError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_yaml::mapping::{self, Index, Mapping};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Label used as the origin of documents that were not read from disk.
pub(crate) const INLINE_SOURCE_LABEL: &str = "<string>";

/// Parsed configuration: the root mapping of a YAML document.
///
/// Keys and values are kept exactly as the parser produced them, so a
/// document such as `404: not found` keeps its number key. Nested mappings,
/// sequences and tagged nodes stay as `serde_yaml::Value`.
///
/// Equality compares entries only; the origin path is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    entries: Mapping,
    #[serde(skip, default = "inline_origin")]
    origin: PathBuf,
}

fn inline_origin() -> PathBuf {
    PathBuf::from(INLINE_SOURCE_LABEL)
}

impl Configuration {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_origin(mut self, origin: &Path) -> Self {
        self.origin = origin.to_path_buf();
        self
    }

    /// Path the configuration was loaded from, or `<string>` for in-memory
    /// documents.
    pub fn origin(&self) -> &Path {
        &self.origin
    }

    /// Look up a top-level key.
    ///
    /// Accepts a `&str` for string keys or a `Value` for any other key
    /// (`config.get(Value::from(404))`).
    pub fn get<I: Index>(&self, key: I) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Look up a nested value by a dotted path such as `database.host`.
    ///
    /// Segments index into mappings by string key and into sequences by
    /// position. Non-string keys are only reachable through [`get`](Self::get).
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.entries.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Mapping(map) => map.get(segment)?,
                Value::Sequence(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Whether a top-level key is present.
    pub fn contains_key<I: Index>(&self, key: I) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the document had no top-level entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-level keys in document order.
    pub fn keys(&self) -> mapping::Keys<'_> {
        self.entries.keys()
    }

    /// Top-level entries in document order.
    pub fn iter(&self) -> mapping::Iter<'_> {
        self.entries.iter()
    }

    /// Consume the configuration and return the underlying mapping.
    pub fn into_inner(self) -> Mapping {
        self.entries
    }

    /// Decode the whole configuration into a typed value.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ConfigError> {
        serde_yaml::from_value(Value::Mapping(self.entries.clone())).map_err(|source| {
            ConfigError::Decode {
                path: self.origin.clone(),
                source,
            }
        })
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            entries: Mapping::new(),
            origin: inline_origin(),
        }
    }
}

impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl From<Mapping> for Configuration {
    fn from(entries: Mapping) -> Self {
        Self {
            entries,
            origin: inline_origin(),
        }
    }
}

impl From<BTreeMap<String, Value>> for Configuration {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        entries
            .into_iter()
            .map(|(key, value)| (Value::String(key), value))
            .collect()
    }
}

impl FromIterator<(Value, Value)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Mapping>())
    }
}

impl IntoIterator for Configuration {
    type Item = (Value, Value);
    type IntoIter = mapping::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Configuration {
    type Item = (&'a Value, &'a Value);
    type IntoIter = mapping::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
