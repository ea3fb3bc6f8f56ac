//! YAML configuration loading.
//!
//! This crate reads a single YAML document from disk, checks that its root
//! is a mapping, and hands the result back as a [`Configuration`].

mod error;
mod loader;
mod model;

/// Public error type returned by config loading and decoding APIs.
pub use error::ConfigError;
/// Loader entry points.
pub use loader::{load_config, load_config_from_str};
/// Loaded configuration model.
pub use model::Configuration;
/// Re-export for convenience.
pub use serde_yaml::{Mapping, Value};
