//! Public surface for the ICP config loader.
//!
//! This crate re-exports the loader and provides a small initialization
//! helper to keep binary setup consistent.

/// Re-export for convenience.
pub use icp_config as config;
pub use icp_config::{ConfigError, Configuration, load_config, load_config_from_str};

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. Filtering follows
/// `RUST_LOG`.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::builder()
            .format_timestamp_millis()
            .parse_default_env()
            .try_init();
    }
}
