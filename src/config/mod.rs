//! `.tautmap.toml` configuration for the command-line front end.
//!
//! The analysis core never reads configuration; these settings only steer
//! test-file discovery and report output.

mod core;
mod loader;

pub use self::core::{
    default_ignore_patterns, default_include_patterns, default_max_file_bytes, DiscoveryConfig,
    OutputConfig, TautmapConfig, TEST_EXTENSIONS,
};
pub use self::loader::{
    directory_ancestors, find_config, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
