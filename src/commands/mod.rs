//! CLI command implementations.
//!
//! - **analyze**: discover test files, classify them and render a report
//! - **init**: write a default `.tautmap.toml`

pub mod analyze;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;
