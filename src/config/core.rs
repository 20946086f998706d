use crate::cli::OutputFormat;
use serde::{Deserialize, Serialize};

/// File extensions recognized as JavaScript/TypeScript test sources.
pub const TEST_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs", "mts", "cts"];

/// Root configuration structure for tautmap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TautmapConfig {
    /// Test file discovery configuration
    #[serde(default)]
    pub discovery: Option<DiscoveryConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl TautmapConfig {
    /// Discovery settings, falling back to defaults when the section is absent
    pub fn discovery(&self) -> DiscoveryConfig {
        self.discovery.clone().unwrap_or_default()
    }

    pub fn default_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.default_format)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscoveryConfig {
    /// Glob patterns selecting test files, matched against root-relative paths
    #[serde(default = "default_include_patterns")]
    pub include: Vec<String>,

    /// Glob patterns excluded even when included
    #[serde(default = "default_ignore_patterns")]
    pub ignore: Vec<String>,

    /// Files larger than this are skipped
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            include: default_include_patterns(),
            ignore: default_ignore_patterns(),
            max_file_bytes: default_max_file_bytes(),
        }
    }
}

pub fn default_include_patterns() -> Vec<String> {
    TEST_EXTENSIONS
        .iter()
        .flat_map(|ext| {
            [
                format!("**/*.test.{ext}"),
                format!("**/*.spec.{ext}"),
                format!("**/__tests__/**/*.{ext}"),
            ]
        })
        .collect()
}

pub fn default_ignore_patterns() -> Vec<String> {
    ["node_modules/**", "dist/**", "build/**", "coverage/**"]
        .iter()
        .map(|p| p.to_string())
        .collect()
}

pub fn default_max_file_bytes() -> u64 {
    1024 * 1024
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
}
