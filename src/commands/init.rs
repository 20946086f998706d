use crate::cli::OutputFormat;
use crate::config::{DiscoveryConfig, OutputConfig, TautmapConfig, CONFIG_FILE_NAME};
use crate::io;
use anyhow::{Context, Result};
use std::path::Path;

const CONFIG_HEADER: &str = "# Tautmap Configuration\n\
# Patterns are globs matched against paths relative to the analyzed root.\n\n";

fn default_config_text() -> Result<String> {
    let config = TautmapConfig {
        discovery: Some(DiscoveryConfig::default()),
        output: Some(OutputConfig {
            default_format: Some(OutputFormat::Markdown),
        }),
    };
    let body = toml::to_string_pretty(&config).context("Failed to serialize default config")?;
    Ok(format!("{}{}", CONFIG_HEADER, body))
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, &default_config_text()?)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
