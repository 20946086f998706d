use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::TautmapConfig;
use crate::core::{Error, Result};

/// Name of the configuration file searched for in the directory hierarchy
pub const CONFIG_FILE_NAME: &str = ".tautmap.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<TautmapConfig> {
    let config = toml::from_str::<TautmapConfig>(contents)?;

    if let Some(ref discovery) = config.discovery {
        if discovery.max_file_bytes == 0 {
            return Err(Error::config("discovery.max_file_bytes must be greater than 0"));
        }
        if discovery.include.is_empty() {
            return Err(Error::config("discovery.include must list at least one pattern"));
        }
        for pattern in discovery.include.iter().chain(&discovery.ignore) {
            glob::Pattern::new(pattern)?;
        }
    }

    Ok(config)
}

/// Load a config file the user named explicitly; failures are errors
pub fn load_config_from(path: &Path) -> Result<TautmapConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::file_system(format!("Failed to read {}", path.display()), path).with_io_source(e)
    })?;
    let config = parse_and_validate_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<TautmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Invalid config {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the first loadable config file
pub fn find_config(start: PathBuf) -> Option<TautmapConfig> {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
}

pub fn load_config() -> TautmapConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return TautmapConfig::default();
        }
    };

    find_config(current).unwrap_or_else(|| {
        log::debug!("No {} found. Using default config.", CONFIG_FILE_NAME);
        TautmapConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::config::DiscoveryConfig;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, TautmapConfig::default());
        assert_eq!(config.discovery(), DiscoveryConfig::default());
    }

    #[test]
    fn test_partial_discovery_section_keeps_other_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [discovery]
            include = ["**/*.spec.ts"]

            [output]
            default_format = "json"
        "#})
        .unwrap();
        let discovery = config.discovery();
        assert_eq!(discovery.include, vec!["**/*.spec.ts"]);
        assert_eq!(discovery.ignore, DiscoveryConfig::default().ignore);
        assert_eq!(discovery.max_file_bytes, 1024 * 1024);
        assert_eq!(config.default_format(), Some(OutputFormat::Json));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(parse_and_validate_config("[discovery]\nmax_file_bytes = 0").is_err());
        assert!(parse_and_validate_config("[discovery]\ninclude = []").is_err());
        assert!(parse_and_validate_config("[discovery]\nignore = [\"***\"]").is_err());
        assert!(parse_and_validate_config("not toml at all [").is_err());
    }

    #[test]
    fn test_find_config_walks_up_ancestors() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[output]\ndefault_format = \"json\"\n",
        )
        .unwrap();
        let nested = dir.path().join("packages").join("web");
        std::fs::create_dir_all(&nested).unwrap();

        let config = find_config(nested).unwrap();
        assert_eq!(config.default_format(), Some(OutputFormat::Json));
    }

    #[test]
    fn test_invalid_file_is_skipped_during_search() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[discovery\n").unwrap();
        assert!(try_load_config_from_path(&dir.path().join(CONFIG_FILE_NAME)).is_none());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = load_config_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let ancestors: Vec<PathBuf> =
            directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(ancestors, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }
}
