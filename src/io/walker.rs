use crate::config::DiscoveryConfig;
use crate::core::{Error, Result};
use glob::Pattern;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Finds test files below a root directory.
///
/// Walks with `.gitignore` support, keeps files whose root-relative path
/// matches an include pattern and no ignore pattern, and returns them sorted.
pub struct FileWalker {
    root: PathBuf,
    include: Vec<Pattern>,
    ignore: Vec<Pattern>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Result<Self> {
        Self::from_config(root, &DiscoveryConfig::default())
    }

    pub fn from_config(root: PathBuf, config: &DiscoveryConfig) -> Result<Self> {
        Ok(Self {
            root,
            include: compile_patterns(&config.include)?,
            ignore: compile_patterns(&config.ignore)?,
        })
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = entry.map_err(|e| {
                Error::file_system(format!("Failed to walk: {}", e), self.root.clone())
            })?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        let relative = relative_path(&self.root, path);
        self.include.iter().any(|p| p.matches(&relative))
            && !self.ignore.iter().any(|p| p.matches(&relative))
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| Pattern::new(p).map_err(Error::from))
        .collect()
}

/// Root-relative path with `/` separators, as used in patterns and reports.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Read discovered files into `(relative path, content)` pairs.
///
/// Files over `max_file_bytes`, unreadable files and non-UTF-8 files are
/// skipped with a warning; they never reach the analyzer.
pub fn read_test_files(
    root: &Path,
    paths: &[PathBuf],
    max_file_bytes: u64,
) -> Vec<(String, String)> {
    paths
        .iter()
        .filter_map(|path| {
            let display = relative_path(root, path);
            match std::fs::metadata(path) {
                Ok(meta) if meta.len() > max_file_bytes => {
                    log::warn!(
                        "Skipping {}: {} bytes exceeds limit of {}",
                        display,
                        meta.len(),
                        max_file_bytes
                    );
                    return None;
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("Skipping {}: {}", display, e);
                    return None;
                }
            }
            match std::fs::read_to_string(path) {
                Ok(content) => Some((display, content)),
                Err(e) => {
                    log::warn!("Skipping {}: {}", display, e);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn walk_relative(dir: &TempDir) -> Vec<String> {
        FileWalker::new(dir.path().to_path_buf())
            .unwrap()
            .walk()
            .unwrap()
            .iter()
            .map(|p| relative_path(dir.path(), p))
            .collect()
    }

    #[test]
    fn test_finds_default_test_file_shapes() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "src/a.test.ts", "");
        write(dir.path(), "src/b.spec.jsx", "");
        write(dir.path(), "src/__tests__/c.js", "");
        write(dir.path(), "src/d.ts", "");
        write(dir.path(), "README.md", "");

        assert_eq!(
            walk_relative(&dir),
            vec!["src/__tests__/c.js", "src/a.test.ts", "src/b.spec.jsx"]
        );
    }

    #[test]
    fn test_default_ignores_node_modules() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "node_modules/pkg/x.test.js", "");
        write(dir.path(), "app.test.js", "");

        assert_eq!(walk_relative(&dir), vec!["app.test.js"]);
    }

    #[test]
    fn test_extra_ignore_patterns() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "e2e/login.spec.ts", "");
        write(dir.path(), "unit/math.test.ts", "");

        let mut config = DiscoveryConfig::default();
        config.ignore.push("e2e/**".to_string());
        let files = FileWalker::from_config(dir.path().to_path_buf(), &config)
            .unwrap()
            .walk()
            .unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("math.test.ts"));
    }

    #[test]
    fn test_read_skips_oversized_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "small.test.ts", "it('a', () => {});");
        write(dir.path(), "big.test.ts", &"x".repeat(64));
        let paths = vec![dir.path().join("big.test.ts"), dir.path().join("small.test.ts")];

        let files = read_test_files(dir.path(), &paths, 32);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, "small.test.ts");
    }

    #[test]
    fn test_read_skips_missing_and_non_utf8_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("bin.test.ts"), [0xff, 0xfe, 0xfd]).unwrap();
        let paths = vec![dir.path().join("bin.test.ts"), dir.path().join("gone.test.ts")];

        assert!(read_test_files(dir.path(), &paths, 1024).is_empty());
    }
}
