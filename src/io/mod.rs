pub mod walker;

use anyhow::{Context, Result};
use std::path::Path;

pub use walker::{read_test_files, relative_path, FileWalker};

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
