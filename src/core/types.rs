//! Plain records produced by a tautology analysis run.
//!
//! Every record is built once from caller-supplied text and never mutated
//! afterwards. Field names serialize in camelCase so the JSON form lines up
//! with the report format consumed by the surrounding quality gate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Share of tautological tests (in percent) above which a run blocks merge.
/// The comparison is strict: exactly 50% does not block.
pub const BLOCKING_THRESHOLD_PERCENT: f64 = 50.0;

/// A binding imported from a module classified as production source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedSymbol {
    /// Local binding name as used in code (the alias for `a as b`).
    pub name: String,
    pub module_path: String,
}

impl ImportedSymbol {
    pub fn new(name: impl Into<String>, module_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module_path: module_path.into(),
        }
    }
}

/// Which test-runner entry point declared a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStyle {
    It,
    Test,
}

impl TestStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStyle::It => "it",
            TestStyle::Test => "test",
        }
    }
}

impl fmt::Display for TestStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `it(...)` / `test(...)` block and its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestBlock {
    pub description: String,
    /// 1-based line of the call site.
    pub line_number: usize,
    pub style: TestStyle,
    pub is_tautological: bool,
}

/// Analysis outcome for a single test file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResult {
    pub file_path: String,
    pub total_tests: usize,
    pub tautological_count: usize,
    pub tautological_percentage: f64,
    pub test_blocks: Vec<TestBlock>,
    pub imported_symbols: Vec<ImportedSymbol>,
    pub parse_success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_error: Option<String>,
}

impl FileResult {
    /// Build a successful result; counts and percentage are derived from the
    /// blocks so they can never disagree with them.
    pub fn from_blocks(
        file_path: impl Into<String>,
        test_blocks: Vec<TestBlock>,
        imported_symbols: Vec<ImportedSymbol>,
    ) -> Self {
        let total_tests = test_blocks.len();
        let tautological_count = test_blocks.iter().filter(|b| b.is_tautological).count();

        Self {
            file_path: file_path.into(),
            total_tests,
            tautological_count,
            tautological_percentage: percentage(tautological_count, total_tests),
            test_blocks,
            imported_symbols,
            parse_success: true,
            parse_error: None,
        }
    }

    /// A file whose extraction failed contributes no tests.
    pub fn parse_failure(file_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            total_tests: 0,
            tautological_count: 0,
            tautological_percentage: 0.0,
            test_blocks: Vec::new(),
            imported_symbols: Vec::new(),
            parse_success: false,
            parse_error: Some(message.into()),
        }
    }

    pub fn tautological_blocks(&self) -> impl Iterator<Item = &TestBlock> {
        self.test_blocks.iter().filter(|b| b.is_tautological)
    }
}

/// Run-level totals folded from every [`FileResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub total_files: usize,
    pub total_tests: usize,
    pub total_tautological: usize,
    pub overall_percentage: f64,
    pub exceeds_blocking_threshold: bool,
    /// Files whose extraction failed; informational only.
    #[serde(default)]
    pub parse_failures: usize,
}

impl RunSummary {
    pub fn from_file_results(file_results: &[FileResult]) -> Self {
        let total_tests: usize = file_results.iter().map(|f| f.total_tests).sum();
        let total_tautological: usize = file_results.iter().map(|f| f.tautological_count).sum();
        let overall_percentage = percentage(total_tautological, total_tests);

        Self {
            total_files: file_results.len(),
            total_tests,
            total_tautological,
            overall_percentage,
            exceeds_blocking_threshold: overall_percentage > BLOCKING_THRESHOLD_PERCENT,
            parse_failures: file_results.iter().filter(|f| !f.parse_success).count(),
        }
    }
}

/// The single artifact handed to reporters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    pub file_results: Vec<FileResult>,
    pub summary: RunSummary,
}

impl RunResult {
    pub fn from_file_results(file_results: Vec<FileResult>) -> Self {
        let summary = RunSummary::from_file_results(&file_results);
        Self {
            file_results,
            summary,
        }
    }

    pub fn parse_failures(&self) -> impl Iterator<Item = &FileResult> {
        self.file_results.iter().filter(|f| !f.parse_success)
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * part as f64 / total as f64
    }
}
