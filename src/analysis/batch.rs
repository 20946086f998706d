//! Batch analysis over many `(path, content)` pairs.
//!
//! Files are independent, so the parallel variant only has to collect
//! results; rayon's indexed `collect` keeps input order, which makes both
//! variants produce identical [`RunResult`]s.

use crate::analysis::file::analyze_file;
use crate::core::{FileResult, RunResult};
use rayon::prelude::*;

/// Analyze every file sequentially, in input order.
pub fn analyze_batch<P, C>(files: &[(P, C)]) -> RunResult
where
    P: AsRef<str>,
    C: AsRef<str>,
{
    let file_results: Vec<FileResult> = files
        .iter()
        .map(|(path, content)| analyze_file(path.as_ref(), content.as_ref()))
        .collect();

    finish(file_results)
}

/// Analyze every file on the rayon pool; results keep input order.
pub fn analyze_batch_parallel<P, C>(files: &[(P, C)]) -> RunResult
where
    P: AsRef<str> + Sync,
    C: AsRef<str> + Sync,
{
    let file_results: Vec<FileResult> = files
        .par_iter()
        .map(|(path, content)| analyze_file(path.as_ref(), content.as_ref()))
        .collect();

    finish(file_results)
}

fn finish(file_results: Vec<FileResult>) -> RunResult {
    let result = RunResult::from_file_results(file_results);
    let summary = &result.summary;
    log::info!(
        "Analyzed {} files: {} of {} tests tautological ({:.1}%)",
        summary.total_files,
        summary.total_tautological,
        summary.total_tests,
        summary.overall_percentage
    );
    if summary.parse_failures > 0 {
        log::warn!("{} files could not be analyzed", summary.parse_failures);
    }
    result
}
