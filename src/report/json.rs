use crate::core::{Result, RunResult};
use crate::report::{verdict, ReportStatus, Verdict};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    status: ReportStatus,
    verdict: Verdict,
    #[serde(flatten)]
    result: &'a RunResult,
}

/// Render a run as pretty-printed JSON with its status and verdict.
pub fn render_json(result: &RunResult) -> Result<String> {
    let report = JsonReport {
        status: ReportStatus::from_result(result),
        verdict: verdict(result),
        result,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
