//! Report rendering and the merge verdict consumed by quality gates.

pub mod json;
pub mod markdown;

pub use json::render_json;
pub use markdown::render_report;

use crate::core::RunResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Four-way status shown in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Ok,
    Warn,
    Fail,
    Skip,
}

impl ReportStatus {
    pub fn from_result(result: &RunResult) -> Self {
        let summary = &result.summary;
        if summary.total_tests == 0 {
            ReportStatus::Skip
        } else if summary.exceeds_blocking_threshold {
            ReportStatus::Fail
        } else if summary.total_tautological > 0 {
            ReportStatus::Warn
        } else {
            ReportStatus::Ok
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Ok => "ok",
            ReportStatus::Warn => "warn",
            ReportStatus::Fail => "fail",
            ReportStatus::Skip => "skip",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ReportStatus::Ok => "✅",
            ReportStatus::Warn => "⚠️",
            ReportStatus::Fail => "❌",
            ReportStatus::Skip => "⏭️",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integration point for the surrounding quality gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    None,
    Warning,
    Blocking,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::None => "none",
            Verdict::Warning => "warning",
            Verdict::Blocking => "blocking",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a run onto the merge verdict. Computed from the summary alone.
pub fn verdict(result: &RunResult) -> Verdict {
    let summary = &result.summary;
    if summary.total_tests == 0 || summary.total_tautological == 0 {
        Verdict::None
    } else if summary.exceeds_blocking_threshold {
        Verdict::Blocking
    } else {
        Verdict::Warning
    }
}
