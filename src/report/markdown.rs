use crate::core::{RunResult, BLOCKING_THRESHOLD_PERCENT};
use crate::report::ReportStatus;

/// Render a run as a markdown report section.
pub fn render_report(result: &RunResult) -> String {
    let sections: Vec<fn(&RunResult) -> Vec<String>> = vec![
        header_lines,
        summary_table_lines,
        blocking_note_lines,
        tautological_test_lines,
        parse_warning_lines,
    ];

    let mut out: String = sections
        .iter()
        .flat_map(|section| section(result))
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}

fn header_lines(result: &RunResult) -> Vec<String> {
    let status = ReportStatus::from_result(result);
    vec![
        "## Tautological Test Analysis".to_string(),
        String::new(),
        format!("**Status:** {} {}", status.icon(), status),
        String::new(),
    ]
}

fn summary_table_lines(result: &RunResult) -> Vec<String> {
    let summary = &result.summary;
    let mut lines = vec![
        "| Metric | Value |".to_string(),
        "|--------|-------|".to_string(),
        format!("| Files analyzed | {} |", summary.total_files),
        format!("| Total tests | {} |", summary.total_tests),
        format!("| Tautological tests | {} |", summary.total_tautological),
        format!("| Tautological percentage | {:.1}% |", summary.overall_percentage),
        format!("| Blocking threshold | >{:.0}% |", BLOCKING_THRESHOLD_PERCENT),
    ];
    if summary.total_tests == 0 {
        lines.push(String::new());
        lines.push("_No test blocks were found; analysis skipped._".to_string());
    }
    lines.push(String::new());
    lines
}

fn blocking_note_lines(result: &RunResult) -> Vec<String> {
    if !result.summary.exceeds_blocking_threshold {
        return Vec::new();
    }
    vec![
        format!(
            "> **Blocking:** {:.1}% of tests never reference production code (threshold {:.0}%). \
             This blocks merge-readiness until the tests exercise real code.",
            result.summary.overall_percentage, BLOCKING_THRESHOLD_PERCENT
        ),
        String::new(),
    ]
}

fn tautological_test_lines(result: &RunResult) -> Vec<String> {
    if result.summary.total_tautological == 0 {
        return Vec::new();
    }

    let mut lines = vec!["### Tautological Tests".to_string(), String::new()];
    lines.extend(result.file_results.iter().flat_map(|file| {
        file.tautological_blocks().map(move |block| {
            format!(
                "- `{}:{}` — {}(\"{}\")",
                file.file_path,
                block.line_number,
                block.style,
                escape_description(&block.description)
            )
        })
    }));
    lines.push(String::new());
    lines
}

/// Keep a description on one line inside its double quotes.
fn escape_description(description: &str) -> String {
    description
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace("\r\n", "\\n")
        .replace(['\n', '\r'], "\\n")
}

fn parse_warning_lines(result: &RunResult) -> Vec<String> {
    let failures: Vec<String> = result
        .parse_failures()
        .map(|file| {
            format!(
                "- `{}`: {}",
                file.file_path,
                file.parse_error.as_deref().unwrap_or("unknown parse error")
            )
        })
        .collect();

    if failures.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![
        "### Parse Warnings".to_string(),
        String::new(),
        "These files could not be analyzed and contribute no tests. They do not affect the verdict."
            .to_string(),
        String::new(),
    ];
    lines.extend(failures);
    lines.push(String::new());
    lines
}
