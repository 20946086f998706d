//! Detection of tautological JavaScript/TypeScript tests: test blocks that
//! never reference anything imported from production code.

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod extraction;
pub mod imports;
pub mod io;
pub mod lexical;
pub mod report;

// Re-export commonly used types
pub use crate::core::{
    Error, FileResult, ImportedSymbol, Result, RunResult, RunSummary, TestBlock, TestStyle,
    BLOCKING_THRESHOLD_PERCENT,
};

pub use crate::analysis::{
    analyze_batch, analyze_batch_parallel, analyze_file, references_production,
};

pub use crate::extraction::{extract_body, extract_test_blocks, RawTestBlock};
pub use crate::imports::{extract_imports, is_source_module};
pub use crate::lexical::{is_non_code, LexicalScanner};
pub use crate::report::{render_json, render_report, verdict, ReportStatus, Verdict};
