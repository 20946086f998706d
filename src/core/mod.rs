//! Data model and error type shared by every analysis stage.

pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{
    FileResult, ImportedSymbol, RunResult, RunSummary, TestBlock, TestStyle,
    BLOCKING_THRESHOLD_PERCENT,
};
