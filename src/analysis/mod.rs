//! Tautology classification: per-file analysis and batch aggregation.

pub mod batch;
pub mod file;
pub mod references;

pub use batch::{analyze_batch, analyze_batch_parallel};
pub use file::analyze_file;
pub use references::references_production;
