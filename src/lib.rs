// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod report;
pub mod target;
pub mod wordlist;

// ---- Re-exports for stable public API ----
pub use crate::aggregate::{run, run_with_config, RunSummary, TargetStatus};
pub use crate::error::SyphonError;
pub use crate::extract::extract_comments;
pub use crate::fetch::{FetchOutcome, HttpFetcher, PageFetcher};
pub use crate::report::{FileReport, ReportSection, ReportSink};
pub use crate::target::{build_targets, Target};
