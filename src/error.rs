// src/error.rs
use std::path::PathBuf;

/// Errors surfaced by the library. Transport failures are not errors here:
/// they travel as `FetchOutcome::Failure` and end up in the report.
#[derive(Debug, thiserror::Error)]
pub enum SyphonError {
    #[error("wordlist file {} not found", .path.display())]
    WordlistMissing { path: PathBuf },

    #[error("reading wordlist {}: {source}", .path.display())]
    Wordlist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("writing report {}: {source}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SyphonError>;
