// src/aggregate.rs
//! The fetch → extract → report loop.

use metrics::{counter, describe_counter, describe_histogram};
use once_cell::sync::OnceCell;
use std::path::Path;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::config::RunConfig;
use crate::error::Result;
use crate::extract::extract_comments;
use crate::fetch::{FetchOutcome, PageFetcher};
use crate::report::{FileReport, ReportSection, ReportSink};
use crate::target::{build_targets, Target};
use crate::wordlist::{load_wordlist, MissingWordlist};

/// One-time metrics registration.
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("syphon_targets_total", "Targets attempted.");
        describe_counter!(
            "syphon_sections_written_total",
            "Report sections appended (comments or errors)."
        );
        describe_counter!(
            "syphon_fetch_failures_total",
            "Fetches that ended in a transport or status failure."
        );
        describe_histogram!("syphon_fetch_ms", "Fetch duration in milliseconds.");
    });
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetStatus {
    Found(usize),
    Empty,
    Failed(String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub targets: usize,
    pub found: usize,
    pub empty: usize,
    pub failed: usize,
    pub sections_written: usize,
    pub interrupted: bool,
}

impl RunSummary {
    /// Operator-facing last line, printed regardless of the log filter.
    pub fn closing_line(&self, output: &Path) -> String {
        if self.interrupted {
            format!(
                "Interrupted by user. Exiting gracefully... ({} section(s) kept in {})",
                self.sections_written,
                output.display()
            )
        } else {
            format!(
                "Done: {} section(s) written to {}",
                self.sections_written,
                output.display()
            )
        }
    }

    fn record(&mut self, status: &TargetStatus) {
        self.targets += 1;
        match status {
            TargetStatus::Found(_) => {
                self.found += 1;
                self.sections_written += 1;
            }
            TargetStatus::Empty => self.empty += 1,
            TargetStatus::Failed(_) => {
                self.failed += 1;
                self.sections_written += 1;
            }
        }
    }
}

/// Turn one fetch outcome into at most one report section.
/// Only a sink write error is returned as `Err`.
pub fn handle_outcome(
    target: &Target,
    outcome: FetchOutcome,
    sink: &mut dyn ReportSink,
) -> Result<TargetStatus> {
    let (section, status) = match outcome {
        FetchOutcome::Success { body } => {
            let comments = extract_comments(&body);
            if comments.is_empty() {
                info!(url = %target.address, "No comments found on {}", target.address);
                return Ok(TargetStatus::Empty);
            }
            let n = comments.len();
            info!(url = %target.address, count = n, "Found {} comments on {}", n, target.address);
            let section = ReportSection::Comments {
                label: target.label.clone(),
                comments,
            };
            (section, TargetStatus::Found(n))
        }
        FetchOutcome::Failure { reason } => {
            warn!(url = %target.address, error = %reason, "Error fetching {}: {}", target.address, reason);
            let section = ReportSection::Error {
                label: target.label.clone(),
                message: reason.clone(),
            };
            (section, TargetStatus::Failed(reason))
        }
    };

    sink.append(&section)?;
    counter!("syphon_sections_written_total").increment(1);
    Ok(status)
}

/// Process `targets` strictly in order, one at a time.
///
/// A failed fetch becomes an `Error:` section and the loop moves on. The
/// token is checked before each target and raced against the fetch in
/// flight; once it fires no further target is touched and the summary comes
/// back with `interrupted` set. Sections written before that stay as they are.
pub async fn run(
    fetcher: &dyn PageFetcher,
    targets: &[Target],
    sink: &mut dyn ReportSink,
    timeout: Duration,
    cancel: &CancellationToken,
) -> Result<RunSummary> {
    ensure_metrics_described();

    let mut summary = RunSummary::default();
    for target in targets {
        if cancel.is_cancelled() {
            summary.interrupted = true;
            break;
        }

        counter!("syphon_targets_total").increment(1);
        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                summary.interrupted = true;
                break;
            }
            o = fetcher.fetch(&target.address, timeout) => o,
        };

        let status = handle_outcome(target, outcome, sink)?;
        summary.record(&status);
    }

    if summary.interrupted {
        warn!("Interrupted by user. Exiting gracefully...");
    }
    Ok(summary)
}

/// Resolve the target list for `cfg`, loading the wordlist if one is set.
pub fn resolve_targets(cfg: &RunConfig) -> Vec<Target> {
    let Some(path) = &cfg.wordlist else {
        return build_targets(&cfg.base, None, cfg.blank_lines);
    };
    match load_wordlist(path) {
        Ok(list) => build_targets(&cfg.base, Some(list.as_slice()), cfg.blank_lines),
        Err(e) => {
            warn!(error = %e, "Wordlist file {} not usable", path.display());
            match cfg.missing_wordlist {
                MissingWordlist::Skip => Vec::new(),
                MissingWordlist::BaseOnly => build_targets(&cfg.base, None, cfg.blank_lines),
            }
        }
    }
}

/// Truncate the report, build targets and run the loop.
pub async fn run_with_config(
    cfg: &RunConfig,
    fetcher: &dyn PageFetcher,
    cancel: &CancellationToken,
) -> Result<RunSummary> {
    let mut report = FileReport::create(&cfg.output)?;
    let targets = resolve_targets(cfg);
    info!(
        base = %cfg.base,
        targets = targets.len(),
        output = %report.path().display(),
        "starting run"
    );

    let summary = run(fetcher, &targets, &mut report, cfg.timeout, cancel).await?;

    info!(
        found = summary.found,
        empty = summary.empty,
        failed = summary.failed,
        sections = summary.sections_written,
        interrupted = summary.interrupted,
        "run finished"
    );
    Ok(summary)
}
