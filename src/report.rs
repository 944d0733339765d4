// src/report.rs
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, SyphonError};

pub const DEFAULT_OUTPUT: &str = "syphonResults.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSection {
    Comments { label: String, comments: Vec<String> },
    Error { label: String, message: String },
}

impl ReportSection {
    pub fn label(&self) -> &str {
        match self {
            Self::Comments { label, .. } | Self::Error { label, .. } => label,
        }
    }

    /// Header, body lines (comments trimmed), trailing blank line.
    pub fn render(&self) -> String {
        let mut out = format!("----- {} -----\n", self.label());
        match self {
            Self::Comments { comments, .. } => {
                for c in comments {
                    out.push_str(c.trim());
                    out.push('\n');
                }
            }
            Self::Error { message, .. } => {
                out.push_str("Error: ");
                out.push_str(message);
                out.push('\n');
            }
        }
        out.push('\n');
        out
    }
}

/// Append-only destination for report sections.
pub trait ReportSink {
    fn append(&mut self, section: &ReportSection) -> Result<()>;
}

/// Report file. Truncated once on creation; every section reopens the file
/// in append mode and the handle is dropped when the write returns.
#[derive(Debug)]
pub struct FileReport {
    path: PathBuf,
}

impl FileReport {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        File::create(&path).map_err(|source| SyphonError::Report {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileReport {
    fn append(&mut self, section: &ReportSection) -> Result<()> {
        let write = || -> std::io::Result<()> {
            let mut f = OpenOptions::new().append(true).open(&self.path)?;
            f.write_all(section.render().as_bytes())?;
            f.flush()
        };
        write().map_err(|source| SyphonError::Report {
            path: self.path.clone(),
            source,
        })
    }
}

// --- Test helper ---
#[derive(Debug, Default)]
pub struct MemoryReport {
    pub sections: Vec<ReportSection>,
}

impl MemoryReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendered(&self) -> String {
        self.sections.iter().map(ReportSection::render).collect()
    }
}

impl ReportSink for MemoryReport {
    fn append(&mut self, section: &ReportSection) -> Result<()> {
        self.sections.push(section.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_section_trims_each_line() {
        let s = ReportSection::Comments {
            label: "admin".into(),
            comments: vec!["  hi ".into(), "\n multi\n".into()],
        };
        assert_eq!(s.render(), "----- admin -----\nhi\nmulti\n\n");
    }

    #[test]
    fn error_section_has_prefix() {
        let s = ReportSection::Error {
            label: "http://example.com".into(),
            message: "operation timed out".into(),
        };
        assert_eq!(
            s.render(),
            "----- http://example.com -----\nError: operation timed out\n\n"
        );
    }

    #[test]
    fn file_report_truncates_then_appends() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("out.txt");
        std::fs::write(&p, "stale content\n").unwrap();

        let mut r = FileReport::create(&p).unwrap();
        assert_eq!(std::fs::read_to_string(&p).unwrap(), "");

        r.append(&ReportSection::Error {
            label: "a".into(),
            message: "boom".into(),
        })
        .unwrap();
        r.append(&ReportSection::Comments {
            label: "b".into(),
            comments: vec![" c ".into()],
        })
        .unwrap();

        assert_eq!(
            std::fs::read_to_string(&p).unwrap(),
            "----- a -----\nError: boom\n\n----- b -----\nc\n\n"
        );
    }

    #[test]
    fn file_report_in_missing_dir_is_report_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileReport::create(dir.path().join("no/such/dir/out.txt")).unwrap_err();
        assert!(matches!(err, SyphonError::Report { .. }));
    }
}
