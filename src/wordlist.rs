// src/wordlist.rs
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, SyphonError};

/// Policy when `--wordlist` points at nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingWordlist {
    /// Warn and process zero targets (report stays empty).
    #[default]
    Skip,
    /// Warn and fetch the base address alone.
    BaseOnly,
}

/// Read one suffix per line (see `LINE_BREAKS`). Lines are not trimmed and
/// blank ones are kept; `build_targets` decides what they mean.
pub fn load_wordlist(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SyphonError::WordlistMissing {
            path: path.to_path_buf(),
        },
        _ => SyphonError::Wordlist {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    Ok(parse_wordlist(&content))
}

/// Line boundaries: `\n`, `\r\n`, a lone `\r`, and the other Unicode line
/// separators (VT, FF, FS, GS, RS, NEL, LS, PS). A trailing break does not
/// produce a final empty entry.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

pub fn parse_wordlist(content: &str) -> Vec<String> {
    let content = content.replace("\r\n", "\n");
    if content.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<String> = content.split(LINE_BREAKS).map(str::to_string).collect();
    if content.ends_with(LINE_BREAKS) {
        out.pop();
    }
    out
}
