// src/cli.rs
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{FileConfig, RunConfig};
use crate::target::BlankLines;
use crate::wordlist::MissingWordlist;

/// Syphon: HTML comment harvester.
#[derive(Debug, Parser)]
#[command(name = "syphon", version)]
pub struct Cli {
    /// Base URL to scrape for comments.
    pub url: String,

    /// Optional wordlist file of path suffixes, one per line.
    #[arg(short, long, env = "SYPHON_WORDLIST")]
    pub wordlist: Option<PathBuf>,

    /// Per-request timeout in seconds (default: 5).
    #[arg(short, long, env = "SYPHON_TIMEOUT_SECS",
          value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Report file, truncated at start (default: syphonResults.txt).
    #[arg(short, long, env = "SYPHON_OUTPUT")]
    pub output: Option<PathBuf>,

    /// TOML or JSON settings file.
    #[arg(long, env = "SYPHON_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Ignore blank wordlist lines instead of re-fetching the base URL.
    #[arg(long)]
    pub skip_blank_lines: bool,

    /// Fetch the base URL alone when the wordlist cannot be read.
    #[arg(long)]
    pub fallback_to_base: bool,
}

impl Cli {
    /// Layer flags over file settings; flags win.
    pub fn into_run_config(self, file: FileConfig) -> RunConfig {
        let mut cfg = RunConfig::from_file(self.url, file);
        cfg.wordlist = self.wordlist;
        if let Some(secs) = self.timeout {
            cfg.timeout = Duration::from_secs(secs);
        }
        if let Some(out) = self.output {
            cfg.output = out;
        }
        if self.skip_blank_lines {
            cfg.blank_lines = BlankLines::Skip;
        }
        if self.fallback_to_base {
            cfg.missing_wordlist = MissingWordlist::BaseOnly;
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_come_from_file_config() {
        let cli = Cli::try_parse_from(["syphon", "http://example.com"]).unwrap();
        let cfg = cli.into_run_config(FileConfig::default());
        assert_eq!(cfg.base, "http://example.com");
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert_eq!(cfg.output, PathBuf::from("syphonResults.txt"));
        assert!(cfg.wordlist.is_none());
        assert_eq!(cfg.blank_lines, BlankLines::Keep);
        assert_eq!(cfg.missing_wordlist, MissingWordlist::Skip);
    }

    #[test]
    fn short_flags_override_file() {
        let cli = Cli::try_parse_from([
            "syphon", "http://h", "-w", "dirs.txt", "-t", "2", "-o", "out.txt",
            "--skip-blank-lines", "--fallback-to-base",
        ])
        .unwrap();
        let file = FileConfig {
            timeout_secs: 30,
            ..FileConfig::default()
        };
        let cfg = cli.into_run_config(file);
        assert_eq!(cfg.wordlist, Some(PathBuf::from("dirs.txt")));
        assert_eq!(cfg.timeout, Duration::from_secs(2));
        assert_eq!(cfg.output, PathBuf::from("out.txt"));
        assert_eq!(cfg.blank_lines, BlankLines::Skip);
        assert_eq!(cfg.missing_wordlist, MissingWordlist::BaseOnly);
    }

    #[test]
    fn url_is_required_and_timeout_positive() {
        assert!(Cli::try_parse_from(["syphon"]).is_err());
        assert!(Cli::try_parse_from(["syphon", "http://h", "--timeout", "0"]).is_err());
    }
}
