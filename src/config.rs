// src/config.rs
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::DEFAULT_USER_AGENT;
use crate::report::DEFAULT_OUTPUT;
use crate::target::BlankLines;
use crate::wordlist::MissingWordlist;

pub const ENV_CONFIG_PATH: &str = "SYPHON_CONFIG_PATH";

fn default_timeout_secs() -> u64 {
    5
}
fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

/// File-level settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub blank_lines: BlankLines,
    #[serde(default)]
    pub missing_wordlist: MissingWordlist,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            output: default_output(),
            user_agent: default_user_agent(),
            blank_lines: BlankLines::default(),
            missing_wordlist: MissingWordlist::default(),
        }
    }
}

/// Everything one run needs, after CLI flags were layered over the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub base: String,
    pub wordlist: Option<PathBuf>,
    pub timeout: Duration,
    pub output: PathBuf,
    pub user_agent: String,
    pub blank_lines: BlankLines,
    pub missing_wordlist: MissingWordlist,
}

impl RunConfig {
    /// Defaults for `base` with no wordlist.
    pub fn new(base: impl Into<String>) -> Self {
        Self::from_file(base, FileConfig::default())
    }

    pub fn from_file(base: impl Into<String>, file: FileConfig) -> Self {
        Self {
            base: base.into(),
            wordlist: None,
            timeout: Duration::from_secs(file.timeout_secs),
            output: file.output,
            user_agent: file.user_agent,
            blank_lines: file.blank_lines,
            missing_wordlist: file.missing_wordlist,
        }
    }
}

/// Load settings from an explicit path. TOML or JSON, picked by extension.
pub fn load_config_from(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_config(&content, &ext).with_context(|| format!("parsing {}", path.display()))
}

/// Lookup order:
/// 1) explicit path (CLI) or $SYPHON_CONFIG_PATH, which must exist
/// 2) config/syphon.toml
/// 3) config/syphon.json
/// 4) built-in defaults
pub fn load_config_default(explicit: Option<&Path>) -> Result<FileConfig> {
    let from_env = std::env::var(ENV_CONFIG_PATH).ok().map(PathBuf::from);
    if let Some(pb) = explicit.map(Path::to_path_buf).or(from_env) {
        if pb.exists() {
            return load_config_from(&pb);
        }
        return Err(anyhow!("config path {} does not exist", pb.display()));
    }
    let toml_p = PathBuf::from("config/syphon.toml");
    if toml_p.exists() {
        return load_config_from(&toml_p);
    }
    let json_p = PathBuf::from("config/syphon.json");
    if json_p.exists() {
        return load_config_from(&json_p);
    }
    Ok(FileConfig::default())
}

fn parse_config(s: &str, hint_ext: &str) -> Result<FileConfig> {
    let cfg: FileConfig = match hint_ext {
        "json" => serde_json::from_str(s)?,
        _ => toml::from_str(s)?,
    };
    if cfg.timeout_secs == 0 {
        return Err(anyhow!("timeout_secs must be greater than zero"));
    }
    if cfg.user_agent.trim().is_empty() {
        return Err(anyhow!("user_agent must not be empty"));
    }
    Ok(cfg)
}
