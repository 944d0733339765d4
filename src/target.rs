// src/target.rs
use serde::{Deserialize, Serialize};

/// What to do with empty wordlist lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlankLines {
    /// Empty suffix: fetch the base address again, labelled with it.
    #[default]
    Keep,
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Report header: the suffix verbatim, or the base address.
    pub label: String,
    pub address: String,
}

impl Target {
    pub fn base(base: &str) -> Self {
        Self {
            label: base.to_string(),
            address: base.to_string(),
        }
    }

    pub fn with_suffix(base: &str, suffix: &str) -> Self {
        if suffix.is_empty() {
            return Self::base(base);
        }
        Self {
            label: suffix.to_string(),
            address: format!("{base}/{suffix}"),
        }
    }
}

/// Strip trailing slashes so `base + "/" + suffix` never doubles them.
pub fn normalize_base(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}

/// Build targets in source order. `None` means "base address only";
/// duplicates are kept.
pub fn build_targets(base: &str, sub_targets: Option<&[String]>, blanks: BlankLines) -> Vec<Target> {
    let base = normalize_base(base);
    match sub_targets {
        None => vec![Target::base(&base)],
        Some(list) => list
            .iter()
            .filter(|s| !(blanks == BlankLines::Skip && s.is_empty()))
            .map(|s| Target::with_suffix(&base, s))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subs(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn base_only_when_no_sub_targets() {
        let t = build_targets("http://example.com/", None, BlankLines::Keep);
        assert_eq!(t, vec![Target::base("http://example.com")]);
    }

    #[test]
    fn suffixes_keep_order_and_duplicates() {
        let list = subs(&["admin", "login", "admin"]);
        let t = build_targets("http://h", Some(list.as_slice()), BlankLines::Keep);
        let addrs: Vec<_> = t.iter().map(|t| t.address.as_str()).collect();
        assert_eq!(addrs, vec!["http://h/admin", "http://h/login", "http://h/admin"]);
        assert_eq!(t[1].label, "login");
    }

    #[test]
    fn blank_line_resolves_to_base_when_kept() {
        let list = subs(&["", "a"]);
        let t = build_targets("http://h", Some(list.as_slice()), BlankLines::Keep);
        assert_eq!(t[0], Target::base("http://h"));
        assert_eq!(t[1].address, "http://h/a");
    }

    #[test]
    fn blank_line_dropped_when_skipped() {
        let list = subs(&["", "a", ""]);
        let t = build_targets("http://h", Some(list.as_slice()), BlankLines::Skip);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].label, "a");
    }

    #[test]
    fn empty_wordlist_gives_no_targets() {
        let t = build_targets("http://h", Some(&[][..]), BlankLines::Keep);
        assert!(t.is_empty());
    }
}
