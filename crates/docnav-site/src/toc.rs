//! Table-of-contents declarations.
//!
//! A declaration is an ordered list of entries for one directory. Each entry
//! is either a bare path string or a record:
//!
//! ```yaml
//! - path: intro/
//!   label: Introduction
//! - variables/
//! - path: drafts/
//!   hidden: true
//! ```
//!
//! Paths ending in `/` are groups (subdirectories), anything else names a
//! leaf document. Declarations are decoded loosely by storage, so every entry
//! is classified here and malformed ones are dropped without failing.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::paths::is_group_path;

static REPEATED_SLASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/{2,}").expect("invalid slash regex"));
static DOT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\./)+").expect("invalid dot prefix regex"));

/// A raw declaration element, classified by shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawTocEntry<'a> {
    /// Plain path string.
    Bare(&'a str),
    /// Record with a non-empty `path`.
    Record {
        path: &'a str,
        label: Option<&'a str>,
        hidden: bool,
    },
    /// Anything else: numbers, nulls, records without a usable `path`.
    Malformed,
}

impl<'a> RawTocEntry<'a> {
    /// Classify a decoded element.
    ///
    /// A `label` is kept only if it is a string, and `hidden` only counts when
    /// it is exactly boolean `true`.
    #[must_use]
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::String(path) => Self::Bare(path),
            Value::Object(record) => match record.get("path").and_then(Value::as_str) {
                Some(path) if !path.is_empty() => Self::Record {
                    path,
                    label: record.get("label").and_then(Value::as_str),
                    hidden: record.get("hidden") == Some(&Value::Bool(true)),
                },
                _ => Self::Malformed,
            },
            _ => Self::Malformed,
        }
    }
}

/// One parsed declaration entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    /// Normalized path (`intro/` for groups, `overview` for documents).
    pub path: String,
    /// Author-supplied label.
    pub label: Option<String>,
    /// Whether the entry is suppressed from navigation.
    pub hidden: bool,
}

impl TocEntry {
    /// Whether this entry names a group.
    #[must_use]
    pub fn is_group(&self) -> bool {
        is_group_path(&self.path)
    }

    /// Path without its trailing slash.
    #[must_use]
    pub fn slug(&self) -> &str {
        self.path.strip_suffix('/').unwrap_or(&self.path)
    }
}

/// Parsed declaration for one directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TocConfig {
    /// Entries in declaration order.
    pub ordered: Vec<TocEntry>,
    /// Normalized path to label.
    pub alias: HashMap<String, String>,
    /// Normalized paths suppressed from navigation.
    pub hidden: HashSet<String>,
}

impl TocConfig {
    /// Parse a decoded declaration.
    ///
    /// `None`, `null` and non-sequence values produce an empty config.
    #[must_use]
    pub fn parse(raw: Option<&Value>) -> Self {
        let Some(Value::Array(elements)) = raw else {
            if let Some(value) = raw.filter(|v| !v.is_null()) {
                tracing::debug!(kind = value_kind(value), "Ignoring non-sequence declaration");
            }
            return Self::default();
        };

        let mut config = Self::default();
        for element in elements {
            let (raw_path, label, hidden) = match RawTocEntry::classify(element) {
                RawTocEntry::Bare(path) => (path, None, false),
                RawTocEntry::Record {
                    path,
                    label,
                    hidden,
                } => (path, label, hidden),
                RawTocEntry::Malformed => continue,
            };

            let path = if is_group_path(raw_path) {
                normalize_group(raw_path)
            } else {
                normalize_item(raw_path)
            };
            if path.is_empty() {
                continue;
            }

            if let Some(label) = label {
                config.alias.insert(path.clone(), label.to_owned());
            }
            if hidden {
                config.hidden.insert(path.clone());
            }
            config.ordered.push(TocEntry {
                path,
                label: label.map(str::to_owned),
                hidden,
            });
        }
        config
    }

    /// Whether the config declares nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Whether any of `keys` is hidden.
    #[must_use]
    pub fn is_hidden(&self, keys: &[&str]) -> bool {
        keys.iter().any(|key| self.hidden.contains(*key))
    }

    /// First non-empty label registered under one of `keys`.
    #[must_use]
    pub fn label(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.alias.get(*key))
            .map(String::as_str)
            .find(|label| !label.is_empty())
    }
}

/// Normalize a group path: collapse slashes, drop leading `./`, end with `/`.
#[must_use]
pub fn normalize_group(path: &str) -> String {
    let mut normalized = strip_prefixes(path);
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

/// Normalize an item path: collapse slashes, drop leading `./`, no trailing `/`.
#[must_use]
pub fn normalize_item(path: &str) -> String {
    let mut normalized = strip_prefixes(path);
    if normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}

fn strip_prefixes(path: &str) -> String {
    let collapsed = REPEATED_SLASHES.replace_all(path, "/");
    DOT_PREFIX.replace(&collapsed, "").into_owned()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn paths(config: &TocConfig) -> Vec<&str> {
        config.ordered.iter().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn test_parse_absent_is_empty() {
        assert!(TocConfig::parse(None).is_empty());
        assert!(TocConfig::parse(Some(&Value::Null)).is_empty());
    }

    #[test]
    fn test_parse_non_sequence_is_empty() {
        let raw = json!({ "intro/": { "label": "Introduction" } });

        assert_eq!(TocConfig::parse(Some(&raw)), TocConfig::default());
    }

    #[test]
    fn test_parse_preserves_order() {
        let raw = json!(["zeta", "alpha/", { "path": "middle" }]);

        let config = TocConfig::parse(Some(&raw));

        assert_eq!(paths(&config), vec!["zeta", "alpha/", "middle"]);
    }

    #[test]
    fn test_parse_labels_and_hidden() {
        let raw = json!([
            { "path": "intro/", "label": "Introduction" },
            { "path": "drafts/", "hidden": true },
            { "path": "notes", "hidden": "yes" },
        ]);

        let config = TocConfig::parse(Some(&raw));

        assert_eq!(config.label(&["intro/"]), Some("Introduction"));
        assert!(config.is_hidden(&["drafts/"]));
        assert!(!config.is_hidden(&["notes"]));
        assert_eq!(paths(&config), vec!["intro/", "drafts/", "notes"]);
    }

    #[test]
    fn test_parse_skips_malformed_entries() {
        let raw = json!([
            42,
            null,
            { "label": "No path" },
            { "path": "" },
            { "path": 7 },
            "",
            "kept",
        ]);

        let config = TocConfig::parse(Some(&raw));

        assert_eq!(paths(&config), vec!["kept"]);
    }

    #[test]
    fn test_parse_ignores_non_string_label() {
        let raw = json!([{ "path": "intro/", "label": 3 }]);

        let config = TocConfig::parse(Some(&raw));

        assert!(config.alias.is_empty());
        assert_eq!(config.ordered[0].label, None);
    }

    #[test]
    fn test_parse_normalizes_paths() {
        let raw = json!(["./intro//", ".//./setup", "a//b"]);

        let config = TocConfig::parse(Some(&raw));

        assert_eq!(paths(&config), vec!["intro/", "setup", "a/b"]);
    }

    #[test]
    fn test_group_classification_uses_raw_path() {
        let raw = json!(["intro/", "intro"]);

        let config = TocConfig::parse(Some(&raw));

        assert!(config.ordered[0].is_group());
        assert!(!config.ordered[1].is_group());
        assert_eq!(config.ordered[0].slug(), "intro");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for path in ["intro/", "./intro//", "a//b/", ".//x", "./././y/"] {
            let group = normalize_group(path);
            assert_eq!(normalize_group(&group), group);
            assert!(group.ends_with('/') && !group.ends_with("//"));

            let item = normalize_item(path.trim_end_matches('/'));
            assert_eq!(normalize_item(&item), item);
            assert!(!item.ends_with('/'));
        }
    }

    #[test]
    fn test_label_skips_empty_alias() {
        let raw = json!([{ "path": "intro", "label": "" }]);

        let config = TocConfig::parse(Some(&raw));

        assert_eq!(config.label(&["intro"]), None);
    }

    #[test]
    fn test_classify() {
        assert_eq!(RawTocEntry::classify(&json!("a")), RawTocEntry::Bare("a"));
        assert_eq!(
            RawTocEntry::classify(&json!({ "path": "b", "hidden": true })),
            RawTocEntry::Record {
                path: "b",
                label: None,
                hidden: true
            }
        );
        assert_eq!(RawTocEntry::classify(&json!([1])), RawTocEntry::Malformed);
    }
}
