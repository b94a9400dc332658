//! Section registry.
//!
//! The registry is the fixed site layout: the deployment base path, the
//! configured sections and how undeclared content is treated. It is built
//! once from configuration and handed to [`ContentStore`](crate::ContentStore).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::paths::{normalize_root, strip_content_file, trim_slashes};

/// How navigation treats documents that no declaration mentions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnlistedPolicy {
    /// Undeclared documents and groups never appear.
    #[default]
    Omit,
    /// Undeclared documents and groups are appended alphabetically.
    AppendAlphabetical,
}

/// Unrecognized unlisted policy name.
#[derive(Debug, thiserror::Error)]
#[error("unlisted must be \"omit\" or \"append-alphabetical\", got \"{0}\"")]
pub struct ParsePolicyError(String);

impl FromStr for UnlistedPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "omit" => Ok(Self::Omit),
            "append-alphabetical" => Ok(Self::AppendAlphabetical),
            other => Err(ParsePolicyError(other.to_owned())),
        }
    }
}

impl fmt::Display for UnlistedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Omit => "omit",
            Self::AppendAlphabetical => "append-alphabetical",
        })
    }
}

/// A configured section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionDef {
    /// Route prefix identifier (e.g., `basics`).
    pub id: String,
    /// Normalized content root (e.g., `/docs/basics`).
    pub root: String,
    /// Display title.
    pub title: Option<String>,
    /// Display subtitle.
    pub subtitle: Option<String>,
    /// Landing link override.
    pub href: Option<String>,
}

impl SectionDef {
    /// Create a section, normalizing its content root.
    #[must_use]
    pub fn new(id: impl Into<String>, root: &str) -> Self {
        Self {
            id: id.into(),
            root: normalize_root(root),
            title: None,
            subtitle: None,
            href: None,
        }
    }

    /// Set the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the display subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the landing link.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Whether `fs_path` lies below this section's content root.
    #[must_use]
    pub fn contains(&self, fs_path: &str) -> bool {
        fs_path
            .strip_prefix(self.root.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Route of `fs_path` within this section, without base path.
    ///
    /// Returns `None` when the path lies outside the content root.
    #[must_use]
    pub fn route_for(&self, fs_path: &str) -> Option<String> {
        let rel = fs_path.strip_prefix(self.root.as_str())?.strip_prefix('/')?;
        Some(format!("/{}/{}", self.id, strip_content_file(rel)))
    }
}

/// Serializable section overview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl From<&SectionDef> for SectionSummary {
    fn from(def: &SectionDef) -> Self {
        Self {
            id: def.id.clone(),
            title: def
                .title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| def.id.clone()),
            subtitle: def.subtitle.clone(),
            href: def.href.clone(),
        }
    }
}

/// Site layout: base path, sections and unlisted policy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    base_path: String,
    sections: Vec<SectionDef>,
    unlisted: UnlistedPolicy,
}

impl Registry {
    /// Create an empty registry for a deployment base path.
    ///
    /// The trailing slash of `base_path` is removed, so `/` means no prefix.
    #[must_use]
    pub fn new(base_path: &str) -> Self {
        Self {
            base_path: base_path.trim_end_matches('/').to_owned(),
            ..Self::default()
        }
    }

    /// Add a section.
    #[must_use]
    pub fn with_section(mut self, section: SectionDef) -> Self {
        self.sections.push(section);
        self
    }

    /// Set the unlisted policy.
    #[must_use]
    pub fn with_unlisted(mut self, policy: UnlistedPolicy) -> Self {
        self.unlisted = policy;
        self
    }

    /// Deployment base path without trailing slash.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Sections in configuration order.
    #[must_use]
    pub fn sections(&self) -> &[SectionDef] {
        &self.sections
    }

    #[must_use]
    pub fn unlisted(&self) -> UnlistedPolicy {
        self.unlisted
    }

    /// Look up a section by id, ignoring surrounding slashes.
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&SectionDef> {
        let id = trim_slashes(id);
        self.sections.iter().find(|s| s.id == id)
    }

    /// Content roots of all sections.
    #[must_use]
    pub fn roots(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.root.clone()).collect()
    }
}
