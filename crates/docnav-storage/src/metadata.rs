//! Document front matter types.
//!
//! Provides the [`Metadata`] struct holding the key-value bag a content file
//! declares in its front matter. This module contains only data types;
//! parsing is implemented by individual storage backends.
//!
//! # Metadata Fields
//!
//! - `title`: Custom display title (overrides the path-derived one)
//! - `description`: Page description
//! - `extra`: Every other key, kept verbatim for renderers

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Front matter of one content document.
///
/// All fields are optional. Unknown keys are preserved in `extra` so the
/// bag stays opaque to the navigation core.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Custom display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Page description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Remaining front matter keys.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Metadata {
    /// Check if metadata has any non-default values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.extra.is_empty()
    }

    /// Look up a raw front matter value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }
}

/// Error type for metadata operations.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// Parsing error (format-specific).
    #[error("{0}")]
    Parse(String),
}
