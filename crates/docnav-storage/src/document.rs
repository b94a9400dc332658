//! Document records and table-of-contents sources.
//!
//! A [`Document`] is created once, when content is discovered, and never
//! mutated afterwards. Consumers only read and project it.

use serde::Serialize;

use crate::metadata::Metadata;

/// Recognized content file extensions.
pub const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// File stem of table-of-contents declarations (`_toc.yaml`, `_toc.json`, ...).
pub const TOC_STEM: &str = "_toc";

/// Recognized declaration extensions, in lookup preference order.
pub const TOC_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Check whether a file name carries a recognized content extension.
#[must_use]
pub fn is_content_file(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && CONTENT_EXTENSIONS.contains(&ext))
}

/// Check whether a file name is a table-of-contents declaration.
#[must_use]
pub fn is_toc_file(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| stem == TOC_STEM && TOC_EXTENSIONS.contains(&ext))
}

/// One source content file.
///
/// The record carries only what the file itself says. Display titles depend
/// on the section a document is viewed through and are derived there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Filesystem path, unique key (e.g., `/docs/basics/variables/intro.md`).
    pub fs_path: String,
    /// True if the file is its directory's `index.md`/`index.mdx`.
    pub is_index: bool,
    /// Front matter, owned by the loader.
    pub metadata: Metadata,
}

impl Document {
    /// Create a document record, deriving `is_index` from the file name.
    #[must_use]
    pub fn new(fs_path: impl Into<String>, metadata: Metadata) -> Self {
        let fs_path = fs_path.into();
        let file_name = fs_path.rsplit_once('/').map_or(fs_path.as_str(), |(_, name)| name);
        let is_index = is_content_file(file_name)
            && file_name.rsplit_once('.').is_some_and(|(stem, _)| stem == "index");

        Self {
            fs_path,
            is_index,
            metadata,
        }
    }
}

/// Raw table-of-contents declaration for one directory.
///
/// `raw` is whatever the declaration file contained, decoded into a JSON
/// value. Its shape is validated later, when the declaration is parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct TocSource {
    /// Path of the declaration file (e.g., `/docs/basics/_toc.yaml`).
    pub fs_path: String,
    /// Decoded declaration.
    pub raw: serde_json::Value,
}

impl TocSource {
    /// Create a declaration source.
    #[must_use]
    pub fn new(fs_path: impl Into<String>, raw: serde_json::Value) -> Self {
        Self {
            fs_path: fs_path.into(),
            raw,
        }
    }
}

/// Everything a storage backend discovered in one scan.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    /// Content documents, already filtered to recognized extensions.
    pub documents: Vec<Document>,
    /// Table-of-contents declarations, one per directory at most.
    pub tocs: Vec<TocSource>,
}
