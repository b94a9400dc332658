//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use crate::document::{Catalog, Document, TocSource};
use crate::metadata::Metadata;
use crate::storage::{Storage, StorageError};

/// Mock storage for testing.
///
/// Stores documents and declarations in memory. Use the builder methods
/// to configure the mock with test data.
///
/// # Example
///
/// ```ignore
/// use docnav_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_document("/docs/basics/intro/overview.md")
///     .with_toc("/docs/basics/_toc.yaml", serde_json::json!(["intro/"]));
///
/// let catalog = storage.scan().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    documents: Vec<Document>,
    tocs: Vec<TocSource>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document without front matter.
    #[must_use]
    pub fn with_document(self, fs_path: impl Into<String>) -> Self {
        self.with_metadata(fs_path, Metadata::default())
    }

    /// Add a document whose front matter sets `title`.
    #[must_use]
    pub fn with_titled_document(self, fs_path: impl Into<String>, title: impl Into<String>) -> Self {
        let metadata = Metadata {
            title: Some(title.into()),
            ..Default::default()
        };
        self.with_metadata(fs_path, metadata)
    }

    /// Add a document with explicit front matter.
    #[must_use]
    pub fn with_metadata(mut self, fs_path: impl Into<String>, metadata: Metadata) -> Self {
        self.documents.push(Document::new(fs_path, metadata));
        self
    }

    /// Add a table-of-contents declaration.
    ///
    /// # Arguments
    ///
    /// * `fs_path` - Path of the declaration file (e.g., `/docs/basics/_toc.yaml`)
    /// * `raw` - Decoded declaration content
    #[must_use]
    pub fn with_toc(mut self, fs_path: impl Into<String>, raw: serde_json::Value) -> Self {
        self.tocs.push(TocSource::new(fs_path, raw));
        self
    }
}

impl Storage for MockStorage {
    fn scan(&self) -> Result<Catalog, StorageError> {
        Ok(Catalog {
            documents: self.documents.clone(),
            tocs: self.tocs.clone(),
        })
    }
}
