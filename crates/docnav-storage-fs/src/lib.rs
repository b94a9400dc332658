//! Filesystem storage implementation for docnav.
//!
//! This crate provides [`FsStorage`], a filesystem-based implementation of the
//! [`Storage`](docnav_storage::Storage) trait. It handles:
//!
//! - Recursive scanning of section content roots for `.md`/`.mdx` files
//! - YAML front matter extraction into [`Metadata`](docnav_storage::Metadata)
//! - Decoding of `_toc.yaml`/`_toc.yml`/`_toc.json` declarations
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use docnav_storage::Storage;
//! use docnav_storage_fs::FsStorage;
//!
//! let storage = FsStorage::new(PathBuf::from("."), vec!["/docs/basics".to_owned()]);
//! let catalog = storage.scan()?;
//! for doc in &catalog.documents {
//!     println!("{} (index: {})", doc.fs_path, doc.is_index);
//! }
//! ```

mod frontmatter;
mod scanner;
mod toc;

use std::fs;
use std::path::PathBuf;

use rayon::prelude::*;

use docnav_storage::{Catalog, Document, Metadata, Storage, StorageError, TocSource};
use frontmatter::parse_front_matter;
use scanner::{FileKind, FileRef, Scanner};
use toc::decode_toc;

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage implementation.
///
/// Walks every configured content root below the project directory. Files are
/// read and parsed in parallel on the global rayon pool.
pub struct FsStorage {
    /// Directory content roots are relative to.
    project_dir: PathBuf,
    /// Scanner for file discovery.
    scanner: Scanner,
}

impl FsStorage {
    /// Create a new filesystem storage.
    ///
    /// # Arguments
    ///
    /// * `project_dir` - Directory that content roots are relative to
    /// * `roots` - Section content roots with a leading `/` (e.g., `/docs/basics`)
    #[must_use]
    pub fn new(project_dir: PathBuf, roots: Vec<String>) -> Self {
        let scanner = Scanner::new(project_dir.clone(), roots);
        Self {
            project_dir,
            scanner,
        }
    }

    /// Read a discovered file as UTF-8.
    fn read(file: &FileRef) -> Result<String, StorageError> {
        fs::read_to_string(&file.os_path).map_err(|e| {
            StorageError::io(e, Some(file.os_path.clone())).with_backend(BACKEND)
        })
    }

    /// Build a document record, falling back to empty metadata on bad front matter.
    fn build_document(file: &FileRef) -> Result<Document, StorageError> {
        let content = Self::read(file)?;
        let metadata = parse_front_matter(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %file.fs_path, error = %e, "Ignoring malformed front matter");
            Metadata::default()
        });
        Ok(Document::new(file.fs_path.clone(), metadata))
    }

    /// Build a declaration source, skipping files that fail to decode.
    fn build_toc(file: &FileRef) -> Result<Option<TocSource>, StorageError> {
        let content = Self::read(file)?;
        let extension = file.fs_path.rsplit_once('.').map_or("", |(_, ext)| ext);
        match decode_toc(&content, extension) {
            Ok(raw) => Ok(Some(TocSource::new(file.fs_path.clone(), raw))),
            Err(e) => {
                tracing::warn!(path = %file.fs_path, error = %e, "Ignoring undecodable declaration");
                Ok(None)
            }
        }
    }
}

impl Storage for FsStorage {
    fn scan(&self) -> Result<Catalog, StorageError> {
        if !self.project_dir.is_dir() {
            return Err(StorageError::not_found(self.project_dir.clone()).with_backend(BACKEND));
        }

        let (content_files, toc_files): (Vec<_>, Vec<_>) = self
            .scanner
            .scan()
            .into_iter()
            .partition(|file| file.kind == FileKind::Content);

        let documents = content_files
            .par_iter()
            .map(Self::build_document)
            .collect::<Result<Vec<_>, _>>()?;

        let tocs = toc_files
            .par_iter()
            .map(Self::build_toc)
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        tracing::info!(
            documents = documents.len(),
            tocs = tocs.len(),
            project_dir = %self.project_dir.display(),
            "Scanned content"
        );

        Ok(Catalog { documents, tocs })
    }
}
