//! Document records and storage abstraction for docnav.
//!
//! This crate provides a [`Storage`] trait that hides how content files and
//! table-of-contents declarations are discovered. The navigation core only
//! ever sees the resulting [`Catalog`], which makes it possible to:
//!
//! - **Unit test** navigation without touching the real filesystem
//! - **Swap backends** (filesystem walk, pre-built manifest, in-memory)
//! - **Keep I/O out** of the request-scoped navigation logic
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Document`] records keyed by their content filesystem path
//! - [`TocSource`] raw, loosely-typed ordering declarations
//! - [`Storage`] trait with a single `scan()` method returning a [`Catalog`]
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Filesystem Path Convention
//!
//! Paths are strings with a leading `/`, joined with `/` and rooted at the
//! project directory, e.g. `/docs/basics/introduction/index.md`. They are
//! identifiers, not OS paths, so they compare identically on every platform.

mod document;
mod metadata;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use document::{
    CONTENT_EXTENSIONS, Catalog, Document, TOC_EXTENSIONS, TOC_STEM, TocSource, is_content_file,
    is_toc_file,
};
pub use metadata::{Metadata, MetadataError};
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Storage, StorageError, StorageErrorKind};
