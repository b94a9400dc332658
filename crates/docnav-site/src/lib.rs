//! Content indexing and navigation for docnav.
//!
//! This crate provides:
//! - [`ContentStore`]: Immutable index of documents and declarations
//! - [`Section`]: Per-section entries, route lookup and navigation tree
//! - [`routing`]: Request verdicts and previous/next links
//! - [`paths`]: Route and path string utilities
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use docnav_site::{ContentStore, Registry, SectionDef, routing};
//! use docnav_storage_fs::FsStorage;
//!
//! let registry = Registry::new("/just-go").with_section(SectionDef::new("basics", "docs/basics"));
//! let storage = FsStorage::new(PathBuf::from("."), registry.roots());
//! let store = ContentStore::load(&storage, registry)?;
//!
//! let section = store.section("basics");
//! let verdict = routing::resolve(&section, "introduction");
//! let links = routing::prev_next(verdict.nav(), "/just-go/basics/introduction/overview");
//! # Ok(())
//! # }
//! ```

mod navigation;
pub mod paths;
mod registry;
pub mod routing;
mod section;
mod store;
pub mod toc;

pub use navigation::{NavGroup, NavItem, flatten};
pub use registry::{ParsePolicyError, Registry, SectionDef, SectionSummary, UnlistedPolicy};
pub use routing::{PrevNext, Resolution};
pub use section::{ContentEntry, Resolver, Section};
pub use store::{ContentStore, PageParam};
pub use toc::{RawTocEntry, TocConfig, TocEntry};
