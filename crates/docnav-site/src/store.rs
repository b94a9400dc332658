//! Content store: the immutable document index.
//!
//! The store is built once from a storage [`Catalog`] and shared read-only by
//! every request. Sections are cheap views borrowed from it.

use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;

use serde::Serialize;

use docnav_storage::{Catalog, Document, Storage, StorageError, TOC_EXTENSIONS, TOC_STEM};

use crate::paths::fs_path_to_route;
use crate::registry::{Registry, SectionSummary};
use crate::section::Section;
use crate::toc::TocConfig;

/// Parameters of one statically generated page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageParam {
    /// Section id.
    pub section: String,
    /// Route below the section, absent for the section root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

/// Immutable index of documents and declarations.
pub struct ContentStore {
    registry: Registry,
    /// Documents keyed by fs path.
    documents: BTreeMap<String, Document>,
    /// Decoded declarations keyed by fs path of the declaration file.
    tocs: HashMap<String, serde_json::Value>,
}

impl ContentStore {
    /// Build a store from a scanned catalog.
    ///
    /// Documents sharing an fs path are deduplicated, the last one wins.
    #[must_use]
    pub fn new(catalog: Catalog, registry: Registry) -> Self {
        let mut documents = BTreeMap::new();
        for document in catalog.documents {
            if let Some(previous) = documents.insert(document.fs_path.clone(), document) {
                tracing::warn!(path = %previous.fs_path, "Duplicate document path");
            }
        }

        let tocs = catalog
            .tocs
            .into_iter()
            .map(|toc| (toc.fs_path, toc.raw))
            .collect();

        Self {
            registry,
            documents,
            tocs,
        }
    }

    /// Scan `storage` and build a store.
    ///
    /// # Errors
    ///
    /// Returns the storage error if scanning fails.
    pub fn load(storage: &dyn Storage, registry: Registry) -> Result<Self, StorageError> {
        let catalog = storage.scan()?;
        let store = Self::new(catalog, registry);
        tracing::info!(
            documents = store.documents.len(),
            sections = store.registry.sections().len(),
            "Content store loaded"
        );
        Ok(store)
    }

    /// Site layout the store was built for.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Every indexed document path, sorted.
    #[must_use]
    pub fn all_paths(&self) -> Vec<&str> {
        self.documents.keys().map(String::as_str).collect()
    }

    /// Documents below a section's content root, keyed by fs path.
    ///
    /// Unknown sections yield an empty map.
    #[must_use]
    pub fn documents_under(&self, section_id: &str) -> BTreeMap<&str, &Document> {
        let Some(section) = self.registry.section(section_id) else {
            tracing::debug!(section = section_id, "Unknown section");
            return BTreeMap::new();
        };

        self.documents
            .range::<str, _>((Bound::Included(section.root.as_str()), Bound::Unbounded))
            .take_while(|(path, _)| path.starts_with(section.root.as_str()))
            .filter(|(path, _)| section.contains(path))
            .map(|(path, document)| (path.as_str(), document))
            .collect()
    }

    /// Declaration for `directory`, or an empty config.
    ///
    /// `_toc.yaml`, `_toc.yml` and `_toc.json` are tried in that order.
    #[must_use]
    pub fn toc_for(&self, directory: Option<&str>) -> TocConfig {
        let Some(directory) = directory else {
            return TocConfig::default();
        };
        let directory = directory.trim_end_matches('/');

        let raw = TOC_EXTENSIONS
            .iter()
            .find_map(|ext| self.tocs.get(&format!("{directory}/{TOC_STEM}.{ext}")));
        if raw.is_none() {
            tracing::debug!(directory, "No declaration");
        }
        TocConfig::parse(raw)
    }

    /// View of one section.
    ///
    /// Unknown ids produce an empty section.
    #[must_use]
    pub fn section(&self, id: &str) -> Section<'_> {
        Section::new(self, id)
    }

    /// Parameters of every statically generated page.
    ///
    /// Emits one entry per document route, followed by one section-root entry
    /// per section in first-seen order.
    #[must_use]
    pub fn page_params(&self) -> Vec<PageParam> {
        let sections = self.registry.sections();
        let mut params = Vec::new();
        let mut seen: Vec<&str> = Vec::new();

        for path in self.documents.keys() {
            let route = fs_path_to_route(path, sections);
            let mut parts = route.trim_start_matches('/').splitn(2, '/');
            let Some(section) = parts.next().filter(|s| !s.is_empty()) else {
                continue;
            };
            let Some(def) = self.registry.section(section) else {
                continue;
            };

            let page = parts.next().unwrap_or("").trim_end_matches('/');
            if !page.is_empty() {
                params.push(PageParam {
                    section: def.id.clone(),
                    page: Some(page.to_owned()),
                });
            }
            if !seen.contains(&def.id.as_str()) {
                seen.push(&def.id);
            }
        }

        params.extend(seen.into_iter().map(|section| PageParam {
            section: section.to_owned(),
            page: None,
        }));
        params
    }

    /// Summaries of all sections in registry order.
    #[must_use]
    pub fn summaries(&self) -> Vec<SectionSummary> {
        self.registry.sections().iter().map(SectionSummary::from).collect()
    }
}
