//! Section views: entry listing, route lookup and navigation building.
//!
//! A [`Section`] binds the documents below one content root to the section's
//! route prefix. It is rebuilt per request; all derived structures borrow the
//! shared [`ContentStore`].

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use docnav_storage::Document;

use crate::navigation::{NavGroup, NavItem};
use crate::paths::{capitalize, normalize_route, relative_route, relative_segments, trim_slashes};
use crate::registry::{SectionDef, UnlistedPolicy};
use crate::store::ContentStore;
use crate::toc::TocConfig;

/// Per-section projection of a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContentEntry {
    /// Absolute route, trailing slash only for index documents.
    pub url: String,
    /// Parent directory relative to the section, empty at the section root.
    pub directory: String,
    /// Display title, never empty.
    pub title: String,
    /// Whether the document is a directory index.
    pub is_index: bool,
}

/// View of the documents below one section root.
pub struct Section<'a> {
    store: &'a ContentStore,
    id: String,
    /// Base path joined with the section id (e.g., `/just-go/basics`).
    base: String,
    def: Option<&'a SectionDef>,
    documents: BTreeMap<&'a str, &'a Document>,
}

impl<'a> Section<'a> {
    pub(crate) fn new(store: &'a ContentStore, id: &str) -> Self {
        let id = trim_slashes(id).to_owned();
        let def = store.registry().section(&id);
        let base = format!("{}/{id}", store.registry().base_path());
        let documents = store.documents_under(&id);
        Self {
            store,
            id,
            base,
            def,
            documents,
        }
    }

    /// Section id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Route prefix of the section.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Registry definition, `None` for unknown sections.
    #[must_use]
    pub fn definition(&self) -> Option<&'a SectionDef> {
        self.def
    }

    /// Documents bound to this section, keyed by fs path.
    #[must_use]
    pub fn documents(&self) -> &BTreeMap<&'a str, &'a Document> {
        &self.documents
    }

    fn content_root(&self) -> Option<&'a str> {
        self.def.map(|def| def.root.as_str())
    }

    /// Project every bound document, paired with its record.
    fn project(&self) -> Vec<(ContentEntry, &'a Document)> {
        let Some(def) = self.def else {
            return Vec::new();
        };
        let base_path = self.store.registry().base_path();

        self.documents
            .values()
            .filter_map(|&document| {
                let route = def.route_for(&document.fs_path)?;
                let url = format!("{base_path}{route}");
                let rel = relative_route(&url, &self.base);
                let directory = rel.rsplit_once('/').map_or("", |(dir, _)| dir).to_owned();

                let title = document
                    .metadata
                    .title
                    .clone()
                    .filter(|title| !title.is_empty())
                    .unwrap_or_else(|| {
                        let fallback = if document.is_index {
                            directory.as_str()
                        } else {
                            rel.rsplit('/').next().unwrap_or("")
                        };
                        if fallback.is_empty() {
                            self.id.clone()
                        } else {
                            fallback.to_owned()
                        }
                    });

                let entry = ContentEntry {
                    url,
                    directory,
                    title,
                    is_index: document.is_index,
                };
                Some((entry, document))
            })
            .collect()
    }

    /// Content entries of the section, ordered by fs path.
    #[must_use]
    pub fn entries(&self) -> Vec<ContentEntry> {
        self.project().into_iter().map(|(entry, _)| entry).collect()
    }

    /// Build an exact route lookup.
    #[must_use]
    pub fn resolver(&self) -> Resolver<'a> {
        let routes = self
            .project()
            .into_iter()
            .map(|(entry, document)| (normalize_route(&entry.url).to_owned(), document))
            .collect();
        Resolver {
            base: self.base.clone(),
            routes,
        }
    }

    /// Build the navigation tree from the section's declarations.
    #[must_use]
    pub fn nav(&self) -> Vec<NavGroup> {
        let entries = self.entries();
        let index = NavIndex::new(&entries, &self.base);
        let root_toc = self.store.toc_for(self.content_root());
        let policy = self.store.registry().unlisted();

        if root_toc.is_empty() && policy == UnlistedPolicy::Omit {
            tracing::debug!(section = %self.id, "No root declaration, navigation is empty");
            return Vec::new();
        }

        let mut nav = Vec::new();
        let mut declared_docs = HashSet::new();
        let mut declared_groups = HashSet::new();
        for entry in &root_toc.ordered {
            if entry.is_group() {
                declared_groups.insert(entry.slug());
                nav.extend(self.build_group(entry.slug(), &root_toc, &index, policy));
            } else {
                declared_docs.insert(entry.slug());
                nav.extend(self.build_leaf(entry.slug(), &root_toc, &index));
            }
        }

        if policy == UnlistedPolicy::AppendAlphabetical {
            let leaves = index
                .top_docs
                .keys()
                .filter(|slug| !declared_docs.contains(*slug))
                .filter_map(|slug| self.build_leaf(slug, &root_toc, &index));
            let groups = index
                .groups
                .keys()
                .filter(|dir| !declared_groups.contains(*dir))
                .filter_map(|dir| self.build_group(dir, &root_toc, &index, policy));

            let mut unlisted: Vec<_> = leaves.chain(groups).collect();
            unlisted.sort_by_cached_key(|group| (group.label.to_lowercase(), group.directory.clone()));
            nav.extend(unlisted);
        }

        nav
    }

    fn build_leaf(&self, slug: &str, root_toc: &TocConfig, index: &NavIndex<'_>) -> Option<NavGroup> {
        if root_toc.is_hidden(&[slug]) {
            return None;
        }
        let Some(entry) = index.top_docs.get(slug) else {
            tracing::debug!(section = %self.id, slug, "Declared document not found");
            return None;
        };

        let label = root_toc
            .label(&[slug])
            .map_or_else(|| display_title(entry, slug), str::to_owned);
        Some(NavGroup::leaf(slug, label, entry.url.clone()))
    }

    fn build_group(
        &self,
        dir: &str,
        root_toc: &TocConfig,
        index: &NavIndex<'_>,
        policy: UnlistedPolicy,
    ) -> Option<NavGroup> {
        let key = format!("{dir}/");
        if root_toc.is_hidden(&[key.as_str()]) {
            return None;
        }

        let local_dir = self.content_root().map(|root| format!("{root}/{dir}"));
        let local = self.store.toc_for(local_dir.as_deref());
        let mut items = Vec::new();

        if let Some(members) = index.groups.get(dir) {
            let mut declared = HashSet::new();
            for toc_entry in &local.ordered {
                let slug = toc_entry.slug();
                declared.insert(slug);
                if local.is_hidden(&[toc_entry.path.as_str(), slug]) {
                    continue;
                }
                let Some(entry) = members.get(slug) else {
                    continue;
                };
                let title = local
                    .label(&[toc_entry.path.as_str(), slug])
                    .map_or_else(|| display_title(entry, slug), str::to_owned);
                items.push(NavItem {
                    url: entry.url.clone(),
                    title,
                });
            }

            if policy == UnlistedPolicy::AppendAlphabetical {
                let mut unlisted: Vec<_> = members
                    .iter()
                    .filter(|(slug, _)| !declared.contains(**slug) && !local.is_hidden(&[**slug]))
                    .map(|(slug, entry)| NavItem {
                        url: entry.url.clone(),
                        title: display_title(entry, slug),
                    })
                    .collect();
                unlisted.sort_by_cached_key(|item| (item.title.to_lowercase(), item.url.clone()));
                items.extend(unlisted);
            }
        }

        if items.is_empty() {
            tracing::debug!(section = %self.id, group = dir, "Omitting empty group");
            return None;
        }

        let label = root_toc
            .label(&[key.as_str()])
            .map_or_else(|| capitalize(dir), str::to_owned);
        Some(NavGroup::group(dir, label, items))
    }
}

fn display_title(entry: &ContentEntry, slug: &str) -> String {
    if entry.title.is_empty() {
        capitalize(slug)
    } else {
        entry.title.clone()
    }
}

/// Entries partitioned for navigation building.
struct NavIndex<'e> {
    /// Non-index documents directly under the section root, by slug.
    top_docs: BTreeMap<&'e str, &'e ContentEntry>,
    /// Documents one level below, by group directory then slug.
    groups: BTreeMap<&'e str, HashMap<&'e str, &'e ContentEntry>>,
}

impl<'e> NavIndex<'e> {
    fn new(entries: &'e [ContentEntry], base: &str) -> Self {
        let mut top_docs = BTreeMap::new();
        let mut groups: BTreeMap<&str, HashMap<&str, &ContentEntry>> = BTreeMap::new();

        for entry in entries {
            match relative_segments(&entry.url, base).as_slice() {
                [slug] if !entry.is_index => {
                    top_docs.insert(*slug, entry);
                }
                [dir, slug] => {
                    groups.entry(*dir).or_default().insert(*slug, entry);
                }
                _ => {}
            }
        }

        Self { top_docs, groups }
    }
}

/// Exact lookup from route to document.
pub struct Resolver<'a> {
    base: String,
    routes: HashMap<String, &'a Document>,
}

impl<'a> Resolver<'a> {
    /// Resolve a segment below the section base.
    ///
    /// An empty segment addresses the section root. Trailing slashes are
    /// ignored, nothing else is normalized.
    #[must_use]
    pub fn resolve(&self, segment: &str) -> Option<&'a Document> {
        let target = if segment.is_empty() {
            self.base.clone()
        } else {
            format!("{}/{segment}", self.base)
        };
        self.routes.get(normalize_route(&target)).copied()
    }

    /// Number of resolvable routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
