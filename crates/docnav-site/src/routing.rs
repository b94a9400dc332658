//! Request routing over a section.
//!
//! Turns a `{section, segment}` request into a verdict: render a document,
//! redirect to the first document of a group, or not found. The navigation
//! tree is returned with every verdict so callers can render chrome even for
//! error pages.

use serde::Serialize;

use crate::navigation::{NavGroup, NavItem, flatten};
use crate::paths::normalize_route;
use crate::section::Section;

/// Outcome of resolving a segment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// The segment names a document.
    Ok { segment: String, nav: Vec<NavGroup> },
    /// The segment names the section root or a group; go to its landing page.
    Redirect { url: String, nav: Vec<NavGroup> },
    /// Nothing to show.
    NotFound { nav: Vec<NavGroup> },
}

impl Resolution {
    /// Navigation tree of the section.
    #[must_use]
    pub fn nav(&self) -> &[NavGroup] {
        match self {
            Self::Ok { nav, .. } | Self::Redirect { nav, .. } | Self::NotFound { nav } => nav,
        }
    }

    /// Verdict name as serialized.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Ok { .. } => "ok",
            Self::Redirect { .. } => "redirect",
            Self::NotFound { .. } => "not_found",
        }
    }
}

/// What an unresolved segment addresses, by number of parts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target<'s> {
    Root,
    Group(&'s str),
    Document,
}

impl<'s> Target<'s> {
    fn classify(segment: &'s str) -> Self {
        let mut parts = segment.split('/').filter(|part| !part.is_empty());
        match (parts.next(), parts.next()) {
            (None, _) => Self::Root,
            (Some(group), None) => Self::Group(group),
            (Some(_), Some(_)) => Self::Document,
        }
    }
}

/// Resolve `segment` within `section`.
///
/// Exact document matches win. Otherwise the section root redirects to the
/// landing page of the first navigation row and a single-part segment to the
/// landing page of the matching group.
///
/// # Examples
///
/// ```ignore
/// let section = store.section("basics");
/// match resolve(&section, "intro") {
///     Resolution::Redirect { url, .. } => println!("-> {url}"),
///     other => println!("{}", other.kind()),
/// }
/// ```
#[must_use]
pub fn resolve(section: &Section<'_>, segment: &str) -> Resolution {
    let nav = section.nav();

    if section.resolver().resolve(segment).is_some() {
        return Resolution::Ok {
            segment: segment.to_owned(),
            nav,
        };
    }

    let landing = match Target::classify(segment) {
        Target::Root => nav.first().and_then(NavGroup::landing_url),
        Target::Group(dir) => nav
            .iter()
            .find(|group| group.directory == dir)
            .and_then(NavGroup::landing_url),
        Target::Document => None,
    };

    match landing.map(str::to_owned) {
        Some(url) => {
            tracing::debug!(section = section.id(), segment, url = %url, "Redirecting");
            Resolution::Redirect { url, nav }
        }
        None => {
            tracing::debug!(section = section.id(), segment, "Route not found");
            Resolution::NotFound { nav }
        }
    }
}

/// Neighbors of a document in reading order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PrevNext {
    pub prev: Option<NavItem>,
    pub next: Option<NavItem>,
}

/// Find the documents before and after `current_path` in `nav`.
///
/// Paths are compared with trailing slashes removed. Unknown paths have no
/// neighbors, and the ends do not wrap around.
#[must_use]
pub fn prev_next(nav: &[NavGroup], current_path: &str) -> PrevNext {
    let flat = flatten(nav);
    let current = normalize_route(current_path);

    let Some(position) = flat
        .iter()
        .position(|item| normalize_route(&item.url) == current)
    else {
        return PrevNext::default();
    };

    PrevNext {
        prev: position.checked_sub(1).and_then(|i| flat.get(i)).cloned(),
        next: flat.get(position + 1).cloned(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use docnav_storage::MockStorage;

    use super::*;
    use crate::registry::{Registry, SectionDef};
    use crate::store::ContentStore;

    fn item(url: &str, title: &str) -> NavItem {
        NavItem {
            url: url.to_owned(),
            title: title.to_owned(),
        }
    }

    fn store() -> ContentStore {
        let storage = MockStorage::new()
            .with_document("/docs/guide/setup.md")
            .with_document("/docs/guide/intro/overview.md")
            .with_document("/docs/guide/intro/details.md")
            .with_document("/docs/guide/empty/lonely.md")
            .with_toc("/docs/guide/_toc.yaml", json!(["intro/", "setup", "empty/"]))
            .with_toc("/docs/guide/intro/_toc.yaml", json!(["overview", "details"]));
        let registry = Registry::new("").with_section(SectionDef::new("guide", "/docs/guide"));
        ContentStore::load(&storage, registry).unwrap()
    }

    #[test]
    fn test_target_classify() {
        assert_eq!(Target::classify(""), Target::Root);
        assert_eq!(Target::classify("/"), Target::Root);
        assert_eq!(Target::classify("intro/"), Target::Group("intro"));
        assert_eq!(Target::classify("intro/overview"), Target::Document);
    }

    #[test]
    fn test_resolve_ok() {
        let store = store();

        let resolution = resolve(&store.section("guide"), "setup");

        assert_eq!(resolution.kind(), "ok");
        assert_eq!(resolution.nav().len(), 2);
    }

    #[test]
    fn test_resolve_root_redirects_to_first_item() {
        let store = store();

        let resolution = resolve(&store.section("guide"), "");

        assert!(matches!(
            resolution,
            Resolution::Redirect { ref url, .. } if url == "/guide/intro/overview"
        ));
    }

    #[test]
    fn test_resolve_group_redirect() {
        let store = store();

        let resolution = resolve(&store.section("guide"), "intro");

        assert!(matches!(
            resolution,
            Resolution::Redirect { ref url, .. } if url == "/guide/intro/overview"
        ));
    }

    fn leaf_first_store() -> ContentStore {
        let storage = MockStorage::new()
            .with_document("/docs/guide/setup.md")
            .with_document("/docs/guide/intro/overview.md")
            .with_toc("/docs/guide/_toc.yaml", json!(["setup", "intro/"]))
            .with_toc("/docs/guide/intro/_toc.yaml", json!(["overview"]));
        let registry = Registry::new("/site").with_section(SectionDef::new("guide", "/docs/guide"));
        ContentStore::load(&storage, registry).unwrap()
    }

    #[test]
    fn test_resolve_root_redirects_to_leading_leaf() {
        let store = leaf_first_store();
        let section = store.section("guide");

        let resolution = resolve(&section, "");

        let Resolution::Redirect { url, nav } = resolution else {
            panic!("expected redirect, got {resolution:?}");
        };
        assert!(nav[0].is_leaf());
        assert_eq!(nav[0].href.as_deref(), Some(url.as_str()));
        assert_eq!(url, "/site/guide/setup");
    }

    #[test]
    fn test_resolve_single_part_matching_leaf_redirects_to_href() {
        let store = leaf_first_store();

        // A leading slash misses the exact lookup but still names the leaf.
        let resolution = resolve(&store.section("guide"), "/setup");

        assert_eq!(
            resolution,
            Resolution::Redirect {
                url: "/site/guide/setup".to_owned(),
                nav: store.section("guide").nav(),
            }
        );
    }

    #[test]
    fn test_resolve_ignores_trailing_slash() {
        let store = store();

        assert_eq!(resolve(&store.section("guide"), "setup/").kind(), "ok");
    }

    #[test]
    fn test_resolve_omitted_group_is_not_found() {
        let store = store();

        assert_eq!(resolve(&store.section("guide"), "empty").kind(), "not_found");
    }

    #[test]
    fn test_resolve_missing_document_is_not_found() {
        let store = store();

        assert_eq!(resolve(&store.section("guide"), "intro/missing").kind(), "not_found");
    }

    #[test]
    fn test_resolve_root_with_empty_nav_is_not_found() {
        let store = store();

        let resolution = resolve(&store.section("unknown"), "");

        assert_eq!(resolution, Resolution::NotFound { nav: Vec::new() });
    }

    #[test]
    fn test_resolution_serializes_with_kind_tag() {
        let resolution = Resolution::Redirect {
            url: "/guide/intro/overview".to_owned(),
            nav: Vec::new(),
        };

        assert_eq!(
            serde_json::to_value(&resolution).unwrap(),
            json!({ "kind": "redirect", "url": "/guide/intro/overview", "nav": [] })
        );
    }

    #[test]
    fn test_prev_next() {
        let nav = store().section("guide").nav();

        assert_eq!(
            prev_next(&nav, "/guide/intro/overview"),
            PrevNext {
                prev: None,
                next: Some(item("/guide/intro/details", "details")),
            }
        );
        assert_eq!(
            prev_next(&nav, "/guide/intro/details/"),
            PrevNext {
                prev: Some(item("/guide/intro/overview", "overview")),
                next: Some(item("/guide/setup", "setup")),
            }
        );
        assert_eq!(
            prev_next(&nav, "/guide/setup"),
            PrevNext {
                prev: Some(item("/guide/intro/details", "details")),
                next: None,
            }
        );
    }

    #[test]
    fn test_prev_next_unknown_path() {
        let nav = store().section("guide").nav();

        assert_eq!(prev_next(&nav, "/guide/nowhere"), PrevNext::default());
    }
}
