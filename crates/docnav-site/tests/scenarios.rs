//! End-to-end navigation and routing scenarios over an in-memory catalog.

use docnav_site::{
    ContentStore, NavGroup, NavItem, PrevNext, Registry, Resolution, SectionDef, UnlistedPolicy,
    routing,
};
use docnav_storage::MockStorage;
use pretty_assertions::assert_eq;
use serde_json::json;

const BASE_PATH: &str = "/just-go";

fn registry() -> Registry {
    Registry::new(BASE_PATH).with_section(SectionDef::new("basics", "/docs/basics"))
}

/// Two documents in `intro/` declared as a labeled group at the root.
fn intro_storage() -> MockStorage {
    MockStorage::new()
        .with_document("/docs/basics/intro/overview.md")
        .with_document("/docs/basics/intro/details.md")
        .with_toc(
            "/docs/basics/_toc.yaml",
            json!([{ "path": "intro/", "label": "Introduction" }]),
        )
}

fn declared_store() -> ContentStore {
    let storage = intro_storage().with_toc("/docs/basics/intro/_toc.yaml", json!(["overview", "details"]));
    ContentStore::load(&storage, registry()).unwrap()
}

fn item(url: &str, title: &str) -> NavItem {
    NavItem {
        url: url.to_owned(),
        title: title.to_owned(),
    }
}

#[test]
fn test_group_without_local_declaration_is_omitted() {
    let store = ContentStore::load(&intro_storage(), registry()).unwrap();

    assert_eq!(store.section("basics").nav(), Vec::<NavGroup>::new());
}

#[test]
fn test_group_with_local_declaration() {
    let store = declared_store();

    assert_eq!(
        store.section("basics").nav(),
        vec![NavGroup::group(
            "intro",
            "Introduction",
            vec![
                item("/just-go/basics/intro/overview", "overview"),
                item("/just-go/basics/intro/details", "details"),
            ]
        )]
    );
}

#[test]
fn test_section_root_redirects_to_first_document() {
    let store = declared_store();

    let resolution = routing::resolve(&store.section("basics"), "");

    let Resolution::Redirect { url, nav } = resolution else {
        panic!("expected redirect, got {resolution:?}");
    };
    assert_eq!(url, "/just-go/basics/intro/overview");
    assert_eq!(nav.len(), 1);
}

#[test]
fn test_existing_document_resolves() {
    let store = declared_store();

    let resolution = routing::resolve(&store.section("basics"), "intro/overview");

    assert!(matches!(
        resolution,
        Resolution::Ok { ref segment, .. } if segment == "intro/overview"
    ));
}

#[test]
fn test_missing_document_is_not_found() {
    let store = declared_store();

    let resolution = routing::resolve(&store.section("basics"), "intro/missing");

    assert_eq!(resolution.kind(), "not_found");
    assert_eq!(resolution.nav().len(), 1);
}

#[test]
fn test_prev_next_at_start() {
    let store = declared_store();
    let nav = store.section("basics").nav();

    assert_eq!(
        routing::prev_next(&nav, "/just-go/basics/intro/overview"),
        PrevNext {
            prev: None,
            next: Some(item("/just-go/basics/intro/details", "details")),
        }
    );
}

#[test]
fn test_undeclared_documents_never_appear() {
    let storage = intro_storage()
        .with_document("/docs/basics/intro/extra.md")
        .with_document("/docs/basics/loose.md")
        .with_toc("/docs/basics/intro/_toc.yaml", json!(["overview"]));
    let store = ContentStore::load(&storage, registry()).unwrap();

    let urls: Vec<_> = docnav_site::flatten(&store.section("basics").nav())
        .into_iter()
        .map(|item| item.url)
        .collect();

    assert_eq!(urls, vec!["/just-go/basics/intro/overview"]);
}

#[test]
fn test_undeclared_documents_appended_when_configured() {
    let storage = intro_storage()
        .with_document("/docs/basics/intro/extra.md")
        .with_document("/docs/basics/loose.md")
        .with_toc("/docs/basics/intro/_toc.yaml", json!(["overview"]));
    let registry = registry().with_unlisted(UnlistedPolicy::AppendAlphabetical);
    let store = ContentStore::load(&storage, registry).unwrap();

    let urls: Vec<_> = docnav_site::flatten(&store.section("basics").nav())
        .into_iter()
        .map(|item| item.url)
        .collect();

    assert_eq!(
        urls,
        vec![
            "/just-go/basics/intro/overview",
            "/just-go/basics/intro/details",
            "/just-go/basics/intro/extra",
            "/just-go/basics/loose",
        ]
    );
}

#[test]
fn test_redirect_targets_always_resolve() {
    let store = declared_store();
    let section = store.section("basics");
    let resolver = section.resolver();

    for segment in ["", "intro", "intro/"] {
        let Resolution::Redirect { url, .. } = routing::resolve(&section, segment) else {
            panic!("expected redirect for {segment:?}");
        };
        let target = url.strip_prefix("/just-go/basics/").unwrap();
        assert!(resolver.resolve(target).is_some(), "dangling redirect {url}");
    }
}

#[test]
fn test_every_nav_link_resolves() {
    let store = declared_store();
    let section = store.section("basics");
    let resolver = section.resolver();

    for item in docnav_site::flatten(&section.nav()) {
        let segment = item.url.strip_prefix("/just-go/basics/").unwrap();
        assert!(resolver.resolve(segment).is_some(), "unresolvable link {}", item.url);
    }
}

#[test]
fn test_static_pages_and_summaries() {
    let store = declared_store();

    let pages: Vec<_> = store
        .page_params()
        .into_iter()
        .map(|p| (p.section, p.page))
        .collect();

    assert_eq!(
        pages,
        vec![
            ("basics".to_owned(), Some("intro/details".to_owned())),
            ("basics".to_owned(), Some("intro/overview".to_owned())),
            ("basics".to_owned(), None),
        ]
    );
    assert_eq!(store.summaries()[0].title, "basics");
}

#[test]
fn test_section_rooted_at_project_root() {
    let storage = MockStorage::new()
        .with_document("/intro.md")
        .with_toc("/_toc.yaml", json!(["intro"]));
    let registry = Registry::new(BASE_PATH).with_section(SectionDef::new("docs", "/"));
    let store = ContentStore::load(&storage, registry).unwrap();
    let section = store.section("docs");

    let entries = section.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].url, "/just-go/docs/intro");
    assert_eq!(
        section.nav(),
        vec![NavGroup::leaf("intro", "intro", "/just-go/docs/intro")]
    );
    assert_eq!(routing::resolve(&section, "intro").kind(), "ok");
    assert_eq!(
        routing::resolve(&section, ""),
        Resolution::Redirect {
            url: "/just-go/docs/intro".to_owned(),
            nav: section.nav(),
        }
    );
}
