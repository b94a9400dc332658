//! Route and path string utilities.
//!
//! All functions are pure and never fail: unmatched input yields an empty or
//! unchanged result, since content discovery is best-effort.
//!
//! # Conventions
//!
//! - Filesystem paths are project-relative with a leading `/`
//!   (e.g., `/docs/basics/variables/intro.md`).
//! - Routes are absolute URL paths (e.g., `/basics/variables/intro`). Index
//!   documents map to their directory with a trailing slash
//!   (`/basics/introduction/`).

use docnav_storage::CONTENT_EXTENSIONS;

use crate::registry::SectionDef;

/// Strip the trailing slash of a route.
///
/// A run of trailing slashes is treated as one, so normalization is
/// idempotent: `/basics/` and `/basics//` both become `/basics`.
#[must_use]
pub fn normalize_route(path: &str) -> &str {
    path.trim_end_matches('/')
}

/// Strip all leading and trailing slashes.
#[must_use]
pub fn trim_slashes(path: &str) -> &str {
    path.trim_matches('/')
}

/// Check whether a path denotes a group (directory) rather than a document.
#[must_use]
pub fn is_group_path(path: &str) -> bool {
    path.ends_with('/')
}

/// Normalize a configured content root.
///
/// Converts backslashes, drops a leading `./`, ensures a leading `/` and
/// removes trailing slashes: `./docs/basics/` becomes `/docs/basics`.
///
/// The project root itself (`/`, `.` or `./`) normalizes to the empty
/// string, so the `{root}/` prefix of its documents is just `/`.
#[must_use]
pub fn normalize_root(root: &str) -> String {
    let sanitized = root.replace('\\', "/");
    let sanitized = sanitized.strip_prefix("./").unwrap_or(&sanitized);
    let trimmed = sanitized.trim_end_matches('/');
    if trimmed.is_empty() || trimmed == "." {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

/// Strip a content file name from a root-relative path.
///
/// `index.<ext>` is removed entirely (keeping the trailing slash), any other
/// recognized extension is dropped. Unrecognized files are returned as-is.
pub(crate) fn strip_content_file(rel: &str) -> &str {
    let file = rel.rsplit_once('/').map_or(rel, |(_, file)| file);
    let Some((stem, ext)) = file.rsplit_once('.') else {
        return rel;
    };
    if !CONTENT_EXTENSIONS.contains(&ext) {
        return rel;
    }
    if stem == "index" {
        &rel[..rel.len() - file.len()]
    } else {
        &rel[..rel.len() - ext.len() - 1]
    }
}

/// Convert a content filesystem path into a route.
///
/// Uses the first section whose root is a directory prefix of `fs_path`.
/// Returns an empty string when no section matches, which callers must treat
/// as "no route".
///
/// # Examples
///
/// ```
/// use docnav_site::{SectionDef, paths::fs_path_to_route};
///
/// let sections = [SectionDef::new("basics", "/docs/basics")];
/// assert_eq!(fs_path_to_route("/docs/basics/introduction/index.md", &sections), "/basics/introduction/");
/// assert_eq!(fs_path_to_route("/docs/basics/variables/intro.mdx", &sections), "/basics/variables/intro");
/// assert_eq!(fs_path_to_route("/elsewhere/intro.md", &sections), "");
/// ```
#[must_use]
pub fn fs_path_to_route(fs_path: &str, sections: &[SectionDef]) -> String {
    sections
        .iter()
        .find_map(|section| section.route_for(fs_path))
        .unwrap_or_default()
}

/// Strip `base/` from the start of `url`.
///
/// Returns `url` unchanged when it is not below `base`.
#[must_use]
pub fn relative_route<'a>(url: &'a str, base: &str) -> &'a str {
    url.strip_prefix(base)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(url)
}

/// Split `url` into its non-empty segments below `base`.
///
/// # Examples
///
/// ```
/// use docnav_site::paths::relative_segments;
///
/// assert_eq!(relative_segments("/basics/variables/intro", "/basics"), vec!["variables", "intro"]);
/// assert_eq!(relative_segments("/basics/introduction/", "/basics"), vec!["introduction"]);
/// ```
#[must_use]
pub fn relative_segments<'a>(url: &'a str, base: &str) -> Vec<&'a str> {
    relative_route(url, base)
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Capitalize the first letter of every `/`-separated segment.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    for (i, segment) in name.split('/').enumerate() {
        if i > 0 {
            result.push('/');
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_route() {
        assert_eq!(normalize_route("/basics/"), "/basics");
        assert_eq!(normalize_route("/basics"), "/basics");
        assert_eq!(normalize_route("/"), "");
        assert_eq!(normalize_route(""), "");
    }

    #[test]
    fn test_normalize_route_is_idempotent() {
        for path in ["", "/", "//", "/a", "/a/", "/a//", "a/b/", "/a/b"] {
            let once = normalize_route(path);
            assert_eq!(normalize_route(once), once, "not idempotent for {path:?}");
        }
    }

    #[test]
    fn test_trim_slashes() {
        assert_eq!(trim_slashes("//basics/"), "basics");
        assert_eq!(trim_slashes("basics"), "basics");
        assert_eq!(trim_slashes("/a/b/"), "a/b");
        assert_eq!(trim_slashes("///"), "");
    }

    #[test]
    fn test_is_group_path() {
        assert!(is_group_path("intro/"));
        assert!(!is_group_path("intro"));
        assert!(!is_group_path(""));
    }

    #[test]
    fn test_normalize_root() {
        assert_eq!(normalize_root("docs/basics"), "/docs/basics");
        assert_eq!(normalize_root("./docs/basics/"), "/docs/basics");
        assert_eq!(normalize_root("/toc-doc"), "/toc-doc");
        assert_eq!(normalize_root("docs\\basics"), "/docs/basics");
    }

    #[test]
    fn test_normalize_root_project_root_is_empty() {
        for root in ["/", ".", "./", "", "//"] {
            assert_eq!(normalize_root(root), "", "root {root:?}");
        }
    }

    #[test]
    fn test_strip_content_file() {
        assert_eq!(strip_content_file("introduction/index.md"), "introduction/");
        assert_eq!(strip_content_file("index.mdx"), "");
        assert_eq!(strip_content_file("variables/intro.md"), "variables/intro");
        assert_eq!(strip_content_file("myindex.md"), "myindex");
        assert_eq!(strip_content_file("notes.txt"), "notes.txt");
        assert_eq!(strip_content_file("v1.2/intro"), "v1.2/intro");
    }

    #[test]
    fn test_fs_path_to_route() {
        let sections = [
            SectionDef::new("basics", "/docs/basics"),
            SectionDef::new("toc-doc", "/toc-doc"),
        ];

        assert_eq!(
            fs_path_to_route("/docs/basics/introduction/index.md", &sections),
            "/basics/introduction/"
        );
        assert_eq!(fs_path_to_route("/docs/basics/index.md", &sections), "/basics/");
        assert_eq!(
            fs_path_to_route("/toc-doc/setup.mdx", &sections),
            "/toc-doc/setup"
        );
        assert_eq!(fs_path_to_route("/docs/other/intro.md", &sections), "");
    }

    #[test]
    fn test_fs_path_to_route_requires_directory_prefix() {
        let sections = [SectionDef::new("docs", "/docs")];

        assert_eq!(fs_path_to_route("/docs-extra/intro.md", &sections), "");
    }

    #[test]
    fn test_relative_segments() {
        assert_eq!(
            relative_segments("/basics/variables/intro", "/basics"),
            vec!["variables", "intro"]
        );
        assert_eq!(relative_segments("/basics/", "/basics"), Vec::<&str>::new());
        assert_eq!(
            relative_segments("/just-go/basics/intro", "/just-go/basics"),
            vec!["intro"]
        );
        // Not below base: segments of the whole URL
        assert_eq!(relative_segments("/other/x", "/basics"), vec!["other", "x"]);
    }

    #[test]
    fn test_relative_route_does_not_match_sibling_prefix() {
        assert_eq!(relative_route("/basics-extra/x", "/basics"), "/basics-extra/x");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("introduction"), "Introduction");
        assert_eq!(capitalize("types/slices"), "Types/Slices");
        assert_eq!(capitalize("string-manipulation"), "String-manipulation");
        assert_eq!(capitalize(""), "");
    }
}
