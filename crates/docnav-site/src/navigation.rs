//! Navigation tree types.
//!
//! Navigation is two levels deep: top-level rows are either leaves linking to
//! a single document or groups holding an ordered list of documents.

use serde::Serialize;

/// A linked document inside a group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Absolute route.
    pub url: String,
    /// Display title.
    pub title: String,
}

/// A top-level navigation row.
///
/// Leaves carry an `href` and no items, groups carry items and no `href`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    /// Directory key relative to the section (`intro` for a group, the slug
    /// for a leaf).
    pub directory: String,
    /// Display label.
    pub label: String,
    /// Link target of a leaf.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Documents of a group, in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavItem>,
}

impl NavGroup {
    /// Create a leaf row.
    #[must_use]
    pub fn leaf(directory: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            label: label.into(),
            href: Some(href.into()),
            items: Vec::new(),
        }
    }

    /// Create a group row.
    #[must_use]
    pub fn group(directory: impl Into<String>, label: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            directory: directory.into(),
            label: label.into(),
            href: None,
            items,
        }
    }

    /// Whether this row links to a single document.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.items.is_empty()
    }

    /// Landing URL: the first item, else the leaf link.
    #[must_use]
    pub fn landing_url(&self) -> Option<&str> {
        self.items
            .first()
            .map(|item| item.url.as_str())
            .or(self.href.as_deref())
    }
}

/// Flatten navigation into reading order.
///
/// Leaves become a single item with their label as title.
#[must_use]
pub fn flatten(nav: &[NavGroup]) -> Vec<NavItem> {
    let mut flat = Vec::new();
    for group in nav {
        if let Some(href) = &group.href {
            flat.push(NavItem {
                url: href.clone(),
                title: group.label.clone(),
            });
        }
        flat.extend(group.items.iter().cloned());
    }
    flat
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(url: &str, title: &str) -> NavItem {
        NavItem {
            url: url.to_owned(),
            title: title.to_owned(),
        }
    }

    #[test]
    fn test_landing_url() {
        let group = NavGroup::group("intro", "Intro", vec![item("/a/intro/x", "X")]);
        let leaf = NavGroup::leaf("setup", "Setup", "/a/setup");

        assert_eq!(group.landing_url(), Some("/a/intro/x"));
        assert_eq!(leaf.landing_url(), Some("/a/setup"));
        assert!(leaf.is_leaf());
        assert!(!group.is_leaf());
    }

    #[test]
    fn test_flatten() {
        let nav = vec![
            NavGroup::leaf("setup", "Setup", "/a/setup"),
            NavGroup::group(
                "intro",
                "Intro",
                vec![item("/a/intro/x", "X"), item("/a/intro/y", "Y")],
            ),
        ];

        assert_eq!(
            flatten(&nav),
            vec![
                item("/a/setup", "Setup"),
                item("/a/intro/x", "X"),
                item("/a/intro/y", "Y"),
            ]
        );
    }

    #[test]
    fn test_serialize_leaf_omits_items() {
        let leaf = NavGroup::leaf("setup", "Setup", "/a/setup");

        assert_eq!(
            serde_json::to_value(&leaf).unwrap(),
            serde_json::json!({ "directory": "setup", "label": "Setup", "href": "/a/setup" })
        );
    }
}
