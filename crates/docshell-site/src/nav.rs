//! Navigation tree for the documentation shell.
//!
//! The tree is purely presentational: headers, dividers, leaf links, and
//! grouped submenus, in the order the shell renders them. No business
//! logic consumes it, but [`Navigation::unresolved_links`] lets check
//! tooling flag internal links that point at no registered route.

use serde::Serialize;

use crate::route::RouteTable;

/// A leaf navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Display title.
    pub title: String,
    /// Link target; a registered route or an external URL.
    pub href: String,
    /// Icon name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Link target attribute (e.g. `_blank`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl NavLink {
    /// Create an internal link to a registered route.
    #[must_use]
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            icon: None,
            target: None,
        }
    }

    /// Whether this link targets a route in the table (as opposed to an
    /// external URL or a document-relative location).
    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.href.starts_with('/')
    }
}

/// A grouped submenu of leaf links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    /// Display title.
    pub title: String,
    /// Icon name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Route prefix the shell highlights this group for.
    pub prefix: String,
    /// Ordered submenu links.
    pub items: Vec<NavLink>,
}

impl NavGroup {
    /// Whether a route path falls under this group's prefix.
    #[must_use]
    pub fn covers(&self, path: &str) -> bool {
        path == self.prefix
            || path
                .strip_prefix(self.prefix.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// A navigation tree node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavEntry {
    /// Section caption.
    Header {
        /// Caption text.
        title: String,
    },
    /// Visual separator.
    Divider,
    /// Leaf link.
    Link(NavLink),
    /// Grouped submenu.
    Group(NavGroup),
}

/// The full navigation tree, in render order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Navigation {
    entries: Vec<NavEntry>,
}

impl Navigation {
    /// Create a navigation tree from ordered entries.
    #[must_use]
    pub fn new(entries: Vec<NavEntry>) -> Self {
        Self { entries }
    }

    /// Ordered entries for the shell.
    #[must_use]
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Group whose prefix covers the given path, if any.
    ///
    /// The longest covering prefix wins when groups nest.
    #[must_use]
    pub fn active_group(&self, path: &str) -> Option<&NavGroup> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                NavEntry::Group(group) if group.covers(path) => Some(group),
                _ => None,
            })
            .max_by_key(|group| group.prefix.len())
    }

    /// Internal hrefs that resolve to no registered route.
    ///
    /// External and document-relative hrefs are skipped: they are
    /// legitimate targets the table cannot vouch for.
    #[must_use]
    pub fn unresolved_links<'a>(&'a self, table: &RouteTable) -> Vec<&'a str> {
        let mut unresolved = Vec::new();
        for link in self.links() {
            if !link.is_internal() {
                tracing::debug!(href = %link.href, "Skipping non-route nav link");
                continue;
            }
            if table.page(&link.href).is_none() {
                unresolved.push(link.href.as_str());
            }
        }
        unresolved
    }

    /// All leaf links, top-level and grouped, in render order.
    pub fn links(&self) -> impl Iterator<Item = &NavLink> {
        self.entries.iter().flat_map(|entry| match entry {
            NavEntry::Link(link) => std::slice::from_ref(link),
            NavEntry::Group(group) => group.items.as_slice(),
            NavEntry::Header { .. } | NavEntry::Divider => &[],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RouteTableBuilder;
    use crate::settings::SiteSettings;

    fn sample_nav() -> Navigation {
        Navigation::new(vec![
            NavEntry::Header {
                title: "Project Website".to_owned(),
            },
            NavEntry::Group(NavGroup {
                title: "Getting Started".to_owned(),
                icon: Some("assistant".to_owned()),
                prefix: "/about".to_owned(),
                items: vec![NavLink::new("Overview", "/about/overview")],
            }),
            NavEntry::Divider,
            NavEntry::Link(NavLink {
                title: "Javadocs".to_owned(),
                href: "api/index.html".to_owned(),
                icon: Some("code".to_owned()),
                target: Some("_blank".to_owned()),
            }),
        ])
    }

    #[test]
    fn test_active_group_matches_prefix() {
        let nav = sample_nav();

        let group = nav.active_group("/about/overview").unwrap();

        assert_eq!(group.title, "Getting Started");
    }

    #[test]
    fn test_active_group_exact_prefix_path() {
        let nav = sample_nav();
        assert!(nav.active_group("/about").is_some());
    }

    #[test]
    fn test_active_group_rejects_sibling_prefix() {
        let nav = sample_nav();

        // "/aboutish/x" shares a string prefix but not a path segment
        assert!(nav.active_group("/aboutish/x").is_none());
        assert!(nav.active_group("/dev/license").is_none());
    }

    #[test]
    fn test_active_group_longest_prefix_wins() {
        let nav = Navigation::new(vec![
            NavEntry::Group(NavGroup {
                title: "Outer".to_owned(),
                icon: None,
                prefix: "/docs".to_owned(),
                items: Vec::new(),
            }),
            NavEntry::Group(NavGroup {
                title: "Inner".to_owned(),
                icon: None,
                prefix: "/docs/advanced".to_owned(),
                items: Vec::new(),
            }),
        ]);

        let group = nav.active_group("/docs/advanced/tuning").unwrap();

        assert_eq!(group.title, "Inner");
    }

    #[test]
    fn test_links_walks_groups_and_leaves() {
        let nav = sample_nav();

        let hrefs: Vec<_> = nav.links().map(|l| l.href.as_str()).collect();

        assert_eq!(hrefs, vec!["/about/overview", "api/index.html"]);
    }

    #[test]
    fn test_unresolved_links_flags_unknown_routes() {
        let mut builder = RouteTableBuilder::new(SiteSettings::new("Docs", "/about/overview"));
        builder.page("/about/overview", "Overview");
        let nav = Navigation::new(vec![NavEntry::Group(NavGroup {
            title: "Getting Started".to_owned(),
            icon: None,
            prefix: "/about".to_owned(),
            items: vec![
                NavLink::new("Overview", "/about/overview"),
                NavLink::new("Missing", "/about/missing"),
            ],
        })]);
        let table = builder.build().unwrap();

        let unresolved = nav.unresolved_links(&table);

        assert_eq!(unresolved, vec!["/about/missing"]);
    }

    #[test]
    fn test_unresolved_links_skips_external_hrefs() {
        let builder = RouteTableBuilder::new(SiteSettings::new("Docs", "/about/overview"));
        let table = {
            let mut builder = builder;
            builder.page("/about/overview", "Overview");
            builder.build().unwrap()
        };
        let nav = Navigation::new(vec![
            NavEntry::Link(NavLink::new("GitHub", "https://github.com/example/docs")),
            NavEntry::Link(NavLink::new("Javadocs", "api/index.html")),
        ]);

        assert!(nav.unresolved_links(&table).is_empty());
    }

    #[test]
    fn test_nav_entry_serialization_is_tagged() {
        let nav = sample_nav();

        let json = serde_json::to_value(&nav).unwrap();
        let entries = json.as_array().unwrap();

        assert_eq!(entries[0]["kind"], "header");
        assert_eq!(entries[0]["title"], "Project Website");
        assert_eq!(entries[1]["kind"], "group");
        assert_eq!(entries[1]["prefix"], "/about");
        assert_eq!(entries[1]["items"][0]["href"], "/about/overview");
        assert_eq!(entries[2]["kind"], "divider");
        assert_eq!(entries[3]["kind"], "link");
        assert_eq!(entries[3]["target"], "_blank");
        assert!(entries[3].get("children").is_none());
    }
}
