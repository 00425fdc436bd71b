//! Route table and resolver.
//!
//! The table is the full set of registered pages plus the navigation tree
//! and site-wide settings: pure configuration data, built once at startup
//! and never mutated. Resolution is a pure function over it.
//!
//! # Architecture
//!
//! Pages are stored in a flat `Vec<Page>` in registration order with a
//! `HashMap` path index for O(1) lookups. Exact matches always win;
//! the root and wildcard redirects are only consulted afterwards, which
//! enforces the fallback-evaluated-last ordering structurally.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::Serialize;

use docshell_config::{NavSpec, SiteSpec};

use crate::nav::{NavEntry, NavGroup, NavLink, Navigation};
use crate::page::{ContentRef, Page, PageMeta};
use crate::settings::SiteSettings;

/// Route table construction error.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// Two pages registered the same path.
    #[error("Duplicate route path: {0}")]
    DuplicatePath(String),
    /// The configured home route has no registered page.
    #[error("Home route '{0}' is not a registered page")]
    UnknownHome(String),
}

/// Outcome of resolving a path against the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The path matched a registered page.
    Page(&'a Page),
    /// No match; the shell should navigate to the target instead.
    Redirect(&'a str),
}

impl<'a> Resolution<'a> {
    /// The matched page, if any.
    #[must_use]
    pub fn page(self) -> Option<&'a Page> {
        match self {
            Self::Page(page) => Some(page),
            Self::Redirect(_) => None,
        }
    }

    /// The redirect target, if any.
    #[must_use]
    pub fn redirect(self) -> Option<&'a str> {
        match self {
            Self::Redirect(target) => Some(target),
            Self::Page(_) => None,
        }
    }
}

/// Normalize a requested path for lookup.
///
/// The empty path is the root; a missing leading slash is added; a
/// trailing slash is stripped (except on the root itself). Registered
/// paths follow the same convention, so normalization happens in one
/// place.
#[must_use]
pub fn normalize(path: &str) -> Cow<'_, str> {
    if path.is_empty() || path == "/" {
        return Cow::Borrowed("/");
    }

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        // Input was all slashes
        return Cow::Borrowed("/");
    }

    if trimmed.starts_with('/') {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(format!("/{trimmed}"))
    }
}

/// Serializable bundle the external rendering shell consumes: settings,
/// routes, and the navigation tree. Mirrors the generated config the
/// shell was previously fed.
#[derive(Debug, Serialize)]
pub struct ShellPayload<'a> {
    /// Site-wide settings.
    pub site: &'a SiteSettings,
    /// Registered routes in declaration order.
    pub routes: &'a [Page],
    /// Navigation tree.
    pub nav: &'a Navigation,
}

/// The immutable route table: registered pages, navigation tree, and
/// site-wide settings.
#[derive(Debug)]
pub struct RouteTable {
    pages: Vec<Page>,
    path_index: HashMap<String, usize>,
    settings: SiteSettings,
    nav: Navigation,
}

impl RouteTable {
    /// Build a route table from a loaded site definition.
    ///
    /// # Errors
    ///
    /// Returns `RouteError` on duplicate paths or an unregistered home
    /// route.
    pub fn from_spec(spec: &SiteSpec) -> Result<Self, RouteError> {
        let mut settings = SiteSettings::new(&spec.site.title, &spec.site.home);
        settings.release = spec.site.release.clone();
        settings.releases = spec.site.releases.clone();
        settings.icon = spec.site.icon.clone();
        settings.logo = spec.site.logo.clone();
        settings.theme.primary = spec.theme.primary.clone();
        settings.theme.secondary = spec.theme.secondary.clone();
        settings.theme.accent = spec.theme.accent.clone();
        settings.theme.error = spec.theme.error.clone();
        settings.theme.info = spec.theme.info.clone();
        settings.theme.success = spec.theme.success.clone();
        settings.theme.warning = spec.theme.warning.clone();
        settings.path_colors = spec.site.path_colors.clone();

        let mut builder = RouteTableBuilder::new(settings);

        for page in &spec.pages {
            let mut content = match &page.component {
                Some(id) => ContentRef {
                    id: id.clone(),
                    source: None,
                },
                None => ContentRef::for_path(&page.path),
            };
            content.source = page.source.clone();

            let meta = PageMeta {
                title: page.title.clone(),
                heading: page.heading.clone().unwrap_or_else(|| page.title.clone()),
                heading_prefix: page.heading_prefix.clone(),
                description: page.description.clone(),
                keywords: page.keywords.clone(),
                has_nav: page.has_nav,
                custom_layout: page.custom_layout.clone(),
            };

            builder.add(Page {
                path: page.path.clone(),
                meta,
                content,
            });
        }

        builder.nav(build_nav(&spec.nav));
        builder.build()
    }

    /// Resolve a requested path.
    ///
    /// Exact page match wins; the root path redirects to the configured
    /// home page; any other unregistered path hits the wildcard and
    /// redirects to the root. Redirects are single-step: the caller
    /// performs the hop.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        let normalized = normalize(path);

        if let Some(&idx) = self.path_index.get(normalized.as_ref()) {
            return Resolution::Page(&self.pages[idx]);
        }

        if normalized == "/" {
            return Resolution::Redirect(&self.settings.home);
        }

        Resolution::Redirect("/")
    }

    /// Exact page lookup without redirect semantics.
    #[must_use]
    pub fn page(&self, path: &str) -> Option<&Page> {
        let normalized = normalize(path);
        self.path_index
            .get(normalized.as_ref())
            .map(|&idx| &self.pages[idx])
    }

    /// Content reference for a registered path.
    #[must_use]
    pub fn content(&self, path: &str) -> Option<&ContentRef> {
        self.page(path).map(|page| &page.content)
    }

    /// Registered pages in declaration order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Number of registered pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the table has no registered pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Site-wide settings.
    #[must_use]
    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Navigation tree.
    #[must_use]
    pub fn nav(&self) -> &Navigation {
        &self.nav
    }

    /// The bundle the external rendering shell consumes.
    #[must_use]
    pub fn payload(&self) -> ShellPayload<'_> {
        ShellPayload {
            site: &self.settings,
            routes: &self.pages,
            nav: &self.nav,
        }
    }
}

/// Convert nav definition entries into the navigation tree.
fn build_nav(specs: &[NavSpec]) -> Navigation {
    let entries = specs
        .iter()
        .map(|spec| match spec {
            NavSpec::Header { title } => NavEntry::Header {
                title: title.clone(),
            },
            NavSpec::Divider => NavEntry::Divider,
            NavSpec::Link {
                title,
                href,
                icon,
                target,
            } => NavEntry::Link(NavLink {
                title: title.clone(),
                href: href.clone(),
                icon: icon.clone(),
                target: target.clone(),
            }),
            NavSpec::Group {
                title,
                icon,
                prefix,
                items,
            } => NavEntry::Group(NavGroup {
                title: title.clone(),
                icon: icon.clone(),
                prefix: prefix.clone(),
                items: items
                    .iter()
                    .map(|item| NavLink {
                        title: item.title.clone(),
                        href: item.href.clone(),
                        icon: None,
                        target: item.target.clone(),
                    })
                    .collect(),
            }),
        })
        .collect();
    Navigation::new(entries)
}

/// Builder for constructing [`RouteTable`] instances programmatically.
///
/// Preserves insertion order; `build` enforces the table invariants.
pub struct RouteTableBuilder {
    pages: Vec<Page>,
    settings: SiteSettings,
    nav: Navigation,
}

impl RouteTableBuilder {
    /// Create a builder with the given site settings.
    #[must_use]
    pub fn new(settings: SiteSettings) -> Self {
        Self {
            pages: Vec::new(),
            settings,
            nav: Navigation::default(),
        }
    }

    /// Register a fully-populated page.
    pub fn add(&mut self, page: Page) -> &mut Self {
        let path = normalize(&page.path).into_owned();
        self.pages.push(Page { path, ..page });
        self
    }

    /// Register a page with derived content id and title-only metadata.
    pub fn page(&mut self, path: impl Into<String>, title: impl Into<String>) -> &mut Self {
        self.add(Page::new(path, title))
    }

    /// Set the navigation tree.
    pub fn nav(&mut self, nav: Navigation) -> &mut Self {
        self.nav = nav;
        self
    }

    /// Build the table, enforcing path uniqueness and home registration.
    ///
    /// # Errors
    ///
    /// Returns `RouteError::DuplicatePath` if two pages share a path, or
    /// `RouteError::UnknownHome` if the home route is unregistered.
    pub fn build(self) -> Result<RouteTable, RouteError> {
        let mut path_index = HashMap::with_capacity(self.pages.len());
        for (idx, page) in self.pages.iter().enumerate() {
            if path_index.insert(page.path.clone(), idx).is_some() {
                return Err(RouteError::DuplicatePath(page.path.clone()));
            }
        }

        // Store the home route normalized so redirect targets follow the
        // same convention as registered paths.
        let home = normalize(&self.settings.home).into_owned();
        if !path_index.contains_key(home.as_str()) {
            return Err(RouteError::UnknownHome(home));
        }
        let mut settings = self.settings;
        settings.home = home;

        Ok(RouteTable {
            pages: self.pages,
            path_index,
            settings,
            nav: self.nav,
        })
    }
}
