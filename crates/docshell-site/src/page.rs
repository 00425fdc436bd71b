//! Page model: route metadata and content references.

use serde::Serialize;

/// Metadata the shell renders for a page: document title, H1 heading,
/// meta description/keywords, and layout hints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Browser/meta title.
    pub title: String,
    /// H1 heading.
    pub heading: String,
    /// Optional prefix rendered before the heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_prefix: Option<String>,
    /// Meta description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Meta keywords.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// Whether the navigation drawer is shown on this page.
    pub has_nav: bool,
    /// Custom layout tag for the shell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_layout: Option<String>,
}

impl PageMeta {
    /// Create metadata with a shared title/heading and defaults elsewhere.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            heading: title.clone(),
            title,
            heading_prefix: None,
            description: None,
            keywords: None,
            has_nav: true,
            custom_layout: None,
        }
    }
}

/// Opaque reference to a page's static content.
///
/// The table never interprets content; it only hands the shell a component
/// id (and, when known, the source document the content was generated
/// from).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContentRef {
    /// Component id the shell loads (e.g. `about-01_overview`).
    pub id: String,
    /// Source document path, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ContentRef {
    /// Derive a component id from a route path.
    ///
    /// `/about/01_overview` becomes `about-01_overview`, matching the ids
    /// the site generator emits.
    #[must_use]
    pub fn for_path(path: &str) -> Self {
        let id = path.trim_start_matches('/').replace('/', "-");
        Self { id, source: None }
    }
}

/// A single documentation route: path, metadata, and content reference.
///
/// Created at site-build time and immutable thereafter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Page {
    /// URL path with leading slash (e.g. `/about/01_overview`).
    pub path: String,
    /// Metadata consumed by the rendering shell.
    pub meta: PageMeta,
    /// Reference to the page's static content.
    pub content: ContentRef,
}

impl Page {
    /// Create a page with derived content id and title-only metadata.
    #[must_use]
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        let path = path.into();
        let content = ContentRef::for_path(&path);
        Self {
            path,
            meta: PageMeta::titled(title),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_titled_mirrors_title_into_heading() {
        let meta = PageMeta::titled("Overview");
        assert_eq!(meta.title, "Overview");
        assert_eq!(meta.heading, "Overview");
        assert!(meta.has_nav);
        assert!(meta.description.is_none());
    }

    #[test]
    fn test_content_ref_for_path() {
        let content = ContentRef::for_path("/about/01_overview");
        assert_eq!(content.id, "about-01_overview");
        assert!(content.source.is_none());
    }

    #[test]
    fn test_content_ref_for_single_segment_path() {
        let content = ContentRef::for_path("/overview");
        assert_eq!(content.id, "overview");
    }

    #[test]
    fn test_page_new_derives_content_id() {
        let page = Page::new("/dev/01_license", "License");
        assert_eq!(page.path, "/dev/01_license");
        assert_eq!(page.content.id, "dev-01_license");
        assert_eq!(page.meta.title, "License");
    }

    #[test]
    fn test_meta_serialization_skips_unset_options() {
        let meta = PageMeta::titled("Overview");
        let json = serde_json::to_value(&meta).unwrap();

        assert_eq!(json["title"], "Overview");
        assert_eq!(json["heading"], "Overview");
        assert_eq!(json["has_nav"], true);
        assert!(json.get("description").is_none());
        assert!(json.get("custom_layout").is_none());
    }

    #[test]
    fn test_page_serialization_shape() {
        let mut page = Page::new("/about/01_overview", "Overview");
        page.meta.description = Some("Project docs".to_owned());

        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["path"], "/about/01_overview");
        assert_eq!(json["meta"]["description"], "Project docs");
        assert_eq!(json["content"]["id"], "about-01_overview");
        assert!(json["content"].get("source").is_none());
    }
}
