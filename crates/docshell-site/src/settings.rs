//! Site-wide settings: home route, releases, theme palette, nav branding.

use std::collections::BTreeMap;

use serde::Serialize;

/// Theme color palette handed to the shell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThemePalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub error: String,
    pub info: String,
    pub success: String,
    pub warning: String,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            primary: "#1976D2".to_owned(),
            secondary: "#424242".to_owned(),
            accent: "#82B1FF".to_owned(),
            error: "#FF5252".to_owned(),
            info: "#2196F3".to_owned(),
            success: "#4CAF50".to_owned(),
            warning: "#FFC107".to_owned(),
        }
    }
}

/// Global, read-only site settings.
///
/// Constructed once when the route table is built; never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteSettings {
    /// Site title shown in the navigation bar.
    pub title: String,
    /// Route the root path redirects to.
    pub home: String,
    /// Current release identifier.
    pub release: String,
    /// All published release identifiers.
    pub releases: Vec<String>,
    /// Navigation bar icon name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Navigation bar logo path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Theme color palette.
    pub theme: ThemePalette,
    /// Color name overrides keyed by path pattern (`*` or a literal path).
    pub path_colors: BTreeMap<String, String>,
}

impl SiteSettings {
    /// Create settings with a title and home route; everything else takes
    /// defaults. Mostly useful for tests and programmatic tables.
    #[must_use]
    pub fn new(title: impl Into<String>, home: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            home: home.into(),
            release: String::new(),
            releases: Vec::new(),
            icon: None,
            logo: None,
            theme: ThemePalette::default(),
            path_colors: BTreeMap::new(),
        }
    }

    /// Color name for a path: a literal entry wins over the `*` fallback.
    #[must_use]
    pub fn color_for(&self, path: &str) -> Option<&str> {
        self.path_colors
            .get(path)
            .or_else(|| self.path_colors.get("*"))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_matches_shell_defaults() {
        let theme = ThemePalette::default();
        assert_eq!(theme.primary, "#1976D2");
        assert_eq!(theme.error, "#FF5252");
    }

    #[test]
    fn test_color_for_literal_wins_over_wildcard() {
        let mut settings = SiteSettings::new("Docs", "/about/overview");
        settings
            .path_colors
            .insert("*".to_owned(), "blue-grey".to_owned());
        settings
            .path_colors
            .insert("/dev/license".to_owned(), "grey".to_owned());

        assert_eq!(settings.color_for("/dev/license"), Some("grey"));
        assert_eq!(settings.color_for("/about/overview"), Some("blue-grey"));
    }

    #[test]
    fn test_color_for_without_entries() {
        let settings = SiteSettings::new("Docs", "/about/overview");
        assert_eq!(settings.color_for("/anything"), None);
    }
}
