//! Site definition loading for docshell.
//!
//! Parses `site.toml` definitions with serde and provides auto-discovery
//! of the definition file in parent directories.
//!
//! A site definition holds the three pieces of data the documentation
//! shell is built from:
//!
//! - `[site]` — global settings (nav title, home route, releases, logo)
//! - `[theme]` — color palette handed to the shell
//! - `[[pages]]` / `[[nav]]` — route table entries and the navigation tree
//!
//! The definition is inert data: loading performs parsing and validation
//! only. Building the resolvable route table from it is the job of the
//! `docshell-site` crate.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Definition filename to search for.
const CONFIG_FILENAME: &str = "site.toml";

/// Complete site definition as parsed from `site.toml`.
#[derive(Debug, Deserialize)]
pub struct SiteSpec {
    /// Global site settings.
    pub site: SiteSection,
    /// Theme color palette.
    #[serde(default)]
    pub theme: ThemeSpec,
    /// Route table entries, in declaration order.
    #[serde(default)]
    pub pages: Vec<PageSpec>,
    /// Navigation tree entries, in declaration order.
    #[serde(default)]
    pub nav: Vec<NavSpec>,

    /// Path to the definition file (set after loading).
    #[serde(skip)]
    pub spec_path: Option<PathBuf>,
}

/// Global site settings (`[site]` section).
#[derive(Debug, Deserialize)]
pub struct SiteSection {
    /// Site title shown in the navigation bar.
    pub title: String,
    /// Route the root path redirects to.
    pub home: String,
    /// Current release identifier.
    pub release: String,
    /// All published release identifiers.
    #[serde(default)]
    pub releases: Vec<String>,
    /// Navigation bar icon name.
    #[serde(default)]
    pub icon: Option<String>,
    /// Navigation bar logo path.
    #[serde(default)]
    pub logo: Option<String>,
    /// Color name overrides keyed by path pattern (`*` or a literal path).
    #[serde(default)]
    pub path_colors: BTreeMap<String, String>,
}

/// Theme color palette (`[theme]` section).
///
/// Defaults match the palette the shell ships with; a definition only
/// needs to list the colors it overrides.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ThemeSpec {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub error: String,
    pub info: String,
    pub success: String,
    pub warning: String,
}

impl Default for ThemeSpec {
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

/// A single route table entry (`[[pages]]`).
#[derive(Debug, Deserialize)]
pub struct PageSpec {
    /// URL path with leading slash (e.g. `/about/01_overview`).
    pub path: String,
    /// Browser/meta title.
    pub title: String,
    /// H1 heading; defaults to `title` when omitted.
    #[serde(default)]
    pub heading: Option<String>,
    /// Optional prefix rendered before the heading.
    #[serde(default)]
    pub heading_prefix: Option<String>,
    /// Meta description.
    #[serde(default)]
    pub description: Option<String>,
    /// Meta keywords.
    #[serde(default)]
    pub keywords: Option<String>,
    /// Whether the navigation drawer is shown on this page.
    #[serde(default = "default_true")]
    pub has_nav: bool,
    /// Custom layout tag for the shell.
    #[serde(default)]
    pub custom_layout: Option<String>,
    /// Content component id; derived from the path when omitted.
    #[serde(default)]
    pub component: Option<String>,
    /// Source document the content was generated from.
    #[serde(default)]
    pub source: Option<String>,
}

fn default_true() -> bool {
    true
}

/// A navigation tree entry (`[[nav]]`).
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavSpec {
    /// Section caption.
    Header {
        /// Caption text.
        title: String,
    },
    /// Visual separator.
    Divider,
    /// Leaf link.
    Link {
        /// Display title.
        title: String,
        /// Link target; a registered route or an external URL.
        href: String,
        /// Icon name.
        #[serde(default)]
        icon: Option<String>,
        /// Link target attribute (e.g. `_blank`).
        #[serde(default)]
        target: Option<String>,
    },
    /// Grouped submenu of leaf links.
    Group {
        /// Display title.
        title: String,
        /// Icon name.
        #[serde(default)]
        icon: Option<String>,
        /// Route prefix the shell highlights this group for.
        prefix: String,
        /// Ordered submenu links.
        items: Vec<NavLinkSpec>,
    },
}

/// A leaf link inside a nav group.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct NavLinkSpec {
    /// Display title.
    pub title: String,
    /// Link target.
    pub href: String,
    /// Link target attribute (e.g. `_blank`).
    #[serde(default)]
    pub target: Option<String>,
}

/// Definition loading error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Explicitly named file not found.
    #[error("Site definition not found: {}", .0.display())]
    NotFound(PathBuf),
    /// No definition found by discovery.
    #[error("No {CONFIG_FILENAME} found in current directory or any parent")]
    NotDiscovered,
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Site definition error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a route field to carry a leading slash.
fn require_route(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;
    if !value.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "{field} must start with '/', got '{value}'"
        )));
    }
    Ok(())
}

/// Require a `#RRGGBB` color value.
fn require_hex_color(value: &str, field: &str) -> Result<(), ConfigError> {
    let hex = value.strip_prefix('#').unwrap_or("");
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ConfigError::Validation(format!(
            "{field} must be a #RRGGBB color, got '{value}'"
        )));
    }
    Ok(())
}

impl SiteSpec {
    /// Load a site definition.
    ///
    /// If `spec_path` is provided, loads from that file. Otherwise,
    /// searches for `site.toml` in the current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, fails to parse, or fails
    /// validation.
    pub fn load(spec_path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match spec_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                path.to_path_buf()
            }
            None => Self::discover().ok_or(ConfigError::NotDiscovered)?,
        };
        Self::load_from_file(&path)
    }

    /// Parse and validate a definition from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let spec: Self = toml::from_str(content)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Search for the definition file in current directory and parents.
    fn discover() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load a definition from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut spec = Self::from_toml(&content)?;
        spec.spec_path = Some(path.to_path_buf());
        Ok(spec)
    }

    /// Validate definition values.
    ///
    /// Checks the site section, theme palette, page entries, and nav
    /// entries. Route table invariants that need the full table (path
    /// uniqueness, home registration) are enforced by `docshell-site`
    /// at construction.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` on the first failing check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_theme()?;
        self.validate_pages()?;
        self.validate_nav()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_route(&self.site.home, "site.home")?;
        require_non_empty(&self.site.release, "site.release")?;

        if !self.site.releases.is_empty() && !self.site.releases.contains(&self.site.release) {
            return Err(ConfigError::Validation(format!(
                "site.release '{}' is not listed in site.releases",
                self.site.release
            )));
        }

        for pattern in self.site.path_colors.keys() {
            if pattern != "*" && !pattern.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "site.path_colors pattern must be '*' or a route, got '{pattern}'"
                )));
            }
        }

        Ok(())
    }

    fn validate_theme(&self) -> Result<(), ConfigError> {
        let colors = [
            (&self.theme.primary, "theme.primary"),
            (&self.theme.secondary, "theme.secondary"),
            (&self.theme.accent, "theme.accent"),
            (&self.theme.error, "theme.error"),
            (&self.theme.info, "theme.info"),
            (&self.theme.success, "theme.success"),
            (&self.theme.warning, "theme.warning"),
        ];
        for (value, field) in colors {
            require_hex_color(value, field)?;
        }
        Ok(())
    }

    fn validate_pages(&self) -> Result<(), ConfigError> {
        for (i, page) in self.pages.iter().enumerate() {
            let at = format!("pages[{i}].path");
            require_route(&page.path, &at)?;
            if page.path == "/" {
                return Err(ConfigError::Validation(format!(
                    "{at} cannot be '/': the root path is reserved for the home redirect"
                )));
            }
            require_non_empty(&page.title, &format!("pages[{i}].title"))?;
        }
        Ok(())
    }

    fn validate_nav(&self) -> Result<(), ConfigError> {
        for (i, entry) in self.nav.iter().enumerate() {
            match entry {
                NavSpec::Header { title } => {
                    require_non_empty(title, &format!("nav[{i}].title"))?;
                }
                NavSpec::Divider => {}
                NavSpec::Link { title, href, .. } => {
                    require_non_empty(title, &format!("nav[{i}].title"))?;
                    require_non_empty(href, &format!("nav[{i}].href"))?;
                }
                NavSpec::Group {
                    title,
                    prefix,
                    items,
                    ..
                } => {
                    require_non_empty(title, &format!("nav[{i}].title"))?;
                    require_route(prefix, &format!("nav[{i}].prefix"))?;
                    for (j, item) in items.iter().enumerate() {
                        require_non_empty(&item.title, &format!("nav[{i}].items[{j}].title"))?;
                        require_non_empty(&item.href, &format!("nav[{i}].items[{j}].href"))?;
                    }
                }
            }
        }
        Ok(())
    }
}
