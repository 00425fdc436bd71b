//! Route table and navigation structure for docshell.
//!
//! This crate provides:
//! - [`RouteTable`]: the immutable set of registered pages plus
//!   navigation tree and site-wide settings
//! - [`Resolution`]: pure path resolution with root/wildcard redirects
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use docshell_config::SiteSpec;
//! use docshell_site::{Resolution, RouteTable};
//!
//! let spec = SiteSpec::load(None)?;
//! let table = RouteTable::from_spec(&spec)?;
//!
//! match table.resolve("/about/01_overview") {
//!     Resolution::Page(page) => println!("{}", page.meta.title),
//!     Resolution::Redirect(target) => println!("-> {target}"),
//! }
//! # Ok(())
//! # }
//! ```

pub(crate) mod nav;
pub(crate) mod page;
pub(crate) mod route;
pub(crate) mod settings;

pub use nav::{NavEntry, NavGroup, NavLink, Navigation};
pub use page::{ContentRef, Page, PageMeta};
pub use route::{Resolution, RouteError, RouteTable, RouteTableBuilder, ShellPayload, normalize};
pub use settings::{SiteSettings, ThemePalette};
