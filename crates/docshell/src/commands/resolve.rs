//! `resolve` subcommand - resolve a path against the route table.

use std::path::PathBuf;

use clap::Args;

use docshell_config::SiteSpec;
use docshell_site::{Resolution, RouteTable};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `resolve` command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// The path to resolve (e.g. `/about/01_overview`).
    path: String,

    /// Path to the site definition (discovered from the current
    /// directory when omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit the resolution as JSON.
    #[arg(long)]
    json: bool,
}

impl ResolveArgs {
    pub(crate) fn execute(&self, output: &Output) -> Result<(), CliError> {
        let spec = SiteSpec::load(self.config.as_deref())?;
        let table = RouteTable::from_spec(&spec)?;

        match table.resolve(&self.path) {
            Resolution::Page(page) => {
                if self.json {
                    let value = serde_json::json!({
                        "kind": "page",
                        "route": page,
                    });
                    output.payload(&serde_json::to_string(&value)?);
                } else {
                    output.success(&format!("{} -> page", page.path));
                    output.info(&format!("  title:   {}", page.meta.title));
                    output.info(&format!("  content: {}", page.content.id));
                }
            }
            Resolution::Redirect(target) => {
                if self.json {
                    let value = serde_json::json!({
                        "kind": "redirect",
                        "target": target,
                    });
                    output.payload(&serde_json::to_string(&value)?);
                } else {
                    output.info(&format!("{} -> redirect to {target}", self.path));
                }
            }
        }
        Ok(())
    }
}
