//! `check` subcommand - validate a site definition.

use std::path::PathBuf;

use clap::Args;

use docshell_config::SiteSpec;
use docshell_site::RouteTable;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `check` command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to the site definition (discovered from the current
    /// directory when omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CheckArgs {
    pub(crate) fn execute(&self, output: &Output) -> Result<(), CliError> {
        let spec = SiteSpec::load(self.config.as_deref())?;
        if let Some(path) = &spec.spec_path {
            output.info(&format!("Checking {}", path.display()));
        }

        let table = RouteTable::from_spec(&spec)?;
        tracing::info!(pages = table.len(), "Route table built");

        let unresolved = table.nav().unresolved_links(&table);
        if !unresolved.is_empty() {
            for href in &unresolved {
                output.warning(&format!("nav link {href} points at no registered route"));
            }
            return Err(CliError::Validation(
                "nav links point at unregistered routes".to_owned(),
            ));
        }

        let settings = table.settings();
        output.success(&format!(
            "OK: {} page(s), {} nav entries, release {}",
            table.len(),
            table.nav().entries().len(),
            settings.release
        ));
        Ok(())
    }
}
