//! `dump` subcommand - emit the JSON payload for the rendering shell.

use std::path::PathBuf;

use clap::Args;

use docshell_config::SiteSpec;
use docshell_site::RouteTable;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `dump` command.
#[derive(Args)]
pub(crate) struct DumpArgs {
    /// Path to the site definition (discovered from the current
    /// directory when omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

impl DumpArgs {
    pub(crate) fn execute(&self, output: &Output) -> Result<(), CliError> {
        let spec = SiteSpec::load(self.config.as_deref())?;
        let table = RouteTable::from_spec(&spec)?;

        let payload = table.payload();
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&payload)?
        } else {
            serde_json::to_string(&payload)?
        };
        output.payload(&rendered);
        Ok(())
    }
}
