//! Docshell CLI - documentation site shell.
//!
//! Provides commands for:
//! - `check`: Validate a site definition and its route table
//! - `resolve`: Resolve a path against the route table
//! - `dump`: Emit the JSON payload the rendering shell consumes

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, DumpArgs, ResolveArgs};
use output::Output;

/// Docshell - documentation site shell.
#[derive(Parser)]
#[command(name = "docshell", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a site definition and its route table.
    Check(CheckArgs),
    /// Resolve a path against the route table.
    Resolve(ResolveArgs),
    /// Emit the JSON payload the rendering shell consumes.
    Dump(DumpArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Check(args) if args.verbose);

    // --verbose forces INFO; otherwise honor RUST_LOG.
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(&output),
        Commands::Resolve(args) => args.execute(&output),
        Commands::Dump(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
