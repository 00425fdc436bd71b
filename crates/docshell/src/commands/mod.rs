//! CLI subcommands.

mod check;
mod dump;
mod resolve;

pub(crate) use check::CheckArgs;
pub(crate) use dump::DumpArgs;
pub(crate) use resolve::ResolveArgs;
