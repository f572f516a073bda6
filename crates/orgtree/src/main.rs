//! orgtree: browse and search organization rosters.
//!
//! Reads a staff roster CSV whose leading column pairs describe the organization (code and name
//! per level, outermost first), builds the unit hierarchy with headcounts, and prints it or
//! searches it from the command line.

#![warn(missing_docs)]

mod cli;

use std::process::ExitCode;

use cli::{
    CommandContext,
    args::{Cli, Commands},
    commands,
    logging::init_tracing,
};
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = match cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    match ctx {
        Ok(ctx) => commands::run(cli.command, &ctx),
        Err(code) => code,
    }
}
