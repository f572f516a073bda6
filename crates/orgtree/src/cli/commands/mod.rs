//! Command implementations and dispatch.

pub mod config;
pub mod export;
pub mod init;
pub mod search;
pub mod stats;
pub mod tree;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Tree(cmd) => tree::run(ctx, &cmd),
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Export(cmd) => export::run(ctx, &cmd),
        Commands::Stats(cmd) => stats::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}
