//! Implementation of `orgtree tree`.

use std::process::ExitCode;

use crate::cli::{
    args::TreeCommand,
    context::CommandContext,
    output::{dim, render_tree},
};

/// Prints the organization tree in display order.
pub fn run(ctx: &CommandContext, cmd: &TreeCommand) -> ExitCode {
    let threshold = ctx.leader_threshold(cmd.leader_threshold);
    let session = match ctx.open_roster(&cmd.csv, threshold) {
        Ok(session) => session,
        Err(code) => return code,
    };

    match session.tree() {
        Some(tree) if !tree.is_empty() => {
            print!("{}", render_tree(tree, threshold, cmd.units_only));
        }
        _ => println!("{}", dim("(no units)")),
    }
    ExitCode::SUCCESS
}
