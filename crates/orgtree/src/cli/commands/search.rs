//! Implementation of `orgtree search`.

use std::process::ExitCode;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{JsonSearchOutput, dim, hits_table, print_json},
};

/// Searches units and members and prints the ranked hits.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let params = ctx.search_params(cmd.limit);
    let session = match ctx.open_roster(&cmd.csv, ctx.leader_threshold(None)) {
        Ok(session) => session,
        Err(code) => return code,
    };

    let hits = session.search(&cmd.query, &params);

    if cmd.json {
        return print_json(&JsonSearchOutput {
            query: &cmd.query,
            total_matches: hits.len(),
            results: &hits,
        });
    }

    if hits.is_empty() {
        println!("{}", dim("No results."));
    } else {
        println!("{}", hits_table(&hits));
    }
    ExitCode::SUCCESS
}
