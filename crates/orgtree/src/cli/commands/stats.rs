//! Implementation of `orgtree stats`.

use std::process::ExitCode;

use orgtree_index::EntryKind;
use serde::Serialize;

use crate::cli::{
    args::StatsCommand,
    context::CommandContext,
    output::{dim, print_json, subheader},
};

/// Summary of how a roster was read.
#[derive(Serialize)]
struct RosterStats {
    /// Data rows in the file.
    rows: usize,
    /// Rows filed under a unit.
    attached: usize,
    /// Rows skipped for lacking a top-level unit.
    dropped: usize,
    /// Rows with missing trailing cells.
    short_rows: usize,
    /// Units in the tree.
    units: usize,
    /// Organization levels in use.
    levels: usize,
    /// Members in the tree.
    members: usize,
    /// Search index entries.
    index_entries: usize,
    /// Members at or below the leader threshold.
    leaders: usize,
}

/// Prints counts gathered while reading the roster.
pub fn run(ctx: &CommandContext, cmd: &StatsCommand) -> ExitCode {
    let threshold = ctx.leader_threshold(None);
    let session = match ctx.open_roster(&cmd.csv, threshold) {
        Ok(session) => session,
        Err(code) => return code,
    };
    let (Some(tree), Some(index), Some(report)) =
        (session.tree(), session.index(), session.report())
    else {
        eprintln!("error: no roster loaded");
        return ExitCode::FAILURE;
    };

    let stats = RosterStats {
        rows: report.rows,
        attached: report.attached,
        dropped: report.dropped,
        short_rows: report.short_rows,
        units: tree.unit_count(),
        levels: tree.depth(),
        members: tree.total_members,
        index_entries: index.len(),
        leaders: tree
            .iter_preorder()
            .flat_map(|node| &node.members)
            .filter(|member| member.is_leader(threshold))
            .count(),
    };

    if cmd.json {
        return print_json(&stats);
    }

    println!("{}", subheader("Rows:"));
    println!("  read        {}", stats.rows);
    println!("  attached    {}", stats.attached);
    println!("  dropped     {}", stats.dropped);
    println!("  short       {}", stats.short_rows);
    println!();
    println!("{}", subheader("Tree:"));
    println!("  units       {}", stats.units);
    println!("  levels      {}", stats.levels);
    println!("  members     {}", stats.members);
    println!(
        "  leaders     {} {}",
        stats.leaders,
        dim(&format!("(position code <= {threshold})"))
    );
    println!();
    println!("{}", subheader("Search index:"));
    println!("  entries     {}", stats.index_entries);
    println!("  units       {}", index.count(EntryKind::Org));
    println!("  members     {}", index.count(EntryKind::Member));
    ExitCode::SUCCESS
}
