//! Rendering and JSON serialization for CLI output.

mod tree;

use std::process::ExitCode;

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use orgtree_index::{EntryKind, SearchHit};
use serde::Serialize;
pub use tree::render_tree;

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Yellow text (for leaders and warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats text as highlighted (yellow).
pub fn highlight(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// JSON output for `orgtree search`.
#[derive(Serialize)]
pub struct JsonSearchOutput<'a> {
    /// The query as given.
    pub query: &'a str,
    /// Number of hits returned.
    pub total_matches: usize,
    /// Ranked hits.
    pub results: &'a [SearchHit<'a>],
}

/// Builds the result table for search hits.
pub fn hits_table(hits: &[SearchHit<'_>]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Score", "Kind", "Name", "Path", "Matched"]);

    for hit in hits {
        let entry = hit.entry;
        let kind = match entry.kind {
            EntryKind::Org => "org",
            EntryKind::Member => "member",
        };
        let name = match &entry.member {
            Some(member) => format!(
                "{}（{}/{}）",
                member.name, member.position_title, member.employee_number
            ),
            None => format!("{} [{}]", entry.org_name, entry.org_code),
        };
        table.add_row(vec![
            Cell::new(hit.score).set_alignment(CellAlignment::Right),
            Cell::new(kind),
            Cell::new(name),
            Cell::new(entry.path_text()),
            Cell::new(format!("{} ({})", hit.match_text, hit.field.label())),
        ]);
    }

    table
}
