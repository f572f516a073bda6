//! Implementation of `orgtree export`.

use std::{fs, process::ExitCode};

use tracing::info;

use crate::cli::{args::ExportCommand, context::CommandContext};

/// Writes a JSON snapshot of the roster's tree and search index.
pub fn run(ctx: &CommandContext, cmd: &ExportCommand) -> ExitCode {
    let threshold = ctx.leader_threshold(cmd.leader_threshold);
    let session = match ctx.open_roster(&cmd.csv, threshold) {
        Ok(session) => session,
        Err(code) => return code,
    };

    let json = match session.snapshot().and_then(|snapshot| snapshot.to_json()) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("error: failed to export: {e}");
            return ExitCode::FAILURE;
        }
    };

    match &cmd.output {
        Some(path) => {
            let path = ctx.cwd.join(path);
            if let Err(e) = fs::write(&path, format!("{json}\n")) {
                eprintln!("error: failed to write {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
            info!(path = %path.display(), bytes = json.len(), "wrote snapshot");
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    ExitCode::SUCCESS
}
