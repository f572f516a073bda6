//! Implementation of `orgtree init`.

use std::{fs, path::Path, process::ExitCode};

use orgtree_config::{InitTarget, init_target};
use tracing::info;

use crate::cli::{
    args::InitCommand,
    context::CommandContext,
    output::{dim, subheader},
};

/// Writes a commented-out `.orgtree.toml` template.
///
/// Running in the home directory writes the global file even without `--global`.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let InitTarget {
        path: target,
        template,
    } = match init_target(&ctx.cwd, cmd.global) {
        Ok(target) => target,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match write_template(&target, &template, cmd.force) {
        Ok(()) => {
            info!(path = %target.display(), "wrote config template");
            println!("Created {}", target.display());
            println!();
            println!("{}", subheader("Template (uncomment settings to change them):"));
            for line in template.lines() {
                println!("  {}", dim(line));
            }
            ExitCode::SUCCESS
        }
        Err(code) => code,
    }
}

/// Writes `template` to `target`, refusing to replace an existing file unless `force` is set.
fn write_template(target: &Path, template: &str, force: bool) -> Result<(), ExitCode> {
    if target.exists() && !force {
        eprintln!(
            "error: {} already exists (use --force to overwrite)",
            target.display()
        );
        return Err(ExitCode::FAILURE);
    }
    fs::write(target, template).map_err(|e| {
        eprintln!("error: failed to write {}: {e}", target.display());
        ExitCode::FAILURE
    })
}
