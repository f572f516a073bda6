//! Implementation of `orgtree config`.

use std::process::ExitCode;

use crate::cli::{context::CommandContext, output::dim};

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;
    match config.settings_to_toml() {
        Ok(toml) => {
            if let Some(root) = &config.config_root {
                println!("{}", dim(&format!("# from {}", root.display())));
            }
            print!("{toml}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
