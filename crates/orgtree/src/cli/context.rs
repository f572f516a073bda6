//! Shared context for running CLI commands.

use std::{
    env, fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use orgtree_config::Config;
use orgtree_index::{SearchParams, Session};
use tracing::{debug, warn};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Returns the leader threshold, preferring a command-line override.
    pub fn leader_threshold(&self, flag: Option<u32>) -> u32 {
        flag.unwrap_or(self.config.display.leader_threshold)
    }

    /// Returns search parameters, preferring a command-line limit.
    pub fn search_params(&self, flag: Option<u64>) -> SearchParams {
        let limit = flag
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(self.config.search.limit);
        SearchParams::with_limit(limit)
    }

    /// Reads a roster file into a new session, exiting with an error on failure.
    ///
    /// Relative paths are resolved against the working directory.
    pub fn open_roster(&self, csv: &Path, leader_threshold: u32) -> Result<Session, ExitCode> {
        let path = self.cwd.join(csv);
        let text = fs::read_to_string(&path).map_err(|e| {
            eprintln!("error: failed to read {}: {e}", path.display());
            ExitCode::FAILURE
        })?;
        debug!(path = %path.display(), bytes = text.len(), "read roster");

        let mut session = Session::new(leader_threshold);
        let report = session.load_csv(&text).map_err(|e| {
            eprintln!("error: {}: {e}", path.display());
            ExitCode::FAILURE
        })?;

        if report.dropped > 0 {
            warn!(
                dropped = report.dropped,
                "rows without a top-level unit were skipped"
            );
        }
        Ok(session)
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
