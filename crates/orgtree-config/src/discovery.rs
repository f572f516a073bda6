//! Locating `.orgtree.toml` files.
//!
//! Every ancestor of the working directory may hold a config file. The nearest one has the
//! highest precedence; `~/.orgtree.toml` comes last unless a file marked `root = true` ends the
//! search first.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::debug;

use crate::parse::is_root_config;

/// Name of a config file, both per directory and in the home directory.
pub const CONFIG_FILENAME: &str = ".orgtree.toml";

/// Lists the config files that apply to `cwd`, nearest first.
///
/// Directories named like a config file are ignored.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let stop = is_root_config(&candidate);
        debug!(path = %candidate.display(), root = stop, "found config file");
        found.push(candidate);
        if stop {
            return found;
        }
    }

    if let Some(global) = global_config_path().filter(|path| path.is_file())
        && !found.contains(&global)
    {
        debug!(path = %global.display(), "found global config file");
        found.push(global);
    }
    found
}

/// Returns `~/.orgtree.toml`, or `None` when there is no home directory.
pub fn global_config_path() -> Option<PathBuf> {
    let dirs = BaseDirs::new()?;
    Some(dirs.home_dir().join(CONFIG_FILENAME))
}

/// Returns true if `path` is the global config file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| global == path)
}
