//! Configuration templates for `orgtree init`.
//!
//! Templates are stored as valid TOML files and returned as commented-out
//! example configurations.

use std::path::{Path, PathBuf};

use crate::{
    ConfigError,
    discovery::{CONFIG_FILENAME, global_config_path},
};

/// Default local configuration template (valid TOML).
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Global configuration template (valid TOML).
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the local configuration template as a commented-out example.
pub fn local_template() -> String {
    comment_template(LOCAL_TEMPLATE)
}

/// Returns the global configuration template as a commented-out example.
pub fn global_template() -> String {
    comment_template(GLOBAL_TEMPLATE)
}

/// Where `orgtree init` writes, and what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitTarget {
    /// File to create.
    pub path: PathBuf,
    /// Commented-out template contents.
    pub template: String,
}

/// Chooses the config file `orgtree init` should create from `cwd`.
///
/// The global file is chosen when `global` is set or when `cwd` is the home directory itself.
pub fn init_target(cwd: &Path, global: bool) -> Result<InitTarget, ConfigError> {
    init_target_in(cwd, global, global_config_path())
}

/// [`init_target`] with the global config path supplied by the caller.
fn init_target_in(
    cwd: &Path,
    global: bool,
    global_path: Option<PathBuf>,
) -> Result<InitTarget, ConfigError> {
    let in_home = global_path
        .as_deref()
        .and_then(Path::parent)
        .is_some_and(|home| home == cwd);

    if global || in_home {
        let path = global_path.ok_or(ConfigError::NoHomeDirectory)?;
        return Ok(InitTarget {
            path,
            template: global_template(),
        });
    }
    Ok(InitTarget {
        path: cwd.join(CONFIG_FILENAME),
        template: local_template(),
    })
}

/// Converts a valid TOML template into a commented-out example config.
///
/// Lines that are already comments are preserved as-is. Non-comment, non-empty
/// lines get a "# " prefix. Empty lines are preserved.
fn comment_template(template: &str) -> String {
    let mut result = String::with_capacity(template.len() + template.lines().count() * 2);
    for line in template.lines() {
        if !line.is_empty() && !line.starts_with('#') {
            result.push_str("# ");
        }
        result.push_str(line);
        result.push('\n');
    }
    result
}
