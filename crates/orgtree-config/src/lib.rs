//! Configuration system for orgtree.
//!
//! orgtree uses TOML configuration files named `.orgtree.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.orgtree.toml` files found, then loading `~/.orgtree.toml` as the global config with lowest
//! precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawDisplaySettings, RawSearchSettings, parse_config_file, parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use templates::{InitTarget, global_template, init_target, local_template};
use tracing::info;

/// Default position code at or below which a member is a leader.
pub const DEFAULT_LEADER_THRESHOLD: u32 = 100;

/// Default maximum number of search results.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Top-level merged configuration for orgtree.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.orgtree.toml` files according to precedence rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Display settings.
    pub display: DisplaySettings,
    /// Search settings.
    pub search: SearchSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.orgtree.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.orgtree.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.orgtree.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let config = merge_configs(&parsed);
        if !parsed.is_empty() {
            info!(
                files = parsed.len(),
                leader_threshold = config.display.leader_threshold,
                limit = config.search.limit,
                "loaded configuration"
            );
        }
        Ok(config)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// This outputs the merged settings in the same format as a `.orgtree.toml` file, making it
    /// easy to see the effective configuration.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            display: &self.display,
            search: &self.search,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Position code at or below which a member is shown as a leader.
    pub leader_threshold: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            leader_threshold: DEFAULT_LEADER_THRESHOLD,
        }
    }
}

/// Search settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum search results.
    pub limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Display settings.
    display: &'a DisplaySettings,
    /// Search settings.
    search: &'a SearchSettings,
}
