//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`. Each field takes the
//! value from the closest file that sets it.

use std::path::PathBuf;

use tracing::debug;

use crate::{
    Config, DisplaySettings, SearchSettings,
    parse::{RawConfig, RawDisplaySettings, RawSearchSettings},
};

/// A parsed config file with its source path.
#[derive(Debug, Clone)]
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs must be in precedence order: highest first. Returns the default configuration for
/// an empty list.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    let mut display = DisplaySettings::default();
    let mut search = SearchSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        debug!(path = %parsed.path.display(), "applying config file");
        if let Some(ref raw) = parsed.config.display {
            apply_raw_display(&mut display, raw);
        }
        if let Some(ref raw) = parsed.config.search {
            apply_raw_search(&mut search, raw);
        }
    }

    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(|dir| dir.to_path_buf());

    Config {
        display,
        search,
        config_root,
    }
}

/// Applies raw display settings to result, overwriting any present values.
fn apply_raw_display(result: &mut DisplaySettings, raw: &RawDisplaySettings) {
    if let Some(v) = raw.leader_threshold {
        result.leader_threshold = v;
    }
}

/// Applies raw search settings to result.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.limit {
        result.limit = v;
    }
}
