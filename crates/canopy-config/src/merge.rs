//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying precedence
//! rules and resolving dataset paths.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::{
    Config, ConfigError, Dataset, SearchSettings, Settings, TableSettings,
    discovery::is_global_config,
    parse::{RawConfig, RawSearchSettings, RawSettings, RawTableSettings},
    resolve::resolve_dataset_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory holding the config file, against which relative paths resolve.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to
/// CWD), lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Alias lists: replaced as a whole by the highest-precedence definition
/// - Datasets: merged by name, first definition wins
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let mut settings = Settings::default();
    let mut search = SearchSettings::default();
    let mut table = TableSettings::default();

    // Lowest precedence first so higher precedence overwrites.
    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.settings {
            apply_raw_settings(&mut settings, raw);
        }
        if let Some(ref raw) = parsed.config.search {
            apply_raw_search(&mut search, raw);
        }
        if let Some(ref raw) = parsed.config.table {
            apply_raw_table(&mut table, raw);
        }
    }

    let datasets = merge_datasets(configs)?;
    let config_root = configs.first().map(|c| c.dir().to_path_buf());

    Ok(Config {
        settings,
        search,
        table,
        datasets,
        config_root,
    })
}

/// Applies raw settings to result, overwriting any present values.
fn apply_raw_settings(result: &mut Settings, raw: &RawSettings) {
    if let Some(ref v) = raw.root_title {
        result.root_title.clone_from(v);
    }
}

/// Applies raw search settings to result.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.limit {
        result.limit = v;
    }
}

/// Applies raw table settings to result.
fn apply_raw_table(result: &mut TableSettings, raw: &RawTableSettings) {
    if let Some(v) = raw.delimiter {
        result.delimiter = Some(v);
    }
    if let Some(ref v) = raw.id_aliases {
        result.id_aliases.clone_from(v);
    }
    if let Some(ref v) = raw.label_aliases {
        result.label_aliases.clone_from(v);
    }
}

/// Merges datasets from all configs, resolving paths.
///
/// `is_global` is determined by whether the source config file is `~/.canopy.toml`.
fn merge_datasets(configs: &[ParsedConfig]) -> Result<Vec<Dataset>, ConfigError> {
    let mut seen: HashMap<String, Dataset> = HashMap::new();

    for parsed in configs {
        let Some(ref datasets) = parsed.config.dataset else {
            continue;
        };

        let is_global = is_global_config(&parsed.path);
        for (name, raw) in datasets {
            if seen.contains_key(name) {
                continue;
            }
            let path = resolve_dataset_path(&raw.path, parsed.dir())?;
            seen.insert(
                name.clone(),
                Dataset {
                    name: name.clone(),
                    path,
                    is_global,
                },
            );
        }
    }

    let mut datasets: Vec<Dataset> = seen.into_values().collect();
    datasets.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(datasets)
}
