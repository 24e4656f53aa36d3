//! Configuration system for canopy.
//!
//! canopy uses TOML configuration files named `.canopy.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.canopy.toml` files found, then loading `~/.canopy.toml` as the global config with
//! lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawDataset, RawSearchSettings, RawSettings, RawTableSettings, parse_config_file,
    parse_config_str,
};
pub use resolve::resolve_dataset_path;
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::{ConfigWarning, SUPPORTED_EXTENSIONS};
use validate::validate_config;

/// Header names accepted for the ID column when none are configured.
pub const DEFAULT_ID_ALIASES: &[&str] = &["id", "nummer", "no"];

/// Header names accepted for the label column when none are configured.
pub const DEFAULT_LABEL_ALIASES: &[&str] = &["label", "name", "titel", "title"];

/// Top-level merged configuration for canopy.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.canopy.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// General settings.
    pub settings: Settings,
    /// Search-related settings.
    pub search: SearchSettings,
    /// Table loading settings.
    pub table: TableSettings,
    /// Resolved datasets, sorted by name.
    pub datasets: Vec<Dataset>,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.canopy.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

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

        merge_configs(&parsed)
    }

    /// Looks up a dataset by name.
    pub fn dataset(&self, name: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.name == name)
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// Datasets are left out since they carry resolved paths.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            settings: &self.settings,
            search: &self.search,
            table: &self.table,
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// General settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Title of the synthetic root node of every model tree.
    pub root_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_title: String::from("Root"),
        }
    }
}

/// Search-related settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Default maximum number of hits.
    pub limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { limit: 100 }
    }
}

/// Table loading settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TableSettings {
    /// Forced CSV delimiter. When unset, comma is tried first, then semicolon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<char>,
    /// Header names accepted for the ID column, compared case-insensitively.
    pub id_aliases: Vec<String>,
    /// Header names accepted for the label column, compared case-insensitively.
    pub label_aliases: Vec<String>,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            delimiter: None,
            id_aliases: DEFAULT_ID_ALIASES.iter().map(|s| (*s).to_string()).collect(),
            label_aliases: DEFAULT_LABEL_ALIASES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// General settings.
    settings: &'a Settings,
    /// Search-related settings.
    search: &'a SearchSettings,
    /// Table loading settings.
    table: &'a TableSettings,
}

/// A named dataset pointing to a CSV or JSON table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Name of the dataset.
    pub name: String,
    /// Resolved absolute path to the table file.
    pub path: PathBuf,
    /// Whether this dataset was defined in the global `~/.canopy.toml`.
    pub is_global: bool,
}

impl Dataset {
    /// Returns the dataset path if it exists and is a file.
    pub fn existing_file(&self) -> Result<&Path, ConfigError> {
        if !self.path.exists() {
            return Err(ConfigError::DatasetPathNotFound {
                dataset: self.name.clone(),
                path: self.path.clone(),
            });
        }
        if !self.path.is_file() {
            return Err(ConfigError::DatasetPathNotFile {
                dataset: self.name.clone(),
                path: self.path.clone(),
            });
        }
        Ok(&self.path)
    }
}
