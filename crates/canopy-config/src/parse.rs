//! Configuration file parsing.
//!
//! Parses individual `.canopy.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// General settings section.
    pub settings: Option<RawSettings>,
    /// Search settings section.
    pub search: Option<RawSearchSettings>,
    /// Table loading section.
    pub table: Option<RawTableSettings>,
    /// Dataset definitions: name -> dataset config.
    pub dataset: Option<HashMap<String, RawDataset>>,
}

/// Raw dataset definition.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDataset {
    /// Path to a CSV or JSON table.
    pub path: String,
}

/// Raw general settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    /// Title of the synthetic root node.
    pub root_title: Option<String>,
}

/// Raw search settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Default result limit.
    pub limit: Option<usize>,
}

/// Raw table loading settings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTableSettings {
    /// Forced CSV delimiter.
    pub delimiter: Option<char>,
    /// Header names accepted for the ID column. One string or a list.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub id_aliases: Option<Vec<String>>,
    /// Header names accepted for the label column. One string or a list.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub label_aliases: Option<Vec<String>>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> RawConfig {
        parse_config_str(toml, Path::new("test.toml")).unwrap()
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse("");
        assert!(config.root.is_none());
        assert!(config.settings.is_none());
        assert!(config.search.is_none());
        assert!(config.table.is_none());
        assert!(config.dataset.is_none());
    }

    #[test]
    fn test_parse_datasets() {
        let config = parse(
            r#"
[dataset.cars]
path = "./cars.csv"

[dataset.bikes]
path = "~/data/bikes.json"
"#,
        );
        let datasets = config.dataset.unwrap();
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets["cars"].path, "./cars.csv");
        assert_eq!(datasets["bikes"].path, "~/data/bikes.json");
    }

    #[test]
    fn test_parse_settings_and_search() {
        let config = parse(
            r#"
root_title = "ignored at top level"

[settings]
root_title = "Vehicle"

[search]
limit = 25
"#,
        );
        assert_eq!(config.settings.unwrap().root_title.as_deref(), Some("Vehicle"));
        assert_eq!(config.search.unwrap().limit, Some(25));
    }

    #[test]
    fn test_parse_aliases_one_or_many() {
        let config = parse(
            r#"
[table]
delimiter = ";"
id_aliases = "code"
label_aliases = ["bezeichnung", "text"]
"#,
        );
        let table = config.table.unwrap();
        assert_eq!(table.delimiter, Some(';'));
        assert_eq!(table.id_aliases, Some(vec!["code".to_string()]));
        assert_eq!(
            table.label_aliases,
            Some(vec!["bezeichnung".to_string(), "text".to_string()])
        );
    }

    #[test]
    fn test_parse_table_partial() {
        let config = parse("[table]\ndelimiter = \"\\t\"\n");
        let table = config.table.unwrap();
        assert_eq!(table.delimiter, Some('\t'));
        assert!(table.id_aliases.is_none());
        assert!(table.label_aliases.is_none());
    }

    #[test]
    fn test_parse_multichar_delimiter_rejected() {
        let result = parse_config_str("[table]\ndelimiter = \";;\"\n", Path::new("test.toml"));
        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = parse_config_str("this is not valid toml [[[", Path::new("test.toml"));
        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn test_parse_wrong_type_error() {
        let result = parse_config_str("[search]\nlimit = \"many\"\n", Path::new("test.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_unknown_fields_ignored() {
        let config = parse("[search]\nlimit = 5\nfuzzy = true\n\n[other]\nfoo = 1\n");
        assert_eq!(config.search.unwrap().limit, Some(5));
    }

    #[test]
    fn test_parse_config_file_not_found() {
        let result = parse_config_file(Path::new("/nonexistent/path/.canopy.toml"));
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn test_is_root_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".canopy.toml");
        fs::write(&path, "root = true\n").unwrap();
        assert!(is_root_config(&path));
        fs::write(&path, "root = false\n").unwrap();
        assert!(!is_root_config(&path));
        fs::write(&path, "[search]\nlimit = 5\n").unwrap();
        assert!(!is_root_config(&path));
        assert!(!is_root_config(Path::new("/nonexistent/.canopy.toml")));
    }
}
