//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use canopy_config::{Config, SUPPORTED_EXTENSIONS, TableSettings};
use canopy_table::{ColumnAliases, LoadOptions};
use canopy_tree::BuildOptions;
use tracing::debug;

use crate::Dataset;

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
    /// Used by `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Resolves a source argument and builds the dataset it names.
    ///
    /// A configured dataset name takes precedence over a file of the same name.
    pub fn open_dataset(&self, source: &str) -> Result<Dataset, ExitCode> {
        let (name, path) = self.resolve_source(source)?;
        let load = load_options(&self.config.table)?;
        let build = BuildOptions {
            root_title: self.config.settings.root_title.clone(),
        };

        Dataset::open(name, &path, &load, &build).map_err(|e| {
            eprintln!("error: failed to load {}: {e}", path.display());
            ExitCode::FAILURE
        })
    }

    /// Maps a source argument to a display name and an existing file.
    fn resolve_source(&self, source: &str) -> Result<(String, PathBuf), ExitCode> {
        if let Some(dataset) = self.config.dataset(source) {
            debug!(dataset = source, path = %dataset.path.display(), "using configured dataset");
            return match dataset.existing_file() {
                Ok(path) => Ok((dataset.name.clone(), path.to_path_buf())),
                Err(e) => {
                    eprintln!("error: {e}");
                    Err(ExitCode::FAILURE)
                }
            };
        }

        let path = self.cwd.join(source);
        if path.is_file() && has_table_extension(&path) {
            let name = path
                .file_stem()
                .map_or_else(|| source.to_string(), |s| s.to_string_lossy().into_owned());
            return Ok((name, path));
        }

        eprintln!("error: unknown dataset or table file: {source}");
        if self.config.datasets.is_empty() {
            eprintln!("Pass a .csv or .json file, or run 'canopy init' and add [dataset.NAME] sections.");
        } else {
            let names: Vec<&str> = self.config.datasets.iter().map(|d| d.name.as_str()).collect();
            eprintln!("Configured datasets: {}", names.join(", "));
        }
        Err(ExitCode::FAILURE)
    }
}

/// Returns true if the file extension is one canopy can load.
fn has_table_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.iter().any(|s| s.eq_ignore_ascii_case(ext)))
}

/// Translates table settings into loader options.
fn load_options(table: &TableSettings) -> Result<LoadOptions, ExitCode> {
    let delimiter = match table.delimiter {
        None => None,
        Some(c) if c.is_ascii() => Some(c as u8),
        Some(c) => {
            eprintln!("error: CSV delimiter {c:?} is not a single ASCII character");
            return Err(ExitCode::FAILURE);
        }
    };
    Ok(LoadOptions {
        aliases: ColumnAliases {
            id: table.id_aliases.clone(),
            label: table.label_aliases.clone(),
        },
        delimiter,
    })
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_options_from_settings() {
        let settings = TableSettings {
            delimiter: Some(';'),
            id_aliases: vec!["code".into()],
            ..Default::default()
        };

        let options = load_options(&settings).unwrap();
        assert_eq!(options.delimiter, Some(b';'));
        assert_eq!(options.aliases.id, vec!["code"]);
        assert_eq!(options.aliases.label.len(), 4);
    }

    #[test]
    fn test_load_options_rejects_wide_delimiter() {
        let settings = TableSettings {
            delimiter: Some('§'),
            ..Default::default()
        };
        assert!(load_options(&settings).is_err());
    }

    #[test]
    fn test_table_extensions() {
        assert!(has_table_extension(Path::new("cars.CSV")));
        assert!(has_table_extension(Path::new("dir/cars.json")));
        assert!(!has_table_extension(Path::new("cars.xlsx")));
        assert!(!has_table_extension(Path::new("cars")));
    }
}
