//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{fmt, path::Path};

use crate::{Config, Dataset};

/// File extensions canopy can load a table from.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "json"];

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A dataset path does not exist.
    DatasetPathMissing {
        /// Name of the dataset.
        dataset: String,
        /// Path that doesn't exist.
        path: String,
    },
    /// A dataset path exists but is not a file.
    DatasetPathNotFile {
        /// Name of the dataset.
        dataset: String,
        /// Path that is not a file.
        path: String,
    },
    /// A dataset path has an extension canopy cannot load.
    UnsupportedExtension {
        /// Name of the dataset.
        dataset: String,
        /// Offending path.
        path: String,
    },
    /// An alias list is empty, so the column can never be found.
    EmptyAliases {
        /// Which column: `ID` or `Label`.
        column: &'static str,
    },
    /// The CSV delimiter is not a single ASCII character.
    NonAsciiDelimiter {
        /// Configured delimiter.
        delimiter: char,
    },
    /// The default search limit is zero and will be raised to one.
    ZeroSearchLimit,
    /// No datasets are defined.
    NoDatasetsDefined,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DatasetPathMissing { dataset, path } => {
                write!(f, "dataset '{dataset}' path does not exist: {path}")
            }
            Self::DatasetPathNotFile { dataset, path } => {
                write!(f, "dataset '{dataset}' path is not a file: {path}")
            }
            Self::UnsupportedExtension { dataset, path } => {
                write!(
                    f,
                    "dataset '{dataset}' is not a .csv or .json file: {path}"
                )
            }
            Self::EmptyAliases { column } => {
                write!(f, "no header aliases configured for the {column} column")
            }
            Self::NonAsciiDelimiter { delimiter } => {
                write!(f, "CSV delimiter {delimiter:?} is not a single ASCII character")
            }
            Self::ZeroSearchLimit => write!(f, "search limit 0 is treated as 1"),
            Self::NoDatasetsDefined => write!(f, "no datasets are defined in configuration"),
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.table.id_aliases.is_empty() {
        warnings.push(ConfigWarning::EmptyAliases { column: "ID" });
    }
    if config.table.label_aliases.is_empty() {
        warnings.push(ConfigWarning::EmptyAliases { column: "Label" });
    }
    if let Some(delimiter) = config.table.delimiter
        && !delimiter.is_ascii()
    {
        warnings.push(ConfigWarning::NonAsciiDelimiter { delimiter });
    }
    if config.search.limit == 0 {
        warnings.push(ConfigWarning::ZeroSearchLimit);
    }

    if config.datasets.is_empty() {
        warnings.push(ConfigWarning::NoDatasetsDefined);
        return warnings;
    }

    for dataset in &config.datasets {
        warnings.extend(validate_dataset(dataset));
    }

    warnings
}

/// Validates a single dataset.
fn validate_dataset(dataset: &Dataset) -> Option<ConfigWarning> {
    let name = dataset.name.clone();
    let path = dataset.path.display().to_string();

    if !dataset.path.exists() {
        return Some(ConfigWarning::DatasetPathMissing {
            dataset: name,
            path,
        });
    }
    if !dataset.path.is_file() {
        return Some(ConfigWarning::DatasetPathNotFile {
            dataset: name,
            path,
        });
    }
    if !has_supported_extension(&dataset.path) {
        return Some(ConfigWarning::UnsupportedExtension {
            dataset: name,
            path,
        });
    }
    None
}

/// Checks the file extension against [`SUPPORTED_EXTENSIONS`], ignoring case.
fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
}
