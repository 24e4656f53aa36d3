//! Error types for canopy configuration.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::de;

/// Errors that can occur when loading or processing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// A dataset path does not exist.
    #[error("dataset '{dataset}' path does not exist: {path}")]
    DatasetPathNotFound {
        /// Name of the dataset.
        dataset: String,
        /// The path that was not found.
        path: PathBuf,
    },

    /// A dataset path exists but is not a file.
    #[error("dataset '{dataset}' path is not a file: {path}")]
    DatasetPathNotFile {
        /// Name of the dataset.
        dataset: String,
        /// The path that is not a file.
        path: PathBuf,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// Failed to canonicalize a path.
    #[error("failed to resolve path {path}: {source}")]
    PathResolution {
        /// The path that could not be resolved.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
