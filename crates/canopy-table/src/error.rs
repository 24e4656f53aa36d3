//! Error types for table loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Failed to read a file.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Unsupported file type.
    #[error("unsupported file type: {path}")]
    UnsupportedFileType {
        /// Path to the unsupported file.
        path: PathBuf,
    },

    /// Malformed CSV input.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON input.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON input that is valid but not an array of flat records.
    #[error("unexpected JSON shape: {0}")]
    InvalidJsonShape(String),

    /// A required column is absent after header normalization.
    #[error("column '{column}' is missing")]
    MissingColumn {
        /// Canonical name of the missing column.
        column: &'static str,
    },

    /// The table has no columns besides `ID` and `Label`.
    #[error("no model columns found (expected from the third column on)")]
    NoModelColumns,
}
