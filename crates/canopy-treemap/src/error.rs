//! Error types for the canopy-treemap crate.

use thiserror::Error;

/// Errors that can occur when building a treemap.
#[derive(Debug, Error)]
pub enum TreemapError {
    /// The requested model column does not exist in the table.
    #[error("model '{model}' not found")]
    UnknownModel {
        /// Requested model name.
        model: String,
    },
}
