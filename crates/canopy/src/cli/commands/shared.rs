//! Shared helpers for command implementations.

use std::process::ExitCode;

use canopy_tree::ModelBuild;

use crate::Dataset;

/// Returns the build of `model`, or prints the available models and fails.
pub fn require_model<'a>(dataset: &'a Dataset, model: &str) -> Result<&'a ModelBuild, ExitCode> {
    dataset.model(model).ok_or_else(|| {
        unknown_model(dataset, model);
        ExitCode::FAILURE
    })
}

/// Reports an unknown model name together with the dataset's models.
pub fn unknown_model(dataset: &Dataset, model: &str) {
    eprintln!("error: model '{model}' not found in {}", dataset.name());
    eprintln!("Available models: {}", dataset.models().join(", "));
}
