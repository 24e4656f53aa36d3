//! Implementation of `canopy compare`.

use std::process::ExitCode;

use canopy_treemap::TreemapError;

use super::shared::unknown_model;
use crate::cli::{
    args::CompareCommand,
    context::CommandContext,
    output::{print_json, print_treemap},
};

/// Aggregates two models over the same scope and prints both treemaps.
pub fn run(ctx: &CommandContext, cmd: &CompareCommand) -> ExitCode {
    let dataset = match ctx.open_dataset(&cmd.source.source) {
        Ok(d) => d,
        Err(code) => return code,
    };

    let comparison = match dataset.compare(&cmd.model_a, &cmd.model_b, cmd.section.as_deref()) {
        Ok(c) => c,
        Err(TreemapError::UnknownModel { model }) => {
            unknown_model(&dataset, &model);
            return ExitCode::FAILURE;
        }
    };

    if cmd.json {
        return print_json(&comparison);
    }

    let suffix = cmd
        .section
        .as_deref()
        .map(|s| format!(": {s}"))
        .unwrap_or_default();
    print_treemap(&format!("{}{suffix}", cmd.model_a), &comparison.a);
    println!();
    print_treemap(&format!("{}{suffix}", cmd.model_b), &comparison.b);
    ExitCode::SUCCESS
}
