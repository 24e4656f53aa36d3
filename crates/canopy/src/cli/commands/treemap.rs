//! Implementation of `canopy treemap`.

use std::process::ExitCode;

use canopy_search::PATH_SEPARATOR;
use canopy_treemap::TreemapError;

use super::shared::unknown_model;
use crate::cli::{
    args::TreemapCommand,
    context::CommandContext,
    output::{print_json, print_treemap},
};

/// Aggregates one model and prints its treemap arrays.
pub fn run(ctx: &CommandContext, cmd: &TreemapCommand) -> ExitCode {
    let dataset = match ctx.open_dataset(&cmd.source.source) {
        Ok(d) => d,
        Err(code) => return code,
    };

    let map = match dataset.treemap(&cmd.model, &cmd.path) {
        Ok(map) => map,
        Err(TreemapError::UnknownModel { model }) => {
            unknown_model(&dataset, &model);
            return ExitCode::FAILURE;
        }
    };

    if cmd.json {
        return print_json(&map);
    }

    let title = if cmd.path.is_empty() {
        cmd.model.clone()
    } else {
        format!("{}: {}", cmd.model, cmd.path.join(PATH_SEPARATOR))
    };
    print_treemap(&title, &map);
    ExitCode::SUCCESS
}
