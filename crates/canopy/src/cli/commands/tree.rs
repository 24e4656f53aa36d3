//! Implementation of `canopy tree`.

use std::process::ExitCode;

use super::shared::require_model;
use crate::cli::{
    args::TreeCommand,
    context::CommandContext,
    output::{print_json, render_tree},
};

/// Prints the pruned tree of one model.
pub fn run(ctx: &CommandContext, cmd: &TreeCommand) -> ExitCode {
    let dataset = match ctx.open_dataset(&cmd.source.source) {
        Ok(d) => d,
        Err(code) => return code,
    };
    let build = match require_model(&dataset, &cmd.model) {
        Ok(b) => b,
        Err(code) => return code,
    };

    if cmd.json {
        return print_json(&build.tree);
    }

    print!("{}", render_tree(&build.tree));
    ExitCode::SUCCESS
}
