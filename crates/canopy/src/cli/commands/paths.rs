//! Implementation of `canopy paths`.

use std::process::ExitCode;

use canopy_search::PATH_SEPARATOR;

use super::shared::require_model;
use crate::cli::{args::PathsCommand, context::CommandContext};

/// Prints one line per path index entry, in pre-order.
pub fn run(ctx: &CommandContext, cmd: &PathsCommand) -> ExitCode {
    let dataset = match ctx.open_dataset(&cmd.source.source) {
        Ok(d) => d,
        Err(code) => return code,
    };
    let build = match require_model(&dataset, &cmd.model) {
        Ok(b) => b,
        Err(code) => return code,
    };

    let entries = if cmd.normalized {
        build.index.npaths()
    } else {
        build.index.paths()
    };
    for parts in entries {
        println!("{}", parts.join(PATH_SEPARATOR));
    }

    ExitCode::SUCCESS
}
