//! Implementation of `canopy models`.

use std::process::ExitCode;

use crate::cli::{
    args::ModelsCommand,
    context::CommandContext,
    output::{dim, header},
};

/// Lists the model columns of a dataset in file order.
pub fn run(ctx: &CommandContext, cmd: &ModelsCommand) -> ExitCode {
    let dataset = match ctx.open_dataset(&cmd.source.source) {
        Ok(d) => d,
        Err(code) => return code,
    };

    if !cmd.long {
        for model in dataset.models() {
            println!("{model}");
        }
        return ExitCode::SUCCESS;
    }

    println!(
        "{} {}",
        header(dataset.name()),
        dim(&format!("({} rows)", dataset.table().len()))
    );
    for model in dataset.models() {
        let Some(build) = dataset.model(model) else {
            continue;
        };
        println!(
            "   {model} {}",
            dim(&format!(
                "{} values, {} nodes, {} paths",
                build.tree.value_count(),
                build.tree.node_count(),
                build.index.len()
            ))
        );
    }

    ExitCode::SUCCESS
}
