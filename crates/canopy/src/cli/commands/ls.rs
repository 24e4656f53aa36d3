//! Implementation of `canopy ls`.

use std::process::ExitCode;

use crate::cli::{
    args::LsCommand,
    context::CommandContext,
    output::{dim, header, warning},
};

/// Lists configured datasets, optionally with their models.
pub fn run(ctx: &CommandContext, cmd: &LsCommand) -> ExitCode {
    let config = &ctx.config;

    if config.datasets.is_empty() {
        println!("{}", dim("No datasets configured."));
        return ExitCode::SUCCESS;
    }

    let mut status = ExitCode::SUCCESS;
    for entry in &config.datasets {
        let scope = if entry.is_global { "global" } else { "local" };
        println!(
            "{} {} {}",
            header(&entry.name),
            dim(&format!("({scope})")),
            dim(&format!("→ {}", entry.path.display()))
        );

        if !cmd.long {
            continue;
        }
        // Errors are printed by the context; keep listing the remaining datasets.
        match ctx.open_dataset(&entry.name) {
            Ok(dataset) => {
                for model in dataset.models() {
                    println!("  {} {model}", dim("•"));
                }
            }
            Err(code) => {
                println!("  {}", warning("[unreadable]"));
                status = code;
            }
        }
        println!();
    }

    status
}
