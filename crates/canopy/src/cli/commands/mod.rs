//! Command implementations and dispatch.

pub mod check;
pub mod compare;
pub mod config;
pub mod init;
pub mod ls;
pub mod models;
pub mod paths;
pub mod search;
mod shared;
pub mod tree;
pub mod treemap;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: &Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Models(cmd) => models::run(ctx, cmd),
        Commands::Tree(cmd) => tree::run(ctx, cmd),
        Commands::Paths(cmd) => paths::run(ctx, cmd),
        Commands::Search(cmd) => search::run(ctx, cmd),
        Commands::Treemap(cmd) => treemap::run(ctx, cmd),
        Commands::Compare(cmd) => compare::run(ctx, cmd),
        Commands::Init(cmd) => init::run(ctx, cmd),
        Commands::Check => check::run(ctx),
        Commands::Config => config::run(ctx),
        Commands::Ls(cmd) => ls::run(ctx, cmd),
    }
}
