//! Implementation of `canopy check`.

use std::{path::Path, process::ExitCode};

use canopy_config::{ConfigWarning, discover_config_files};

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, success, warning},
};

/// Shows configuration files and datasets, then validates them.
///
/// Each readable dataset is also loaded and built, so column and format problems show
/// up here rather than on the first query. Fails if anything needs attention.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let cwd = &ctx.cwd;

    let config_files = discover_config_files(cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("canopy init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files:"));
    for path in &config_files {
        println!("   {}", display_path(path, Some(cwd)));
    }
    println!();

    let config = &ctx.config;
    let warnings = config.validate();
    let mut unreadable = 0;

    println!("{}", subheader("Datasets:"));
    if config.datasets.is_empty() {
        println!("   {}", dim("(none defined)"));
    }
    for entry in &config.datasets {
        let scope = if entry.is_global { "global" } else { "local" };
        let base = if entry.is_global {
            None
        } else {
            config.config_root.as_deref()
        };
        let location = dim(&format!("-> {}", display_path(&entry.path, base)));
        let state = if !entry.path.is_file() {
            warning("[missing]")
        } else if let Ok(dataset) = ctx.open_dataset(&entry.name) {
            success(&format!(
                "[{} rows, {} models]",
                dataset.table().len(),
                dataset.models().len()
            ))
        } else {
            unreadable += 1;
            warning("[unreadable]")
        };
        println!(
            "   {} {} {location} {state}",
            entry.name,
            dim(&format!("({scope})"))
        );
    }
    println!();

    if warnings.is_empty() && unreadable == 0 {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    if !warnings.is_empty() {
        println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
        for w in &warnings {
            println!("   {}", warning(&w.to_string()));
        }
        println!();
        print_hints(&warnings);
    }

    ExitCode::FAILURE
}

/// Shows `path` relative to `base` when it lies below it.
fn display_path(path: &Path, base: Option<&Path>) -> String {
    base.and_then(|b| path.strip_prefix(b).ok())
        .map_or_else(|| path.display().to_string(), |rel| rel.display().to_string())
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .filter_map(|w| match w {
            ConfigWarning::NoDatasetsDefined => {
                Some("Hint: add [dataset.NAME] sections with a path to .canopy.toml")
            }
            ConfigWarning::DatasetPathMissing { .. } | ConfigWarning::DatasetPathNotFile { .. } => {
                Some("Hint: dataset paths resolve relative to the config file that defines them")
            }
            ConfigWarning::UnsupportedExtension { .. } => {
                Some("Hint: export spreadsheets as .csv before loading them")
            }
            _ => None,
        })
        .collect();
    hints.sort_unstable();
    hints.dedup();

    for hint in hints {
        println!("{}", dim(hint));
    }
}
