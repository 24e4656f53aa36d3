//! Clap argument definitions for the `canopy` CLI.

use std::{env, process::exit};

use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand, error::ErrorKind};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "canopy")]
#[command(about = "Canopy - browse hierarchical model tables as trees, paths, and treemaps")]
pub struct Cli {
    /// Log verbosity (-v info, -vv debug); CANOPY_LOG overrides
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// The dataset a command reads.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Configured dataset name, or path to a .csv/.json table
    pub source: String,
}

/// Arguments for `canopy models`.
#[derive(Args, Debug, Clone)]
pub struct ModelsCommand {
    #[command(flatten)]
    /// Dataset to read.
    pub source: SourceArgs,

    /// Show value, node, and path counts per model
    #[arg(short = 'l', long)]
    pub long: bool,
}

/// Arguments for `canopy tree`.
#[derive(Args, Debug, Clone)]
pub struct TreeCommand {
    #[command(flatten)]
    /// Dataset to read.
    pub source: SourceArgs,

    /// Model column to show
    #[arg(short = 'm', long)]
    pub model: String,

    /// Output as nested {"name", "children"} JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `canopy paths`.
#[derive(Args, Debug, Clone)]
pub struct PathsCommand {
    #[command(flatten)]
    /// Dataset to read.
    pub source: SourceArgs,

    /// Model column to index
    #[arg(short = 'm', long)]
    pub model: String,

    /// Print the normalized form searched against
    #[arg(long)]
    pub normalized: bool,
}

/// Arguments for `canopy search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    #[command(flatten)]
    /// Dataset to read.
    pub source: SourceArgs,

    /// Query words
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Only search this model column
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Maximum hits to return [default: 100]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Show query tokens, search mode, and hit counts
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for `canopy treemap`.
#[derive(Args, Debug, Clone)]
pub struct TreemapCommand {
    #[command(flatten)]
    /// Dataset to read.
    pub source: SourceArgs,

    /// Model column to aggregate
    #[arg(short = 'm', long)]
    pub model: String,

    /// Anchor label path from the top level; repeat for each level
    #[arg(short = 'p', long = "path")]
    pub path: Vec<String>,

    /// Output {labels, parents, values, ids} as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `canopy compare`.
#[derive(Args, Debug, Clone)]
pub struct CompareCommand {
    #[command(flatten)]
    /// Dataset to read.
    pub source: SourceArgs,

    /// First model column
    pub model_a: String,

    /// Second model column
    pub model_b: String,

    /// Restrict both treemaps to this top-level section label
    #[arg(short = 's', long)]
    pub section: Option<String>,

    /// Output {a, b} as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `canopy init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.canopy.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `canopy ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    /// Load each dataset and list its models
    #[arg(short = 'l', long)]
    pub long: bool,
}

/// Supported `canopy` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// List the model columns of a dataset
    Models(ModelsCommand),

    /// Print the pruned tree of one model
    Tree(TreeCommand),

    /// Print the path index of one model
    Paths(PathsCommand),

    /// Search hierarchy paths across models
    #[command(after_help = "\
QUERY MATCHING:
  Queries are lowercased, accent-folded, and split into words.
  Several words are tried as consecutive groups, one group per path level,
  e.g. 'front left' matches '3.3 Front > 3.3.2 Left indicator'.
  When no grouping matches, the whole query must appear within one level.
  Hits below another hit of the same model are folded into it.

EXAMPLES:
  canopy search cars front left
  canopy search cars 'left indicator' -m Sport
  canopy search ./cars.csv brake --json")]
    Search(SearchCommand),

    /// Aggregate one model into treemap arrays
    Treemap(TreemapCommand),

    /// Aggregate two models side by side
    Compare(CompareCommand),

    /// Initialize canopy configuration in current directory
    Init(InitCommand),

    /// Validate configuration and datasets
    Check,

    /// Show effective configuration settings
    Config,

    /// List configured datasets
    Ls(LsCommand),
}

impl Commands {
    /// Returns false for commands that must work even when the config is broken.
    pub const fn reads_config(&self) -> bool {
        !matches!(self, Self::Init(_))
    }
}

/// Parses CLI arguments, printing a compact command list for top-level `--help`.
pub fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.kind() == ErrorKind::DisplayHelp && env::args().len() <= 2 {
                print_command_list();
                exit(0);
            }
            e.exit();
        }
    }
}

/// Prints the top-level help with one line per subcommand.
fn print_command_list() {
    let cmd = Cli::command();
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();

    println!("{about}");
    println!();
    println!("Usage: canopy [-v] <COMMAND>");
    println!();
    println!("Commands:");
    for sub in cmd.get_subcommands().filter(|s| s.get_name() != "help") {
        let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
        println!("  {:10} {about}", sub.get_name());
    }
    println!(
        "  {:<10} Print this message or the help of the given subcommand(s)",
        "help"
    );
    println!();
    println!("Options:");
    println!("  -v, --verbose...  Increase log verbosity");
    println!("  -h, --help        Print help");
}
