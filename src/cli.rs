//! CLI argument parsing for `exname`.
//!
//! The binary stands in for an editor host: it locates project roots,
//! loads configuration, and prints what the resolver produces.
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "exname",
    version,
    about = "Resolve export naming patterns into output paths",
    after_help = "Examples:\n  exname resolve --file /proj/src/part.scad --export-extension stl\n  exname resolve --file /proj/src/part.scad --pattern '${fileBasenameNoExtension}_v${#}.stl'\n  exname evaluate --name relativeFile --file /proj/src/part.scad --root /proj\n  exname placeholders",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Config file (defaults to exname.json in the user config directory)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log debug detail to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Resolve(ResolveArgs),
    Evaluate(EvaluateArgs),
    /// List supported placeholder names
    Placeholders,
    /// Print the default config as JSON
    Config,
}

/// Where the file lives and which project it belongs to.
#[derive(Args, Debug)]
pub struct FileArgs {
    /// Source file the pattern is resolved for
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,

    /// Workspace folder; repeat for multi-root workspaces. Without it,
    /// the root is found by walking up to a configured marker.
    #[arg(long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Value for ${exportExtension}
    #[arg(long, value_name = "EXT")]
    pub export_extension: Option<String>,
}

#[derive(Parser, Debug)]
#[command(about = "Resolve a naming pattern for a file")]
pub struct ResolveArgs {
    #[command(flatten)]
    pub file: FileArgs,

    /// Naming pattern (defaults to the configured pattern)
    #[arg(long, value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Evaluate a single placeholder for a file")]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub file: FileArgs,

    /// Placeholder name without the ${} delimiters
    #[arg(long, value_name = "NAME")]
    pub name: String,
}
