use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::render::Strategy;

/// fstree-html - Render filesystem tree descriptions as interactive HTML
#[derive(Parser, Debug)]
#[command(name = "fstree-html")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a tree description as an interactive HTML page
    Render(RenderArgs),

    /// Capture a real directory as a tree description
    Capture(CaptureArgs),

    /// Print the built-in example tree description
    Example(ExampleArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Print the man page
    Man,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Tree description (JSON); the example tree is used if it does not exist
    #[arg(default_value = "filesystem.json")]
    pub input: PathBuf,

    /// Output file, or - for stdout
    #[arg(short, long, default_value = "interactive_filesystem.html", value_name = "PATH")]
    pub output: PathBuf,

    /// Capture this directory instead of reading a description
    #[arg(long, value_name = "DIR")]
    pub from_dir: Option<PathBuf>,

    /// Write only the tree markup, without the page around it
    #[arg(long)]
    pub fragment: bool,

    /// Write markup without re-indenting it
    #[arg(long)]
    pub no_pretty: bool,

    /// Traversal strategy (overrides the config file)
    #[arg(long, value_enum, value_name = "STRATEGY")]
    pub strategy: Option<Strategy>,
}

#[derive(Args, Debug)]
pub struct CaptureArgs {
    /// Directory to capture
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Maximum depth to capture
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Include hidden files
    #[arg(short, long)]
    pub all: bool,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug)]
pub struct ExampleArgs {
    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,
}
