//! Capture command implementation

use crate::cli::CaptureArgs;
use crate::config::Config;
use crate::error::{FsTreeError, Result};
use crate::tree::{capture_directory, CaptureOptions, Tree};

use super::write_output;

/// Run the capture command
pub fn run(args: CaptureArgs, config: &Config) -> Result<()> {
    let mut options = CaptureOptions::new()
        .with_hidden(args.all || config.capture.include_hidden)
        .with_follow_symlinks(config.capture.follow_symlinks);
    if let Some(depth) = args.max_depth.or(config.capture.max_depth) {
        options = options.with_max_depth(depth);
    }

    tracing::info!(path = %args.path.display(), ?options, "Capturing directory");
    let tree = capture_directory(&args.path, &options)?;

    let stats = tree.stats();
    tracing::info!(
        directories = stats.directories,
        files = stats.files,
        "Captured tree"
    );

    write_output(args.output.as_deref(), &to_json(&tree, args.compact)?)
}

/// JSON text of a tree, newline terminated.
pub fn to_json(tree: &Tree, compact: bool) -> Result<String> {
    let mut text = if compact {
        serde_json::to_string(tree)
    } else {
        serde_json::to_string_pretty(tree)
    }
    .map_err(FsTreeError::Serialize)?;
    text.push('\n');
    Ok(text)
}
