//! Render command implementation

use crate::cli::RenderArgs;
use crate::config::Config;
use crate::document::{assemble, serialize, SerializeOptions};
use crate::error::Result;
use crate::icons::IconTable;
use crate::render::TreeRenderer;
use crate::tree::{capture_directory, load_tree_or_example, CaptureOptions, Tree, TreeStats};

use super::{is_stdout, write_output};

/// Run the render command
pub fn run(args: RenderArgs, config: &Config) -> Result<()> {
    let tree = match &args.from_dir {
        Some(dir) => {
            tracing::info!(path = %dir.display(), "Capturing directory");
            capture_directory(dir, &capture_options(config))?
        }
        None => load_tree_or_example(&args.input)?,
    };

    let (page, stats) = render_page(&tree, &args, config);
    write_output(Some(args.output.as_path()), &page)?;

    if !is_stdout(&args.output) {
        let levels = if tree.is_empty() { 0 } else { stats.max_depth + 1 };
        println!("File '{}' generated successfully.", args.output.display());
        println!(
            "Rendered {} directories and {} files, {} levels deep",
            stats.directories,
            stats.files,
            levels
        );
    }

    Ok(())
}

/// Render `tree` to final text according to the args and config.
pub fn render_page(tree: &Tree, args: &RenderArgs, config: &Config) -> (String, TreeStats) {
    let icons = IconTable::from_config(&config.icons);
    let strategy = args.strategy.unwrap_or(config.render.strategy);
    let renderer = TreeRenderer::new(&icons)
        .with_strategy(strategy)
        .with_parallel_min_children(config.render.parallel_min_children);

    let stats = tree.stats();
    tracing::info!(
        ?strategy,
        directories = stats.directories,
        files = stats.files,
        "Rendering tree"
    );

    let body = renderer.render_tree(tree);
    let fragments = if args.fragment {
        body
    } else {
        assemble(body, &config.document)
    };

    let mut options = SerializeOptions::from(&config.document);
    if args.no_pretty {
        options.pretty = false;
    }

    (serialize(&fragments, &options), stats)
}

fn capture_options(config: &Config) -> CaptureOptions {
    let mut options = CaptureOptions::new()
        .with_hidden(config.capture.include_hidden)
        .with_follow_symlinks(config.capture.follow_symlinks);
    if let Some(depth) = config.capture.max_depth {
        options = options.with_max_depth(depth);
    }
    options
}
