//! Example command implementation

use crate::cli::ExampleArgs;
use crate::error::Result;
use crate::tree::example_tree;

use super::capture::to_json;
use super::write_output;

/// Print the example tree description
pub fn run(args: ExampleArgs) -> Result<()> {
    write_output(None, &to_json(&example_tree(), args.compact)?)
}
