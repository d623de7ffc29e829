mod markup;
mod renderer;

use serde::{Deserialize, Serialize};

pub use markup::{file_type, split_extension, GENERIC_FILE_TYPE};
pub use renderer::TreeRenderer;

/// How the renderer walks the tree. All strategies emit identical output.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Plain recursion; stack use grows with tree depth
    #[default]
    Recursive,
    /// Explicit work stack; safe for arbitrarily deep trees
    Iterative,
    /// Large directories fan their children out to the rayon pool
    Parallel,
}
