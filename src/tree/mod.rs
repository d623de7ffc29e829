mod capture;
mod example;
mod loader;
mod node;

pub use capture::{capture_directory, mode_string, CaptureOptions, LINUX_VIRTUAL_FS_PATHS};
pub use example::example_tree;
pub use loader::{load_tree, load_tree_or_example, tree_from_str, tree_from_value};
pub use node::{
    Directory, Entry, File, Node, Tree, TreeStats, DEFAULT_DIR_PERMISSIONS,
    DEFAULT_FILE_PERMISSIONS, PERMISSIONS_KEY,
};
