//! Building a tree description from a real directory.

use std::fs::Metadata;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{FsTreeError, Result};

use super::node::{Directory, Entry, File, Node, Tree, PERMISSIONS_KEY};

/// Linux virtual filesystem paths that are never captured.
/// Their contents are synthetic and can be effectively unbounded.
pub const LINUX_VIRTUAL_FS_PATHS: &[&str] = &["/proc", "/dev", "/sys", "/run"];

/// Options for capturing a directory.
#[derive(Debug, Clone, Default)]
pub struct CaptureOptions {
    /// Maximum depth to recurse (None = unlimited)
    pub max_depth: Option<usize>,

    /// Include hidden files/directories (starting with .)
    pub include_hidden: bool,

    /// Follow symbolic links
    pub follow_symlinks: bool,
}

impl CaptureOptions {
    /// Check if a path lies inside a Linux virtual filesystem
    pub fn is_linux_virtual_fs(path: &Path) -> bool {
        LINUX_VIRTUAL_FS_PATHS
            .iter()
            .any(|vfs| path == Path::new(vfs) || path.starts_with(vfs))
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

/// Capture `root` as a tree with a single root entry named after it.
///
/// Entries are sorted by file name so repeated captures of an unchanged
/// directory produce the same description. Unreadable entries are skipped.
/// Entries named `permissions` are skipped too, since the name is reserved
/// for a directory's own mode in the description. An entry whose metadata
/// cannot be read keeps its place with default permissions.
pub fn capture_directory(root: &Path, options: &CaptureOptions) -> Result<Tree> {
    let root = root.canonicalize().map_err(|e| FsTreeError::Io {
        path: root.to_path_buf(),
        source: e,
    })?;

    let root_meta = root.metadata().map_err(|e| FsTreeError::Io {
        path: root.clone(),
        source: e,
    })?;
    if !root_meta.is_dir() {
        return Err(FsTreeError::Io {
            path: root,
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a directory"),
        });
    }

    let root_name = display_name(&root);
    let mut walker = WalkDir::new(&root)
        .min_depth(1)
        .follow_links(options.follow_symlinks)
        .sort_by_file_name();
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    let include_hidden = options.include_hidden;
    let iter = walker.into_iter().filter_entry(move |entry| {
        if CaptureOptions::is_linux_virtual_fs(entry.path()) {
            return false;
        }
        if entry.file_name() == PERMISSIONS_KEY {
            tracing::warn!(
                path = %entry.path().display(),
                "Skipping entry named after the reserved permissions key"
            );
            return false;
        }
        include_hidden || !entry.file_name().to_string_lossy().starts_with('.')
    });

    let mut open = OpenDirectories::new(root_name, Some(mode_string('d', &root_meta)));
    let mut skipped = 0usize;

    for result in iter {
        let entry = match result {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!(path = ?err.path().map(PathBuf::from), error = %err, "Skipping unreadable entry");
                skipped += 1;
                continue;
            }
        };

        open.enter(entry.depth());

        let name = entry.file_name().to_string_lossy().into_owned();
        let file_type = entry.file_type();
        let kind = if file_type.is_dir() {
            'd'
        } else if file_type.is_symlink() {
            'l'
        } else {
            '-'
        };
        let permissions = match entry.metadata() {
            Ok(metadata) => Some(mode_string(kind, &metadata)),
            Err(err) => {
                tracing::warn!(path = %entry.path().display(), error = %err, "Using default permissions for entry without metadata");
                None
            }
        };

        if file_type.is_dir() {
            open.add_directory(name, permissions);
        } else {
            open.add_file(name, permissions);
        }
    }

    let (name, dir) = open.finish();
    tracing::debug!(root = %root.display(), skipped, "Captured directory");
    Ok(Tree::new(vec![Entry::new(name, Node::Directory(dir))]))
}

/// Directories from the capture root down to the parent of the entry being
/// visited. Walk depth `n` means the entry belongs to the `n`th open
/// directory.
struct OpenDirectories {
    stack: Vec<(String, Directory)>,
}

impl OpenDirectories {
    fn new(root_name: String, permissions: Option<String>) -> Self {
        Self {
            stack: vec![(root_name, Directory { permissions, children: Vec::new() })],
        }
    }

    /// Close every directory deeper than the parent of an entry at `depth`.
    fn enter(&mut self, depth: usize) {
        self.close_until(depth.max(1));
    }

    fn add_directory(&mut self, name: String, permissions: Option<String>) {
        self.stack.push((name, Directory { permissions, children: Vec::new() }));
    }

    fn add_file(&mut self, name: String, permissions: Option<String>) {
        if let Some((_, parent)) = self.stack.last_mut() {
            parent.children.push(Entry::new(name, File { permissions }));
        }
    }

    fn finish(mut self) -> (String, Directory) {
        self.close_until(1);
        self.stack
            .pop()
            .unwrap_or_else(|| (String::new(), Directory::new()))
    }

    fn close_until(&mut self, len: usize) {
        while self.stack.len() > len {
            if let Some((name, dir)) = self.stack.pop() {
                if let Some((_, parent)) = self.stack.last_mut() {
                    parent.children.push(Entry::new(name, dir));
                }
            }
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// `ls -l` style permission string for the given entry kind.
pub fn mode_string(kind: char, metadata: &Metadata) -> String {
    format_mode(kind, metadata.permissions().mode())
}

fn format_mode(kind: char, mode: u32) -> String {
    let mut out = String::with_capacity(10);
    out.push(kind);
    push_triple(&mut out, mode >> 6, mode & 0o4000 != 0, 's');
    push_triple(&mut out, mode >> 3, mode & 0o2000 != 0, 's');
    push_triple(&mut out, mode, mode & 0o1000 != 0, 't');
    out
}

fn push_triple(out: &mut String, bits: u32, special: bool, special_char: char) {
    out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
    out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
    let exec = bits & 0o1 != 0;
    out.push(match (exec, special) {
        (true, false) => 'x',
        (false, false) => '-',
        (true, true) => special_char,
        (false, true) => special_char.to_ascii_uppercase(),
    });
}
