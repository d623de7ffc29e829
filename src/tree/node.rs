use serde::ser::{Serialize, SerializeMap, Serializer};

/// Permissions shown for a directory that carries none.
pub const DEFAULT_DIR_PERMISSIONS: &str = "drwxr-xr-x";

/// Permissions shown for a file that carries none.
pub const DEFAULT_FILE_PERMISSIONS: &str = "-rw-r--r--";

/// Key under which a directory object stores its own permissions.
pub const PERMISSIONS_KEY: &str = "permissions";

/// One node of a filesystem description: a directory or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(Directory),
    File(File),
}

/// Directory node. Children keep the order they had in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    pub permissions: Option<String>,
    pub children: Vec<Entry>,
}

/// File node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct File {
    pub permissions: Option<String>,
}

/// A named node, as found inside a directory or at the tree root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub node: Node,
}

/// The whole description: an ordered list of root entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    pub roots: Vec<Entry>,
}

/// Aggregate counts over a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
    /// Deepest depth hint emitted (roots are at depth 0)
    pub max_depth: usize,
}

impl Node {
    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    /// Permissions to display, with the per-kind default applied.
    pub fn permissions(&self) -> &str {
        match self {
            Node::Directory(dir) => dir.permissions(),
            Node::File(file) => file.permissions(),
        }
    }
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_permissions(mut self, permissions: impl Into<String>) -> Self {
        self.permissions = Some(permissions.into());
        self
    }

    pub fn with_child(mut self, name: impl Into<String>, node: Node) -> Self {
        self.children.push(Entry::new(name, node));
        self
    }

    pub fn permissions(&self) -> &str {
        self.permissions.as_deref().unwrap_or(DEFAULT_DIR_PERMISSIONS)
    }
}

impl File {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_permissions(permissions: impl Into<String>) -> Self {
        Self {
            permissions: Some(permissions.into()),
        }
    }

    pub fn permissions(&self) -> &str {
        self.permissions.as_deref().unwrap_or(DEFAULT_FILE_PERMISSIONS)
    }
}

impl From<Directory> for Node {
    fn from(dir: Directory) -> Self {
        Node::Directory(dir)
    }
}

impl From<File> for Node {
    fn from(file: File) -> Self {
        Node::File(file)
    }
}

impl Entry {
    pub fn new(name: impl Into<String>, node: impl Into<Node>) -> Self {
        Self {
            name: name.into(),
            node: node.into(),
        }
    }
}

impl Tree {
    pub fn new(roots: Vec<Entry>) -> Self {
        Self { roots }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Count directories and files and find the deepest level.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        let mut stack: Vec<(&Node, usize)> = self.roots.iter().map(|e| (&e.node, 0)).collect();

        while let Some((node, depth)) = stack.pop() {
            stats.max_depth = stats.max_depth.max(depth);
            match node {
                Node::Directory(dir) => {
                    stats.directories += 1;
                    stack.extend(dir.children.iter().map(|c| (&c.node, depth + 1)));
                }
                Node::File(_) => stats.files += 1,
            }
        }

        stats
    }
}

// Serializes back to the source shape: directories as objects (own
// permissions first), files as their permission string or null.
impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Directory(dir) => {
                let len = dir.children.len() + usize::from(dir.permissions.is_some());
                let mut map = serializer.serialize_map(Some(len))?;
                if let Some(perm) = &dir.permissions {
                    map.serialize_entry(PERMISSIONS_KEY, perm)?;
                }
                for child in &dir.children {
                    map.serialize_entry(&child.name, &child.node)?;
                }
                map.end()
            }
            Node::File(file) => match &file.permissions {
                Some(perm) => serializer.serialize_str(perm),
                None => serializer.serialize_none(),
            },
        }
    }
}

impl Serialize for Tree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.roots.len()))?;
        for root in &self.roots {
            map.serialize_entry(&root.name, &root.node)?;
        }
        map.end()
    }
}
