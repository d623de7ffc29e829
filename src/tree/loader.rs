//! Reading tree descriptions from JSON.
//!
//! A JSON object is a directory; any other value is a file whose
//! permissions are the value itself when it is a string. The reserved
//! `permissions` key of a directory object describes the directory and
//! never becomes a child.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{FsTreeError, Result, TreeError};

use super::example::example_tree;
use super::node::{Directory, Entry, File, Node, Tree, PERMISSIONS_KEY};

/// Parse a tree description file.
pub fn load_tree(path: &Path) -> Result<Tree> {
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            FsTreeError::PathNotFound(path.to_path_buf())
        } else {
            FsTreeError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let value = parse_json(&text).map_err(|e| FsTreeError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    let tree = tree_from_value(value)?;
    tracing::debug!(path = %path.display(), roots = tree.roots.len(), "Loaded tree description");
    Ok(tree)
}

/// Parse a tree description file, falling back to the example tree when the
/// file does not exist. Any other failure is still reported.
pub fn load_tree_or_example(path: &Path) -> Result<Tree> {
    match load_tree(path) {
        Err(FsTreeError::PathNotFound(missing)) => {
            tracing::warn!(
                path = %missing.display(),
                "Tree description not found, rendering the example tree"
            );
            Ok(example_tree())
        }
        other => other,
    }
}

/// Build a tree from an already parsed JSON document.
///
/// Walks the document with an explicit stack, so nesting depth is bounded
/// by memory rather than by the call stack.
pub fn tree_from_value(value: Value) -> std::result::Result<Tree, TreeError> {
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(TreeError::RootNotObject {
                found: kind_name(&other),
            })
        }
    };

    let mut stack = vec![PendingDirectory::new("<root>".to_string(), None, map)];
    while let Some(current) = stack.last_mut() {
        match current.pending.next() {
            Some((name, _)) if name.is_empty() => {
                return Err(TreeError::EmptyName {
                    parent: current.name.clone(),
                });
            }
            Some((name, Value::Object(mut map))) => {
                let permissions = directory_permissions(&name, map.shift_remove(PERMISSIONS_KEY));
                stack.push(PendingDirectory::new(name, permissions, map));
            }
            Some((name, value)) => {
                let node = file_from_value(&name, value);
                current.children.push(Entry { name, node });
            }
            None => {
                let Some(done) = stack.pop() else { break };
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Entry::new(
                        done.name,
                        Directory {
                            permissions: done.permissions,
                            children: done.children,
                        },
                    )),
                    None => return Ok(Tree::new(done.children)),
                }
            }
        }
    }

    Ok(Tree::default())
}

/// Build a tree from JSON text.
pub fn tree_from_str(text: &str) -> Result<Tree> {
    let value = parse_json(text).map_err(|e| FsTreeError::Json {
        path: "<inline>".into(),
        source: e,
    })?;
    Ok(tree_from_value(value)?)
}

/// Parse JSON without serde_json's nesting limit; the stack grows on demand.
fn parse_json(text: &str) -> serde_json::Result<Value> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// A directory object whose entries are still being converted.
struct PendingDirectory {
    name: String,
    permissions: Option<String>,
    pending: serde_json::map::IntoIter,
    children: Vec<Entry>,
}

impl PendingDirectory {
    fn new(name: String, permissions: Option<String>, map: serde_json::Map<String, Value>) -> Self {
        Self {
            name,
            permissions,
            children: Vec::with_capacity(map.len()),
            pending: map.into_iter(),
        }
    }
}

fn directory_permissions(name: &str, value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(perm)) => Some(perm),
        Some(other) => {
            tracing::debug!(
                directory = name,
                found = kind_name(&other),
                "Ignoring non-string directory permissions"
            );
            None
        }
        None => None,
    }
}

fn file_from_value(name: &str, value: Value) -> Node {
    match value {
        Value::String(perm) => Node::File(File {
            permissions: Some(perm),
        }),
        Value::Null => Node::File(File::new()),
        other => {
            tracing::debug!(
                file = name,
                found = kind_name(&other),
                "Using default permissions for non-string file value"
            );
            Node::File(File::new())
        }
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_object_is_directory_and_string_is_file() {
        let tree = tree_from_value(json!({"etc": {"hosts": "-rw-r--r--"}})).unwrap();
        assert_eq!(tree.roots.len(), 1);

        let Node::Directory(etc) = &tree.roots[0].node else {
            panic!("etc should be a directory");
        };
        assert_eq!(etc.permissions, None);
        assert_eq!(
            etc.children[0],
            Entry::new("hosts", File::with_permissions("-rw-r--r--"))
        );
    }

    #[test]
    fn test_reserved_permissions_key_is_lifted() {
        let tree = tree_from_value(json!({
            "srv": {"a.txt": "-rw-------", "permissions": "drwx------", "b.txt": null}
        }))
        .unwrap();

        let Node::Directory(srv) = &tree.roots[0].node else {
            panic!("srv should be a directory");
        };
        assert_eq!(srv.permissions.as_deref(), Some("drwx------"));
        assert_eq!(names(&srv.children), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_non_string_permissions_fall_back_to_defaults() {
        let tree = tree_from_value(json!({
            "dir": {"permissions": 755, "count": 3, "flag": true, "list": [1, 2]}
        }))
        .unwrap();

        let Node::Directory(dir) = &tree.roots[0].node else {
            panic!("dir should be a directory");
        };
        assert_eq!(dir.permissions, None);
        assert_eq!(dir.children.len(), 3);
        for child in &dir.children {
            assert_eq!(child.node, Node::File(File::new()));
        }
    }

    #[test]
    fn test_source_order_is_preserved() {
        let text = r#"{"zeta": null, "alpha": null, "mid": {"z": null, "a": null}}"#;
        let tree = tree_from_str(text).unwrap();
        assert_eq!(names(&tree.roots), vec!["zeta", "alpha", "mid"]);

        let Node::Directory(mid) = &tree.roots[2].node else {
            panic!("mid should be a directory");
        };
        assert_eq!(names(&mid.children), vec!["z", "a"]);
    }

    #[test]
    fn test_root_must_be_object() {
        let err = tree_from_value(json!(["etc"])).unwrap_err();
        assert_eq!(err, TreeError::RootNotObject { found: "array" });
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = tree_from_value(json!({"etc": {"": "-rw-r--r--"}})).unwrap_err();
        assert_eq!(
            err,
            TreeError::EmptyName {
                parent: "etc".into()
            }
        );
    }

    #[test]
    fn test_load_tree_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"home": {"notes.md": "-rw-r--r--"}}"#)
            .unwrap();

        let tree = load_tree(file.path()).unwrap();
        assert_eq!(tree.stats().files, 1);
    }

    #[test]
    fn test_missing_file_uses_example() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("filesystem.json");

        assert!(matches!(
            load_tree(&missing),
            Err(FsTreeError::PathNotFound(_))
        ));
        assert_eq!(load_tree_or_example(&missing).unwrap(), example_tree());
    }

    #[test]
    fn test_deeply_nested_description_loads_and_renders() {
        use crate::icons::IconTable;
        use crate::render::{Strategy, TreeRenderer};

        const LEVELS: usize = 1000;
        let mut text = String::new();
        for level in 0..LEVELS {
            text.push_str(&format!(r#"{{"d{level}":"#));
        }
        text.push_str("null");
        text.push_str(&"}".repeat(LEVELS));

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        let tree = load_tree(file.path()).unwrap();

        let stats = tree.stats();
        assert_eq!(stats.directories, LEVELS - 1);
        assert_eq!(stats.files, 1);
        assert_eq!(stats.max_depth, LEVELS - 1);

        let icons = IconTable::new("[D]", "[G]");
        let out = TreeRenderer::new(&icons)
            .with_strategy(Strategy::Iterative)
            .render_tree(&tree);
        assert_eq!(out.len(), (LEVELS - 1) * 3 + 1);
        assert!(out[(LEVELS - 1) * 2].contains(r#"style="--depth:999""#));
        assert!(out[(LEVELS - 1) * 2].contains(">d999</span>"));
    }

    #[test]
    fn test_trailing_characters_are_rejected() {
        let err = tree_from_str(r#"{"etc": null} {"#).unwrap_err();
        assert!(matches!(err, FsTreeError::Json { .. }));
    }

    #[test]
    fn test_invalid_json_is_not_masked_by_example() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let result = load_tree_or_example(file.path());
        assert!(matches!(result, Err(FsTreeError::Json { .. })));
    }
}
