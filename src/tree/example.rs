use super::node::{Directory, Entry, File, Tree};

/// Tree rendered when no description file is available.
pub fn example_tree() -> Tree {
    let documents = Directory::new()
        .with_child("report.docx", File::with_permissions("-rw-r--r--").into())
        .with_child("photo.jpg", File::with_permissions("-rw-r--r--").into());
    let projects =
        Directory::new().with_child("myscript.py", File::with_permissions("-rwxr-xr-x").into());
    let user = Directory::new()
        .with_child("documents", documents.into())
        .with_child("projects", projects.into())
        .with_child("settings.ini", File::with_permissions("-rw-r--r--").into());

    let nginx =
        Directory::new().with_child("nginx.conf", File::with_permissions("-rw-r--r--").into());
    let etc = Directory::new()
        .with_child("hosts", File::with_permissions("-rw-r--r--").into())
        .with_child("nginx", nginx.into());

    Tree::new(vec![
        Entry::new("home", Directory::new().with_child("user", user.into())),
        Entry::new("etc", etc),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_shape() {
        let tree = example_tree();
        let stats = tree.stats();
        assert_eq!(stats.directories, 6);
        assert_eq!(stats.files, 6);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_example_serializes_like_source_json() {
        let json = serde_json::to_value(example_tree()).unwrap();
        assert_eq!(json["etc"]["nginx"]["nginx.conf"], "-rw-r--r--");
        assert_eq!(json["home"]["user"]["projects"]["myscript.py"], "-rwxr-xr-x");
    }
}
