use maud::{html, PreEscaped};
use rayon::prelude::*;

use crate::icons::IconTable;
use crate::tree::{Directory, Entry, File, Node, Tree};

use super::markup::{file_type, split_extension};
use super::Strategy;

const CLOSE_DIRECTORY: &str = "</details>";

/// Turns a tree into an ordered list of markup fragments.
///
/// Directories become `<details>` blocks whose summary carries the folder
/// icon, the name and a permissions tooltip; files become a single `<div>`.
/// Every marker carries its depth as the `--depth` style hint. Concatenating
/// the fragments in order yields correctly nested markup, and the result is
/// the same for every [`Strategy`].
#[derive(Debug, Clone)]
pub struct TreeRenderer<'a> {
    icons: &'a IconTable,
    strategy: Strategy,
    parallel_min_children: usize,
}

enum Work<'t> {
    Visit(&'t str, &'t Node, usize),
    Close,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(icons: &'a IconTable) -> Self {
        Self {
            icons,
            strategy: Strategy::default(),
            parallel_min_children: 64,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Directories with fewer children are rendered on the calling thread.
    pub fn with_parallel_min_children(mut self, min: usize) -> Self {
        self.parallel_min_children = min.max(1);
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Render one node and everything below it.
    pub fn render(&self, name: &str, node: &Node, depth: usize) -> Vec<String> {
        let mut out = Vec::new();
        match self.strategy {
            Strategy::Recursive => self.render_recursive(name, node, depth, &mut out),
            Strategy::Iterative => self.render_iterative(name, node, depth, &mut out),
            Strategy::Parallel => self.render_parallel(name, node, depth, &mut out),
        }
        out
    }

    /// Render every root at depth 0, in order.
    pub fn render_tree(&self, tree: &Tree) -> Vec<String> {
        match self.strategy {
            Strategy::Parallel => {
                let mut out = Vec::new();
                self.render_entries_parallel(&tree.roots, 0, &mut out);
                out
            }
            _ => tree
                .roots
                .iter()
                .flat_map(|root| self.render(&root.name, &root.node, 0))
                .collect(),
        }
    }

    fn render_recursive(&self, name: &str, node: &Node, depth: usize, out: &mut Vec<String>) {
        match node {
            Node::Directory(dir) => {
                self.open_directory(name, dir, depth, out);
                for child in &dir.children {
                    self.render_recursive(&child.name, &child.node, depth + 1, out);
                }
                out.push(CLOSE_DIRECTORY.to_string());
            }
            Node::File(file) => out.push(self.file_marker(name, file, depth)),
        }
    }

    fn render_iterative(&self, name: &str, node: &Node, depth: usize, out: &mut Vec<String>) {
        let mut stack = vec![Work::Visit(name, node, depth)];

        while let Some(work) = stack.pop() {
            match work {
                Work::Visit(name, Node::Directory(dir), depth) => {
                    self.open_directory(name, dir, depth, out);
                    stack.push(Work::Close);
                    // Reversed so the first child is popped first
                    stack.extend(
                        dir.children
                            .iter()
                            .rev()
                            .map(|c| Work::Visit(c.name.as_str(), &c.node, depth + 1)),
                    );
                }
                Work::Visit(name, Node::File(file), depth) => {
                    out.push(self.file_marker(name, file, depth));
                }
                Work::Close => out.push(CLOSE_DIRECTORY.to_string()),
            }
        }
    }

    fn render_parallel(&self, name: &str, node: &Node, depth: usize, out: &mut Vec<String>) {
        match node {
            Node::Directory(dir) => {
                self.open_directory(name, dir, depth, out);
                self.render_entries_parallel(&dir.children, depth + 1, out);
                out.push(CLOSE_DIRECTORY.to_string());
            }
            Node::File(file) => out.push(self.file_marker(name, file, depth)),
        }
    }

    fn render_entries_parallel(&self, entries: &[Entry], depth: usize, out: &mut Vec<String>) {
        if entries.len() < self.parallel_min_children {
            for entry in entries {
                self.render_parallel(&entry.name, &entry.node, depth, out);
            }
            return;
        }

        // collect() on an indexed parallel iterator keeps input order
        let parts: Vec<Vec<String>> = entries
            .par_iter()
            .map(|entry| {
                let mut part = Vec::new();
                self.render_parallel(&entry.name, &entry.node, depth, &mut part);
                part
            })
            .collect();
        out.extend(parts.into_iter().flatten());
    }

    fn open_directory(&self, name: &str, dir: &Directory, depth: usize, out: &mut Vec<String>) {
        // Left open; the matching CLOSE_DIRECTORY is pushed after the children
        out.push(format!(r#"<details style="--depth:{depth}">"#));
        out.push(
            html! {
                summary {
                    span class="icon folder-icon" { (PreEscaped(self.icons.directory_icon())) }
                    span class="clickable" title=(format!("Permissions: {}", dir.permissions())) { (name) }
                }
            }
            .into_string(),
        );
    }

    fn file_marker(&self, name: &str, file: &File, depth: usize) -> String {
        let extension = split_extension(name);
        html! {
            div style=(format!("--depth:{depth}")) {
                span class="icon file-icon" data-file-type=(file_type(extension)) {
                    (PreEscaped(self.icons.file_icon(extension)))
                }
                span title=(format!("Permissions: {}", file.permissions())) { (name) }
            }
        }
        .into_string()
    }
}
