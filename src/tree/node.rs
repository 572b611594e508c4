//! Library tree node types and segment-wise insertion

use serde::Serialize;
use std::collections::BTreeMap;

/// Nested mapping from path segment to either a sub-tree (directory)
/// or the full text of a file.
///
/// `BTreeMap` keeps key order lexicographic, so serialization is
/// deterministic across runs.
pub type LibraryTree = BTreeMap<String, LibraryNode>;

/// A single node in the library tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LibraryNode {
    /// A directory: serializes as a JSON object
    Dir(LibraryTree),
    /// A file's full text content: serializes as a JSON string
    File(String),
}

/// Insert file text at the path given by `segments`.
///
/// All but the last segment become nested directory keys; the last segment
/// becomes the leaf key holding `content`. Empty segment lists are ignored.
pub fn insert(tree: &mut LibraryTree, segments: &[String], content: String) {
    let Some((file, dirs)) = segments.split_last() else {
        return;
    };

    let mut current = tree;
    for segment in dirs {
        let entry = current
            .entry(segment.clone())
            .or_insert_with(|| LibraryNode::Dir(LibraryTree::new()));

        // A segment cannot name both a file and a directory within one
        // filesystem scan; an interior File node here is unreachable.
        if matches!(entry, LibraryNode::File(_)) {
            *entry = LibraryNode::Dir(LibraryTree::new());
        }

        current = match entry {
            LibraryNode::Dir(children) => children,
            LibraryNode::File(_) => unreachable!("interior node was just normalized to Dir"),
        };
    }

    current.insert(file.clone(), LibraryNode::File(content));
}

/// Count file leaves in the tree.
pub fn leaf_count(tree: &LibraryTree) -> usize {
    tree.values()
        .map(|node| match node {
            LibraryNode::Dir(children) => leaf_count(children),
            LibraryNode::File(_) => 1,
        })
        .sum()
}
