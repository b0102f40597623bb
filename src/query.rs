//! Tag-name queries over a built tree.
//!
//! Both searches are post-order: a node's children are searched, in
//! document order, before the node itself is tested. The root is never a
//! match and leaves are never searched into. Names compare byte for byte.

use tracing::trace;

use crate::parser::Node;

/// Every branch named `name` under `root`, in post-order.
///
/// Descendant matches come before their ancestors, earlier siblings
/// before later ones. The results borrow from the tree.
pub fn find_all<'a>(root: &'a Node, name: &str) -> Vec<&'a Node> {
    let mut found = Vec::new();
    collect(root, name, &mut found);
    trace!(name, matches = found.len(), "find_all");
    found
}

/// The first branch named `name` in the same order as [`find_all`]
pub fn find_first<'a>(root: &'a Node, name: &str) -> Option<&'a Node> {
    if root.is_leaf() {
        return None;
    }
    root.children()
        .iter()
        .find_map(|child| find_first(child, name))
        .or_else(|| (root.name() == Some(name)).then_some(root))
}

/// Content of `node`'s first child when that child is a leaf
pub fn first_text(node: &Node) -> Option<&str> {
    node.children().first().and_then(Node::content)
}

fn collect<'a>(node: &'a Node, name: &str, found: &mut Vec<&'a Node>) {
    if node.is_leaf() {
        return;
    }
    for child in node.children() {
        collect(child, name, found);
    }
    if node.name() == Some(name) {
        found.push(node);
    }
}

impl Node {
    /// See [`find_all`]
    pub fn find_all(&self, name: &str) -> Vec<&Self> {
        find_all(self, name)
    }

    /// See [`find_first`]
    pub fn find_first(&self, name: &str) -> Option<&Self> {
        find_first(self, name)
    }
}
