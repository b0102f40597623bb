use std::{env, fs, path::PathBuf};

use crate::parser::Node;

pub fn tmp_file_path(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push("tagtree_tests");
    let _ = fs::create_dir_all(&dir);
    dir.push(name);
    dir
}

/// Every leaf under `node`, in document order
pub fn leaf_texts(node: &Node) -> Vec<&str> {
    match node.content() {
        Some(text) => vec![text],
        None => node.children().iter().flat_map(leaf_texts).collect(),
    }
}

/// `<d><d>...x...</d></d>` with `depth` branches
pub fn nested_document(depth: usize) -> String {
    format!("{}x{}", "<d>".repeat(depth), "</d>".repeat(depth))
}
