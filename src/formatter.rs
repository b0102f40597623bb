//! Human-readable tree dumps.

use std::fmt::Write as _;

use crate::{
    error::{FormatError, ParseError, Result},
    parser::Node,
};

/// Maximum indentation per level
pub const MAX_INDENT_SPACES: usize = 8;

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Number of spaces for indentation per depth level
    pub indent_spaces: usize,
    /// Whether branch lines include their child count
    pub show_child_counts: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_spaces: 2,
            show_child_counts: true,
        }
    }
}

impl FormatConfig {
    fn validate(&self) -> Result<()> {
        if self.indent_spaces > MAX_INDENT_SPACES {
            return Err(ParseError::from(FormatError::InvalidIndentation(format!(
                "Indentation of {} spaces exceeds maximum allowed ({})",
                self.indent_spaces, MAX_INDENT_SPACES
            ))));
        }
        Ok(())
    }
}

/// Trait for rendering a tree as text
pub trait Formatter {
    fn format(&self, node: &Node, config: &FormatConfig) -> Result<String>;
}

/// One line per node, children indented under their parent:
///
/// ```text
/// ROOT
///   BRANCH "a" (1 children)
///     LEAF "x"
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeFormatter;

impl Formatter for TreeFormatter {
    fn format(&self, node: &Node, config: &FormatConfig) -> Result<String> {
        config.validate()?;
        let mut out = String::new();
        write_node(&mut out, node, 0, config);
        Ok(out)
    }
}

fn write_node(out: &mut String, node: &Node, depth: usize, config: &FormatConfig) {
    out.push_str(&" ".repeat(depth * config.indent_spaces));
    // Writing into a String cannot fail.
    let _ = match node {
        Node::Root { .. } => writeln!(out, "{}", node.label()),
        Node::Leaf(content) => writeln!(out, "{} \"{}\"", node.label(), content),
        Node::Branch { name, children } if config.show_child_counts => writeln!(
            out,
            "{} \"{}\" ({} children)",
            node.label(),
            name,
            children.len()
        ),
        Node::Branch { name, .. } => writeln!(out, "{} \"{}\"", node.label(), name),
    };
    for child in node.children() {
        write_node(out, child, depth + 1, config);
    }
}
