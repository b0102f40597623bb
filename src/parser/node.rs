use std::fmt;

use crate::error::{Result, StructureError};

/// One element of a built document tree.
///
/// Children are owned by their parent, so dropping the root drops the
/// whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// The unique top-level node; carries no name
    Root { children: Vec<Node> },
    /// A matched start/end tag pair
    Branch { name: String, children: Vec<Node> },
    /// A text run; never has children
    Leaf(String),
}

/// Node variant without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeLabel {
    Root,
    Branch,
    Leaf,
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "ROOT"),
            Self::Branch => write!(f, "BRANCH"),
            Self::Leaf => write!(f, "LEAF"),
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::root()
    }
}

impl Node {
    pub const fn root() -> Self {
        Self::Root {
            children: Vec::new(),
        }
    }

    pub fn branch(name: impl Into<String>) -> Self {
        Self::Branch {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn leaf(content: impl Into<String>) -> Self {
        Self::Leaf(content.into())
    }

    pub const fn label(&self) -> NodeLabel {
        match self {
            Self::Root { .. } => NodeLabel::Root,
            Self::Branch { .. } => NodeLabel::Branch,
            Self::Leaf(_) => NodeLabel::Leaf,
        }
    }

    /// Tag name of a branch
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Branch { name, .. } => Some(name.as_str()),
            Self::Root { .. } | Self::Leaf(_) => None,
        }
    }

    /// Text of a leaf
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Leaf(content) => Some(content.as_str()),
            Self::Root { .. } | Self::Branch { .. } => None,
        }
    }

    /// Children in document order; empty for leaves
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Root { children } | Self::Branch { children, .. } => children,
            Self::Leaf(_) => &[],
        }
    }

    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Appends `child` as the last child.
    ///
    /// Fails with [`StructureError::InvalidAppend`] on a leaf.
    pub fn append_child(&mut self, child: Self) -> Result<()> {
        match self {
            Self::Root { children } | Self::Branch { children, .. } => {
                children.push(child);
                Ok(())
            }
            Self::Leaf(_) => Err(StructureError::InvalidAppend.into()),
        }
    }

    /// Number of leaves in this subtree
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Root { children } | Self::Branch { children, .. } => {
                children.iter().map(Self::leaf_count).sum()
            }
        }
    }
}
