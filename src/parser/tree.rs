//! Stack-based tree construction from a token sequence.

use tracing::debug;

use crate::error::{ParseError, Result, StructureError};
use crate::parser::config::ParserConfig;
use crate::parser::node::Node;
use crate::parser::token::Token;

/// Builds a [`Node`] tree from tokens using an open-node stack.
///
/// The bottom of the stack is always the root. A branch only becomes a
/// child of its parent once its end tag is consumed, so no half-built
/// branch is ever reachable from the root.
#[derive(Debug)]
pub struct TreeBuilder {
    stack: Vec<Node>,
    config: ParserConfig,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            stack: vec![Node::root()],
            config,
        }
    }

    /// Number of branches currently open (the root is not counted)
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    /// Feeds one token into the builder
    pub fn push_token(&mut self, token: Token) -> Result<()> {
        match token {
            Token::Text(content) => self.top_mut()?.append_child(Node::leaf(content)),
            Token::StartTag(name) => {
                self.config.validate_depth(self.depth() + 1)?;
                self.stack.push(Node::branch(name));
                Ok(())
            }
            Token::EndTag(name) => self.close(name),
        }
    }

    /// Consumes the builder and returns the root, failing if any branch
    /// is still open.
    pub fn finish(mut self) -> Result<Node> {
        if self.stack.len() > 1 {
            let names = self
                .stack
                .iter()
                .filter_map(Node::name)
                .map(str::to_string)
                .collect();
            return Err(StructureError::UnclosedTag { names }.into());
        }

        Ok(self.stack.pop().unwrap_or_default())
    }

    /// Consumes every token in order and returns the finished root
    pub fn build<I>(mut self, tokens: I) -> Result<Node>
    where
        I: IntoIterator<Item = Token>,
    {
        let mut consumed = 0usize;
        for token in tokens {
            self.push_token(token)?;
            consumed += 1;
        }
        let root = self.finish()?;
        debug!(tokens = consumed, leaves = root.leaf_count(), "built tree");
        Ok(root)
    }

    fn close(&mut self, end: String) -> Result<()> {
        let open = self.stack.last().and_then(Node::name).unwrap_or_default();
        if self.depth() == 0 || open != end {
            let open = open.to_string();
            return Err(StructureError::TagMismatch { end, open }.into());
        }

        let closed = self.stack.pop();
        match (closed, self.stack.last_mut()) {
            (Some(closed), Some(parent)) => parent.append_child(closed),
            _ => Err(StructureError::TagMismatch {
                end,
                open: String::new(),
            }
            .into()),
        }
    }

    fn top_mut(&mut self) -> Result<&mut Node> {
        self.stack
            .last_mut()
            .ok_or_else(|| ParseError::from(StructureError::InvalidAppend))
    }
}

/// Builds a tree from `tokens` with the default limits
pub fn build(tokens: Vec<Token>) -> Result<Node> {
    TreeBuilder::new().build(tokens)
}
