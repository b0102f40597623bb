//! tagtree: a tokenizer, tree builder and tag query engine for a minimal
//! tag markup
//!
//! The pipeline runs in three one-way stages:
//! - [`tokenize`] turns text into [`Token`]s (text runs, `<start>` and `</end>` tags)
//! - [`build`] turns tokens into a [`Node`] tree, checking that tags balance
//! - [`find_all`] / [`find_first`] search the tree by tag name, post-order
//!
//! No attributes, comments, entities or declarations are recognized.
//!
//! # Examples
//! ```
//! use tagtree::{build, find_all, first_text, tokenize, Result};
//!
//! fn example() -> Result<()> {
//!     let tree = build(tokenize("<p><n>1</n></p><p><n>2</n></p>")?)?;
//!     let names: Vec<_> = find_all(&tree, "n").into_iter().filter_map(first_text).collect();
//!     assert_eq!(names, ["1", "2"]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

use tracing::{debug, info, instrument};

pub mod error;
pub mod formatter;
pub mod parser;
pub mod query;
pub mod test_utils;
pub mod utils;

// Re-exports
pub use error::{ParseError, ParseErrorKind, Result};
pub use parser::{build, tokenize, Lexer, Node, NodeLabel, ParserConfig, Token, TreeBuilder};
pub use query::{find_all, find_first, first_text};
use utils::{parse_str, read_file};

/// Reads `path` and builds its tree with the default limits
#[instrument]
pub fn parse_file(path: &str) -> Result<Node> {
    debug!("Starting to parse file: {}", path);

    let content = read_file(path)?;
    info!("File read successfully ({} bytes)", content.len());

    let tree = parse_str(&content)?;
    debug!("Parsing completed");
    Ok(tree)
}
