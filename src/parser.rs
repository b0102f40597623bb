pub mod config;
pub mod lexer;
pub mod node;
pub mod token;
pub mod tree;

pub use config::ParserConfig;
pub use lexer::{tokenize, Lexer};
pub use node::{Node, NodeLabel};
pub use token::Token;
pub use tree::{build, TreeBuilder};
