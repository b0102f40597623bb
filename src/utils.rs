use std::{fs, io};

use tracing::warn;

use crate::{
    error::{IOError, ParseError, Result},
    formatter::{FormatConfig, Formatter, TreeFormatter},
    parser::{Lexer, Node, ParserConfig, Token, TreeBuilder},
};

pub fn read_file(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        warn!("Failed to read {}: {}", path, e);
        let kind = match e.kind() {
            io::ErrorKind::NotFound => IOError::FileNotFound(path.to_string()),
            io::ErrorKind::PermissionDenied => IOError::PermissionDenied(path.to_string()),
            _ => IOError::ReadError(format!("Cannot read file: {}", path)),
        };
        ParseError::from(kind).with_source(e)
    })
}

pub fn write_file(path: &str, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        warn!("Failed to write {}: {}", path, e);
        ParseError::from(IOError::WriteError(format!(
            "Cannot write to file: {}",
            path
        )))
        .with_source(e)
    })
}

/// Tokenizes and builds `content` with the default limits
pub fn parse_str(content: &str) -> Result<Node> {
    parse_str_with_config(content, ParserConfig::default())
}

/// Tokenizes and builds `content` with custom limits
pub fn parse_str_with_config(content: &str, config: ParserConfig) -> Result<Node> {
    let tokens = Lexer::with_config(content, config.clone())?.tokenize()?;
    TreeBuilder::with_config(config).build(tokens)
}

pub fn format_tree(node: &Node) -> Result<String> {
    TreeFormatter.format(node, &FormatConfig::default())
}

/// One token per line
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
