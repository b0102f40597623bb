//! Lexical analyzer for the tag markup.
//!
//! Three lexemes are recognized, tried in this order at every position:
//! a text run, a start tag `<name>` and an end tag `</name>`. Runs of
//! space, tab and newline separate lexemes and are dropped.

pub mod cursor;

use tracing::{debug, trace};

use crate::error::{LexicalError, ParseErrorKind, Result};
use crate::parser::config::ParserConfig;
use crate::parser::token::Token;
use cursor::Cursor;

/// Scan state for one tokenizing pass over a borrowed input.
///
/// Each `Lexer` owns its own position, so independent inputs can be
/// tokenized side by side.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    config: ParserConfig,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the default limits
    pub fn new(input: &'a str) -> Result<Self> {
        Self::with_config(input, ParserConfig::default())
    }

    /// Creates a lexer with custom limits, rejecting oversized input up front
    pub fn with_config(input: &'a str, config: ParserConfig) -> Result<Self> {
        config.validate_size(input.len())?;
        Ok(Self {
            cursor: Cursor::new(input),
            config,
        })
    }

    /// Produces the next token, or `None` once only separators remain
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.cursor.eat_while(is_separator);
        if self.cursor.is_eof() {
            return Ok(None);
        }

        let location = self.cursor.location();
        let token = match self
            .read_text()
            .or_else(|| self.read_start_tag())
            .or_else(|| self.read_end_tag())
        {
            Some(token) => token,
            None => {
                let found: String = self.cursor.remaining().chars().take(16).collect();
                return Err(location.create_error(
                    ParseErrorKind::Lexical(LexicalError::UnrecognizedInput { found }),
                    "Expected text, a start tag or an end tag",
                ));
            }
        };

        self.config
            .validate_name(token.name())
            .map_err(|e| e.with_location(location))?;

        trace!(%token, line = location.line, column = location.column, "token");
        Ok(Some(token))
    }

    /// Drains the lexer into the full token sequence
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        let texts = tokens.iter().filter(|t| t.is_text()).count();
        debug!(count = tokens.len(), texts, "tokenized input");
        Ok(tokens)
    }

    fn read_text(&mut self) -> Option<Token> {
        let start = self.cursor.pos();
        if self.cursor.eat_while(is_text_byte) == 0 {
            return None;
        }
        Some(Token::Text(self.cursor.slice_from(start).to_string()))
    }

    fn read_start_tag(&mut self) -> Option<Token> {
        self.read_tag(b"<", is_start_name_byte).map(Token::StartTag)
    }

    fn read_end_tag(&mut self) -> Option<Token> {
        self.read_tag(b"</", is_end_name_byte).map(Token::EndTag)
    }

    /// Matches `open`, a non-empty name run and `>`; leaves the cursor
    /// untouched when any part is missing or the name has a separator at
    /// either end.
    fn read_tag(&mut self, open: &[u8], is_name_byte: fn(u8) -> bool) -> Option<String> {
        let saved = self.cursor.clone();

        if open.iter().all(|&b| self.cursor.consume(b)) {
            let start = self.cursor.pos();
            if self.cursor.eat_while(is_name_byte) > 0 {
                let name = self.cursor.slice_from(start);
                if is_trimmed(name) && self.cursor.consume(b'>') {
                    return Some(name.to_string());
                }
            }
        }

        self.cursor.reset(saved);
        None
    }
}

/// Tokenizes `input` with the default limits
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input)?.tokenize()
}

const fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n')
}

const fn is_text_byte(b: u8) -> bool {
    !matches!(b, b'<' | b'>') && !is_separator(b)
}

const fn is_end_name_byte(b: u8) -> bool {
    !matches!(b, b'<' | b'>')
}

const fn is_start_name_byte(b: u8) -> bool {
    b != b'/' && is_end_name_byte(b)
}

// Separators are allowed inside a tag name but not at its edges, so
// `<a b>` is a tag and `< a >` is not.
fn is_trimmed(name: &str) -> bool {
    let bytes = name.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&first), Some(&last)) => !is_separator(first) && !is_separator(last),
        _ => false,
    }
}
