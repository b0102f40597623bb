use std::fmt;

/// One lexical unit of the markup, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of characters other than `<`, `>` and whitespace
    Text(String),
    /// `<name>`
    StartTag(String),
    /// `</name>`
    EndTag(String),
}

impl Token {
    /// The tag name or text content carried by the token
    pub fn name(&self) -> &str {
        match self {
            Self::Text(s) | Self::StartTag(s) | Self::EndTag(s) => s,
        }
    }

    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "TEXT \"{}\"", s),
            Self::StartTag(s) => write!(f, "START <{}>", s),
            Self::EndTag(s) => write!(f, "END </{}>", s),
        }
    }
}
