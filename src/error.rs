//! Error handling types for the tokenizer, tree builder and file helpers
//!
//! Every failure in the pipeline is reported as a [`ParseError`] value. The
//! library never prints or exits; the binary decides how to report.

use std::{error::Error, fmt};

/// Main error type for tokenizing, building and I/O operations
#[derive(Debug)]
pub struct ParseError {
    /// The specific kind of error
    kind: ParseErrorKind,
    /// Location where the error occurred
    location: Option<Location>,
    /// Source error that caused this error
    source: Option<Box<dyn Error + Send + Sync>>,
    /// Additional context for the error
    context: Option<String>,
}

/// Represents a location in the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
    /// Byte offset from the start of the input
    pub offset: usize,
}

/// Top-level error categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    Format(FormatError),
    IO(IOError),
    Lexical(LexicalError),
    Security(SecurityError),
    Structure(StructureError),
}

/// Tokenizer errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexicalError {
    /// No text run, start tag or end tag matches at the cursor
    UnrecognizedInput { found: String },
}

/// Tree construction errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// An end tag does not close the innermost open branch.
    /// `open` is empty when only the root is open.
    TagMismatch { end: String, open: String },
    /// Input ended while branches were still open, outermost first
    UnclosedTag { names: Vec<String> },
    /// A child was appended to a leaf node
    InvalidAppend,
}

/// Resource limit errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityError {
    /// Exceeded maximum nesting depth of open branches
    MaxDepthExceeded,
    /// Exceeded maximum input size
    MaxSizeExceeded,
    /// Exceeded maximum length of a tag name or text run
    MaxNameLengthExceeded,
}

/// Tree formatting errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Indentation setting outside the supported range
    InvalidIndentation(String),
}

/// IO operation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IOError {
    /// File not found
    FileNotFound(String),
    /// Permission denied
    PermissionDenied(String),
    /// Error reading from a file
    ReadError(String),
    /// Error writing to a file
    WriteError(String),
}

impl Location {
    pub const fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Builds an error of `kind` at this location with a context message
    pub fn create_error(self, kind: ParseErrorKind, context: &str) -> ParseError {
        ParseError::new(kind)
            .with_location(self)
            .with_context(context)
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            location: None,
            source: None,
            context: None,
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

impl From<FormatError> for ParseError {
    fn from(err: FormatError) -> Self {
        Self::new(ParseErrorKind::Format(err))
    }
}

impl From<IOError> for ParseError {
    fn from(err: IOError) -> Self {
        Self::new(ParseErrorKind::IO(err))
    }
}

impl From<LexicalError> for ParseError {
    fn from(err: LexicalError) -> Self {
        Self::new(ParseErrorKind::Lexical(err))
    }
}

impl From<SecurityError> for ParseError {
    fn from(err: SecurityError) -> Self {
        Self::new(ParseErrorKind::Security(err))
    }
}

impl From<StructureError> for ParseError {
    fn from(err: StructureError) -> Self {
        Self::new(ParseErrorKind::Structure(err))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(loc) = &self.location {
            write!(
                f,
                "at line {}, column {}: {}",
                loc.line, loc.column, self.kind
            )?;
        } else {
            write!(f, "Error: {}", self.kind)?;
        }

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {}", source)?;
        }

        Ok(())
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(err) => err.fmt(f),
            Self::IO(err) => err.fmt(f),
            Self::Lexical(err) => err.fmt(f),
            Self::Security(err) => err.fmt(f),
            Self::Structure(err) => err.fmt(f),
        }
    }
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedInput { found } => {
                write!(f, "Unrecognized input starting with '{}'", found)
            }
        }
    }
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TagMismatch { end, open } if open.is_empty() => {
                write!(f, "End tag \"{}\" has no open start tag", end)
            }
            Self::TagMismatch { end, open } => write!(
                f,
                "Start tag \"{}\" mismatched with end tag \"{}\"",
                open, end
            ),
            Self::UnclosedTag { names } => {
                write!(f, "Unclosed tag(s) at end of input: {}", names.join(", "))
            }
            Self::InvalidAppend => write!(f, "Tried to append a node to a leaf node"),
        }
    }
}

impl fmt::Display for SecurityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxDepthExceeded => write!(f, "Maximum nesting depth exceeded"),
            Self::MaxSizeExceeded => write!(f, "Maximum input size exceeded"),
            Self::MaxNameLengthExceeded => write!(f, "Maximum tag or text length exceeded"),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndentation(msg) => write!(f, "Invalid indentation: {}", msg),
        }
    }
}

impl fmt::Display for IOError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "File not found: {}", path),
            Self::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            Self::ReadError(msg) => write!(f, "Read error: {}", msg),
            Self::WriteError(msg) => write!(f, "Write error: {}", msg),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let source: &(dyn Error + 'static) = self.source.as_deref()?;
        Some(source)
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_location() {
        let err = Location::new(3, 7, 20).create_error(
            ParseErrorKind::Lexical(LexicalError::UnrecognizedInput {
                found: "<>".to_string(),
            }),
            "while tokenizing",
        );
        let display = err.to_string();
        assert!(display.starts_with("at line 3, column 7:"));
        assert!(display.contains("'<>'"));
        assert!(display.contains("Context: while tokenizing"));
    }

    #[test]
    fn test_display_tag_mismatch_names_both_tags() {
        let err = ParseError::from(StructureError::TagMismatch {
            end: "b".to_string(),
            open: "a".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Error: Start tag \"a\" mismatched with end tag \"b\""
        );
    }

    #[test]
    fn test_display_stray_end_tag() {
        let err = ParseError::from(StructureError::TagMismatch {
            end: "b".to_string(),
            open: String::new(),
        });
        assert!(err.to_string().contains("has no open start tag"));
    }

    #[test]
    fn test_source_is_exposed() {
        let io = std::io::Error::other("disk gone");
        let err = ParseError::from(IOError::ReadError("x".to_string())).with_source(io);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("Caused by: disk gone"));
    }
}
