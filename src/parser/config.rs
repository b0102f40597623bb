use std::fmt;

use crate::error::{ParseError, Result, SecurityError};

/// Maximum number of simultaneously open branches
pub const DEFAULT_MAX_DEPTH: usize = 256;
/// Maximum input size (10MB) to prevent memory exhaustion
pub const DEFAULT_MAX_SIZE: usize = 10 * 1024 * 1024;
/// Maximum length (64KB) of a single tag name or text run
pub const DEFAULT_MAX_NAME_LENGTH: usize = 64 * 1024;

/// Configuration for tokenizer and tree builder limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting depth of open branches
    pub max_depth: usize,
    /// Maximum input size in bytes
    pub max_size: usize,
    /// Maximum tag name or text length in bytes
    pub max_name_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
        }
    }
}

impl fmt::Display for ParserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParserConfig {{ max_depth: {}, max_size: {}, max_name_length: {} }}",
            self.max_depth, self.max_size, self.max_name_length
        )
    }
}

impl ParserConfig {
    pub fn validate_size(&self, size: usize) -> Result<()> {
        if size > self.max_size {
            return Err(ParseError::from(SecurityError::MaxSizeExceeded).with_context(format!(
                "Input size ({} bytes) exceeds maximum allowed ({})",
                size, self.max_size
            )));
        }
        Ok(())
    }

    pub fn validate_name(&self, name: &str) -> Result<()> {
        if name.len() > self.max_name_length {
            return Err(ParseError::from(SecurityError::MaxNameLengthExceeded));
        }
        Ok(())
    }

    /// `depth` counts open branches, the root excluded
    pub fn validate_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(ParseError::from(SecurityError::MaxDepthExceeded).with_context(format!(
                "More than {} nested tags",
                self.max_depth
            )));
        }
        Ok(())
    }
}
