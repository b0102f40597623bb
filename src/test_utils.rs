mod data;
mod fixtures;
mod helpers;

pub use data::{read_test_file, TestData};
pub use fixtures::{INVALID_SAMPLES, TEST_FILES, VALID_SAMPLES};
pub use helpers::{leaf_texts, nested_document, tmp_file_path};

// Re-export common test types/traits
pub use crate::{
    error::{
        FormatError, IOError, LexicalError, Location, ParseError, ParseErrorKind, Result,
        SecurityError, StructureError,
    },
    find_all, find_first, first_text,
    formatter::{FormatConfig, Formatter, TreeFormatter},
    parse_file,
    parser::{
        build,
        config::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_NAME_LENGTH, DEFAULT_MAX_SIZE},
        tokenize, Lexer, Node, NodeLabel, ParserConfig, Token, TreeBuilder,
    },
    utils::{
        format_tokens, format_tree, parse_str, parse_str_with_config, read_file, write_file,
    },
};
