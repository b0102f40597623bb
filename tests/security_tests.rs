#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use tagtree::test_utils::*;

#[test]
fn test_max_input_size() {
    let large_input = "x".repeat(DEFAULT_MAX_SIZE + 1);

    let result = Lexer::new(&large_input);
    assert!(result.is_err());
    if let Err(e) = result {
        assert!(matches!(
            e.kind(),
            ParseErrorKind::Security(SecurityError::MaxSizeExceeded)
        ));
    }
}

#[test]
fn test_input_at_size_limit_is_accepted() {
    let config = ParserConfig {
        max_size: 16,
        ..ParserConfig::default()
    };
    let over = parse_str_with_config("<a>0123456789</a>", config.clone());
    assert!(matches!(
        over.map_err(|e| e.kind().clone()),
        Err(ParseErrorKind::Security(SecurityError::MaxSizeExceeded))
    ));
    assert!(parse_str_with_config("<a>012345678</a>", config).is_ok());
}

#[test]
fn test_stack_overflow_prevention() {
    let input = nested_document(DEFAULT_MAX_DEPTH + 1);

    let result = parse_str(&input);
    assert!(
        result.is_err(),
        "Expected error for excessive nesting, got {:?}",
        result
    );
    if let Err(e) = result {
        assert!(
            matches!(
                e.kind(),
                ParseErrorKind::Security(SecurityError::MaxDepthExceeded)
            ),
            "Expected MaxDepthExceeded, got {:?}",
            e.kind()
        );
    }
}

#[test]
fn test_nesting_at_max_depth_is_accepted() {
    let input = nested_document(DEFAULT_MAX_DEPTH);
    let tree = parse_str(&input).unwrap();
    assert_eq!(find_all(&tree, "d").len(), DEFAULT_MAX_DEPTH);
}

#[test]
fn test_max_name_length() {
    let long_name = "n".repeat(DEFAULT_MAX_NAME_LENGTH + 1);
    let input = format!("<{0}></{0}>", long_name);

    let result = parse_str(&input);
    assert!(result.is_err());
    if let Err(e) = result {
        assert!(matches!(
            e.kind(),
            ParseErrorKind::Security(SecurityError::MaxNameLengthExceeded)
        ));
        assert_eq!(e.location().map(|l| l.offset), Some(0));
    }
}

#[test]
fn test_long_text_run() {
    let config = ParserConfig {
        max_name_length: 8,
        ..ParserConfig::default()
    };
    let result = parse_str_with_config("<a>short waytoolongtext</a>", config);
    assert!(matches!(
        result.map_err(|e| e.kind().clone()),
        Err(ParseErrorKind::Security(SecurityError::MaxNameLengthExceeded))
    ));
}
