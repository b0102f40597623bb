#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::fs;

use tagtree::test_utils::*;

#[test]
fn file_read_error() {
    let result = parse_file("nonexistent_file.xml");
    assert!(
        result.is_err(),
        "Expected error when reading non-existent file"
    );

    let err = result.unwrap_err();
    match err.kind() {
        ParseErrorKind::IO(IOError::FileNotFound(path)) => {
            assert_eq!(path, "nonexistent_file.xml")
        }
        other => panic!("Expected IO error, got {:?}", other),
    }
}

#[test]
fn read_and_write_file() {
    let temp_path = tmp_file_path("rw_test.txt");
    let temp_path_str = temp_path.to_str().expect("valid path");

    let content = "<greeting>Hello, tagtree!</greeting>";
    write_file(temp_path_str, content).expect("Failed to write file");

    let read_content = read_file(temp_path_str).expect("Failed to read file");
    assert_eq!(content, read_content);

    let _ = fs::remove_file(temp_path);
}

#[test]
fn parse_and_format_file() {
    let temp_path = tmp_file_path("test.xml");
    let temp_path_str = temp_path.to_str().expect("valid path");

    let xml_content = "<list>\n  <item>one</item>\n  <item>two</item>\n</list>\n";
    fs::write(temp_path_str, xml_content).expect("Failed to write XML file");

    let parsed = parse_file(temp_path_str).expect("Failed to parse XML file");
    assert_eq!(find_all(&parsed, "item").len(), 2);

    let formatted = format_tree(&parsed).expect("Failed to format tree");
    assert!(
        formatted.contains("BRANCH \"list\" (2 children)"),
        "Formatted output should contain the list branch"
    );
    assert!(
        formatted.contains("LEAF \"two\""),
        "Formatted output should contain leaf text"
    );

    let _ = fs::remove_file(temp_path);
}

#[test]
fn malformed_file_reports_structure_error() {
    let temp_path = tmp_file_path("broken.xml");
    let temp_path_str = temp_path.to_str().expect("valid path");

    fs::write(temp_path_str, "<a><b></a>").expect("Failed to write file");

    let result = parse_file(temp_path_str);
    if let Err(err) = &result {
        match err.kind() {
            ParseErrorKind::Structure(StructureError::TagMismatch { end, open }) => {
                assert_eq!((end.as_str(), open.as_str()), ("a", "b"));
            }
            other => panic!("Expected tag mismatch, got {:?}", other),
        }
    } else {
        panic!("Expected error, got {:?}", result);
    }

    let _ = fs::remove_file(temp_path);
}

#[test]
fn format_tokens_one_per_line() {
    let tokens = tokenize("<a>x</a>").unwrap();
    assert_eq!(format_tokens(&tokens), "START <a>\nTEXT \"x\"\nEND </a>");
}

#[test]
fn sample_files_parse_from_disk() {
    for path in TEST_FILES {
        let full = format!("{}/{}", env!("CARGO_MANIFEST_DIR"), path);
        let tree = parse_file(&full).unwrap_or_else(|e| panic!("{} failed: {}", path, e));
        assert!(tree.leaf_count() > 0, "{} should contain text", path);
    }
}
