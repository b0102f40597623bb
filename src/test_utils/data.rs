use std::fs;

use crate::error::{IOError, ParseError, Result};

pub struct TestData {
    pub people: String,
    pub catalog: String,
    pub large: String,
}

impl TestData {
    pub fn load() -> Result<Self> {
        Ok(Self {
            people: read_test_file("tests/input/people.xml")?,
            catalog: read_test_file("tests/input/catalog.xml")?,
            large: read_test_file("tests/input/large.xml")?,
        })
    }
}

pub fn read_test_file(path: &str) -> Result<String> {
    let full = format!("{}/{}", env!("CARGO_MANIFEST_DIR"), path);
    fs::read_to_string(&full).map_err(|e| {
        ParseError::from(IOError::ReadError(format!("Failed to read {}: {}", path, e)))
    })
}
