pub const TEST_FILES: [&str; 3] = [
    "tests/input/people.xml",
    "tests/input/catalog.xml",
    "tests/input/large.xml",
];

pub const VALID_SAMPLES: [(&str, &str); 7] = [
    ("", "Empty input"),
    ("   \n\t ", "Only separators"),
    ("loose words", "Text directly under the root"),
    ("<a></a>", "Empty branch"),
    ("<a><b>x</b></a>", "Nested branch"),
    ("<a>1</a> <a>2</a>", "Sibling branches"),
    ("<a b>x</a b>", "Separator inside tag name"),
];

pub const INVALID_SAMPLES: [(&str, &str); 7] = [
    ("<>", "Empty tag name"),
    ("<a/>", "Self-closing tag"),
    ("< a >", "Separator at tag name edges"),
    ("<a>text</b>", "Mismatched end tag"),
    ("</a>", "End tag without start tag"),
    ("<a>text", "Unclosed start tag"),
    ("<a x=\"1\"></a>", "Attribute text without matching end tag"),
];
