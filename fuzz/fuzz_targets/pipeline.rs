#![no_main]
use libfuzzer_sys::fuzz_target;
use tagtree::{build, find_all, find_first, tokenize};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tree) = tokenize(s).and_then(build) {
            let all = find_all(&tree, "a");
            assert_eq!(all.first().copied(), find_first(&tree, "a"));
        }
    }
});
