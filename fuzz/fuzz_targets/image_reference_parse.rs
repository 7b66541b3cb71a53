//! Fuzz target for image reference extraction.
//!
//! This fuzzer feeds arbitrary UTF-8 article text to the extractor,
//! checking for panics, crashes, or hangs.

#![no_main]

use imgcheck::extract::parse_image_references;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for reference in parse_image_references(text) {
        assert!(!reference.as_str().contains(['(', ')']));
    }
});
