#![allow(dead_code)]

use std::collections::BTreeSet;

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Alt text without brackets or parentheses.
pub fn arb_alt_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.,-]{0,16}"
}

/// A relative image path without parentheses or surrounding whitespace.
pub fn arb_image_path() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,8}(/[a-z0-9_.-]{1,8}){0,3}\\.(png|jpg|gif)"
}

/// Horizontal whitespace padding.
pub fn arb_padding() -> impl Strategy<Value = String> {
    "[ \t]{0,4}"
}

/// A set of distinct image file names.
pub fn arb_image_names(max: usize) -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[a-z][a-z0-9_-]{0,7}\\.png", 0..=max)
}
