// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Whatever lands in the search box goes straight into the composer. Emoji,
//! RTL text, null bytes, query-language punctuation: none of it may panic,
//! and every result must be a real place in rank order.

#![no_main]

use libfuzzer_sys::fuzz_target;
use locus::testing::campus;
use locus::{compose, PlaceIndex, SearchOptions, Searcher};
use std::sync::OnceLock;

fuzz_target!(|query: &[u8]| {
    static INDEX: OnceLock<PlaceIndex> = OnceLock::new();
    let index = INDEX.get_or_init(campus);

    let query = String::from_utf8_lossy(query);
    let composed = compose(&query);
    for clause in composed.clauses() {
        assert!(!clause.text.is_empty());
    }

    let results = Searcher::new(index).search_scored(&composed, SearchOptions::unlimited());
    assert!(results.len() <= index.len());
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for hit in &results {
        assert!(hit.doc_id < index.len());
        assert!(hit.score.is_finite() && hit.score > 0.0);
    }
});
