// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the search API to verify it never panics
//! and never returns invalid results. Stray quotes, combining marks, digits
//! glued to words: none of it should crash.

#![no_main]

use hymnal::testing::sample_hymnal;
use hymnal::{build_index, search_scored, Hymn, HymnIndex, ScoringConfig};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

fuzz_target!(|query: &[u8]| {
    // Build the index once per process
    static CORPUS: std::sync::OnceLock<(Vec<Hymn>, HymnIndex)> = std::sync::OnceLock::new();
    let (hymns, index) = CORPUS.get_or_init(|| {
        let hymns = sample_hymnal();
        let index = build_index(&hymns);
        (hymns, index)
    });

    let query = String::from_utf8_lossy(query);
    // Cap query length on a char boundary to avoid timeouts
    let query: String = query.chars().take(200).collect();

    // INVARIANT 1: search never panics
    let config = ScoringConfig::default();
    let results = search_scored(index, hymns, &query, &config);

    // INVARIANT 2: results point into the corpus, once each
    let mut seen = HashSet::new();
    for result in &results {
        assert!(result.doc_id < hymns.len(), "doc_id {} out of range", result.doc_id);
        assert!(seen.insert(result.doc_id), "doc_id {} returned twice", result.doc_id);
    }

    // INVARIANT 3: blank queries return everything, in order
    if query.trim().is_empty() {
        let ids: Vec<usize> = results.iter().map(|r| r.doc_id).collect();
        assert_eq!(ids, (0..hymns.len()).collect::<Vec<_>>());
        return;
    }

    // INVARIANT 4: otherwise every score is positive and ranked
    for pair in results.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "ranking broken for {:?}: {} before {}",
            query,
            pair[0].score,
            pair[1].score
        );
    }
});
