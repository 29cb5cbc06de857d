// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Arbitrary hymnals, arbitrary queries. Scores must be finite, positive and
//! deterministic, and the empty query must stay the identity no matter what
//! the corpus looks like.

#![no_main]

use arbitrary::Arbitrary;
use hymnal::{build_index, search_scored, Hymn, ScoringConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzHymn {
    number: Option<String>,
    title: String,
    lyrics: String,
    author: String,
    meter: String,
}

#[derive(Debug, Arbitrary)]
struct Input {
    hymns: Vec<FuzzHymn>,
    query: String,
}

fuzz_target!(|input: Input| {
    // Keep corpora small enough to stay fast
    let hymns: Vec<Hymn> = input
        .hymns
        .into_iter()
        .take(32)
        .enumerate()
        .map(|(i, h)| Hymn {
            id: i.to_string(),
            number: h.number,
            title: h.title,
            lyrics: h.lyrics,
            author: h.author,
            meter: h.meter,
            ..Hymn::default()
        })
        .collect();
    let index = build_index(&hymns);
    let config = ScoringConfig::default();

    let first = search_scored(&index, &hymns, &input.query, &config);
    let second = search_scored(&index, &hymns, &input.query, &config);

    // INVARIANT 1: searches are deterministic
    assert_eq!(first, second);

    // INVARIANT 2: scores are finite and never negative
    for result in &first {
        assert!(result.score.is_finite(), "score {} for {:?}", result.score, input.query);
        assert!(result.score >= 0.0);
        assert!(result.doc_id < hymns.len());
    }

    // INVARIANT 3: the empty query is the identity
    let all = search_scored(&index, &hymns, "", &config);
    assert_eq!(all.len(), hymns.len());
});
