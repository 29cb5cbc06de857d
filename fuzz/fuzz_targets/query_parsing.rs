// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query interpretation.
//!
//! The parser runs on every keystroke, so it sees every half-typed state of
//! every query. Unbalanced quotes and odd Unicode must parse into something
//! consistent.

#![no_main]

use hymnal::{is_stop_word, normalize_phrase, parse_query};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|raw: &str| {
    let parsed = parse_query(raw);

    // INVARIANT 1: phrases are non-empty and already normalized
    for phrase in &parsed.phrases {
        assert!(!phrase.is_empty());
        assert_eq!(&normalize_phrase(phrase), phrase);
    }

    // INVARIANT 2: multi-word mode and term mode are exclusive
    if parsed.multi_word {
        assert!(parsed.default_phrase.is_some());
        assert!(parsed.required_terms.is_empty());
        assert!(parsed.prefix.is_none());
    } else {
        assert!(parsed.default_phrase.is_none());
    }

    // INVARIANT 3: terms are searchable and distinct
    for (i, term) in parsed.terms.iter().enumerate() {
        assert!(term.len() >= 2);
        assert!(!is_stop_word(term));
        assert!(!parsed.terms[..i].contains(term), "duplicate term {term:?}");
    }

    // INVARIANT 4: a number query is digits only
    if let Some(number) = parsed.number() {
        assert!(!number.is_empty());
        assert!(number.bytes().all(|b| b.is_ascii_digit()));
    }

    // INVARIANT 5: parsing is deterministic
    assert_eq!(parse_query(raw), parsed);
});
