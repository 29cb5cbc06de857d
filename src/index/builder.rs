// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction.
//!
//! # Invariants
//!
//! 1. **DOC_FREQ_CORRECT**: `doc_freq[t]` equals the number of hymns whose term
//!    set contains `t`. A hymn singing "holy" nine times counts once.
//! 2. **VOCAB_COMPLETE**: the vocabulary is exactly the key set of `doc_freq`,
//!    sorted and without duplicates.
//! 3. **POSTINGS_ALIGNED**: `postings[i]` describes `hymns[i]`.

use super::tokenizer::tokenize;
use super::HymnIndex;
use crate::types::{Field, Hymn, Posting, TermCounts};
use crate::util::normalize::{normalize, normalize_phrase};
use std::collections::{HashMap, HashSet};

/// Build the per-hymn posting record.
///
/// Each weighted field is tokenized on its own so that term counts stay
/// attributable to a field. Missing text is just an empty string here.
fn build_posting(hymn: &Hymn) -> Posting {
    let mut field_terms: [TermCounts; 6] = Default::default();
    let mut terms = HashSet::new();

    for field in Field::ALL {
        let counts = &mut field_terms[field.as_index()];
        for term in tokenize(hymn.field(field)) {
            *counts.entry(term).or_insert(0) += 1;
        }
        terms.extend(counts.keys().cloned());
    }

    Posting {
        title_text: normalize_phrase(&hymn.title),
        lyrics_text: normalize_phrase(&hymn.lyrics),
        field_terms,
        terms,
        number: hymn.number.as_deref().map(normalize).unwrap_or_default(),
    }
}

/// Build an index over `hymns`.
///
/// Cost is linear in the number of tokens in the corpus. There is no failure
/// mode: an empty slice gives an empty index.
pub fn build_index(hymns: &[Hymn]) -> HymnIndex {
    let postings: Vec<Posting> = hymns.iter().map(build_posting).collect();

    // INVARIANT: DOC_FREQ_CORRECT
    // Count from the per-hymn term set, not from occurrences.
    let mut doc_freq: HashMap<String, usize> = HashMap::new();
    for posting in &postings {
        for term in &posting.terms {
            *doc_freq.entry(term.clone()).or_insert(0) += 1;
        }
    }

    // INVARIANT: VOCAB_COMPLETE
    let mut vocabulary: Vec<String> = doc_freq.keys().cloned().collect();
    vocabulary.sort_unstable();

    tracing::debug!(
        docs = postings.len(),
        terms = vocabulary.len(),
        "built hymn index"
    );

    HymnIndex {
        doc_count: postings.len(),
        postings,
        doc_freq,
        vocabulary,
    }
}
