// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored hymns get sorted.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Number** - ascending numeric label; non-numeric or missing labels last
//! 3. **Title** - case-insensitive, ascending
//! 4. **Position** - the hymn's place in the input slice
//!
//! The last key makes this a total order, so the same query over the same
//! snapshot always produces the same list.

use crate::types::{Hymn, SearchResult};
use std::cmp::Ordering;

/// Compare two numeric labels, with `None` sorting after every number.
fn compare_labels(a: Option<u64>, b: Option<u64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compare two search results for ranking.
///
/// `hymns` is the slice the results index into. A `doc_id` outside it is
/// treated as a hymn with no number and an empty title.
pub fn compare_results(a: &SearchResult, b: &SearchResult, hymns: &[Hymn]) -> Ordering {
    let hymn_a = hymns.get(a.doc_id);
    let hymn_b = hymns.get(b.doc_id);

    b.score
        .total_cmp(&a.score)
        .then_with(|| {
            compare_labels(
                hymn_a.and_then(Hymn::numeric_label),
                hymn_b.and_then(Hymn::numeric_label),
            )
        })
        .then_with(|| {
            let title_a = hymn_a.map(|h| h.title.to_lowercase()).unwrap_or_default();
            let title_b = hymn_b.map(|h| h.title.to_lowercase()).unwrap_or_default();
            title_a.cmp(&title_b)
        })
        .then_with(|| a.doc_id.cmp(&b.doc_id))
}

/// Sort results in place using [`compare_results`].
pub fn rank_results(results: &mut [SearchResult], hymns: &[Hymn]) {
    results.sort_by(|a, b| compare_results(a, b, hymns));
}
