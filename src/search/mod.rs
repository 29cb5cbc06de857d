// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: gate, score, rank.
//!
//! Everything culminates here. The query is interpreted once, the prefix is
//! expanded once, then every hymn goes through the gates and, if it survives,
//! gets a score. Zero-score survivors are dropped. What's left is ranked with
//! [`compare_results`](crate::scoring::ranking::compare_results).
//!
//! # Fast paths
//!
//! - An empty query returns every hymn in input order, unscored.
//! - A pure number that matches a hymn's label returns just that hymn.

pub mod gates;

use crate::index::HymnIndex;
use crate::query::{parse_query, ParsedQuery};
use crate::scoring::ranking::rank_results;
use crate::scoring::{number_bonus, phrase_bonus, term_score, ScoringConfig};
use crate::types::{Hymn, Posting, SearchResult};
use gates::{apply_gates, GateOutcome};

/// Search with the default scoring configuration.
///
/// Returns references into `hymns`, best first. `index` must have been built
/// from `hymns`; positions missing from either side are ignored.
pub fn search<'a>(index: &HymnIndex, hymns: &'a [Hymn], query: &str) -> Vec<&'a Hymn> {
    search_with(index, hymns, query, &ScoringConfig::default())
}

/// Search with a custom scoring configuration.
pub fn search_with<'a>(
    index: &HymnIndex,
    hymns: &'a [Hymn],
    query: &str,
    config: &ScoringConfig,
) -> Vec<&'a Hymn> {
    search_scored(index, hymns, query, config)
        .into_iter()
        .filter_map(|result| hymns.get(result.doc_id))
        .collect()
}

/// Search and keep the scores.
///
/// Empty queries yield every hymn with score `0.0`. A number fast-path hit is
/// reported with the configured number bonus as its score.
pub fn search_scored(
    index: &HymnIndex,
    hymns: &[Hymn],
    query: &str,
    config: &ScoringConfig,
) -> Vec<SearchResult> {
    let parsed = parse_query(query);

    if parsed.is_empty() {
        return (0..hymns.len())
            .map(|doc_id| SearchResult { doc_id, score: 0.0 })
            .collect();
    }

    if let Some(doc_id) = parsed
        .number()
        .and_then(|label| index.find_number(label))
        .filter(|&doc_id| doc_id < hymns.len())
    {
        tracing::trace!(doc_id, "hymn number fast path");
        return vec![SearchResult {
            doc_id,
            score: config.number_bonus,
        }];
    }

    let expansions: Vec<&str> = parsed
        .prefix
        .as_deref()
        .map(|prefix| index.expand_prefix(prefix, config.max_prefix_expansions))
        .unwrap_or_default();

    let mut results: Vec<SearchResult> = index
        .postings()
        .iter()
        .take(hymns.len())
        .enumerate()
        .filter_map(|(doc_id, posting)| {
            let outcome = apply_gates(posting, &parsed, &expansions)?;
            let score = score_hymn(index, posting, &parsed, &outcome, &expansions, config);
            // Zero-score survivors count as no match.
            (score > 0.0).then_some(SearchResult { doc_id, score })
        })
        .collect();

    rank_results(&mut results, hymns);

    tracing::debug!(query, results = results.len(), "search completed");
    results
}

/// Additive score for a hymn that passed the gates.
fn score_hymn(
    index: &HymnIndex,
    posting: &Posting,
    query: &ParsedQuery,
    outcome: &GateOutcome,
    expansions: &[&str],
    config: &ScoringConfig,
) -> f64 {
    let mut score: f64 = outcome
        .phrase_hits
        .iter()
        .chain(outcome.default_hits.iter())
        .map(|&hits| phrase_bonus(hits, config))
        .sum();

    for term in &query.terms {
        let is_open_prefix = query.prefix.as_ref() == Some(term) && !query.required_terms.contains(term);
        score += if is_open_prefix {
            prefix_score(index, posting, term, expansions, config)
        } else {
            term_score(index, posting, term, config)
        };
    }

    score + number_bonus(posting, &query.number_tokens, config)
}

/// A half-typed prefix scores as the best of its expansions in this hymn.
///
/// Summing would reward a hymn for containing "grace", "graceful" and
/// "gracious" at once, which says nothing about what the user is typing.
fn prefix_score(
    index: &HymnIndex,
    posting: &Posting,
    prefix: &str,
    expansions: &[&str],
    config: &ScoringConfig,
) -> f64 {
    if expansions.is_empty() {
        return term_score(index, posting, prefix, config);
    }
    expansions
        .iter()
        .filter(|term| posting.contains_term(term))
        .map(|term| term_score(index, posting, term, config))
        .fold(0.0, f64::max)
}
