// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pass/fail filters applied before any scoring.
//!
//! Gates run in a fixed order and stop at the first failure:
//!
//! 1. every quoted phrase occurs in the title or lyrics
//! 2. in multi-word mode, the whole cleaned residual occurs in the title or lyrics
//! 3. otherwise, every required term is present and the prefix is satisfied
//!
//! A hymn that fails a gate is out no matter what it would have scored.

use crate::query::ParsedQuery;
use crate::types::{PhraseHits, Posting};

/// Where each phrase landed for a hymn that passed the gates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateOutcome {
    /// One entry per quoted phrase, in query order.
    pub phrase_hits: Vec<PhraseHits>,
    /// Hits for the default phrase, in multi-word mode.
    pub default_hits: Option<PhraseHits>,
}

/// Is the trailing prefix satisfied?
///
/// With expansions, any one of them will do. With none, the raw token has to
/// be there verbatim.
pub fn prefix_satisfied(posting: &Posting, prefix: &str, expansions: &[&str]) -> bool {
    if expansions.is_empty() {
        posting.contains_term(prefix)
    } else {
        expansions.iter().any(|term| posting.contains_term(term))
    }
}

/// Run all gates. `None` means the hymn is excluded.
pub fn apply_gates(posting: &Posting, query: &ParsedQuery, expansions: &[&str]) -> Option<GateOutcome> {
    let mut phrase_hits = Vec::with_capacity(query.phrases.len());
    for phrase in &query.phrases {
        let hits = posting.phrase_hits(phrase);
        if !hits.any() {
            return None;
        }
        phrase_hits.push(hits);
    }

    if let Some(phrase) = &query.default_phrase {
        let hits = posting.phrase_hits(phrase);
        if !hits.any() {
            return None;
        }
        return Some(GateOutcome {
            phrase_hits,
            default_hits: Some(hits),
        });
    }

    if !query.required_terms.iter().all(|t| posting.contains_term(t)) {
        return None;
    }

    if let Some(prefix) = &query.prefix {
        if !prefix_satisfied(posting, prefix, expansions) {
            return None;
        }
    }

    Some(GateOutcome {
        phrase_hits,
        default_hits: None,
    })
}
