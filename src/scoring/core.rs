// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind hymn ranking.
//!
//! A hymn's score is a plain sum:
//!
//! ```text
//! score = Σ phrase bonuses            (12 per title hit, 6 per lyrics hit)
//!       + Σ_t idf(t) · Σ_f w_f · √tf(t, f)
//!       + 1000 · [query mentions the hymn number]
//! ```
//!
//! The square root dampens repetition: a chorus that sings a word nine times
//! scores three times one mention, not nine. idf pulls down words that appear
//! everywhere. The number bonus is large enough that an exact number mention
//! outranks any textual match.

use super::config::ScoringConfig;
use crate::index::HymnIndex;
use crate::types::{Field, PhraseHits, Posting};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Bonus per phrase found in the title.
pub const TITLE_PHRASE_BONUS: f64 = 12.0;

/// Bonus per phrase found in the lyrics.
pub const LYRICS_PHRASE_BONUS: f64 = 6.0;

/// Flat bonus for an exact hymn-number mention.
pub const NUMBER_MATCH_BONUS: f64 = 1000.0;

/// Cap on prefix expansions. Keeps one- or two-letter prefixes cheap.
pub const DEFAULT_MAX_PREFIX_EXPANSIONS: usize = 50;

/// Bonus for one phrase. Title and lyrics hits add independently.
pub fn phrase_bonus(hits: PhraseHits, config: &ScoringConfig) -> f64 {
    let mut bonus = 0.0;
    if hits.title {
        bonus += config.title_phrase_bonus;
    }
    if hits.lyrics {
        bonus += config.lyrics_phrase_bonus;
    }
    bonus
}

/// Field-weighted, damped term frequency: `Σ_f w_f · √tf(t, f)`.
pub fn weighted_tf(posting: &Posting, term: &str, config: &ScoringConfig) -> f64 {
    Field::ALL
        .iter()
        .map(|&field| {
            let tf = posting.term_frequency(term, field);
            if tf == 0 {
                0.0
            } else {
                config.weights.get(field) * f64::from(tf).sqrt()
            }
        })
        .sum()
}

/// tf-idf contribution of one term to one hymn.
pub fn term_score(index: &HymnIndex, posting: &Posting, term: &str, config: &ScoringConfig) -> f64 {
    let tf = weighted_tf(posting, term, config);
    if tf == 0.0 {
        return 0.0;
    }
    index.idf(term) * tf
}

/// Number bonus, if any of the query's bare number tokens is this hymn's number.
pub fn number_bonus(posting: &Posting, number_tokens: &[String], config: &ScoringConfig) -> f64 {
    if !posting.number.is_empty() && number_tokens.iter().any(|t| *t == posting.number) {
        config.number_bonus
    } else {
        0.0
    }
}
