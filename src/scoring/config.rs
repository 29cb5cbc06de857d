// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunable scoring parameters.
//!
//! The defaults are the shipped ranking. A JSON file may override any subset:
//!
//! ```json
//! { "weights": { "title": 5.0 }, "numberBonus": 500.0 }
//! ```
//!
//! Setting a weight to zero is allowed but can silently drop hymns that only
//! matched through that field, since zero-score hits are excluded.

use super::core::{
    DEFAULT_MAX_PREFIX_EXPANSIONS, LYRICS_PHRASE_BONUS, NUMBER_MATCH_BONUS, TITLE_PHRASE_BONUS,
};
use crate::types::Field;
use serde::{Deserialize, Serialize};

/// Per-field multipliers for tf-idf.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub title: f64,
    pub lyrics: f64,
    pub author: f64,
    pub tune: f64,
    pub scripture: f64,
    pub meter: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: 3.5,
            lyrics: 1.0,
            author: 1.4,
            tune: 1.4,
            scripture: 0.8,
            meter: 0.6,
        }
    }
}

impl FieldWeights {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Title => self.title,
            Field::Lyrics => self.lyrics,
            Field::Author => self.author,
            Field::Tune => self.tune,
            Field::Scripture => self.scripture,
            Field::Meter => self.meter,
        }
    }
}

/// Everything the scorer can be told.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringConfig {
    pub weights: FieldWeights,
    /// Added per phrase found in the title.
    pub title_phrase_bonus: f64,
    /// Added per phrase found in the lyrics.
    pub lyrics_phrase_bonus: f64,
    /// Added when the query mentions the hymn's number as a bare token.
    pub number_bonus: f64,
    /// Upper bound on vocabulary terms a trailing prefix expands to.
    pub max_prefix_expansions: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: FieldWeights::default(),
            title_phrase_bonus: TITLE_PHRASE_BONUS,
            lyrics_phrase_bonus: LYRICS_PHRASE_BONUS,
            number_bonus: NUMBER_MATCH_BONUS,
            max_prefix_expansions: DEFAULT_MAX_PREFIX_EXPANSIONS,
        }
    }
}
