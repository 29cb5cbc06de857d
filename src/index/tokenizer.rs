// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Splitting normalized text into index terms.
//!
//! A term is a maximal run of ASCII letters and digits, at least two characters
//! long, that isn't a stop word. Order and duplicates are preserved because the
//! index builder counts occurrences.

use crate::util::normalize::normalize;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Minimum term length in bytes. Single letters carry no signal.
pub const MIN_TERM_LEN: usize = 2;

/// Stop words loaded from data/stop_words.json.
///
/// Two groups: English function words, and liturgical interjections ("amen",
/// "hallelujah", "oh") that appear in nearly every hymn and so can't tell one
/// hymn from another. Both groups are flattened into one set.
static STOP_WORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    let json_str = include_str!("../../data/stop_words.json");
    parse_stop_words_json(json_str)
});

#[derive(Deserialize)]
#[serde(transparent)]
struct StopWordGroups(HashMap<String, Vec<String>>);

/// Parse stop words from JSON, flattening all groups into a single set.
/// Words are normalized the same way input text is.
fn parse_stop_words_json(json_str: &str) -> HashSet<String> {
    let groups: StopWordGroups = match serde_json::from_str(json_str) {
        Ok(groups) => groups,
        Err(e) => {
            tracing::warn!(error = %e, "stop word table is malformed; indexing without stop words");
            return HashSet::new();
        }
    };

    groups
        .0
        .into_values()
        .flatten()
        .map(|word| normalize(&word))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Check if a (normalized) word is a stop word.
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Tokenize text into index terms.
///
/// Normalizes first, so "Café" and "cafe" produce the same term. Non-ASCII
/// letters that survive diacritic folding act as separators.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| word.len() >= MIN_TERM_LEN && !is_stop_word(word))
        .map(str::to_string)
        .collect()
}
