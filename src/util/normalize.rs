// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization for accent-insensitive search.
//!
//! Two passes live here. [`normalize`] is the general one: everything that gets
//! compared (index terms, stored field text, queries) goes through it so that
//! "Café" and "cafe" are the same string. [`normalize_phrase`] is stricter and
//! only keeps letters, digits and spaces. Phrase containment runs on it, on
//! both sides of the check, so punctuation in lyrics can't break a match.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: lowercase, strip diacritics, and collapse whitespace.
///
/// This enables matching between ASCII and accented versions:
/// - "café" → "cafe"
/// - "Jesú, Joy" → "jesu, joy"
/// - "naïve" → "naive"
///
/// # Algorithm
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
/// 4. Collapse whitespace and trim
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stricter normalization used for phrase containment.
///
/// Runs [`normalize`], then removes every character that is neither
/// alphanumeric nor whitespace, then collapses whitespace again. Removal (not
/// replacement) means "o'er" becomes "oer" and "grace!" becomes "grace".
pub fn normalize_phrase(value: &str) -> String {
    normalize(value)
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
