// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning what the user typed into something the searcher can check.
//!
//! Queries arrive on every keystroke, half-typed and sometimes with a dangling
//! quote. Nothing here fails: the worst a malformed query can do is match
//! nothing.
//!
//! # Modes
//!
//! ```text
//! raw ──▶ quoted phrases ──▶ residual ─┬─ all digits ──────────▶ number lookup
//!                                      ├─ 2+ words (cleaned) ──▶ default phrase
//!                                      └─ otherwise ───────────▶ required terms + prefix
//! ```
//!
//! Multi-word input is a phrase requirement, not a bag of words: "amazing
//! grace" must appear contiguously in the title or lyrics. Single-word input
//! treats the last token as a prefix still being typed.

use crate::index::tokenizer::tokenize;
use crate::util::normalize::{normalize, normalize_phrase};
use std::collections::HashSet;

/// A query after interpretation.
///
/// Derived per call, never stored in the index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Quoted phrases, phrase-normalized, in input order. Empty phrases are dropped.
    pub phrases: Vec<String>,
    /// Input with quoted spans removed.
    pub residual: String,
    /// Trimmed residual is one or more ASCII digits.
    pub is_number: bool,
    /// Phrase-normalized residual has at least two words.
    pub multi_word: bool,
    /// The mandatory phrase in multi-word mode.
    pub default_phrase: Option<String>,
    /// Terms that must appear verbatim (single-word mode).
    pub required_terms: Vec<String>,
    /// Trailing, possibly half-typed token (single-word mode).
    pub prefix: Option<String>,
    /// Distinct residual terms, in first-seen order. These get tf-idf scores.
    pub terms: Vec<String>,
    /// Bare digit tokens in the residual, checked against hymn numbers.
    pub number_tokens: Vec<String>,
}

impl ParsedQuery {
    /// Nothing to search for at all.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty() && self.residual.trim().is_empty()
    }

    /// The trimmed residual, when the query is a pure number.
    pub fn number(&self) -> Option<&str> {
        self.is_number.then(|| self.residual.trim())
    }
}

/// Split `raw` into quoted phrases and the residual text around them.
///
/// Quotes pair up left to right. A final unmatched quote is left in the
/// residual as an ordinary character. Each quoted span is replaced by a single
/// space so the words on either side don't fuse.
fn extract_phrases(raw: &str) -> (Vec<String>, String) {
    let mut phrases = Vec::new();
    let mut residual = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(open) = rest.find('"') {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('"') else {
            break;
        };

        residual.push_str(&rest[..open]);
        residual.push(' ');

        let phrase = normalize_phrase(&after_open[..close]);
        if !phrase.is_empty() {
            phrases.push(phrase);
        }

        rest = &after_open[close + 1..];
    }
    residual.push_str(rest);

    (phrases, residual)
}

/// Bare number tokens: maximal digit runs that stand alone as a word.
fn number_tokens(residual: &str) -> Vec<String> {
    normalize(residual)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}

fn dedup_preserving_order(tokens: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .filter(|t| seen.insert(t.as_str()))
        .cloned()
        .collect()
}

/// Interpret a raw query string.
pub fn parse_query(raw: &str) -> ParsedQuery {
    let (phrases, residual) = extract_phrases(raw);

    let trimmed = residual.trim();
    let is_number = !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit());

    let cleaned = normalize_phrase(&residual);
    let multi_word = cleaned.contains(' ');

    let tokens = tokenize(&residual);
    let terms = dedup_preserving_order(&tokens);

    let (default_phrase, required_terms, prefix) = if multi_word {
        (Some(cleaned), Vec::new(), None)
    } else {
        match tokens.split_last() {
            Some((last, init)) => (None, init.to_vec(), Some(last.clone())),
            None => (None, Vec::new(), None),
        }
    };

    let parsed = ParsedQuery {
        phrases,
        number_tokens: number_tokens(&residual),
        residual,
        is_number,
        multi_word,
        default_phrase,
        required_terms,
        prefix,
        terms,
    };

    tracing::debug!(
        phrases = parsed.phrases.len(),
        multi_word = parsed.multi_word,
        is_number = parsed.is_number,
        prefix = parsed.prefix.as_deref().unwrap_or(""),
        "parsed query"
    );

    parsed
}
