// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a hymn index.
//!
//! | Rust Type      | Purpose                                         |
//! |----------------|-------------------------------------------------|
//! | `Hymn`         | Input record, never mutated                     |
//! | `Field`        | The six weighted fields                         |
//! | `Posting`      | Per-hymn term counts and phrase text            |
//! | `SearchResult` | A scored hit pointing back into the hymn slice  |
//!
//! # Invariants
//!
//! - **HymnIndex**: `postings.len() == doc_count`, and `postings[i]` was built
//!   from `hymns[i]`. Results carry that position as `doc_id`.
//! - **Posting**: `terms` is exactly the union of the keys of `field_terms`.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// One hymn record, as supplied by the caller.
///
/// Every field is optional in JSON and defaults to empty. Empty fields simply
/// contribute nothing to the index. Loaders reject duplicate ids, so a missing
/// `id` is tolerated once per file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hymn {
    pub id: String,
    /// Numeric label in string form ("123"). Non-numeric labels are allowed
    /// and sort after numeric ones.
    pub number: Option<String>,
    pub title: String,
    pub lyrics: String,
    pub author: String,
    pub tune: String,
    pub scripture: String,
    pub meter: String,
    pub topics: Vec<String>,
}

impl Hymn {
    /// Text of a weighted field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Lyrics => &self.lyrics,
            Field::Author => &self.author,
            Field::Tune => &self.tune,
            Field::Scripture => &self.scripture,
            Field::Meter => &self.meter,
        }
    }

    /// The numeric label parsed as an integer, if it is one.
    ///
    /// Used only for ordering; lookups compare the string form.
    pub fn numeric_label(&self) -> Option<u64> {
        let label = self.number.as_deref()?.trim();
        if label.is_empty() || !label.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        label.parse().ok()
    }
}

/// The weighted fields of a hymn. Topics are carried on [`Hymn`] but not indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Lyrics,
    Author,
    Tune,
    Scripture,
    Meter,
}

impl Field {
    /// All weighted fields, in index order.
    pub const ALL: [Field; 6] = [
        Field::Title,
        Field::Lyrics,
        Field::Author,
        Field::Tune,
        Field::Scripture,
        Field::Meter,
    ];

    /// Position of this field in [`Field::ALL`].
    #[inline]
    pub fn as_index(self) -> usize {
        self as usize
    }
}

// =============================================================================
// INDEX TYPES
// =============================================================================

/// Term -> occurrence count for one field of one hymn.
pub type TermCounts = HashMap<String, u32>;

/// Everything the searcher needs to know about one hymn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Posting {
    /// Title after phrase normalization, for substring checks.
    pub title_text: String,
    /// Lyrics after phrase normalization, for substring checks.
    pub lyrics_text: String,
    /// Per-field term counts, indexed by [`Field::as_index`].
    pub field_terms: [TermCounts; 6],
    /// Union of all terms in all fields.
    pub terms: HashSet<String>,
    /// Normalized numeric label, empty when the hymn has none.
    pub number: String,
}

impl Posting {
    /// Occurrences of `term` in `field`.
    #[inline]
    pub fn term_frequency(&self, term: &str, field: Field) -> u32 {
        self.field_terms[field.as_index()]
            .get(term)
            .copied()
            .unwrap_or(0)
    }

    /// Does the hymn contain `term` in any field?
    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Does the phrase occur in the title, in the lyrics, or in both?
    pub fn phrase_hits(&self, phrase: &str) -> PhraseHits {
        PhraseHits {
            title: self.title_text.contains(phrase),
            lyrics: self.lyrics_text.contains(phrase),
        }
    }
}

/// Where a phrase was found within one hymn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhraseHits {
    pub title: bool,
    pub lyrics: bool,
}

impl PhraseHits {
    #[inline]
    pub fn any(self) -> bool {
        self.title || self.lyrics
    }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// A ranked hit. `doc_id` is the hymn's position in the slice that was indexed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub doc_id: usize,
    pub score: f64,
}
