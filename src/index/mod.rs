// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the data structure every search reads.
//!
//! An index is built once from an ordered hymn slice and never changes. When
//! the collection changes, build a new one (see [`crate::snapshot::Catalog`]).

mod builder;
pub mod tokenizer;

pub use builder::build_index;

use crate::types::Posting;
use std::collections::HashMap;

/// Immutable inverted index over one hymn collection.
#[derive(Debug, Clone, Default)]
pub struct HymnIndex {
    pub(crate) doc_count: usize,
    pub(crate) postings: Vec<Posting>,
    pub(crate) doc_freq: HashMap<String, usize>,
    /// Sorted, so every term sharing a prefix sits in one contiguous run.
    pub(crate) vocabulary: Vec<String>,
}

impl HymnIndex {
    /// Number of hymns indexed (N).
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Number of hymns containing `term` anywhere.
    pub fn doc_freq(&self, term: &str) -> usize {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    /// All distinct terms, sorted.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    pub fn posting(&self, doc_id: usize) -> Option<&Posting> {
        self.postings.get(doc_id)
    }

    /// Inverse document frequency: `ln(1 + N / (df + 1))`.
    ///
    /// The `+ 1` keeps unseen terms finite; the outer `1 +` keeps the result
    /// positive even for a term present in every hymn.
    pub fn idf(&self, term: &str) -> f64 {
        let n = self.doc_count as f64;
        let df = self.doc_freq(term) as f64;
        (1.0 + n / (df + 1.0)).ln()
    }

    /// Vocabulary terms starting with `prefix`, in lexicographic order, at most `cap`.
    ///
    /// The prefix is lowercased first; vocabulary terms are already normalized.
    /// Binary search finds the start of the run, then we walk forward until the
    /// prefix stops matching.
    pub fn expand_prefix(&self, prefix: &str, cap: usize) -> Vec<&str> {
        let prefix = prefix.to_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }

        let start = self
            .vocabulary
            .partition_point(|term| term.as_str() < prefix.as_str());

        self.vocabulary[start..]
            .iter()
            .take_while(|term| term.starts_with(&prefix))
            .take(cap)
            .map(String::as_str)
            .collect()
    }

    /// Position of the first hymn whose normalized numeric label equals `label`.
    pub fn find_number(&self, label: &str) -> Option<usize> {
        if label.is_empty() {
            return None;
        }
        self.postings.iter().position(|p| p.number == label)
    }
}
