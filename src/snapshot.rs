// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Swapping in a new index without tearing searches in flight.
//!
//! An index is tied to one collection. When the collection changes the old
//! index is thrown away, never patched. [`Catalog`] does the swap: the new
//! index is built completely outside the lock, then a single write replaces
//! the `Arc`. Anyone who already called [`Catalog::snapshot`] keeps searching
//! the old hymns and the old index until they drop their handle.
//!
//! ```ignore
//! let catalog = Catalog::new(hymns);
//! let snap = catalog.snapshot();
//! catalog.replace(new_hymns);          // snap still sees the old collection
//! let hits = snap.search("amazing grace");
//! ```

use crate::index::{build_index, HymnIndex};
use crate::scoring::ScoringConfig;
use crate::search::{search_scored, search_with};
use crate::types::{Hymn, SearchResult};
use parking_lot::RwLock;
use std::sync::Arc;

/// A hymn collection together with the index built from it.
#[derive(Debug, Default)]
pub struct Snapshot {
    hymns: Vec<Hymn>,
    index: HymnIndex,
    generation: u64,
}

impl Snapshot {
    fn build(hymns: Vec<Hymn>, generation: u64) -> Self {
        let index = build_index(&hymns);
        Self {
            hymns,
            index,
            generation,
        }
    }

    pub fn hymns(&self) -> &[Hymn] {
        &self.hymns
    }

    pub fn index(&self) -> &HymnIndex {
        &self.index
    }

    /// Increments on every [`Catalog::replace`]. Starts at 0.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn search(&self, query: &str) -> Vec<&Hymn> {
        self.search_with(query, &ScoringConfig::default())
    }

    pub fn search_with(&self, query: &str, config: &ScoringConfig) -> Vec<&Hymn> {
        search_with(&self.index, &self.hymns, query, config)
    }

    pub fn search_scored(&self, query: &str, config: &ScoringConfig) -> Vec<SearchResult> {
        search_scored(&self.index, &self.hymns, query, config)
    }
}

/// The current snapshot, replaceable as a whole.
#[derive(Debug, Default)]
pub struct Catalog {
    current: RwLock<Arc<Snapshot>>,
}

impl Catalog {
    pub fn new(hymns: Vec<Hymn>) -> Self {
        Self {
            current: RwLock::new(Arc::new(Snapshot::build(hymns, 0))),
        }
    }

    /// A consistent view of the collection, valid for as long as you hold it.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current.read())
    }

    /// Rebuild from a new collection and make it current.
    ///
    /// Returns the new generation number.
    pub fn replace(&self, hymns: Vec<Hymn>) -> u64 {
        // Build before taking the lock; readers never wait on indexing.
        let mut next = Snapshot::build(hymns, 0);

        let mut current = self.current.write();
        next.generation = current.generation + 1;
        let generation = next.generation;
        let docs = next.hymns.len();
        *current = Arc::new(next);
        drop(current);

        tracing::debug!(generation, docs, "catalog replaced");
        generation
    }
}
