// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field-weighted full-text search over hymn collections.
//!
//! Built for interactive browsing: the query is re-run on every keystroke, so
//! multi-word input must match as a contiguous phrase, a lone word is treated
//! as a prefix still being typed, and a bare number jumps straight to that
//! hymn.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌───────────────┐    ┌──────────────┐
//! │ util         │───▶│ index         │───▶│ search       │
//! │ (normalize)  │    │ (tokenize,    │    │ (gates,      │
//! │              │    │  build_index) │    │  search)     │
//! └──────────────┘    └───────────────┘    └──────────────┘
//!        │                                  ▲        ▲
//!        ▼                                  │        │
//! ┌──────────────┐                   ┌──────┴──┐ ┌───┴──────┐
//! │ query        │──────────────────▶│ scoring │ │ snapshot │
//! │ (parse)      │                   │         │ │ (Catalog)│
//! └──────────────┘                   └─────────┘ └──────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use hymnal::{build_index, search, Hymn};
//!
//! let hymns = vec![Hymn {
//!     id: "h1".into(),
//!     number: Some("1".into()),
//!     title: "Amazing Grace".into(),
//!     lyrics: "Amazing grace, how sweet the sound".into(),
//!     ..Hymn::default()
//! }];
//! let index = build_index(&hymns);
//!
//! assert_eq!(search(&index, &hymns, "amazing grace")[0].id, "h1");
//! assert_eq!(search(&index, &hymns, "gra")[0].id, "h1");
//! assert_eq!(search(&index, &hymns, "1")[0].id, "h1");
//! ```

pub mod build;
pub mod index;
pub mod query;
pub mod scoring;
pub mod search;
pub mod snapshot;
pub mod testing;
mod types;
pub mod util;

// Re-exports for public API
pub use build::{check_unique_ids, load_catalog, load_hymns, load_scoring_config, LoadError};
pub use index::tokenizer::{is_stop_word, tokenize};
pub use index::{build_index, HymnIndex};
pub use query::{parse_query, ParsedQuery};
pub use scoring::{FieldWeights, ScoringConfig};
pub use search::{search, search_scored, search_with};
pub use snapshot::{Catalog, Snapshot};
pub use types::{Field, Hymn, PhraseHits, Posting, SearchResult, TermCounts};
pub use util::normalize::{normalize, normalize_phrase};
