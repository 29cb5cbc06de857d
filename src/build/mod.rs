// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Getting hymnals off disk and into a [`Catalog`].
//!
//! A hymnal file is JSON, either a bare array of hymns or an object with a
//! `hymns` array (plus anything else, which is ignored):
//!
//! ```json
//! [{ "id": "h1", "number": "1", "title": "Amazing Grace", "lyrics": "..." }]
//! { "version": 1, "hymns": [{ "id": "h1", "title": "Amazing Grace" }] }
//! ```
//!
//! Hymns are expected to already be flattened into the [`Hymn`] shape.

mod error;

pub use error::LoadError;

use crate::scoring::ScoringConfig;
use crate::snapshot::Catalog;
use crate::types::Hymn;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum HymnalFile {
    /// A bare array of hymns
    Bare(Vec<Hymn>),
    /// An object wrapping the array
    Wrapped { hymns: Vec<Hymn> },
}

impl From<HymnalFile> for Vec<Hymn> {
    fn from(file: HymnalFile) -> Self {
        match file {
            HymnalFile::Bare(hymns) | HymnalFile::Wrapped { hymns } => hymns,
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reject collections where two hymns share an id.
pub fn check_unique_ids(hymns: &[Hymn]) -> Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(hymns.len());
    for hymn in hymns {
        if !seen.insert(hymn.id.as_str()) {
            return Err(LoadError::DuplicateId { id: hymn.id.clone() });
        }
    }
    Ok(())
}

/// Load hymns from a JSON file, preserving file order.
pub fn load_hymns(path: impl AsRef<Path>) -> Result<Vec<Hymn>, LoadError> {
    let path = path.as_ref();
    let hymns: Vec<Hymn> = read_json::<HymnalFile>(path)?.into();
    check_unique_ids(&hymns)?;
    tracing::debug!(path = %path.display(), hymns = hymns.len(), "loaded hymnal");
    Ok(hymns)
}

/// Load a scoring config. Keys left out keep their defaults.
pub fn load_scoring_config(path: impl AsRef<Path>) -> Result<ScoringConfig, LoadError> {
    read_json(path.as_ref())
}

/// Load hymns and index them.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
    Ok(Catalog::new(load_hymns(path)?))
}
