//! Shared test utilities and fixtures.

#![allow(dead_code)]

use hymnal::{build_index, load_hymns, Hymn, HymnIndex};
use std::sync::LazyLock;

// Re-export canonical test utilities from hymnal::testing
pub use hymnal::testing::{make_hymn, make_numbered_hymn, sample_hymnal};

/// The fixture hymnal checked into the repository.
pub const FIXTURE_HYMNAL: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/hymns.json");

/// Fixture hymns, loaded once per test binary.
static FIXTURE_HYMNS: LazyLock<Vec<Hymn>> =
    LazyLock::new(|| load_hymns(FIXTURE_HYMNAL).expect("Failed to load fixture hymnal"));

/// Fixture hymns and their index.
pub fn fixture() -> (Vec<Hymn>, HymnIndex) {
    let hymns = FIXTURE_HYMNS.clone();
    let index = build_index(&hymns);
    (hymns, index)
}

/// Sample hymnal and its index.
pub fn sample() -> (Vec<Hymn>, HymnIndex) {
    let hymns = sample_hymnal();
    let index = build_index(&hymns);
    (hymns, index)
}

/// Build hymns with only lyrics from plain strings, ids "0", "1", ...
pub fn hymns_from_lyrics(lyrics: &[&str]) -> Vec<Hymn> {
    lyrics
        .iter()
        .enumerate()
        .map(|(i, text)| make_hymn(&i.to_string(), "", text))
        .collect()
}

/// Ids of a result list, in rank order.
pub fn ids<'a>(results: &[&'a Hymn]) -> Vec<&'a str> {
    results.iter().map(|h| h.id.as_str()).collect()
}

/// Search the fixture hymnal and return ids.
pub fn fixture_ids(query: &str) -> Vec<String> {
    let (hymns, index) = fixture();
    hymnal::search(&index, &hymns, query)
        .into_iter()
        .map(|h| h.id.clone())
        .collect()
}

/// Assert that no hymn appears twice in a result list.
pub fn assert_no_duplicates(results: &[&Hymn]) {
    let mut seen = std::collections::HashSet::new();
    for hymn in results {
        assert!(seen.insert(hymn.id.as_str()), "Duplicate result: {}", hymn.id);
    }
}

/// Create a temporary directory for test outputs.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().expect("Failed to create temp directory")
}

/// Write `contents` to `name` inside a fresh temp directory.
///
/// Returns the TempDir (to keep it alive) and the file path.
pub fn write_temp_file(name: &str, contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = create_temp_dir();
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write temp file");
    (dir, path)
}
