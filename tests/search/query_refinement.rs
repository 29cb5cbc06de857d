//! Typing one character at a time.
//!
//! The browser reruns the query on every keystroke, so a single word is a
//! prefix still being typed. Extending it should only ever narrow the results.

use crate::common::{fixture, fixture_ids, hymns_from_lyrics, ids};
use hymnal::{build_index, search, search_scored, ScoringConfig};
use std::collections::HashSet;

fn id_set(query: &str) -> HashSet<String> {
    fixture_ids(query).into_iter().collect()
}

#[test]
fn test_prefix_matches_longer_words() {
    assert_eq!(
        fixture_ids("gra"),
        vec![
            "gracious-spirit",
            "grace-greater",
            "amazing-grace",
            "graceful-hands",
            "scattered-stanzas",
        ]
    );
}

#[test]
fn test_extending_prefix_narrows_results() {
    let steps = ["gr", "gra", "grac", "grace", "gracef", "graceful"];
    for pair in steps.windows(2) {
        let wider = id_set(pair[0]);
        let narrower = id_set(pair[1]);
        assert!(
            narrower.is_subset(&wider),
            "{:?} found hymns that {:?} did not",
            pair[1],
            pair[0]
        );
    }
}

#[test]
fn test_incremental_typing_settles_on_target() {
    assert_eq!(fixture_ids("mor")[0], "morning-has-broken");
    assert_eq!(fixture_ids("morn")[0], "morning-has-broken");
    assert_eq!(fixture_ids("morning")[0], "morning-has-broken");
}

#[test]
fn test_prefix_scores_best_expansion_not_sum() {
    let (hymns, index) = fixture();
    let config = ScoringConfig::default();

    // "gra" expands to grace, graceful and gracious. Hymn 5 only has "grace",
    // so its prefix score equals its score for the full word.
    let prefix = search_scored(&index, &hymns, "gra", &config);
    let full = search_scored(&index, &hymns, "grace", &config);
    let score_of = |results: &[hymnal::SearchResult], id: &str| {
        results
            .iter()
            .find(|r| hymns[r.doc_id].id == id)
            .map(|r| r.score)
    };
    assert_eq!(score_of(&prefix, "grace-greater"), score_of(&full, "grace-greater"));
}

#[test]
fn test_prefix_with_no_expansion_needs_exact_token() {
    assert!(fixture_ids("zz").is_empty());
}

#[test]
fn test_expansion_cap_limits_reach() {
    // Thirty hymns, one "gaNN" term each
    let lyrics: Vec<String> = (0..30).map(|i| format!("ga{i:02}")).collect();
    let refs: Vec<&str> = lyrics.iter().map(String::as_str).collect();
    let hymns = hymns_from_lyrics(&refs);
    let index = build_index(&hymns);

    let mut config = ScoringConfig::default();
    config.max_prefix_expansions = 10;
    let capped = hymnal::search_with(&index, &hymns, "ga", &config);
    assert_eq!(capped.len(), 10);
    assert_eq!(ids(&capped)[0], "0");

    let uncapped = search(&index, &hymns, "ga");
    assert_eq!(uncapped.len(), 30);
}
