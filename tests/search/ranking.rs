//! Ranking order and tie-breaking.

use crate::common::{fixture, fixture_ids, ids, make_hymn, make_numbered_hymn};
use hymnal::{build_index, search, search_scored, ScoringConfig};

#[test]
fn test_title_outranks_lyrics() {
    let hymns = vec![
        make_hymn("lyrics", "Evening Hymn", "the shepherd keeps the flock"),
        make_hymn("title", "Shepherd of Souls", "keep us in the fold"),
    ];
    let index = build_index(&hymns);

    assert_eq!(ids(&search(&index, &hymns, "shepherd")), vec!["title", "lyrics"]);
}

#[test]
fn test_rarer_terms_weigh_more() {
    assert_eq!(
        fixture_ids("grace"),
        vec!["grace-greater", "amazing-grace", "graceful-hands", "scattered-stanzas"]
    );
}

#[test]
fn test_equal_scores_order_by_number() {
    // Same field, same term frequency; hymn 1 sorts before hymn 23a
    let (hymns, index) = fixture();
    let results = search_scored(&index, &hymns, "cm", &ScoringConfig::default());
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].score, results[1].score);
    assert_eq!(hymns[results[0].doc_id].id, "amazing-grace");
}

#[test]
fn test_equal_scores_without_numbers_order_by_title() {
    // "Psalm 150" (unnumbered) and "Psalm 23" (labelled 23a) tie; neither
    // label is numeric, so "Doxology" sorts before "The Lord's My Shepherd".
    assert_eq!(fixture_ids("psalm"), vec!["unnumbered", "psalm-twenty-three"]);
}

#[test]
fn test_equal_scores_with_same_number_order_by_title_then_position() {
    let hymns = vec![
        make_numbered_hymn("z", Some("5"), "Zion", "rejoice"),
        make_numbered_hymn("b2", Some("5"), "Bethel", "rejoice"),
        make_numbered_hymn("b1", Some("5"), "bethel", "rejoice"),
        make_numbered_hymn("one", Some("1"), "Zion", "rejoice"),
        make_numbered_hymn("none", None, "Aaron", "rejoice"),
    ];
    let index = build_index(&hymns);

    assert_eq!(
        ids(&search(&index, &hymns, "rejoice")),
        vec!["one", "b2", "b1", "z", "none"]
    );
}

#[test]
fn test_numbers_order_numerically_not_lexically() {
    let hymns = vec![
        make_numbered_hymn("ten", Some("10"), "Same", "alike"),
        make_numbered_hymn("two", Some("2"), "Same", "alike"),
    ];
    let index = build_index(&hymns);

    assert_eq!(ids(&search(&index, &hymns, "alike")), vec!["two", "ten"]);
}

#[test]
fn test_number_token_in_query_boosts_hymn() {
    let hymns = vec![
        make_numbered_hymn("a", Some("7"), "Gentle Shepherd", ""),
        make_numbered_hymn("b", Some("8"), "Shepherd Shepherd", "shepherd shepherd"),
    ];
    let index = build_index(&hymns);
    let config = ScoringConfig::default();

    // One word with an embedded number; "7" is too short to be a term
    let results = search_scored(&index, &hymns, "shepherd-7", &config);
    assert_eq!(hymns[results[0].doc_id].id, "a");
    assert!(results[0].score > config.number_bonus);
}

#[test]
fn test_scores_are_non_increasing() {
    let (hymns, index) = fixture();
    for query in ["gra", "ho", "lord", "john", "\"lord\"", "mo"] {
        let results = search_scored(&index, &hymns, query, &ScoringConfig::default());
        for pair in results.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "{query:?}: {} ranked above {}",
                pair[0].score,
                pair[1].score
            );
        }
    }
}

#[test]
fn test_custom_weights_change_order() {
    let hymns = vec![
        make_hymn("lyrics", "Evening Hymn", "shepherd"),
        make_hymn("title", "Shepherd", ""),
    ];
    let index = build_index(&hymns);

    let mut config = ScoringConfig::default();
    config.weights.title = 0.5;
    config.weights.lyrics = 2.0;

    let results = hymnal::search_with(&index, &hymns, "shepherd", &config);
    assert_eq!(ids(&results), vec!["lyrics", "title"]);
}
