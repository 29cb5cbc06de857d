//! Phrase matching: explicit quotes and the implicit multi-word phrase.

use crate::common::{fixture, fixture_ids, hymns_from_lyrics, ids};
use hymnal::{build_index, search, search_scored, ScoringConfig};

#[test]
fn test_multi_word_keeps_stop_words_in_phrase() {
    assert_eq!(fixture_ids("morning has broken"), vec!["morning-has-broken"]);
    // Without "has" the words are not adjacent anywhere
    assert!(fixture_ids("morning broken").is_empty());
}

#[test]
fn test_multi_word_order_matters() {
    assert!(fixture_ids("broken morning").is_empty());
    assert!(fixture_ids("lord hol").is_empty());
}

#[test]
fn test_multi_word_partial_last_word() {
    // The phrase is a substring check, so a half-typed last word still matches
    assert_eq!(fixture_ids("holy lor"), vec!["holy-holy-holy"]);
}

#[test]
fn test_multi_word_made_of_stop_words_still_matches() {
    // "o" is a stop word, but the phrase "o love" is literal text
    assert_eq!(fixture_ids("o love"), vec!["scattered-stanzas"]);
    assert_eq!(fixture_ids("thy grace"), vec!["scattered-stanzas"]);
}

#[test]
fn test_punctuation_inside_text_does_not_break_phrase() {
    // Lyrics read "The Lord's my shepherd"
    assert_eq!(fixture_ids("lords my"), vec!["psalm-twenty-three"]);
}

#[test]
fn test_quoted_phrase_is_required() {
    assert_eq!(fixture_ids("\"holy holy\""), vec!["holy-holy-holy"]);
    assert_eq!(fixture_ids("\"praise\" morning"), vec!["morning-has-broken"]);
}

#[test]
fn test_quoted_phrase_alongside_prefix() {
    // The quoted phrase narrows to hymns containing "grace"; the prefix is then scored
    assert_eq!(
        fixture_ids("\"grace\" gra"),
        vec!["grace-greater", "amazing-grace", "graceful-hands", "scattered-stanzas"]
    );
}

#[test]
fn test_multiple_quoted_phrases_all_required() {
    let hymns = hymns_from_lyrics(&[
        "abide with me fast falls the eventide",
        "abide with me",
        "fast falls the eventide",
    ]);
    let index = build_index(&hymns);

    assert_eq!(
        ids(&search(&index, &hymns, "\"abide with\" \"the eventide\"")),
        vec!["0"]
    );
}

#[test]
fn test_quoted_phrase_bonus_counts_each_field() {
    let (hymns, index) = fixture();
    let config = ScoringConfig::default();

    let results = search_scored(&index, &hymns, "\"morning has broken\"", &config);
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].score,
        config.title_phrase_bonus + config.lyrics_phrase_bonus
    );
}

#[test]
fn test_quoted_phrase_matches_inside_words() {
    let (hymns, index) = fixture();
    let config = ScoringConfig::default();

    // "lord" is inside "lords" in the title of hymn 23a
    let results = search_scored(&index, &hymns, "\"lord\"", &config);
    let top = &hymns[results[0].doc_id];
    assert_eq!(top.id, "psalm-twenty-three");
    assert_eq!(
        results[0].score,
        config.title_phrase_bonus + config.lyrics_phrase_bonus
    );
}
