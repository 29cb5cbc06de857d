//! Normalization and tokenization properties.

use hymnal::{is_stop_word, normalize, normalize_phrase, tokenize};
use proptest::prelude::*;

/// Words with diacritics, punctuation and mixed case.
fn messy_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "Café", "NAÏVE", "Jesú", "o'er", "Grace!", "crèche", "Noël", "  ", "\t", "\n",
            "holy,", "LORD", "tōkyō", "12", "3:16", "—", "über", "Ångström",
        ]),
        0..12,
    )
    .prop_map(|words| words.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: normalizing twice changes nothing.
    #[test]
    fn prop_normalize_idempotent(text in messy_text_strategy()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Property: phrase normalization is idempotent too.
    #[test]
    fn prop_normalize_phrase_idempotent(text in messy_text_strategy()) {
        let once = normalize_phrase(&text);
        prop_assert_eq!(normalize_phrase(&once), once);
    }

    /// Property: normalized text has no runs of whitespace and no edges.
    #[test]
    fn prop_normalize_collapses_whitespace(text in messy_text_strategy()) {
        let normalized = normalize(&text);
        prop_assert!(!normalized.contains("  "), "double space in {:?}", normalized);
        prop_assert_eq!(normalized.trim(), normalized.as_str());
    }

    /// Property: phrase text keeps only letters, digits and single spaces.
    #[test]
    fn prop_phrase_text_is_clean(text in messy_text_strategy()) {
        let phrase = normalize_phrase(&text);
        prop_assert!(
            phrase.chars().all(|c| c.is_alphanumeric() || c == ' '),
            "unexpected character in {:?}", phrase
        );
    }

    /// Property: every token is a searchable term.
    #[test]
    fn prop_tokens_are_terms(text in messy_text_strategy()) {
        for token in tokenize(&text) {
            prop_assert!(token.len() >= 2, "short token {:?}", token);
            prop_assert!(token.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
            prop_assert!(!is_stop_word(&token), "stop word {:?}", token);
        }
    }

    /// Property: tokenizing normalized text gives the same tokens.
    #[test]
    fn prop_tokenize_ignores_prior_normalization(text in messy_text_strategy()) {
        prop_assert_eq!(tokenize(&normalize(&text)), tokenize(&text));
    }
}
