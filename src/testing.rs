// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Hymn;

/// Create a hymn with only a title and lyrics.
///
/// This is the canonical implementation used across all tests.
pub fn make_hymn(id: &str, title: &str, lyrics: &str) -> Hymn {
    Hymn {
        id: id.to_string(),
        title: title.to_string(),
        lyrics: lyrics.to_string(),
        ..Hymn::default()
    }
}

/// Create a hymn with a numeric label.
pub fn make_numbered_hymn(id: &str, number: Option<&str>, title: &str, lyrics: &str) -> Hymn {
    Hymn {
        number: number.map(str::to_string),
        ..make_hymn(id, title, lyrics)
    }
}

/// A small hymnal with every field populated, numbered 1 to 6.
pub fn sample_hymnal() -> Vec<Hymn> {
    let entry = |number: &str,
                 title: &str,
                 lyrics: &str,
                 author: &str,
                 tune: &str,
                 scripture: &str,
                 meter: &str,
                 topics: &[&str]| Hymn {
        id: format!("hymn-{number}"),
        number: Some(number.to_string()),
        title: title.to_string(),
        lyrics: lyrics.to_string(),
        author: author.to_string(),
        tune: tune.to_string(),
        scripture: scripture.to_string(),
        meter: meter.to_string(),
        topics: topics.iter().map(|t| t.to_string()).collect(),
    };

    vec![
        entry(
            "1",
            "Amazing Grace",
            "Amazing grace, how sweet the sound\nThat saved a wretch like me\nI once was lost, but now am found",
            "John Newton",
            "NEW BRITAIN",
            "Ephesians 2:8",
            "CM",
            &["grace", "salvation"],
        ),
        entry(
            "2",
            "Holy, Holy, Holy",
            "Holy, holy, holy! Lord God Almighty\nEarly in the morning our song shall rise to thee",
            "Reginald Heber",
            "NICAEA",
            "Revelation 4:8",
            "11.12.12.10",
            &["trinity", "worship"],
        ),
        entry(
            "3",
            "Be Thou My Vision",
            "Be thou my vision, O Lord of my heart\nNaught be all else to me, save that thou art",
            "Dallan Forgaill",
            "SLANE",
            "Proverbs 29:18",
            "10.10.10.10",
            &["devotion"],
        ),
        entry(
            "4",
            "Morning Has Broken",
            "Morning has broken like the first morning\nBlackbird has spoken like the first bird",
            "Eleanor Farjeon",
            "BUNESSAN",
            "Lamentations 3:22",
            "5.5.5.4.D",
            &["morning", "creation"],
        ),
        entry(
            "5",
            "Grace Greater Than Our Sin",
            "Marvelous grace of our loving Lord\nGrace that exceeds our sin and our guilt",
            "Julia H. Johnston",
            "MOODY",
            "Romans 5:20",
            "9.9.9.9 with refrain",
            &["grace"],
        ),
        entry(
            "6",
            "Jesu, Joy of Man's Desiring",
            "Jesú, joy of man's desiring\nHoly wisdom, love most bright",
            "Martin Jahn",
            "WERDE MUNTER",
            "John 15:11",
            "8.7.8.7.4.4.7.7",
            &["joy"],
        ),
    ]
}
