// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matching hymns get their numbers and their order.
//!
//! Phrase hits are worth a fixed bonus, residual terms are worth tf-idf, and an
//! exact hymn-number mention is worth more than everything else combined.

pub mod config;
mod core;
pub mod ranking;

pub use self::core::*;
pub use config::{FieldWeights, ScoringConfig};
