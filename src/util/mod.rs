// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing.
//!
//! Text normalization for accent-insensitive search lives here because the
//! tokenizer, the index builder and the query interpreter all lean on it.

pub mod normalize;
