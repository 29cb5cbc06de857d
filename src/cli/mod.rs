// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the hymnal command-line interface.
//!
//! Two subcommands: `search` to query a hymnal file the way the interactive
//! browser would, and `inspect` to look at what the index made of it.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hymnal",
    about = "Field-weighted hymn search with phrase and prefix matching",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a hymnal JSON file and display ranked results
    Search {
        /// Path to a JSON array of hymns (or an object with a `hymns` array)
        file: PathBuf,

        /// Search query. Quote phrases with "..."; a bare number jumps to that hymn
        query: String,

        /// Maximum number of results to show (0 = all)
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// JSON file overriding field weights and bonuses
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the score next to each result
        #[arg(long)]
        scores: bool,
    },

    /// Print corpus statistics for a hymnal JSON file
    Inspect {
        /// Path to a JSON array of hymns (or an object with a `hymns` array)
        file: PathBuf,

        /// How many of the most widespread terms to list
        #[arg(long, default_value = "10")]
        top: usize,
    },
}
