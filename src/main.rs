// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use hymnal::{load_hymns, load_scoring_config, Catalog, ScoringConfig};

mod cli;
use cli::display::{self, number_label, pad_right, score_value, truncate_chars};
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hymnal=warn")),
        )
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            config,
            scores,
        } => run_search(&file, &query, limit, config.as_deref(), scores),
        Commands::Inspect { file, top } => run_inspect(&file, top),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn load_catalog(file: &Path) -> Result<Catalog> {
    let hymns = load_hymns(file).with_context(|| format!("loading hymnal {}", file.display()))?;
    eprintln!("  ✓ {} hymns from {}", hymns.len(), file.display());
    Ok(Catalog::new(hymns))
}

fn run_search(
    file: &Path,
    query: &str,
    limit: usize,
    config: Option<&Path>,
    show_scores: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => load_scoring_config(path)
            .with_context(|| format!("loading scoring config {}", path.display()))?,
        None => ScoringConfig::default(),
    };

    let catalog = load_catalog(file)?;
    let snapshot = catalog.snapshot();
    let results = snapshot.search_scored(query, &config);

    let shown = if limit == 0 { results.len() } else { results.len().min(limit) };

    display::section_top(&format!("{} of {} results for \"{}\"", shown, results.len(), query));
    for result in results.iter().take(shown) {
        let Some(hymn) = snapshot.hymns().get(result.doc_id) else {
            continue;
        };
        let mut line = format!(" {}  {}", number_label(hymn.number.as_deref()), truncate_chars(&hymn.title, 50));
        if show_scores {
            line = format!("{} {}", pad_right(&line, 62), score_value(result.score));
        }
        display::row(&line);
    }
    display::section_bot();

    Ok(())
}

fn run_inspect(file: &Path, top: usize) -> Result<()> {
    let catalog = load_catalog(file)?;
    let snapshot = catalog.snapshot();
    let index = snapshot.index();

    let mut widespread: Vec<(&str, usize)> = index
        .vocabulary()
        .iter()
        .map(|term| (term.as_str(), index.doc_freq(term)))
        .collect();
    widespread.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let numbered = snapshot.hymns().iter().filter(|h| h.numeric_label().is_some()).count();

    display::section_top("CORPUS");
    display::row(&format!(" hymns        {}", index.doc_count()));
    display::row(&format!(" numbered     {}", numbered));
    display::row(&format!(" vocabulary   {}", index.vocabulary().len()));
    display::section_bot();

    display::section_top("MOST WIDESPREAD TERMS");
    for (term, df) in widespread.iter().take(top) {
        let idf = index.idf(term);
        display::row(&format!(" {} df {:>5}   idf {:>6.3}", pad_right(term, 24), df, idf));
    }
    display::section_bot();

    Ok(())
}
