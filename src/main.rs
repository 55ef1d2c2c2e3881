// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use locus::binary::{inspect_index, read_index, write_index};
use locus::build::index_dataset;
use locus::query::{ComposedQuery, QueryComposer};
use locus::search::{SearchOptions, Searcher};

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

const DEFAULT_LOG_FILTER: &str = "locus=info,tower_http=info";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(config) => locus::server::run(config).await.map_err(|e| e.to_string()),
        Commands::Index { input, output } => run_index(&input, &output),
        Commands::Inspect { dir } => run_inspect(&dir),
        Commands::Search {
            dir,
            query,
            limit,
            explain,
        } => run_search(&dir, &query, limit, explain),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", styled(&[BOLD, RED], "error:"), e);
            ExitCode::FAILURE
        }
    }
}

fn run_index(input: &Path, output: &Path) -> Result<(), String> {
    let start = Instant::now();
    let bytes = fs::read(input).map_err(|e| format!("failed to read {}: {}", input.display(), e))?;
    let collection = serde_json::from_slice(&bytes)
        .map_err(|e| format!("{} is not valid JSON: {}", input.display(), e))?;
    let (index, report) = index_dataset(collection).map_err(|e| e.to_string())?;
    let path = write_index(output, &index).map_err(|e| e.to_string())?;
    let elapsed = start.elapsed();

    section_top("INDEX");
    field("input", &input.display().to_string());
    field("output", &path.display().to_string());
    field("places", &index.len().to_string());
    field(
        "skipped",
        &format!("{} {}", report.skipped, status(report.skipped == 0)),
    );
    field("terms", &index.term_count().to_string());
    field("elapsed", &timing_us(elapsed.as_secs_f64() * 1_000_000.0));
    section_bot();
    if report.skipped > 0 {
        hint("malformed features were skipped; run with RUST_LOG=locus=warn for details");
    }
    Ok(())
}

fn run_inspect(dir: &Path) -> Result<(), String> {
    let info = inspect_index(dir).map_err(|e| e.to_string())?;

    section_top("HEADER");
    field("file", &info.path.display().to_string());
    field("size", &format_size(info.file_len));
    field("version", &info.header.version.to_string());
    field("places", &info.header.place_count.to_string());
    field("payload", &format_size(info.header.payload_len as usize));
    section_top("VOCABULARY");
    field("place_name", &info.name_terms.to_string());
    field("place_he_name", &info.he_name_terms.to_string());
    field("place_building", &info.building_terms.to_string());
    section_top("FOOTER");
    field("crc32", &format!("{:08x} {}", info.crc32, status(true)));
    section_bot();
    Ok(())
}

fn run_search(dir: &Path, query: &str, limit: usize, explain: bool) -> Result<(), String> {
    let index = read_index(dir).map_err(|e| e.to_string())?;
    let composer = QueryComposer::default();

    let start = Instant::now();
    let composed = composer.compose(query);
    let searcher = Searcher::new(&index);
    let hits = searcher.search_scored(&composed, SearchOptions::limit(limit));
    let elapsed = start.elapsed();

    if explain {
        section_top("CLAUSES");
        match &composed {
            ComposedQuery::Empty => row(" (empty query)"),
            ComposedQuery::Combined(combined) => {
                for clause in combined.clauses() {
                    row(&format!(" {}", clause));
                }
            }
        }
        section_bot();
    }

    section_top(&format!("RESULTS for \"{}\"", query));
    if hits.is_empty() {
        row(&styled(&[DIM], " no matches"));
    }
    for hit in &hits {
        let Some(place) = index.place(hit.doc_id) else {
            continue;
        };
        let name = if place.place_he_name.is_empty() {
            place.place_name.clone()
        } else {
            format!("{} / {}", place.place_name, place.place_he_name)
        };
        row(&format!(
            " {} {} {}",
            score_value(hit.score),
            pad_right(&building_badge(place.place_building.as_deref()), 6),
            name
        ));
    }
    section_bot();
    hint(&format!(
        "{} of {} places in {}",
        hits.len(),
        index.len(),
        timing_us(elapsed.as_secs_f64() * 1_000_000.0)
    ));
    Ok(())
}
