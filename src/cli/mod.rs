// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the locus command-line interface.
//!
//! Four subcommands: `serve` runs the HTTP service, `index` builds the
//! persisted index offline from a GeoJSON file, `inspect` examines an index
//! directory, and `search` queries it from the terminal.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use locus::config::ServiceConfig;

#[derive(Parser)]
#[command(
    name = "locus",
    about = "Campus place search with prefix, fuzzy and building-code matching",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the index and serve /matches, /directions and /health
    Serve(ServiceConfig),

    /// Build an index directory from a GeoJSON FeatureCollection
    Index {
        /// GeoJSON file with one Feature per place
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for the index
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Inspect an index directory
    Inspect {
        /// Directory containing places.locx
        dir: PathBuf,
    },

    /// Search an index directory and display ranked results
    Search {
        /// Directory containing places.locx
        dir: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print the composed clauses before the results
        #[arg(long)]
        explain: bool,
    },
}
