// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Campus place search: prefix, fuzzy and building-code matching over a small
//! bilingual place dataset.
//!
//! A search box sends whatever the user has typed so far. Every keystroke
//! turns into one OR query of field-level clauses, evaluated against an
//! in-memory index of places, and the best-scoring places come back with
//! their coordinates.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   source    │────▶│    build     │────▶│   binary    │
//! │ (GeoJSON    │     │ (Feature →   │     │ (places.locx│
//! │  dataset)   │     │  PlaceIndex) │     │  artifact)  │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │
//!                            ▼
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   query     │────▶│   search     │◀────│   catalog   │
//! │ (8 clauses) │     │ (scoring,    │     │ (published  │
//! │             │     │  ranking)    │     │  snapshot)  │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌──────────────┐     ┌─────────────┐
//!                     │   server     │────▶│   routing   │
//!                     │ (/matches,   │     │ (directions │
//!                     │  /health)    │     │  proxy)     │
//!                     └──────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! | Module      | Role                                                  |
//! |-------------|-------------------------------------------------------|
//! | `types`     | `Place`, `Center`, `PlaceField`, `MatchResult`        |
//! | `util`      | Analyzer: normalization and tokenization              |
//! | `fuzzy`     | Bounded Levenshtein distance                          |
//! | `index`     | Per-field sorted vocabularies with postings           |
//! | `build`     | GeoJSON features to places, skip-and-log builder      |
//! | `query`     | Query composer                                        |
//! | `scoring`   | Clause scores and result ordering                     |
//! | `search`    | Clause evaluation and accumulation                    |
//! | `binary`    | Persisted index artifact                              |
//! | `catalog`   | Published snapshot, startup load, refresh             |
//! | `source`    | Dataset sources (Mapbox, file)                        |
//! | `routing`   | Walking directions pass-through                       |
//! | `server`    | axum HTTP service                                     |
//!
//! # Usage
//!
//! ```
//! use locus::{build_index, compose, search, Center, Place};
//!
//! let index = build_index(vec![
//!     Place::new("Library", "ספרייה", Some("A1"), Center(34.80, 32.11)),
//!     Place::new("Main Hall", "אולם ראשי", Some("M1"), Center(34.81, 32.10)),
//! ]);
//!
//! let results = search(&index, &compose("libary"));
//! assert_eq!(results[0].place_name, "Library");
//! ```

pub mod binary;
pub mod build;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fuzzy;
mod http;
pub mod index;
pub mod query;
pub mod routing;
pub mod scoring;
pub mod search;
pub mod server;
pub mod source;
pub mod testing;
pub mod types;
pub mod util;

pub use build::{build_index, index_dataset, BuildReport, IndexBuilder};
pub use catalog::PlaceCatalog;
pub use error::{
    ConfigError, DataSourceError, IndexFileError, MalformedRecordError, RoutingError,
    StartupError,
};
pub use fuzzy::levenshtein_within;
pub use index::PlaceIndex;
pub use query::{compose, Clause, CombinedQuery, ComposedQuery, QueryComposer, QueryPolicy};
pub use search::{search, ScoredMatch, SearchOptions, Searcher};
pub use types::{Center, MatchResult, Place, PlaceField};
pub use util::normalize;
