// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy.
//!
//! Nothing here ever reaches a caller of `/matches`. Query shape is never an
//! error (every string composes to literal clauses), and dataset problems are
//! settled at startup. The types below are for the startup path,
//! the artifact on disk, and the directions proxy.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The Dataset Source could not produce anything the builder can use.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("dataset request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("dataset request returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to read dataset file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dataset has an unexpected shape: {0}")]
    Shape(String),

    #[error("dataset produced no usable records ({skipped} skipped)")]
    NoUsableRecords { skipped: usize },

    #[error("index build task failed: {0}")]
    BuildTask(#[from] tokio::task::JoinError),
}

/// A single feature that cannot become a `Place`. Recovered by skipping it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedRecordError {
    #[error("feature {position} has no usable properties.name")]
    MissingName { position: usize },

    #[error("feature {position} has no geometry")]
    MissingGeometry { position: usize },

    #[error("feature {position} coordinates are not a [lon, lat] pair")]
    InvalidCoordinates { position: usize },

    #[error("feature {position} is not an object")]
    NotAnObject { position: usize },
}

/// Reading or writing the persisted index artifact.
#[derive(Debug, Error)]
pub enum IndexFileError {
    #[error("index file I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not an index file (bad magic)")]
    BadMagic,

    #[error("unsupported index file version {0}")]
    UnsupportedVersion(u8),

    #[error("index file truncated: expected {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("index file too large: {0} bytes")]
    TooLarge(usize),

    #[error("index file checksum mismatch: stored {stored:08x}, computed {computed:08x}")]
    ChecksumMismatch { stored: u32, computed: u32 },

    #[error("index file payload is invalid: {0}")]
    Payload(#[from] serde_json::Error),
}

/// The Routing Provider call failed.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("routing request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("routing provider returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// Invalid service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a Mapbox access token is required unless --dataset-file is given")]
    MissingToken,

    #[error("upstream timeout must be at least one second")]
    ZeroTimeout,

    #[error("result limit must be at least 1")]
    ZeroResultLimit,

    #[error("invalid base URL {0:?}")]
    InvalidBaseUrl(String),
}

/// The service could not get an index to serve.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no index available: {source}")]
    NoIndex {
        #[source]
        source: DataSourceError,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
