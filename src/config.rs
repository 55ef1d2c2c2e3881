// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Service configuration, from flags or environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Args;

use crate::error::ConfigError;
use crate::source::DEFAULT_MAPBOX_BASE_URL;

/// Dataset owner the campus features are published under.
pub const DEFAULT_DATASET_OWNER: &str = "unavigate";

/// Dataset holding the campus features.
pub const DEFAULT_DATASET_ID: &str = "cliebrq8v1xck2no5fwlyphfa";

/// Settings for `locus serve`.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Listen address
    #[arg(long, default_value = "127.0.0.1:3080", env = "LOCUS_LISTEN")]
    pub listen: SocketAddr,

    /// Directory holding the persisted index
    #[arg(long, default_value = "./places-index", env = "LOCUS_INDEX_DIR")]
    pub index_dir: PathBuf,

    /// Mapbox access token (datasets and directions)
    #[arg(long, env = "MAPBOX_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Owner of the Mapbox dataset
    #[arg(long, default_value = DEFAULT_DATASET_OWNER, env = "LOCUS_DATASET_OWNER")]
    pub dataset_owner: String,

    /// Mapbox dataset ID
    #[arg(long, default_value = DEFAULT_DATASET_ID, env = "LOCUS_DATASET_ID")]
    pub dataset_id: String,

    /// Read the dataset from a local GeoJSON file instead of Mapbox
    #[arg(long, env = "LOCUS_DATASET_FILE")]
    pub dataset_file: Option<PathBuf>,

    /// Mapbox API root
    #[arg(long, default_value = DEFAULT_MAPBOX_BASE_URL, env = "LOCUS_MAPBOX_BASE_URL")]
    pub mapbox_base_url: String,

    /// Maximum results returned by /matches
    #[arg(long, default_value = "10", env = "LOCUS_RESULT_LIMIT")]
    pub result_limit: usize,

    /// Timeout for upstream requests, in seconds
    #[arg(long, default_value = "10", env = "LOCUS_UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 3080)),
            index_dir: PathBuf::from("./places-index"),
            access_token: None,
            dataset_owner: DEFAULT_DATASET_OWNER.to_string(),
            dataset_id: DEFAULT_DATASET_ID.to_string(),
            dataset_file: None,
            mapbox_base_url: DEFAULT_MAPBOX_BASE_URL.to_string(),
            result_limit: 10,
            upstream_timeout_secs: 10,
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dataset_file.is_none() && self.token().is_none() {
            return Err(ConfigError::MissingToken);
        }
        if self.upstream_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.result_limit == 0 {
            return Err(ConfigError::ZeroResultLimit);
        }
        if !(self.mapbox_base_url.starts_with("http://") || self.mapbox_base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.mapbox_base_url.clone()));
        }
        Ok(())
    }

    /// The access token, if set and non-blank.
    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.trim().is_empty())
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}
