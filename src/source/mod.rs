// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where place records come from.
//!
//! A source hands back the raw GeoJSON FeatureCollection; mapping features to
//! places is the builder's job. The service fetches once at startup and again
//! on each refresh.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::DataSourceError;
use crate::http::{build_client, get_with_retry};

/// Default Mapbox API root.
pub const DEFAULT_MAPBOX_BASE_URL: &str = "https://api.mapbox.com";

/// Supplies the raw dataset.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self) -> Result<Value, DataSourceError>;

    /// Short human-readable description for logs. Must not include secrets.
    fn describe(&self) -> String;
}

/// Features of a Mapbox dataset, fetched over HTTPS.
#[derive(Debug, Clone)]
pub struct MapboxDatasetSource {
    client: reqwest::Client,
    base_url: String,
    owner: String,
    dataset_id: String,
    access_token: String,
}

impl MapboxDatasetSource {
    pub fn new(
        base_url: impl Into<String>,
        owner: impl Into<String>,
        dataset_id: impl Into<String>,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            owner: owner.into(),
            dataset_id: dataset_id.into(),
            access_token: access_token.into(),
        })
    }

    fn features_url(&self) -> String {
        format!(
            "{}/datasets/v1/{}/{}/features",
            self.base_url, self.owner, self.dataset_id
        )
    }
}

#[async_trait]
impl DatasetSource for MapboxDatasetSource {
    async fn fetch(&self) -> Result<Value, DataSourceError> {
        let url = self.features_url();
        tracing::info!(url = %url, "fetching dataset");

        let response = get_with_retry(
            &self.client,
            &url,
            &[("access_token", self.access_token.as_str())],
        )
        .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataSourceError::Status(status));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn describe(&self) -> String {
        format!("mapbox dataset {}/{}", self.owner, self.dataset_id)
    }
}

/// A FeatureCollection stored on disk.
#[derive(Debug, Clone)]
pub struct FileDatasetSource {
    path: PathBuf,
}

impl FileDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DatasetSource for FileDatasetSource {
    async fn fetch(&self) -> Result<Value, DataSourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| DataSourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
