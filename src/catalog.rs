// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The published index and its lifecycle.
//!
//! Queries read an `Arc<PlaceIndex>` snapshot and never block on a rebuild:
//! a refresh builds the new index off to the side and swaps the pointer in a
//! single write. Readers holding the old snapshot finish against it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::binary::{read_index, write_index};
use crate::build::{index_dataset, BuildReport};
use crate::error::DataSourceError;
use crate::index::PlaceIndex;
use crate::source::DatasetSource;

/// How the current snapshot came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    /// Built from a fresh fetch.
    Fetched(BuildReport),
    /// Fetch failed; loaded from the persisted artifact.
    Artifact,
}

/// Holder of the published index.
#[derive(Debug)]
pub struct PlaceCatalog {
    current: RwLock<Arc<PlaceIndex>>,
    index_dir: PathBuf,
}

impl PlaceCatalog {
    pub fn new(index: PlaceIndex, index_dir: impl Into<PathBuf>) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
            index_dir: index_dir.into(),
        }
    }

    /// The index queries should run against right now.
    pub fn snapshot(&self) -> Arc<PlaceIndex> {
        Arc::clone(&self.current.read())
    }

    /// Replace the published index.
    pub fn publish(&self, index: PlaceIndex) {
        let index = Arc::new(index);
        *self.current.write() = index;
    }

    pub fn index_dir(&self) -> &Path {
        &self.index_dir
    }

    /// Startup: fetch, build and persist; fall back to the artifact on disk
    /// when the fetch fails or yields nothing usable.
    pub async fn load(
        source: &dyn DatasetSource,
        index_dir: impl Into<PathBuf>,
    ) -> Result<(Self, LoadOrigin), DataSourceError> {
        let index_dir = index_dir.into();
        match fetch_and_build(source, &index_dir).await {
            Ok((index, report)) => Ok((Self::new(index, index_dir), LoadOrigin::Fetched(report))),
            Err(fetch_error) => {
                tracing::warn!(
                    source = %source.describe(),
                    error = %fetch_error,
                    "dataset unavailable, trying persisted index"
                );
                match read_index(&index_dir) {
                    Ok(index) if !index.is_empty() => {
                        tracing::info!(
                            dir = %index_dir.display(),
                            places = index.len(),
                            "loaded persisted index"
                        );
                        Ok((Self::new(index, index_dir), LoadOrigin::Artifact))
                    }
                    Ok(_) => Err(fetch_error),
                    Err(artifact_error) => {
                        tracing::error!(
                            dir = %index_dir.display(),
                            error = %artifact_error,
                            "no usable persisted index"
                        );
                        Err(fetch_error)
                    }
                }
            }
        }
    }

    /// Rebuild from the source and publish. On failure the current snapshot
    /// stays published.
    pub async fn refresh(&self, source: &dyn DatasetSource) -> Result<BuildReport, DataSourceError> {
        match fetch_and_build(source, &self.index_dir).await {
            Ok((index, report)) => {
                self.publish(index);
                tracing::info!(indexed = report.indexed, skipped = report.skipped, "index refreshed");
                Ok(report)
            }
            Err(e) => {
                tracing::warn!(error = %e, "refresh failed, keeping current index");
                Err(e)
            }
        }
    }
}

async fn fetch_and_build(
    source: &dyn DatasetSource,
    index_dir: &Path,
) -> Result<(PlaceIndex, BuildReport), DataSourceError> {
    tracing::info!(source = %source.describe(), "loading dataset");
    let collection = source.fetch().await?;
    let index_dir = index_dir.to_path_buf();
    // Analysis runs on rayon and persisting is blocking file IO
    tokio::task::spawn_blocking(move || {
        let (index, report) = index_dataset(collection)?;
        // The service can run without a persisted copy; it just loses the fallback
        if let Err(e) = write_index(&index_dir, &index) {
            tracing::warn!(dir = %index_dir.display(), error = %e, "failed to persist index");
        }
        Ok::<_, DataSourceError>((index, report))
    })
    .await?
}
