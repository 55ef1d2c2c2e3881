// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index building: dataset features in, a searchable `PlaceIndex` out.
//!
//! Malformed features never abort a build. Each one is logged with its
//! position and counted, and the rest of the dataset is indexed. Only a
//! dataset that yields no places at all is an error, because there would be
//! nothing to serve.

pub mod feature;

use serde_json::Value;

use crate::error::{DataSourceError, MalformedRecordError};
use crate::index::PlaceIndex;
use crate::types::Place;

pub use feature::{Feature, Geometry};

/// Counts from one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub indexed: usize,
    pub skipped: usize,
}

/// Accumulates places one feature at a time.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    places: Vec<Place>,
    skipped: usize,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an already-mapped place.
    pub fn add_place(&mut self, place: Place) {
        self.places.push(place);
    }

    /// Map and add one raw feature. A malformed feature is logged, counted
    /// and returned; the builder stays usable.
    pub fn add_feature(&mut self, value: Value, position: usize) -> Result<(), MalformedRecordError> {
        match Feature::from_value(value, position).and_then(|f| f.into_place(position)) {
            Ok(place) => {
                self.places.push(place);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(position, error = %e, "skipping malformed feature");
                self.skipped += 1;
                Err(e)
            }
        }
    }

    pub fn indexed_count(&self) -> usize {
        self.places.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped
    }

    pub fn report(&self) -> BuildReport {
        BuildReport {
            indexed: self.indexed_count(),
            skipped: self.skipped,
        }
    }

    /// Finish the build.
    pub fn build(self) -> (PlaceIndex, BuildReport) {
        let report = self.report();
        (PlaceIndex::build(self.places), report)
    }
}

/// Build an index from places. Total: the empty input gives an empty index.
pub fn build_index(places: Vec<Place>) -> PlaceIndex {
    PlaceIndex::build(places)
}

/// Build an index from a GeoJSON FeatureCollection.
///
/// Fails only when the collection has no `features` array or when every
/// feature was rejected.
pub fn index_dataset(collection: Value) -> Result<(PlaceIndex, BuildReport), DataSourceError> {
    let features = match collection {
        Value::Object(mut map) => match map.remove("features") {
            Some(Value::Array(features)) => features,
            _ => {
                return Err(DataSourceError::Shape(
                    "expected a `features` array".to_string(),
                ))
            }
        },
        _ => {
            return Err(DataSourceError::Shape(
                "expected a FeatureCollection object".to_string(),
            ))
        }
    };

    let mut builder = IndexBuilder::new();
    for (position, feature) in features.into_iter().enumerate() {
        // Already logged and counted by the builder
        let _ = builder.add_feature(feature, position);
    }

    let (index, report) = builder.build();
    if report.indexed == 0 {
        return Err(DataSourceError::NoUsableRecords {
            skipped: report.skipped,
        });
    }

    tracing::info!(
        indexed = report.indexed,
        skipped = report.skipped,
        terms = index.term_count(),
        "place index built"
    );
    Ok((index, report))
}
