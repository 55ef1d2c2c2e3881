// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record model: what a place is, and what a search hands back.
//!
//! A `Place` is one physical building or campus location. Three of its fields
//! are analyzed text (`place_name`, `place_he_name`, `place_building`); the
//! `center` coordinate is payload only and never participates in matching.
//!
//! # Invariants
//!
//! - **Place**: `place_name` is non-blank. `place_building`, when present, is
//!   non-blank (blank codes are normalized to `None` at the dataset boundary).
//! - **Center**: two finite numbers, longitude first. Serialized as `[lon, lat]`
//!   because that is the GeoJSON order the map client expects.
//! - **MatchResult**: `place_building` serializes as `null` when absent. It is
//!   never dropped from the object and never replaced by an empty string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `(longitude, latitude)` pair, GeoJSON order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Center(pub f64, pub f64);

impl Center {
    pub fn longitude(self) -> f64 {
        self.0
    }

    pub fn latitude(self) -> f64 {
        self.1
    }

    /// Both components are finite numbers.
    pub fn is_finite(self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.0, self.1)
    }
}

/// One searchable place.
///
/// The document id of a place is its position in `PlaceIndex::places`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub place_name: String,
    pub place_he_name: String,
    pub place_building: Option<String>,
    pub center: Center,
}

impl Place {
    pub fn new(
        place_name: impl Into<String>,
        place_he_name: impl Into<String>,
        place_building: Option<&str>,
        center: Center,
    ) -> Self {
        Self {
            place_name: place_name.into(),
            place_he_name: place_he_name.into(),
            place_building: place_building.map(str::to_string),
            center,
        }
    }

    /// Raw text of an analyzed field. `None` only for an absent building code.
    pub fn field_text(&self, field: PlaceField) -> Option<&str> {
        match field {
            PlaceField::Name => Some(&self.place_name),
            PlaceField::HeName => Some(&self.place_he_name),
            PlaceField::Building => self.place_building.as_deref(),
        }
    }
}

/// The three analyzed text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlaceField {
    #[serde(rename = "place_name")]
    Name,
    #[serde(rename = "place_he_name")]
    HeName,
    #[serde(rename = "place_building")]
    Building,
}

impl PlaceField {
    /// Fixed evaluation order. Index construction and clause composition both
    /// walk fields in this order.
    pub const ALL: [PlaceField; 3] = [PlaceField::Name, PlaceField::HeName, PlaceField::Building];

    /// Wire name of the field, as it appears in responses.
    pub fn as_str(self) -> &'static str {
        match self {
            PlaceField::Name => "place_name",
            PlaceField::HeName => "place_he_name",
            PlaceField::Building => "place_building",
        }
    }
}

impl fmt::Display for PlaceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What `/matches` returns for each hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub place_name: String,
    pub place_he_name: String,
    pub place_building: Option<String>,
    pub center: Center,
}

impl From<&Place> for MatchResult {
    fn from(place: &Place) -> Self {
        Self {
            place_name: place.place_name.clone(),
            place_he_name: place.place_he_name.clone(),
            place_building: place.place_building.clone(),
            center: place.center,
        }
    }
}
