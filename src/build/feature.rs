// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dataset features: the GeoJSON shape the dataset provider returns, and the
//! mapping from one feature to one `Place`.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::MalformedRecordError;
use crate::types::{Center, Place};

/// One GeoJSON feature. Properties stay loosely typed so a single odd value
/// rejects one feature instead of the whole collection.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Geometry {
    #[serde(rename = "type", default)]
    pub geometry_type: Option<String>,
    #[serde(default)]
    pub coordinates: Value,
}

impl Feature {
    fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref()?.get(key)
    }

    /// Parse a feature out of a raw collection entry.
    pub fn from_value(value: Value, position: usize) -> Result<Self, MalformedRecordError> {
        if !value.is_object() {
            return Err(MalformedRecordError::NotAnObject { position });
        }
        serde_json::from_value(value).map_err(|_| MalformedRecordError::NotAnObject { position })
    }

    /// Map this feature to a place.
    ///
    /// `name` must be a non-blank string. `name_he` defaults to empty text.
    /// `building` may be a string or a number; blank means no building.
    pub fn into_place(self, position: usize) -> Result<Place, MalformedRecordError> {
        let name = self
            .property("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(MalformedRecordError::MissingName { position })?;

        let he_name = self
            .property("name_he")
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or("");

        let building = building_code(self.property("building"));

        let geometry = self
            .geometry
            .as_ref()
            .ok_or(MalformedRecordError::MissingGeometry { position })?;
        let center = parse_center(&geometry.coordinates)
            .ok_or(MalformedRecordError::InvalidCoordinates { position })?;

        Ok(Place::new(name, he_name, building.as_deref(), center))
    }
}

fn building_code(value: Option<&Value>) -> Option<String> {
    let code = match value? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!code.is_empty()).then_some(code)
}

/// `[lon, lat]`, both finite. Anything else is rejected.
fn parse_center(coordinates: &Value) -> Option<Center> {
    match coordinates.as_array()?.as_slice() {
        [lon, lat] => {
            let center = Center(lon.as_f64()?, lat.as_f64()?);
            center.is_finite().then_some(center)
        }
        _ => None,
    }
}
