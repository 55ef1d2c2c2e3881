//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::index::PlaceIndex;
use crate::types::{Center, Place};
use serde_json::{json, Value};

/// Create a place with a center derived from its name, so distinct places
/// get distinct coordinates without the caller caring.
pub fn make_place(name: &str, he_name: &str, building: Option<&str>) -> Place {
    let seed = name.bytes().fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    let center = Center(34.80 + (seed % 100) as f64 / 10_000.0, 32.10 + (seed % 37) as f64 / 10_000.0);
    Place::new(name, he_name, building, center)
}

/// Build an index over `(name, he_name, building)` triples.
pub fn make_index(rows: &[(&str, &str, Option<&str>)]) -> PlaceIndex {
    PlaceIndex::build(
        rows.iter()
            .map(|(name, he_name, building)| make_place(name, he_name, *building))
            .collect(),
    )
}

/// A GeoJSON feature as the dataset provider returns it.
pub fn make_feature(name: Option<&str>, he_name: Option<&str>, building: Option<&str>, coordinates: [f64; 2]) -> Value {
    let mut properties = serde_json::Map::new();
    if let Some(name) = name {
        properties.insert("name".to_string(), json!(name));
    }
    if let Some(he_name) = he_name {
        properties.insert("name_he".to_string(), json!(he_name));
    }
    if let Some(building) = building {
        properties.insert("building".to_string(), json!(building));
    }
    json!({
        "type": "Feature",
        "properties": properties,
        "geometry": { "type": "Point", "coordinates": coordinates },
    })
}

/// Wrap features into a FeatureCollection.
pub fn make_collection(features: Vec<Value>) -> Value {
    json!({ "type": "FeatureCollection", "features": features })
}

/// A small campus used across the test suite.
pub fn campus() -> PlaceIndex {
    make_index(&[
        ("Main Hall", "אולם ראשי", Some("M1")),
        ("Library", "ספרייה", Some("A1")),
        ("Student Center", "מרכז הסטודנטים", Some("B2")),
        ("Engineering Building", "בניין הנדסה", Some("A2")),
        ("Sports Field", "מגרש ספורט", None),
        ("Cafeteria", "קפטריה", Some("C")),
    ])
}
