//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use locus::routing::{DirectionsRequest, RouteResponse, RoutingProvider};
use locus::server::{router, AppState};
use locus::{PlaceCatalog, PlaceIndex, RoutingError};
use serde_json::{json, Value};
use tower::ServiceExt;

// Re-export canonical test utilities from locus::testing
pub use locus::testing::{campus, make_collection, make_feature, make_index, make_place};

// ============================================================================
// DATASETS
// ============================================================================

/// The campus fixture as a GeoJSON FeatureCollection, plus one broken feature.
pub fn campus_collection() -> Value {
    make_collection(vec![
        make_feature(Some("Main Hall"), Some("אולם ראשי"), Some("M1"), [34.8, 32.1]),
        make_feature(Some("Library"), Some("ספרייה"), Some("A1"), [34.801, 32.112]),
        make_feature(Some("Student Center"), Some("מרכז הסטודנטים"), Some("B2"), [34.803, 32.109]),
        make_feature(Some("Engineering Building"), Some("בניין הנדסה"), Some("A2"), [34.805, 32.107]),
        make_feature(Some("Sports Field"), Some("מגרש ספורט"), None, [34.806, 32.104]),
        make_feature(Some("Cafeteria"), Some("קפטריה"), Some("C"), [34.802, 32.105]),
        make_feature(None, Some("שער"), None, [34.9, 32.2]),
    ])
}

/// Write `collection` into `dir` and return the file path.
pub fn write_dataset(dir: &Path, collection: &Value) -> PathBuf {
    let path = dir.join("places.geojson");
    std::fs::write(&path, serde_json::to_vec(collection).unwrap()).unwrap();
    path
}

// ============================================================================
// HTTP
// ============================================================================

/// Routing provider that answers every request with a fixed body.
pub struct StaticRouting(pub Value);

#[async_trait]
impl RoutingProvider for StaticRouting {
    async fn directions(&self, request: &DirectionsRequest) -> Result<RouteResponse, RoutingError> {
        let mut body = self.0.clone();
        body["requested"] = json!(request.coordinate_path());
        Ok(RouteResponse::ok(body))
    }
}

/// Router over `index` with a static routing provider.
pub fn app_with(index: PlaceIndex, routing: Arc<dyn RoutingProvider>) -> axum::Router {
    let catalog = Arc::new(PlaceCatalog::new(index, "unused-index-dir"));
    router(Arc::new(AppState::new(catalog, routing, 10)))
}

pub fn campus_app() -> axum::Router {
    app_with(campus(), Arc::new(StaticRouting(json!({ "routes": [] }))))
}

/// `path?key=value&...` with proper percent-encoding.
pub fn uri(path: &str, params: &[(&str, &str)]) -> String {
    let url = reqwest::Url::parse_with_params(&format!("http://localhost{}", path), params).unwrap();
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

/// Send a GET with an `Origin` header through the router.
pub async fn get(app: axum::Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header("Origin", "http://map.example.com")
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Place names of a `/matches` response, in order.
pub fn names(results: &Value) -> Vec<String> {
    results
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["place_name"].as_str().unwrap().to_string())
        .collect()
}
