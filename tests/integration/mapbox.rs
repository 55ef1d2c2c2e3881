//! Mapbox collaborators against a mock server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::campus_collection;
use locus::routing::{DirectionsRequest, MapboxRouting, RouteResponse, RoutingProvider};
use locus::source::{DatasetSource, MapboxDatasetSource};
use locus::{DataSourceError, RoutingError};

const FEATURES_PATH: &str = "/datasets/v1/unavigate/campus/features";

fn dataset_source(server: &MockServer) -> MapboxDatasetSource {
    MapboxDatasetSource::new(server.uri(), "unavigate", "campus", "pk.test", Duration::from_secs(2)).unwrap()
}

fn walk() -> DirectionsRequest {
    DirectionsRequest {
        origin_latitude: 32.1,
        origin_longitude: 34.8,
        dest_latitude: 32.2,
        dest_longitude: 34.9,
        language: Some("he".to_string()),
    }
}

// ============================================================================
// DATASET
// ============================================================================

#[tokio::test]
async fn test_dataset_fetch_sends_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEATURES_PATH))
        .and(query_param("access_token", "pk.test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(campus_collection()))
        .expect(1)
        .mount(&server)
        .await;

    let collection = dataset_source(&server).fetch().await.unwrap();
    assert_eq!(collection["features"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_dataset_retries_once_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEATURES_PATH))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(FEATURES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(campus_collection()))
        .expect(1)
        .mount(&server)
        .await;

    assert!(dataset_source(&server).fetch().await.is_ok());
}

#[tokio::test]
async fn test_dataset_unauthorized_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEATURES_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Not Authorized" })))
        .expect(1)
        .mount(&server)
        .await;

    match dataset_source(&server).fetch().await {
        Err(DataSourceError::Status(status)) => assert_eq!(status.as_u16(), 401),
        other => panic!("expected 401, got {:?}", other),
    }
}

#[tokio::test]
async fn test_dataset_error_does_not_leak_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEATURES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let error = dataset_source(&server).fetch().await.unwrap_err();
    assert!(matches!(error, DataSourceError::Parse(_)));
    assert!(!error.to_string().contains("pk.test"));
}

// ============================================================================
// DIRECTIONS
// ============================================================================

#[tokio::test]
async fn test_directions_request_shape() {
    let server = MockServer::start().await;
    let route = json!({ "routes": [{ "distance": 812.4, "duration": 590.1 }], "code": "Ok" });
    Mock::given(method("GET"))
        .and(path_regex(r"^/directions/v5/mapbox/walking/34\.8,32\.1;34\.9,32\.2$"))
        .and(query_param("steps", "true"))
        .and(query_param("geometries", "geojson"))
        .and(query_param("access_token", "pk.test"))
        .and(query_param("language", "he"))
        .respond_with(ResponseTemplate::new(200).set_body_json(route.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let routing = MapboxRouting::new(server.uri(), "pk.test", Duration::from_secs(2)).unwrap();
    assert_eq!(routing.directions(&walk()).await.unwrap(), RouteResponse::ok(route));
}

#[tokio::test]
async fn test_directions_error_reply_passes_through() {
    let server = MockServer::start().await;
    let reply = json!({ "code": "InvalidInput", "message": "Coordinate is invalid: 34.8,132.1" });
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(422).set_body_json(reply.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let routing = MapboxRouting::new(server.uri(), "pk.test", Duration::from_secs(2)).unwrap();
    let route = routing.directions(&walk()).await.unwrap();
    assert_eq!(route.status.as_u16(), 422);
    assert_eq!(route.body, reply);
}

#[tokio::test]
async fn test_directions_upstream_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let routing = MapboxRouting::new(server.uri(), "pk.test", Duration::from_secs(2)).unwrap();
    assert!(matches!(
        routing.directions(&walk()).await,
        Err(RoutingError::Status(status)) if status.as_u16() == 500
    ));
}

#[tokio::test]
async fn test_directions_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let routing = MapboxRouting::new(server.uri(), "pk.test", Duration::from_secs(1)).unwrap();
    match routing.directions(&walk()).await {
        Err(RoutingError::Http(e)) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {:?}", other),
    }
}
