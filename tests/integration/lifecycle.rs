//! Startup, fallback and refresh.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{body_json, campus_collection, get, make_collection, make_feature, names, uri, write_dataset, StaticRouting};
use locus::binary::read_index;
use locus::catalog::LoadOrigin;
use locus::server::{router, AppState};
use locus::source::{FileDatasetSource, MapboxDatasetSource};
use locus::{BuildReport, DataSourceError, PlaceCatalog};

#[tokio::test]
async fn test_startup_from_mapbox_persists_artifact() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(campus_collection()))
        .mount(&server)
        .await;
    let source = MapboxDatasetSource::new(server.uri(), "unavigate", "campus", "pk.test", Duration::from_secs(2)).unwrap();
    let tmp = tempfile::tempdir().unwrap();

    let (catalog, origin) = PlaceCatalog::load(&source, tmp.path()).await.unwrap();
    assert_eq!(origin, LoadOrigin::Fetched(BuildReport { indexed: 6, skipped: 1 }));
    assert_eq!(read_index(tmp.path()).unwrap().len(), 6);
    assert_eq!(catalog.snapshot().len(), 6);
}

#[tokio::test]
async fn test_provider_outage_falls_back_to_artifact() {
    let tmp = tempfile::tempdir().unwrap();
    let good = FileDatasetSource::new(write_dataset(tmp.path(), &campus_collection()));
    PlaceCatalog::load(&good, tmp.path()).await.unwrap();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    let down = MapboxDatasetSource::new(server.uri(), "unavigate", "campus", "pk.test", Duration::from_secs(2)).unwrap();

    let (catalog, origin) = PlaceCatalog::load(&down, tmp.path()).await.unwrap();
    assert_eq!(origin, LoadOrigin::Artifact);
    assert_eq!(catalog.snapshot().len(), 6);
}

#[tokio::test]
async fn test_no_dataset_and_no_artifact_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let empty = FileDatasetSource::new(write_dataset(tmp.path(), &make_collection(Vec::new())));
    assert!(matches!(
        PlaceCatalog::load(&empty, tmp.path().join("index")).await,
        Err(DataSourceError::NoUsableRecords { .. })
    ));
}

#[tokio::test]
async fn test_refresh_is_visible_to_next_request() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_dataset(tmp.path(), &campus_collection());
    let source = FileDatasetSource::new(&path);
    let (catalog, _) = PlaceCatalog::load(&source, tmp.path().join("index")).await.unwrap();
    let catalog = Arc::new(catalog);
    let app = router(Arc::new(AppState::new(
        Arc::clone(&catalog),
        Arc::new(StaticRouting(json!({}))),
        10,
    )));

    let before = body_json(get(app.clone(), &uri("/matches", &[("query", "observatory")])).await).await;
    assert!(!names(&before).contains(&"Observatory".to_string()));

    write_dataset(
        tmp.path(),
        &make_collection(vec![make_feature(Some("Observatory"), Some("מצפה כוכבים"), Some("O1"), [34.81, 32.12])]),
    );
    catalog.refresh(&source).await.unwrap();

    let after = body_json(get(app, &uri("/matches", &[("query", "observatory")])).await).await;
    assert_eq!(names(&after), vec!["Observatory"]);
}
