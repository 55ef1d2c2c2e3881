// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP service.
//!
//! # Endpoints
//!
//! - `GET /matches?query=` - ranked places for a search box
//! - `GET /directions?origin_latitude=&origin_longitude=&dest_latitude=&dest_longitude=&language=` -
//!   walking route, passed through from the routing provider
//! - `GET /health` - liveness plus the number of published places
//!
//! Every response carries `Access-Control-Allow-Origin: *`; the map client
//! is served from a different origin.

pub mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::catalog::{LoadOrigin, PlaceCatalog};
use crate::config::ServiceConfig;
use crate::error::StartupError;
use crate::query::QueryComposer;
use crate::routing::{MapboxRouting, RoutingProvider};
use crate::source::{DatasetSource, FileDatasetSource, MapboxDatasetSource};

pub use handlers::{handle_directions, handle_health, handle_matches, ApiError};

/// State shared across handlers.
pub struct AppState {
    pub catalog: Arc<PlaceCatalog>,
    pub routing: Arc<dyn RoutingProvider>,
    pub composer: QueryComposer,
    pub result_limit: usize,
}

impl AppState {
    pub fn new(catalog: Arc<PlaceCatalog>, routing: Arc<dyn RoutingProvider>, result_limit: usize) -> Self {
        Self {
            catalog,
            routing,
            composer: QueryComposer::default(),
            result_limit,
        }
    }
}

/// The service's routes and layers.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/matches", get(handle_matches))
        .route("/directions", get(handle_directions))
        .route("/health", get(handle_health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn dataset_source(config: &ServiceConfig) -> Result<Arc<dyn DatasetSource>, StartupError> {
    if let Some(path) = &config.dataset_file {
        return Ok(Arc::new(FileDatasetSource::new(path)));
    }
    let source = MapboxDatasetSource::new(
        config.mapbox_base_url.as_str(),
        config.dataset_owner.as_str(),
        config.dataset_id.as_str(),
        config.token().unwrap_or_default(),
        config.upstream_timeout(),
    )
    .map_err(StartupError::Client)?;
    Ok(Arc::new(source))
}

/// Build or load the index, then serve until Ctrl-C.
pub async fn run(config: ServiceConfig) -> Result<(), StartupError> {
    config.validate()?;

    let source = dataset_source(&config)?;
    let (catalog, origin) = PlaceCatalog::load(source.as_ref(), &config.index_dir)
        .await
        .map_err(|source| StartupError::NoIndex { source })?;
    let catalog = Arc::new(catalog);

    match origin {
        LoadOrigin::Fetched(report) => info!(
            indexed = report.indexed,
            skipped = report.skipped,
            "index ready"
        ),
        LoadOrigin::Artifact => info!(places = catalog.snapshot().len(), "index ready (persisted copy)"),
    }

    if config.token().is_none() {
        tracing::warn!("no access token configured; /directions will fail upstream");
    }
    let routing = MapboxRouting::new(
        config.mapbox_base_url.as_str(),
        config.token().unwrap_or_default(),
        config.upstream_timeout(),
    )
    .map_err(StartupError::Client)?;

    #[cfg(unix)]
    spawn_refresh_on_hangup(Arc::clone(&catalog), Arc::clone(&source));

    let state = Arc::new(AppState::new(catalog, Arc::new(routing), config.result_limit));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .map_err(|source| StartupError::Bind {
            addr: config.listen,
            source,
        })?;
    info!(address = %config.listen, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)
}

/// Rebuild the index whenever the process receives SIGHUP.
#[cfg(unix)]
fn spawn_refresh_on_hangup(catalog: Arc<PlaceCatalog>, source: Arc<dyn DatasetSource>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut hangup = match signal(SignalKind::hangup()) {
            Ok(stream) => stream,
            Err(e) => {
                tracing::warn!(error = %e, "cannot listen for SIGHUP; refresh disabled");
                return;
            }
        };
        while hangup.recv().await.is_some() {
            info!("SIGHUP received, refreshing index");
            // Failures are logged by the catalog and leave the old index published
            let _ = catalog.refresh(source.as_ref()).await;
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
