// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::AppState;
use crate::error::RoutingError;
use crate::routing::DirectionsRequest;
use crate::search::{SearchOptions, Searcher};
use crate::types::MatchResult;

#[derive(Debug, Default, Deserialize)]
pub struct MatchesParams {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub places: usize,
}

/// Errors surfaced to HTTP callers as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Upstream(RoutingError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Upstream(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// GET /matches?query=
pub async fn handle_matches(
    State(state): State<Arc<AppState>>,
    params: Option<Query<MatchesParams>>,
) -> Json<Vec<MatchResult>> {
    let query = params.map(|Query(p)| p.query).unwrap_or_default();
    let composed = state.composer.compose(&query);
    if composed.is_empty() {
        return Json(Vec::new());
    }

    let index = state.catalog.snapshot();
    let results = Searcher::new(&index).search(&composed, SearchOptions::limit(state.result_limit));
    tracing::debug!(query = %query, hits = results.len(), "matches");
    Json(results)
}

/// GET /directions
///
/// The provider's status and body are relayed as-is; 502 only when no JSON
/// answer came back.
pub async fn handle_directions(
    State(state): State<Arc<AppState>>,
    params: Result<Query<DirectionsRequest>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(request) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    if !request.is_valid() {
        return Err(ApiError::BadRequest("coordinates out of range".to_string()));
    }

    match state.routing.directions(&request).await {
        Ok(route) => Ok((route.status, Json(route.body)).into_response()),
        Err(e) => {
            tracing::warn!(error = %e, "directions request failed");
            Err(ApiError::Upstream(e))
        }
    }
}

/// GET /health
pub async fn handle_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        places: state.catalog.snapshot().len(),
    })
}
