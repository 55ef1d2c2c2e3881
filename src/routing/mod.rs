// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Walking directions, passed through from the routing provider.
//!
//! The provider's status and JSON body are returned verbatim, error replies
//! included. Only a failed exchange or a non-JSON error reply becomes a
//! `RoutingError`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::error::RoutingError;
use crate::http::{build_client, get_with_retry};

/// Language used when the caller does not ask for one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Origin and destination of a walking route.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DirectionsRequest {
    pub origin_latitude: f64,
    pub origin_longitude: f64,
    pub dest_latitude: f64,
    pub dest_longitude: f64,
    #[serde(default)]
    pub language: Option<String>,
}

impl DirectionsRequest {
    /// All four coordinates are finite and within WGS84 bounds.
    pub fn is_valid(&self) -> bool {
        let lat_ok = |v: f64| v.is_finite() && (-90.0..=90.0).contains(&v);
        let lon_ok = |v: f64| v.is_finite() && (-180.0..=180.0).contains(&v);
        lat_ok(self.origin_latitude)
            && lat_ok(self.dest_latitude)
            && lon_ok(self.origin_longitude)
            && lon_ok(self.dest_longitude)
    }

    pub fn language(&self) -> &str {
        self.language
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(DEFAULT_LANGUAGE)
    }

    /// `{olon},{olat};{dlon},{dlat}`, the provider's coordinate path segment.
    pub fn coordinate_path(&self) -> String {
        format!(
            "{},{};{},{}",
            self.origin_longitude, self.origin_latitude, self.dest_longitude, self.dest_latitude
        )
    }
}

/// The provider's answer, untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl RouteResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }
}

#[async_trait]
pub trait RoutingProvider: Send + Sync {
    async fn directions(&self, request: &DirectionsRequest) -> Result<RouteResponse, RoutingError>;
}

/// Mapbox walking profile.
#[derive(Debug, Clone)]
pub struct MapboxRouting {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl MapboxRouting {
    pub fn new(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        })
    }

    fn route_url(&self, request: &DirectionsRequest) -> String {
        format!(
            "{}/directions/v5/mapbox/walking/{}",
            self.base_url,
            request.coordinate_path()
        )
    }
}

#[async_trait]
impl RoutingProvider for MapboxRouting {
    async fn directions(&self, request: &DirectionsRequest) -> Result<RouteResponse, RoutingError> {
        let url = self.route_url(request);
        let response = get_with_retry(
            &self.client,
            &url,
            &[
                ("steps", "true"),
                ("geometries", "geojson"),
                ("access_token", self.access_token.as_str()),
                ("language", request.language()),
            ],
        )
        .await?;

        let status = response.status();
        match response.json::<Value>().await {
            Ok(body) => {
                if !status.is_success() {
                    tracing::warn!(url = %url, status = %status, "routing provider error");
                }
                Ok(RouteResponse { status, body })
            }
            Err(e) if status.is_success() => Err(RoutingError::Http(e.without_url())),
            Err(_) => {
                tracing::warn!(url = %url, status = %status, "routing provider error without JSON body");
                Err(RoutingError::Status(status))
            }
        }
    }
}
