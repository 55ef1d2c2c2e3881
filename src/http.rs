// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Outbound HTTP shared by the dataset source and the routing provider.
//!
//! Query parameters (the access token among them) are passed separately from
//! the URL so that only the bare URL ever shows up in logs.

use std::time::Duration;

use reqwest::{Client, Response};

/// Pause before the single retry.
const RETRY_DELAY: Duration = Duration::from_millis(250);

/// Client with a whole-request timeout.
pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(concat!("locus/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// GET with one retry on a transport error or a 5xx status.
///
/// Any other status is returned as-is for the caller to judge. Errors come
/// back with their URL stripped, since the URL carries the token.
pub async fn get_with_retry(
    client: &Client,
    url: &str,
    query: &[(&str, &str)],
) -> reqwest::Result<Response> {
    match client.get(url).query(query).send().await {
        Ok(response) if !response.status().is_server_error() => return Ok(response),
        Ok(response) => {
            tracing::warn!(url, status = %response.status(), "upstream error, retrying once");
        }
        Err(e) if e.is_builder() => return Err(e.without_url()),
        Err(e) => {
            let e = e.without_url();
            tracing::warn!(url, error = %e, "upstream request failed, retrying once");
        }
    }

    tokio::time::sleep(RETRY_DELAY).await;
    client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(reqwest::Error::without_url)
}
