// SPDX-License-Identifier: Apache-2.0

use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

use crate::error::FetchError;

/// Sends `request` and returns the body as text. Non-success statuses are errors.
pub(crate) async fn fetch_text(request: RequestBuilder, url: &str) -> Result<String, FetchError> {
    let response = send(request, url).await?;
    response.text().await.map_err(|e| FetchError::new(url, e))
}

/// Sends `request` and decodes the body as JSON. Non-success statuses are errors.
pub(crate) async fn fetch_json(request: RequestBuilder, url: &str) -> Result<Value, FetchError> {
    let response = send(request, url).await?;
    response.json::<Value>().await.map_err(|e| FetchError::new(url, e))
}

async fn send(request: RequestBuilder, url: &str) -> Result<Response, FetchError> {
    let response = request
        .send()
        .await
        .and_then(Response::error_for_status)
        .map_err(|e| FetchError::new(url, e))?;
    debug!(status = %response.status(), "Fetched {}", url);
    Ok(response)
}
