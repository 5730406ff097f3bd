use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{HttpRequest, HttpResponse, Transport};
use crate::error::ApiError;

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(url = %request.url, query = ?request.query, "GET");

        let res = self
            .http
            .get(&request.url)
            .query(&request.query)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = res.status().as_u16();
        let body = res
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("failed to read response body: {e}")))?;

        tracing::debug!(status, bytes = body.len(), "response received");

        Ok(HttpResponse { status, body })
    }
}
