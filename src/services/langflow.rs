// src/services/langflow.rs
use serde_json::Value;

use crate::{config::Upstream, error::AppError, message::RelayPayload};

/// Thin HTTP client for the Langflow run endpoint.
#[derive(Debug, Clone, Default)]
pub struct LangflowClient {
    http: reqwest::Client,
}

impl LangflowClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send one run request and return the parsed JSON body. Never retries.
    pub async fn run(
        &self,
        upstream: Upstream<'_>,
        payload: &RelayPayload,
    ) -> Result<Value, AppError> {
        tracing::info!(url = upstream.url, "connecting to langflow");

        let mut request = self.http.post(upstream.url).json(payload);
        if let Some(key) = upstream.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus(status));
        }

        let raw = response.text().await?;
        let data: Value = serde_json::from_str(&raw).map_err(|e| {
            tracing::debug!(error = %e, body_len = raw.len(), "langflow body is not JSON");
            AppError::UpstreamParse
        })?;

        tracing::debug!(status = %status, "langflow responded");
        Ok(data)
    }
}
