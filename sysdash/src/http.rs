//! Minimal HTTP client for requesting metrics from the backend.

use std::{path::Path, time::Duration};

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::types::MetricsSnapshot;

pub const METRICS_PATH: &str = "/api/metrics";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed metrics payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Resolve the URL to poll. A bare base URL gets `/api/metrics` joined on;
/// anything with a path is used as given.
pub fn metrics_endpoint(base: &str) -> Result<Url, url::ParseError> {
    let url = Url::parse(base.trim())?;
    if url.path().is_empty() || url.path() == "/" {
        url.join(METRICS_PATH)
    } else {
        Ok(url)
    }
}

#[derive(Debug, Clone)]
pub struct MetricsClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl MetricsClient {
    pub fn new(endpoint: Url, tls_ca: Option<&Path>, timeout: Duration) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("sysdash/", env!("CARGO_PKG_VERSION")));
        if let Some(path) = tls_ca {
            let pem = std::fs::read(path)
                .map_err(|e| anyhow::anyhow!("reading CA certificate {}: {e}", path.display()))?;
            builder = builder.add_root_certificate(reqwest::Certificate::from_pem(&pem)?);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    // One GET; non-2xx, transport and decode failures all come back as Err
    pub async fn fetch(&self) -> Result<MetricsSnapshot, FetchError> {
        let resp = self.http.get(self.endpoint.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
