//! HTTP client for the analysis service.
//!
//! One request per scan: the URL goes out as a JSON body to the service's
//! `/analyze` endpoint and the verdict comes back as JSON. There are no
//! retries, but every failure mode maps to a typed [`ClientError`] so the
//! caller can always restore the terminal and report something useful.

use crate::models::{AnalysisRequest, AnalysisResponse};
use anyhow::Context;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by [`AnalyzerClient::analyze`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service could not be reached at all.
    #[error("cannot connect to the analysis service at {endpoint}")]
    Connect { endpoint: String },

    /// The service did not answer within the configured timeout.
    #[error("analysis request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// The service answered with a non-success status.
    #[error("analysis service returned HTTP {status}: {message}")]
    Service { status: u16, message: String },

    /// The response body was not the JSON shape this client understands.
    #[error("could not decode the analysis response: {0}")]
    InvalidResponse(String),

    /// Any other transport failure.
    #[error("failed to send analysis request: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Error body the service sends on rejected requests.
#[derive(Debug, Deserialize)]
struct ServiceError {
    error: String,
}

/// Client for the URL analysis service.
pub struct AnalyzerClient {
    http_client: reqwest::Client,
    endpoint: String,
    timeout_seconds: u64,
}

impl AnalyzerClient {
    /// Creates a client for the service at `endpoint`.
    ///
    /// The endpoint is the service root (for example
    /// `http://localhost:10000`); the `/analyze` path is appended per
    /// request. The timeout covers the whole round trip.
    pub fn new(endpoint: &str, timeout_seconds: u64) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent(format!("urlwarden/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            timeout_seconds,
        })
    }

    /// Submits `url` for analysis and returns the service's verdict.
    pub async fn analyze(&self, url: &str) -> Result<AnalysisResponse, ClientError> {
        let request_url = format!("{}/analyze", self.endpoint);
        let request = AnalysisRequest {
            url: url.to_string(),
        };

        debug!("POST {} url={:?}", request_url, url);

        let response = self
            .http_client
            .post(&request_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClientError::Timeout {
                        seconds: self.timeout_seconds,
                    }
                } else if e.is_connect() {
                    ClientError::Connect {
                        endpoint: self.endpoint.clone(),
                    }
                } else {
                    ClientError::Transport(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            // The service reports rejections as {"error": "..."}; fall back
            // to the raw body for anything else (proxies, HTML error pages).
            let message = serde_json::from_str::<ServiceError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(ClientError::Service { status, message });
        }

        response
            .json::<AnalysisResponse>()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}
