//! HTTP JSON fetcher backed by reqwest

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;

use super::JsonFetcher;
use crate::error::{ApiError, Result};

/// Media type GitHub documents for REST v3 responses
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// GitHub rejects requests that carry no User-Agent
const USER_AGENT: &str = concat!("ghorg/", env!("CARGO_PKG_VERSION"));

/// Fetcher issuing real GET requests.
///
/// Every call is a single request: no retries, no caching. Non-2xx statuses
/// become [`ApiError`] values and are returned to the caller.
pub struct HttpFetcher {
    http: HttpClient,
}

impl HttpFetcher {
    /// Create a fetcher whose requests time out after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn get_json(&self, url: &str) -> Result<Value> {
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, GITHUB_ACCEPT)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        log::debug!("GET {} -> {}", url, status);

        match status {
            status if status.is_success() => {
                let body = response.text().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to read response: {}", e))
                })?;
                let value = serde_json::from_str(&body).map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(value)
            }
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(url.to_string()).into()),
            StatusCode::FORBIDDEN => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Forbidden".to_string());
                Err(ApiError::Forbidden(error_msg).into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}
