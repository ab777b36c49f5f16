//! Mock JSON fetcher for testing
//!
//! Serves canned payloads keyed by URL and records every request so tests
//! can assert how often each endpoint was hit.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use super::JsonFetcher;
use crate::error::{ApiError, Result};

/// Mock fetcher for testing.
///
/// Clones share state, so a test can hand one clone to the client and keep
/// another for assertions.
///
/// # Example
/// ```ignore
/// let mock = MockFetcher::new()
///     .with_response("https://api.github.com/orgs/google", json!({ "login": "google" }))
///     .await;
///
/// let client = GithubOrgClient::new("google", mock.clone());
/// client.org().await?;
/// assert_eq!(mock.call_count("https://api.github.com/orgs/google").await, 1);
/// ```
#[derive(Clone, Default)]
pub struct MockFetcher {
    /// Payloads to return, by URL
    responses: Arc<Mutex<HashMap<String, Value>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Every requested URL, in order
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    /// Create a new mock with no canned responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the payload returned for `url`.
    pub async fn with_response(self, url: &str, payload: Value) -> Self {
        self.responses.lock().await.insert(url.to_string(), payload);
        self
    }

    /// Configure an error to return on the next call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// All requested URLs, in call order.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    /// Number of requests made for `url`.
    pub async fn call_count(&self, url: &str) -> usize {
        self.calls.lock().await.iter().filter(|u| *u == url).count()
    }
}

#[async_trait]
impl JsonFetcher for MockFetcher {
    async fn get_json(&self, url: &str) -> Result<Value> {
        self.calls.lock().await.push(url.to_string());

        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }

        self.responses
            .lock()
            .await
            .get(url)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(url.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_returns_configured_payload() {
        let mock = MockFetcher::new()
            .with_response("https://example.test/a", json!({ "a": 1 }))
            .await;

        assert_eq!(
            mock.get_json("https://example.test/a").await.unwrap(),
            json!({ "a": 1 })
        );
        assert_eq!(mock.call_count("https://example.test/a").await, 1);
    }

    #[tokio::test]
    async fn test_mock_unknown_url_not_found() {
        let mock = MockFetcher::new();
        let err = mock.get_json("https://example.test/b").await.unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::NotFound(_))));
        assert_eq!(mock.calls().await, vec!["https://example.test/b"]);
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockFetcher::new()
            .with_response("https://example.test/a", json!([]))
            .await
            .with_error(ApiError::Network("down".to_string()))
            .await;

        assert!(mock.get_json("https://example.test/a").await.is_err());
        assert!(mock.get_json("https://example.test/a").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_clones_share_calls() {
        let mock = MockFetcher::new();
        let other = mock.clone();

        let _ = other.get_json("https://example.test/c").await;

        assert_eq!(mock.call_count("https://example.test/c").await, 1);
    }
}
