//! GitHub API client

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;

pub mod fetch;
pub mod github;
pub mod models;
pub mod nested;

pub use fetch::HttpFetcher;
pub use github::GithubOrgClient;

/// Source of decoded JSON documents.
///
/// The production implementation is [`HttpFetcher`]; tests substitute
/// [`mock::MockFetcher`] with canned payloads.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// GET `url` and return its decoded JSON body (object or array)
    async fn get_json(&self, url: &str) -> Result<Value>;
}
