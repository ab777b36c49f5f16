//! GitHub organization client

use serde_json::Value;
use tokio::sync::OnceCell;

use super::models::{Organization, Repository};
use super::nested::access_nested_map;
use super::JsonFetcher;
use crate::config::DEFAULT_API_URL;
use crate::error::{ApiError, Error, Result};

/// Client for one GitHub organization.
///
/// The organization payload is fetched on first use and reused for the
/// lifetime of the client. Repository listings are fetched fresh on every
/// call.
pub struct GithubOrgClient<F> {
    org_name: String,
    api_url: String,
    fetcher: F,
    org: OnceCell<Organization>,
}

impl<F: JsonFetcher> GithubOrgClient<F> {
    /// Create a client for `org_name` against the public GitHub API
    pub fn new(org_name: impl Into<String>, fetcher: F) -> Self {
        Self::with_api_url(org_name, DEFAULT_API_URL, fetcher)
    }

    /// Create a client against a custom API root (GitHub Enterprise, mock servers)
    pub fn with_api_url(org_name: impl Into<String>, api_url: &str, fetcher: F) -> Self {
        Self {
            org_name: org_name.into(),
            api_url: api_url.trim_end_matches('/').to_string(),
            fetcher,
            org: OnceCell::new(),
        }
    }

    /// Organization this client was created for
    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    /// URL of the organization endpoint
    pub fn org_url(&self) -> String {
        format!("{}/orgs/{}", self.api_url, self.org_name)
    }

    /// Organization payload, fetched at most once per client.
    ///
    /// A failed fetch leaves the cell empty, so the next call tries again.
    pub async fn org(&self) -> Result<&Organization> {
        self.org
            .get_or_try_init(|| async {
                let url = self.org_url();
                log::debug!("Fetching organization {}", self.org_name);
                let payload = self.fetcher.get_json(&url).await?;
                Ok::<_, Error>(serde_json::from_value::<Organization>(payload)?)
            })
            .await
    }

    /// The organization's `repos_url`
    pub async fn public_repos_url(&self) -> Result<&str> {
        self.org()
            .await?
            .repos_url()
            .ok_or_else(|| ApiError::MissingField("repos_url".to_string()).into())
    }

    /// Raw repository payloads from the organization's `repos_url`
    async fn repos_payload(&self) -> Result<Vec<Value>> {
        let url = self.public_repos_url().await?;
        log::debug!("Fetching repositories for {} from {}", self.org_name, url);

        match self.fetcher.get_json(url).await? {
            Value::Array(repos) => {
                log::debug!("Fetched {} repositories", repos.len());
                Ok(repos)
            }
            other => Err(ApiError::InvalidResponse(format!(
                "Expected a list of repositories, got {}",
                json_kind(&other)
            ))
            .into()),
        }
    }

    /// Names of the organization's public repositories, in listing order.
    ///
    /// With `license`, only repositories whose `license.key` equals it are
    /// kept; repositories without a license never match.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for repo in self.repos_payload().await? {
            if let Some(key) = license {
                if !Self::has_license(&repo, key) {
                    continue;
                }
            }
            let name = access_nested_map(&repo, &["name"])?
                .as_str()
                .ok_or_else(|| {
                    ApiError::InvalidResponse("Repository name is not a string".to_string())
                })?;
            names.push(name.to_string());
        }
        Ok(names)
    }

    /// Typed repositories, optionally filtered by license key
    pub async fn repos(&self, license: Option<&str>) -> Result<Vec<Repository>> {
        let mut repos = Vec::new();
        for repo in self.repos_payload().await? {
            if license.is_none_or(|key| Self::has_license(&repo, key)) {
                repos.push(serde_json::from_value(repo)?);
            }
        }
        Ok(repos)
    }

    /// Whether `repo.license.key` equals `license_key`.
    ///
    /// A missing or `null` license is simply not a match.
    pub fn has_license(repo: &Value, license_key: &str) -> bool {
        access_nested_map(repo, &["license", "key"])
            .map(|key| key.as_str() == Some(license_key))
            .unwrap_or(false)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
