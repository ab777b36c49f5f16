//! Command execution context
//!
//! Merges CLI options with the config file and builds organization clients.

use std::time::Duration;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{GithubOrgClient, HttpFetcher};
use crate::config::{Config, DEFAULT_API_URL};
use crate::error::{ConfigError, Result};

/// Context for command execution containing config and runtime options.
pub struct CommandContext {
    /// Loaded configuration with CLI overrides applied
    pub config: Config,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config and apply CLI overrides.
    ///
    /// # Errors
    /// Returns error if the config file cannot be read or the merged
    /// settings are invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_at(opts.config_ref())?;

        if let Some(ref url) = opts.api_url {
            config.api_url = Some(url.clone());
        }
        config.validate()?;

        let format = match opts.format {
            Some(format) => format,
            None => match config.preferences.format.as_deref() {
                Some(pref) => pref.parse().map_err(ConfigError::Invalid)?,
                None => OutputFormat::default(),
            },
        };

        log::debug!("Using API root {}", config.api_url());

        Ok(Self { config, format })
    }

    /// Build a client for `org`, or for the configured default organization.
    pub fn org_client(&self, org: Option<&str>) -> Result<GithubOrgClient<HttpFetcher>> {
        let org = self.config.require_org(org)?;
        let fetcher = HttpFetcher::new(Duration::from_secs(self.config.timeout_secs))?;
        let client = match self.config.api_url() {
            DEFAULT_API_URL => GithubOrgClient::new(org, fetcher),
            api_url => GithubOrgClient::with_api_url(org, api_url, fetcher),
        };
        Ok(client)
    }
}
