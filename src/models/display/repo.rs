//! Repository display model

use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::Tabled;

use super::NONE;
use crate::client::models::Repository;

/// Repository display model for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RepoDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    /// License key, or `--` when unlicensed
    #[tabled(rename = "LICENSE")]
    pub license: String,

    #[tabled(rename = "FORKS")]
    pub forks: String,

    /// Creation date (YYYY-MM-DD)
    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<Repository> for RepoDisplay {
    fn from(repo: Repository) -> Self {
        let license = repo.license_key().unwrap_or(NONE).to_string();

        let forks = repo
            .extra
            .get("forks")
            .and_then(|v| v.as_u64())
            .map(|n| n.to_string())
            .unwrap_or_else(|| NONE.to_string());

        let created = repo
            .extra
            .get("created_at")
            .and_then(|v| v.as_str())
            .map(format_date)
            .unwrap_or_else(|| NONE.to_string());

        Self {
            name: repo.name,
            license,
            forks,
            created,
        }
    }
}

/// Reduce an RFC 3339 timestamp to its date; unparseable input is shown as-is
fn format_date(timestamp: &str) -> String {
    match timestamp.parse::<DateTime<Utc>>() {
        Ok(dt) => dt.format("%Y-%m-%d").to_string(),
        Err(_) => timestamp.to_string(),
    }
}
