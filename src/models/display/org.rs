//! Organization display model

use serde::Serialize;
use tabled::Tabled;

use super::NONE;
use crate::client::models::Organization;

/// Organization display model for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    #[tabled(rename = "LOGIN")]
    pub login: String,

    /// Display name, when the organization sets one
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "PUBLIC REPOS")]
    pub public_repos: String,

    #[tabled(rename = "REPOS URL")]
    pub repos_url: String,
}

impl From<&Organization> for OrgDisplay {
    fn from(org: &Organization) -> Self {
        let name = org
            .extra
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or(NONE)
            .to_string();

        let public_repos = org
            .extra
            .get("public_repos")
            .and_then(|v| v.as_u64())
            .map(|n| n.to_string())
            .unwrap_or_else(|| NONE.to_string());

        Self {
            login: org.login.clone(),
            name,
            public_repos,
            repos_url: org.repos_url().unwrap_or(NONE).to_string(),
        }
    }
}
