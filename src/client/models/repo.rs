//! Repository models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Repository payload from an organization's `repos_url` listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name
    pub name: String,

    /// License metadata; GitHub sends `null` for unlicensed repositories
    #[serde(default)]
    pub license: Option<License>,

    /// Remaining payload fields, untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// License metadata nested under a repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    /// Short license identifier (e.g. "mit", "apache-2.0")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Repository {
    /// License key, if the repository declares one
    pub fn license_key(&self) -> Option<&str> {
        self.license.as_ref().and_then(|l| l.key.as_deref())
    }
}
