//! Organization models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Organization payload from `GET /orgs/{org}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization login (its URL slug)
    pub login: String,

    /// Every other payload field, untouched (including `repos_url`)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Organization {
    /// URL listing the organization's public repositories.
    ///
    /// `None` when the field is absent, `null`, or not a string.
    pub fn repos_url(&self) -> Option<&str> {
        self.extra.get("repos_url").and_then(Value::as_str)
    }
}
