//! Recorded GitHub payloads for the `google` organization
//!
//! The JSON lives under `tests/fixtures/` so the CLI tests can serve the same
//! documents from a mock HTTP server.

use serde_json::Value;

use super::mock::MockFetcher;

/// Organization endpoint the fixture payload was recorded from
pub const ORG_URL: &str = "https://api.github.com/orgs/google";

/// `repos_url` advertised by the fixture organization payload
pub const REPOS_URL: &str = "https://api.github.com/orgs/google/repos";

const ORG_PAYLOAD: &str = include_str!("../../tests/fixtures/google_org.json");
const REPOS_PAYLOAD: &str = include_str!("../../tests/fixtures/google_repos.json");

/// Organization payload
pub fn org_payload() -> Value {
    serde_json::from_str(ORG_PAYLOAD).expect("fixture google_org.json is valid JSON")
}

/// Repository listing payload
pub fn repos_payload() -> Value {
    serde_json::from_str(REPOS_PAYLOAD).expect("fixture google_repos.json is valid JSON")
}

/// Every repository name in the listing, in order
pub fn expected_repos() -> Vec<&'static str> {
    vec![
        "episodes.dart",
        "cpp-netlib",
        "dagger",
        "ios-webkit-debug-proxy",
        "google.github.io",
        "kratu",
        "build-debian-cloud",
        "traceur-compiler",
        "firmata.py",
    ]
}

/// Repositories licensed `apache-2.0`
pub fn apache2_repos() -> Vec<&'static str> {
    vec!["dagger", "kratu", "traceur-compiler", "firmata.py"]
}

/// Mock fetcher serving both fixture endpoints
pub async fn google_fetcher() -> MockFetcher {
    MockFetcher::new()
        .with_response(ORG_URL, org_payload())
        .await
        .with_response(REPOS_URL, repos_payload())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_org_points_at_fixture_repos() {
        assert_eq!(org_payload()["repos_url"], REPOS_URL);
    }

    #[test]
    fn test_fixture_repo_names_match_expected() {
        let names: Vec<String> = repos_payload()
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, expected_repos());
    }
}
