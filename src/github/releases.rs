use crate::error::{AppcastError, Result};
use jiff::Timestamp;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const GITHUB_API: &str = "https://api.github.com";
const GITHUB_JSON: &str = "application/vnd.github+json";

/// A published release as returned by the GitHub releases API.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub browser_download_url: String,
    pub size: u64,
}

impl Release {
    /// Parsed publication instant, or `None` when the timestamp is missing
    /// or not ISO-8601.
    fn published(&self) -> Option<Timestamp> {
        self.published_at.parse().ok()
    }
}

/// GitHub releases API client
pub struct ReleaseClient {
    client: Client,
}

impl ReleaseClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("appcast/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch every release of `repository` and return the most recently
    /// published one whose name contains `keyword` (case-sensitive).
    ///
    /// Drafts and prereleases are deliberately not filtered out; the keyword
    /// is the only selector.
    pub fn latest_matching(&self, repository: &str, keyword: &str) -> Result<Release> {
        let releases = self.fetch_releases(repository)?;
        select_release(releases, keyword)
    }

    fn fetch_releases(&self, repository: &str) -> Result<Vec<Release>> {
        let endpoint = releases_endpoint(repository)?;

        let releases = self
            .client
            .get(endpoint)
            .header(reqwest::header::ACCEPT, GITHUB_JSON)
            .send()?
            .error_for_status()?
            .json()?;

        Ok(releases)
    }
}

fn releases_endpoint(repository: &str) -> Result<Url> {
    let raw = format!("{}/repos/{}/releases", GITHUB_API, repository);
    Url::parse(&raw).map_err(|e| {
        AppcastError::Config(format!(
            "Repository '{}' does not form a valid API URL: {}",
            repository, e
        ))
    })
}

/// Order releases newest-first and pick the first whose name contains the
/// keyword. Releases with unparsable timestamps sort last; ties fall back to
/// the raw timestamp string.
fn select_release(mut releases: Vec<Release>, keyword: &str) -> Result<Release> {
    releases.sort_by(|a, b| {
        (b.published(), &b.published_at).cmp(&(a.published(), &a.published_at))
    });

    releases
        .into_iter()
        .find(|release| release.name.contains(keyword))
        .ok_or_else(|| AppcastError::ReleaseNotFound(keyword.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(name: &str, published_at: &str) -> Release {
        Release {
            tag_name: format!("v-{}", name),
            name: name.to_string(),
            published_at: published_at.to_string(),
            body: String::new(),
            assets: Vec::new(),
        }
    }

    #[test]
    fn selects_latest_matching_release() {
        let releases = vec![
            release("MyApp 1.0.0", "2024-01-10T12:00:00Z"),
            release("MyApp 1.2.0", "2024-03-01T09:30:00Z"),
            release("MyApp 1.1.0", "2024-02-05T18:45:00Z"),
        ];

        let selected = select_release(releases, "MyApp").unwrap();
        assert_eq!(selected.name, "MyApp 1.2.0");
    }

    #[test]
    fn skips_releases_without_keyword() {
        let releases = vec![
            release("Nightly build", "2024-04-01T00:00:00Z"),
            release("MyApp 1.0.0", "2024-01-10T12:00:00Z"),
        ];

        let selected = select_release(releases, "MyApp").unwrap();
        assert_eq!(selected.name, "MyApp 1.0.0");
    }

    #[test]
    fn keyword_match_is_case_sensitive() {
        let releases = vec![release("myapp 1.0.0", "2024-01-10T12:00:00Z")];
        let err = select_release(releases, "MyApp").unwrap_err();
        assert!(matches!(err, AppcastError::ReleaseNotFound(_)));
    }

    #[test]
    fn errors_when_no_release_matches() {
        let err = select_release(Vec::new(), "MyApp").unwrap_err();
        assert!(matches!(err, AppcastError::ReleaseNotFound(_)));
    }

    #[test]
    fn unparsable_timestamps_sort_last() {
        let releases = vec![
            release("MyApp broken", ""),
            release("MyApp 1.0.0", "2023-12-25T08:00:00Z"),
        ];

        let selected = select_release(releases, "MyApp").unwrap();
        assert_eq!(selected.name, "MyApp 1.0.0");
    }

    #[test]
    fn builds_releases_endpoint() {
        let endpoint = releases_endpoint("Balackburn/YTLitePlus").unwrap();
        assert_eq!(
            endpoint.as_str(),
            "https://api.github.com/repos/Balackburn/YTLitePlus/releases"
        );
    }

    #[test]
    #[ignore] // Requires network access
    fn fetches_live_releases() {
        let client = ReleaseClient::new().unwrap();
        let release = client.latest_matching("Balackburn/YTLitePlus", "YTLitePlus");
        assert!(release.is_ok());
    }
}
