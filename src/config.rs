use crate::error::{AppcastError, Result};
use std::path::PathBuf;
use url::Url;

/// Repository the original updater script was written for.
pub const DEFAULT_REPOSITORY: &str = "Balackburn/YTLitePlus";
pub const DEFAULT_CATALOG_PATH: &str = "apps.json";
pub const DEFAULT_KEYWORD: &str = "YTLitePlus";

/// The configuration triple driving a single run: which repository to poll,
/// which catalog file to rewrite, and which keyword selects the release.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub repository: String,
    pub catalog_path: PathBuf,
    pub keyword: String,
}

impl SyncConfig {
    pub fn new(repository: &str, catalog_path: &str, keyword: &str) -> Result<Self> {
        if keyword.trim().is_empty() {
            return Err(AppcastError::Config(
                "Keyword must be a non-empty string".to_string(),
            ));
        }

        Self::validate_repository(repository)?;

        Ok(Self {
            repository: repository.to_string(),
            catalog_path: PathBuf::from(catalog_path),
            keyword: keyword.to_string(),
        })
    }

    /// Repository identifiers are `owner/name` pairs that must form a valid
    /// GitHub URL path.
    fn validate_repository(repository: &str) -> Result<()> {
        let Some((owner, name)) = repository.split_once('/') else {
            return Err(AppcastError::Config(format!(
                "Repository '{}' must be an owner/name pair",
                repository
            )));
        };

        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(AppcastError::Config(format!(
                "Repository '{}' must be an owner/name pair",
                repository
            )));
        }

        // The url crate percent-encodes unusual characters instead of
        // rejecting them, so a changed path means the identifier was not
        // URL-safe to begin with.
        let url = format!("https://github.com/{}", repository);
        let expected_path = format!("/{}", repository);
        match Url::parse(&url) {
            Ok(parsed)
                if parsed.host_str() == Some("github.com") && parsed.path() == expected_path =>
            {
                Ok(())
            }
            _ => Err(AppcastError::Config(format!(
                "Repository '{}' does not form a valid GitHub URL",
                repository
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_owner_name_pair() {
        let config = SyncConfig::new(DEFAULT_REPOSITORY, DEFAULT_CATALOG_PATH, DEFAULT_KEYWORD)
            .expect("default configuration should validate");
        assert_eq!(config.repository, "Balackburn/YTLitePlus");
        assert_eq!(config.catalog_path, PathBuf::from("apps.json"));
    }

    #[test]
    fn rejects_empty_keyword() {
        let err = SyncConfig::new(DEFAULT_REPOSITORY, DEFAULT_CATALOG_PATH, "  ").unwrap_err();
        assert!(matches!(err, AppcastError::Config(_)));
    }

    #[test]
    fn rejects_repository_without_slash() {
        let err = SyncConfig::new("YTLitePlus", DEFAULT_CATALOG_PATH, DEFAULT_KEYWORD).unwrap_err();
        assert!(matches!(err, AppcastError::Config(_)));
    }

    #[test]
    fn rejects_repository_with_extra_segments() {
        let err = SyncConfig::new("a/b/c", DEFAULT_CATALOG_PATH, DEFAULT_KEYWORD).unwrap_err();
        assert!(matches!(err, AppcastError::Config(_)));
    }

    #[test]
    fn rejects_repository_with_invalid_characters() {
        let err = SyncConfig::new("owner/na me", DEFAULT_CATALOG_PATH, DEFAULT_KEYWORD).unwrap_err();
        assert!(matches!(err, AppcastError::Config(_)));
    }
}
