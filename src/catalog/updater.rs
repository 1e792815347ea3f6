use crate::catalog::document::{NewsEntry, SourceDocument};
use crate::config::SyncConfig;
use crate::error::{AppcastError, Result};
use crate::github::Release;
use crate::notes::NotesSanitizer;
use regex::Regex;
use serde_json::Map;

const NEWS_TINT_COLOR: &str = "#000000";
const NEWS_IMAGE_URL: &str =
    "https://raw.githubusercontent.com/Balackburn/YTLitePlusAltstore/main/screenshots/news/new_release.png";

/// What a sync run changed, for reporting.
#[derive(Debug)]
pub struct UpdateOutcome {
    pub version: String,
    pub full_version: String,
    pub news_added: bool,
}

/// Merges a fetched release into the catalog file.
///
/// The first app entry is always the update target; the news list is
/// append-only and deduplicated by identifier. Every failure is raised
/// before the single write at the end, so an erroring run leaves the file
/// untouched.
pub struct CatalogUpdater<'a> {
    config: &'a SyncConfig,
}

impl<'a> CatalogUpdater<'a> {
    pub fn new(config: &'a SyncConfig) -> Self {
        Self { config }
    }

    pub fn apply(&self, release: &Release) -> Result<UpdateOutcome> {
        let mut document = SourceDocument::load(&self.config.catalog_path)?;

        let (full_version, version) = derive_versions(&release.tag_name)?;

        let asset = release
            .assets
            .first()
            .ok_or_else(|| AppcastError::EmptyAssetList(release.tag_name.clone()))?;

        let sanitizer = NotesSanitizer::new()?;

        let app = &mut document.apps[0];
        app.version = version.clone();
        app.version_date = release.published_at.clone();
        app.version_description = sanitizer.sanitize(&release.body);
        app.download_url = asset.browser_download_url.clone();
        app.size = asset.size;

        let news_added = self.append_news(&mut document, release, &full_version);

        document.save(&self.config.catalog_path)?;

        Ok(UpdateOutcome {
            version,
            full_version,
            news_added,
        })
    }

    /// Appends the announcement for this release unless an entry with the
    /// same identifier already exists. Existing entries are never mutated.
    fn append_news(
        &self,
        document: &mut SourceDocument,
        release: &Release,
        full_version: &str,
    ) -> bool {
        let identifier = format!("release-{}", full_version);

        if document.news.iter().any(|entry| entry.identifier == identifier) {
            return false;
        }

        document.news.push(NewsEntry {
            title: full_version.to_string(),
            identifier,
            caption: format!(
                "Version {} of {} just got released!",
                full_version, self.config.keyword
            ),
            date: release.published_at.clone(),
            tint_color: NEWS_TINT_COLOR.to_string(),
            image_url: NEWS_IMAGE_URL.to_string(),
            notify: true,
            url: format!(
                "https://github.com/{}/releases/tag/{}",
                self.config.repository, release.tag_name
            ),
            extra: Map::new(),
        });

        true
    }
}

/// Derive `(full_version, version)` from a release tag: one leading `v` is
/// stripped, then the first dotted numeric triple is the display version.
pub fn derive_versions(tag: &str) -> Result<(String, String)> {
    let full_version = tag.strip_prefix('v').unwrap_or(tag).to_string();

    let triple = Regex::new(r"\d+\.\d+\.\d+")?;
    let version = triple
        .find(&full_version)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| AppcastError::VersionNotFound(tag.to_string()))?;

    Ok((full_version, version))
}
