use crate::error::{AppcastError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// An AltStore-style source document: a list of apps plus a news feed.
///
/// Only the fields this tool rewrites are modeled; everything else the
/// catalog carries (source name, bundle identifiers, screenshots, ...) is
/// kept in the flattened `extra` maps so a read-modify-write cycle preserves
/// it byte-for-byte in value terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    pub apps: Vec<AppEntry>,
    #[serde(default)]
    pub news: Vec<NewsEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppEntry {
    #[serde(default)]
    pub version: String,
    #[serde(default, rename = "versionDate")]
    pub version_date: String,
    #[serde(default, rename = "versionDescription")]
    pub version_description: String,
    #[serde(default, rename = "downloadURL")]
    pub download_url: String,
    #[serde(default)]
    pub size: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsEntry {
    pub title: String,
    pub identifier: String,
    pub caption: String,
    pub date: String,
    #[serde(rename = "tintColor")]
    pub tint_color: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub notify: bool,
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SourceDocument {
    /// Load and validate the catalog. A document without at least one app
    /// entry has nothing to update and is rejected up front.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let document: SourceDocument = serde_json::from_str(&contents).map_err(|e| {
            AppcastError::MalformedCatalog(format!("'{}' is not a valid catalog: {}", path.display(), e))
        })?;

        if document.apps.is_empty() {
            return Err(AppcastError::MalformedCatalog(format!(
                "'{}' contains no app entries",
                path.display()
            )));
        }

        Ok(document)
    }

    /// Rewrite the whole document, pretty-printed with 2-space indentation.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}
