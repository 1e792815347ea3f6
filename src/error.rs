use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppcastError {
    #[error("No release found containing the keyword '{0}'")]
    ReleaseNotFound(String),

    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed catalog: {0}")]
    MalformedCatalog(String),

    #[error("No dotted version found in tag '{0}'")]
    VersionNotFound(String),

    #[error("Release '{0}' has no downloadable assets")]
    EmptyAssetList(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppcastError>;
