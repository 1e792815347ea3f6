use crate::config::{DEFAULT_CATALOG_PATH, DEFAULT_KEYWORD, DEFAULT_REPOSITORY};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "appcast",
    about = "Sync an AltStore-style source catalog with the latest matching GitHub release",
    version,
    author
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the latest matching release and rewrite the catalog file
    Sync {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Report the latest matching release without touching the catalog
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args, Debug)]
pub struct SourceArgs {
    /// GitHub repository to poll, as an owner/name pair
    #[arg(short, long, default_value = DEFAULT_REPOSITORY)]
    pub repository: String,

    /// Path to the source catalog JSON file
    #[arg(short, long, default_value = DEFAULT_CATALOG_PATH)]
    pub catalog: String,

    /// Keyword a release name must contain (case-sensitive)
    #[arg(short, long, default_value = DEFAULT_KEYWORD)]
    pub keyword: String,
}
