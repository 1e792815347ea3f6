use crate::catalog::{CatalogUpdater, SourceDocument};
use crate::catalog::updater::derive_versions;
use crate::config::SyncConfig;
use crate::error::Result;
use crate::github::ReleaseClient;
use colored::Colorize;

/// Run the full pipeline: fetch the latest matching release and rewrite the
/// catalog file.
pub fn execute_sync(config: &SyncConfig) -> Result<()> {
    println!(
        "{}",
        "Syncing source catalog with the latest release...".cyan().bold()
    );

    println!("\n{}", "1. Fetching releases...".yellow());
    let client = ReleaseClient::new()?;
    let release = client.latest_matching(&config.repository, &config.keyword)?;
    println!(
        "{}",
        format!("✓ Found release '{}' ({})", release.name, release.tag_name).green()
    );

    println!("\n{}", "2. Updating catalog...".yellow());
    let outcome = CatalogUpdater::new(config).apply(&release)?;
    println!(
        "{}",
        format!(
            "✓ {} now points at version {}",
            config.catalog_path.display(),
            outcome.version
        )
        .green()
    );

    if outcome.news_added {
        println!(
            "{}",
            format!("✓ News entry 'release-{}' added", outcome.full_version).green()
        );
    } else {
        println!(
            "   News entry 'release-{}' already present, skipping",
            outcome.full_version
        );
    }

    println!("\n{}", "✨ Catalog updated successfully!".green().bold());

    Ok(())
}

/// Fetch the latest matching release and report what `sync` would do, without
/// writing anything.
pub fn execute_check(config: &SyncConfig) -> Result<()> {
    println!("{}", "Checking for a new release...".cyan().bold());

    println!("\n{}", "1. Fetching releases...".yellow());
    let client = ReleaseClient::new()?;
    let release = client.latest_matching(&config.repository, &config.keyword)?;
    let (full_version, version) = derive_versions(&release.tag_name)?;
    println!(
        "{}",
        format!("✓ Latest matching release: '{}' ({})", release.name, full_version).green()
    );

    println!("\n{}", "2. Reading catalog...".yellow());
    let document = SourceDocument::load(&config.catalog_path)?;
    let current = &document.apps[0].version;

    if *current == version {
        println!(
            "{}",
            format!("✓ Catalog is up to date ({})", current).green()
        );
    } else {
        println!(
            "{}",
            format!(
                "→ Update available: {} → {} (run `appcast sync` to apply)",
                current, version
            )
            .yellow()
            .bold()
        );
    }

    Ok(())
}
