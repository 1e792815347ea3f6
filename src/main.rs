mod catalog;
mod cli;
mod config;
mod error;
mod github;
mod notes;
mod workflow;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use config::SyncConfig;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sync { source } => {
            SyncConfig::new(&source.repository, &source.catalog, &source.keyword)
                .and_then(|config| workflow::execute_sync(&config))
        }
        Commands::Check { source } => {
            SyncConfig::new(&source.repository, &source.catalog, &source.keyword)
                .and_then(|config| workflow::execute_check(&config))
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
