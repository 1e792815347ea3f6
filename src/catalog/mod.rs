pub mod document;
pub mod updater;

pub use document::{AppEntry, NewsEntry, SourceDocument};
pub use updater::{CatalogUpdater, UpdateOutcome};
