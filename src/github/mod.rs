pub mod releases;

pub use releases::{Release, ReleaseAsset, ReleaseClient};
