use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::manifest::Collection;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchItem {
    pub collection: Collection,
    pub identifier: String,
    /// Display name of the owning record, if the manifest has one
    pub name: Option<String>,
    pub url: Url,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Applied to every request, from connect until the body is fully read
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchSummary {
    /// Output files in the order they were written
    pub written: Vec<PathBuf>,
    pub total_bytes: u64,
}
