use std::path::PathBuf;
use thiserror::Error;

use crate::manifest::Collection;

#[derive(Error, Debug)]
pub enum IconFetchError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to load manifest from {path}: {reason}")]
    ManifestLoad { path: PathBuf, reason: String },

    #[error("Manifest validation failed for {path}: {details}")]
    ManifestValidation { path: PathBuf, details: String },

    #[error("Output directory {path} is not usable: {reason}")]
    OutputDirectory { path: PathBuf, reason: String },

    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid command line arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("Failed to download {collection} icon {identifier} from {url}: {source}")]
    IconDownload {
        collection: Collection,
        identifier: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to write icon {identifier} to {path}: {source}")]
    IconWrite {
        identifier: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}
