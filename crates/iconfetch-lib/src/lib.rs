pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod manifest;

pub use config::Config;
pub use error::IconFetchError;
pub use fetch::{FetchOptions, fetch_all, fetch_manifest_file};
pub use manifest::Manifest;
