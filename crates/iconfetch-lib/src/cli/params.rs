use crate::fetch::FetchOptions;
use crate::manifest::Manifest;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone)]
pub struct FetchParams {
    pub manifest: Manifest,
    pub manifest_path: PathBuf,
    pub output_dir: PathBuf,
    pub base_url: Url,
    pub options: FetchOptions,
}

#[derive(Debug, Clone)]
pub struct PlanParams {
    pub manifest: Manifest,
    pub base_url: Url,
}
