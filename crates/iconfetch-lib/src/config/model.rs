use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_MANIFEST_PATH: &str = "icon.json";
pub const DEFAULT_OUTPUT_DIR: &str = "icon";
pub const DEFAULT_BASE_URL: &str = "https://img.gamewith.jp/article_tools/uma-musume/gacha/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub remote: RemoteConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RemoteConfig {
    /// Icons are fetched from `<base_url>/<identifier>`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout, covering connect and body transfer
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST_PATH)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
            output_dir: default_output_dir(),
            remote: RemoteConfig::default(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
