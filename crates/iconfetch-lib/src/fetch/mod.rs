mod fetcher;
mod plan;
mod types;

pub use fetcher::{IconFetcher, fetch_all, fetch_manifest_file};
pub use plan::{icon_url, parse_base_url, plan};
pub use types::{FetchItem, FetchOptions, FetchSummary};
