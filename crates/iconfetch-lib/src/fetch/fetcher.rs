use super::plan::plan;
use super::types::{FetchItem, FetchOptions, FetchSummary};
use crate::error::IconFetchError;
use crate::manifest::Manifest;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use url::Url;

/// Sequential icon downloader sharing a single HTTP client across requests.
#[derive(Clone, Debug)]
pub struct IconFetcher {
    client: reqwest::Client,
}

impl IconFetcher {
    pub fn new(options: &FetchOptions) -> Result<Self, IconFetchError> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Downloads one icon into `<output_dir>/<identifier>`, replacing any existing file.
    ///
    /// Returns the output path and the number of bytes written.
    pub async fn fetch_one(
        &self,
        item: &FetchItem,
        output_dir: &Path,
    ) -> Result<(PathBuf, u64), IconFetchError> {
        let download_error = |source: reqwest::Error| IconFetchError::IconDownload {
            collection: item.collection,
            identifier: item.identifier.clone(),
            url: item.url.to_string(),
            source,
        };
        let output_path = output_dir.join(&item.identifier);
        let write_error = |source: std::io::Error| IconFetchError::IconWrite {
            identifier: item.identifier.clone(),
            path: output_path.clone(),
            source,
        };

        tracing::debug!(
            collection = %item.collection,
            identifier = %item.identifier,
            url = %item.url,
            "Requesting"
        );
        let response = self
            .client
            .get(item.url.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(download_error)?;

        // The file is only created once the server has answered with a success status.
        let file = tokio::fs::File::create(&output_path)
            .await
            .map_err(write_error)?;
        let mut writer = tokio::io::BufWriter::new(file);

        let mut body = response.bytes_stream();
        let mut written = 0u64;
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(download_error)?;
            writer.write_all(&chunk).await.map_err(write_error)?;
            written += chunk.len() as u64;
        }
        writer.flush().await.map_err(write_error)?;

        tracing::trace!(
            identifier = %item.identifier,
            bytes = written,
            output = %output_path.display(),
            "Flushed"
        );
        Ok((output_path, written))
    }
}

async fn ensure_output_dir(output_dir: &Path) -> Result<(), IconFetchError> {
    let metadata = tokio::fs::metadata(output_dir)
        .await
        .map_err(|e| IconFetchError::OutputDirectory {
            path: output_dir.to_path_buf(),
            reason: e.to_string(),
        })?;
    if !metadata.is_dir() {
        return Err(IconFetchError::OutputDirectory {
            path: output_dir.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }
    Ok(())
}

/// Downloads every icon in the manifest, support icons first, one request at a time.
///
/// The output directory must already exist. The first failing request or write
/// aborts the run; files written before it stay on disk.
pub async fn fetch_all(
    manifest: &Manifest,
    output_dir: impl AsRef<Path>,
    base_url: &Url,
    options: &FetchOptions,
) -> Result<FetchSummary, IconFetchError> {
    let output_dir = output_dir.as_ref();
    ensure_output_dir(output_dir).await?;

    let items = plan(manifest, base_url)?;
    let fetcher = IconFetcher::new(options)?;
    tracing::info!(
        "Fetching {} icons ({} support, {} chara records) into {}",
        items.len(),
        manifest.support.len(),
        manifest.chara.len(),
        output_dir.display()
    );

    let mut summary = FetchSummary::default();
    for item in &items {
        let (output_path, bytes) = fetcher.fetch_one(item, output_dir).await?;
        tracing::info!(
            collection = %item.collection,
            identifier = %item.identifier,
            name = item.name.as_deref().unwrap_or_default(),
            output = %output_path.display(),
            bytes,
            "Fetched"
        );
        summary.total_bytes += bytes;
        summary.written.push(output_path);
    }

    Ok(summary)
}

/// Loads the manifest at `manifest_path` and fetches all of its icons.
///
/// Manifest errors are reported before any request is made.
pub async fn fetch_manifest_file(
    manifest_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    base_url: &Url,
    options: &FetchOptions,
) -> Result<FetchSummary, IconFetchError> {
    let manifest_path = manifest_path.as_ref();
    tracing::info!("Loading manifest from {}", manifest_path.display());
    let manifest = Manifest::load_from_file(manifest_path)?;
    fetch_all(&manifest, output_dir, base_url, options).await
}
