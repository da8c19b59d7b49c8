use crate::cli::params::FetchParams;
use crate::error::IconFetchError;
use crate::fetch::fetch_all;

pub async fn run_fetch(params: FetchParams) -> Result<(), IconFetchError> {
    tracing::info!(
        "Fetching icons listed in {} from {}",
        params.manifest_path.display(),
        params.base_url
    );

    let summary = fetch_all(
        &params.manifest,
        &params.output_dir,
        &params.base_url,
        &params.options,
    )
    .await?;

    tracing::info!(
        "Fetch completed successfully: {} files, {} bytes written to {}",
        summary.written.len(),
        summary.total_bytes,
        params.output_dir.display()
    );
    Ok(())
}
