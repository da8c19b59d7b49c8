use crate::cli::args::{Command, SourceOptions};
use crate::cli::params::{FetchParams, PlanParams};
use crate::config::load_config;
use crate::error::IconFetchError;
use crate::fetch::{FetchOptions, parse_base_url};
use crate::manifest::Manifest;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Fetch(FetchParams),
    Plan(PlanParams),
}

struct ResolvedSource {
    manifest: Manifest,
    manifest_path: PathBuf,
    output_dir: PathBuf,
    base_url: Url,
    options: FetchOptions,
}

fn resolve_source(source: SourceOptions) -> Result<ResolvedSource, IconFetchError> {
    let app_config = load_config(source.config_path.as_deref())?;

    let timeout_secs = source
        .timeout_secs
        .unwrap_or(app_config.remote.timeout_secs);
    if timeout_secs == 0 {
        return Err(IconFetchError::CliArgumentValidation {
            details: "timeout-secs must be greater than 0.".to_string(),
        });
    }

    let base_url = parse_base_url(
        source
            .base_url
            .as_deref()
            .unwrap_or(&app_config.remote.base_url),
    )?;

    let manifest_path = source
        .manifest_path
        .map(PathBuf::from)
        .unwrap_or(app_config.manifest_path);
    let output_dir = source
        .output_dir
        .map(PathBuf::from)
        .unwrap_or(app_config.output_dir);

    tracing::info!("Loading manifest from {}", manifest_path.display());
    let manifest = Manifest::load_from_file(&manifest_path)?;

    Ok(ResolvedSource {
        manifest,
        manifest_path,
        output_dir,
        base_url,
        options: FetchOptions {
            timeout: Duration::from_secs(timeout_secs),
        },
    })
}

pub fn resolve_command(command: Command) -> Result<ResolvedCommand, IconFetchError> {
    match command {
        Command::Fetch { source } => {
            let resolved = resolve_source(source)?;
            Ok(ResolvedCommand::Fetch(FetchParams {
                manifest: resolved.manifest,
                manifest_path: resolved.manifest_path,
                output_dir: resolved.output_dir,
                base_url: resolved.base_url,
                options: resolved.options,
            }))
        }
        Command::Plan { source } => {
            let resolved = resolve_source(source)?;
            Ok(ResolvedCommand::Plan(PlanParams {
                manifest: resolved.manifest,
                base_url: resolved.base_url,
            }))
        }
    }
}
