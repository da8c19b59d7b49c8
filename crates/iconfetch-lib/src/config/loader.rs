use super::Config;
use crate::error::IconFetchError;
use config::Config as ConfigBuilder;

/// Loads the configuration file, falling back to built-in defaults when no file is given.
pub fn load_config(config_path: Option<&str>) -> Result<Config, IconFetchError> {
    let Some(config_path) = config_path else {
        return Ok(Config::default());
    };

    tracing::debug!("Loading configuration from {}", config_path);
    let config_builder = ConfigBuilder::builder()
        .add_source(config::File::with_name(config_path))
        .build()?;

    config_builder.try_deserialize().map_err(Into::into)
}
