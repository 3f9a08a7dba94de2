//! Reading and parsing config files.

use crate::schema::AvyoConfig;
use crate::validation;
use avyo_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse TOML text. Keys left out take their defaults.
pub fn parse_config(content: &str) -> Result<AvyoConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load one config file.
///
/// Out-of-range values only produce a warning here; callers that need a
/// valid config run [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<AvyoConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let config = parse_config(&content).map_err(|e| match e {
        ConfigError::ParseError(msg) => {
            ConfigError::ParseError(format!("{}: {msg}", path.display()))
        }
        other => other,
    })?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "config has out-of-range values: {e}");
    }
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load from [`default_config_path`], writing the template on first run.
pub fn load_default() -> Result<AvyoConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(AvyoConfig::default())
        }
        loaded => loaded,
    }
}
