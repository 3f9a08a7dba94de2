//! Where the config file lives.

use avyo_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "AVYO_CONFIG";

/// `$AVYO_CONFIG` when set, otherwise `<config_dir>/avyo/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join("avyo").join("config.toml"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Write the commented template to `path` unless a file is already there.
///
/// Returns whether a file was written.
pub fn create_default_config(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }
    let io_error = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(io_error)?;
    }
    std::fs::write(path, default_config_toml()).map_err(io_error)?;

    info!(path = %path.display(), "default config written");
    Ok(true)
}
