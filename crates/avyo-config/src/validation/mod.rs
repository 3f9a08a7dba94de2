//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod avatar;
mod helpers;
mod misc;

#[cfg(test)]
mod tests;

use crate::schema::AvyoConfig;
use avyo_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &AvyoConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    avatar::validate_blink(&mut errors, config);
    misc::validate_sequence(&mut errors, config);
    misc::validate_chat(&mut errors, config);
    misc::validate_performance(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
