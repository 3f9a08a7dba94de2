//! Avatar rigs: rigged skins or null.
//!
//! The active rig is selected by config.

mod null;
mod rigged;
mod types;

pub use null::*;
pub use rigged::*;
pub use types::*;

use avyo_config::schema::AvyoConfig;

/// Create the appropriate avatar from config.
pub fn create_avatar(config: &AvyoConfig) -> Box<dyn Avatar> {
    if !config.avatar.enabled {
        return Box::new(NullAvatar::new());
    }
    Box::new(RiggedAvatar::from_config(config))
}
