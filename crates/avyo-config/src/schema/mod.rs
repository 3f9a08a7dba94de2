//! Configuration schema types for Avyo.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod avatar;
mod chat;
mod sequence;
mod system;

pub use avatar::*;
pub use chat::*;
pub use sequence::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Avyo.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct AvyoConfig {
    pub avatar: AvatarConfig,
    pub sequence: SequenceConfig,
    pub chat: ChatConfig,
    pub performance: PerformanceConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
