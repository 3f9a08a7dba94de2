//! Chat session configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Display name used when no user name is supplied.
    pub username: String,
    pub assistant_name: String,
    /// Simulated thinking delay of the built-in responder.
    pub reply_delay_ms: u32,
    /// Maximum number of messages kept in a session.
    pub history_limit: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            username: "Friend".into(),
            assistant_name: "Avyo".into(),
            reply_delay_ms: 1000,
            history_limit: 200,
        }
    }
}
