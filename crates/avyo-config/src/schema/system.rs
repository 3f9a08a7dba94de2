//! System configuration types: performance and logging.

use serde::{Deserialize, Serialize};

/// Frame pacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    pub frame_rate: u32,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self { frame_rate: 60 }
    }
}

impl PerformanceConfig {
    /// Fixed frame step in seconds.
    pub fn frame_step(&self) -> f64 {
        1.0 / f64::from(self.frame_rate.max(1))
    }
}

/// Log level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` directive for this level.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "avyo=debug",
            LogLevel::Info => "avyo=info",
            LogLevel::Warning => "avyo=warn",
            LogLevel::Error => "avyo=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
