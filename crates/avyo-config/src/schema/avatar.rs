//! Avatar rendering configuration types.

use serde::{Deserialize, Serialize};

/// Visual variant of the avatar. Every skin shares one animation contract
/// and differs only in motion amplitudes and palette.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum AvatarSkin {
    #[default]
    Cartoon,
    Human,
    Robot,
}

/// Blink timing. Intervals and durations are in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlinkConfig {
    pub min_interval: f64,
    pub max_interval: f64,
    pub close_duration: f64,
    pub open_duration: f64,
    /// Eye openness at the bottom of a blink.
    pub closed_openness: f64,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            min_interval: 2.0,
            max_interval: 6.0,
            close_duration: 0.08,
            open_duration: 0.12,
            closed_openness: 0.05,
        }
    }
}

impl BlinkConfig {
    /// Longest time from a reset to the end of the next blink cycle. The
    /// waiting time is drawn short enough that the blink ends by
    /// `max_interval` unless the interval cannot hold a full blink.
    pub fn worst_case_cycle(&self) -> f64 {
        let blink = self.close_duration + self.open_duration;
        self.max_interval.max(self.min_interval + blink)
    }
}

/// Avatar configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    pub enabled: bool,
    pub skin: AvatarSkin,
    /// Fixed seed for the blink interval generator. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub blink: BlinkConfig,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            skin: AvatarSkin::Cartoon,
            seed: None,
            blink: BlinkConfig::default(),
        }
    }
}
