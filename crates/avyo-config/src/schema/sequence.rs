//! Conversation activity timing.

use serde::{Deserialize, Serialize};

/// Durations (seconds) of the activity cues raised around a chat exchange
/// and by avatar clicks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    pub listening: f64,
    pub thinking: f64,
    pub speaking: f64,
    pub wave: f64,
    pub click_think: f64,
    pub click_speak: f64,
    /// Probability that submitting a message also triggers a wave.
    pub wave_chance: f64,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            listening: 1.0,
            thinking: 1.5,
            speaking: 2.0,
            wave: 2.0,
            click_think: 3.0,
            click_speak: 2.0,
            wave_chance: 0.3,
        }
    }
}

impl SequenceConfig {
    /// Total length of the listening -> thinking -> speaking run.
    pub fn exchange_duration(&self) -> f64 {
        self.listening + self.thinking + self.speaking
    }
}
