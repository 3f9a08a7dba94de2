//! Blink phase and timing definitions.

use avyo_config::schema::BlinkConfig;

/// Blink cycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkPhase {
    /// Eyes at baseline, waiting for the threshold.
    Waiting,
    /// Ramping toward closed.
    Closing,
    /// Ramping back to baseline.
    Opening,
}

/// Blink timing in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlinkTiming {
    pub min_interval: f64,
    pub max_interval: f64,
    pub close_duration: f64,
    pub open_duration: f64,
    pub closed_openness: f32,
}

impl Default for BlinkTiming {
    fn default() -> Self {
        Self::from_config(&BlinkConfig::default())
    }
}

impl BlinkTiming {
    /// Build from config, repairing values a renderer cannot use: the
    /// interval bounds are ordered and durations kept strictly positive.
    pub fn from_config(config: &BlinkConfig) -> Self {
        let lo = config.min_interval.max(0.0);
        let hi = config.max_interval.max(0.0);
        Self {
            min_interval: lo.min(hi),
            max_interval: lo.max(hi),
            close_duration: config.close_duration.max(1e-3),
            open_duration: config.open_duration.max(1e-3),
            closed_openness: config.closed_openness.clamp(0.0, 1.0) as f32,
        }
    }
}
