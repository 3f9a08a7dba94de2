//! Tests for the full validation pipeline.

use super::*;
use crate::schema::AvyoConfig;

#[test]
fn default_config_validates() {
    let config = AvyoConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_inverted_blink_interval() {
    let mut config = AvyoConfig::default();
    config.avatar.blink.min_interval = 5.0;
    config.avatar.blink.max_interval = 3.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("avatar.blink.max_interval"));
}

#[test]
fn catches_blink_duration_out_of_range() {
    let mut config = AvyoConfig::default();
    config.avatar.blink.close_duration = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("avatar.blink.close_duration"));
}

#[test]
fn catches_nan_openness() {
    let mut config = AvyoConfig::default();
    config.avatar.blink.closed_openness = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("avatar.blink.closed_openness"));
}

#[test]
fn catches_negative_sequence_duration() {
    let mut config = AvyoConfig::default();
    config.sequence.thinking = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sequence.thinking"));
}

#[test]
fn catches_wave_chance_over_one() {
    let mut config = AvyoConfig::default();
    config.sequence.wave_chance = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sequence.wave_chance"));
}

#[test]
fn catches_empty_assistant_name() {
    let mut config = AvyoConfig::default();
    config.chat.assistant_name = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.assistant_name"));
}

#[test]
fn catches_frame_rate_zero() {
    let mut config = AvyoConfig::default();
    config.performance.frame_rate = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("performance.frame_rate"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = AvyoConfig::default();
    config.performance.frame_rate = 1000;
    config.chat.history_limit = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("performance.frame_rate"));
    assert!(err.contains("chat.history_limit"));
    assert!(err.contains("; "));
}
