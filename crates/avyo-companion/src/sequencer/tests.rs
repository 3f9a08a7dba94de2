//! Tests for the activity sequencer.

use super::*;
use avyo_common::{ActivityState, MoodLabel};
use avyo_config::schema::SequenceConfig;

fn no_wave() -> SequenceConfig {
    SequenceConfig {
        wave_chance: 0.0,
        ..SequenceConfig::default()
    }
}

#[test]
fn idle_before_any_message() {
    let mut seq = ActivitySequencer::new(no_wave(), Some(1));
    let signal = seq.signal_at(0.0);
    assert_eq!(signal.activity(), ActivityState::Idle);
    assert_eq!(signal.mood, MoodLabel::Neutral);
}

#[test]
fn exchange_runs_listening_thinking_speaking() {
    let mut seq = ActivitySequencer::new(no_wave(), Some(1));
    assert!(!seq.submit(10.0, MoodLabel::Happy));

    assert_eq!(seq.signal_at(10.0).activity(), ActivityState::Listening);
    assert_eq!(seq.signal_at(10.9).activity(), ActivityState::Listening);
    assert_eq!(seq.signal_at(11.0).activity(), ActivityState::Thinking);
    assert_eq!(seq.signal_at(12.4).activity(), ActivityState::Thinking);
    assert_eq!(seq.signal_at(12.5).activity(), ActivityState::Speaking);
    assert_eq!(seq.signal_at(14.4).activity(), ActivityState::Speaking);
    assert_eq!(seq.signal_at(14.5).activity(), ActivityState::Idle);
}

#[test]
fn mood_lands_when_thinking_ends() {
    let mut seq = ActivitySequencer::new(no_wave(), Some(1));
    seq.submit(0.0, MoodLabel::Sad);
    assert_eq!(seq.signal_at(0.5).mood, MoodLabel::Neutral);
    assert_eq!(seq.signal_at(2.4).mood, MoodLabel::Neutral);
    assert_eq!(seq.signal_at(2.5).mood, MoodLabel::Sad);
    assert_eq!(seq.signal_at(60.0).mood, MoodLabel::Sad);
}

#[test]
fn new_message_replaces_exchange_in_progress() {
    let mut seq = ActivitySequencer::new(no_wave(), Some(1));
    seq.submit(0.0, MoodLabel::Sad);
    seq.signal_at(1.2);
    seq.submit(1.5, MoodLabel::Angry);
    assert_eq!(seq.signal_at(1.6).activity(), ActivityState::Listening);
    assert_eq!(seq.signal_at(2.6).mood, MoodLabel::Neutral);
    assert_eq!(seq.signal_at(4.0).mood, MoodLabel::Angry);
    assert!(seq.is_busy(4.0));
    assert!(!seq.is_busy(6.0));
}

#[test]
fn certain_wave_overlays_exchange() {
    let config = SequenceConfig {
        wave_chance: 1.0,
        ..SequenceConfig::default()
    };
    let mut seq = ActivitySequencer::new(config, Some(1));
    assert!(seq.submit(0.0, MoodLabel::Neutral));
    let signal = seq.signal_at(0.5);
    assert!(signal.flags.waving);
    assert!(signal.flags.listening);
    assert_eq!(signal.activity(), ActivityState::Waving);
    let signal = seq.signal_at(2.1);
    assert!(!signal.flags.waving);
    assert_eq!(signal.activity(), ActivityState::Thinking);
}

#[test]
fn invalid_wave_chance_never_waves() {
    let config = SequenceConfig {
        wave_chance: f64::NAN,
        ..SequenceConfig::default()
    };
    let mut seq = ActivitySequencer::new(config, Some(1));
    for i in 0..20 {
        assert!(!seq.submit(f64::from(i) * 10.0, MoodLabel::Neutral));
    }
}

#[test]
fn click_raises_matching_activity() {
    let mut seq = ActivitySequencer::new(no_wave(), Some(3));
    for i in 0..30 {
        let now = f64::from(i) * 10.0;
        let pick = seq.click(now);
        let signal = seq.signal_at(now + 0.1);
        assert_eq!(signal.activity(), pick.activity());
    }
}

#[test]
fn click_think_lasts_three_seconds() {
    let mut seq = ActivitySequencer::new(no_wave(), Some(3));
    let mut now = 0.0;
    loop {
        if seq.click(now) == Interaction::Think {
            break;
        }
        now += 10.0;
    }
    assert!(seq.signal_at(now + 2.9).flags.thinking);
    assert!(!seq.signal_at(now + 3.0).flags.thinking);
}

#[test]
fn greeting_waves_for_configured_time() {
    let mut seq = ActivitySequencer::new(no_wave(), Some(1));
    seq.greet(0.0);
    assert_eq!(seq.signal_at(1.9).activity(), ActivityState::Waving);
    assert_eq!(seq.signal_at(2.0).activity(), ActivityState::Idle);
}

#[test]
fn expired_cues_are_pruned() {
    let mut seq = ActivitySequencer::new(no_wave(), Some(1));
    seq.submit(0.0, MoodLabel::Happy);
    seq.greet(0.0);
    assert_eq!(seq.cues().len(), 4);
    seq.signal_at(100.0);
    assert!(seq.cues().is_empty());
}

#[test]
fn same_seed_same_reactions() {
    let mut a = ActivitySequencer::new(SequenceConfig::default(), Some(99));
    let mut b = ActivitySequencer::new(SequenceConfig::default(), Some(99));
    for i in 0..50 {
        let now = f64::from(i) * 5.0;
        assert_eq!(a.submit(now, MoodLabel::Neutral), b.submit(now, MoodLabel::Neutral));
        assert_eq!(a.click(now + 1.0), b.click(now + 1.0));
    }
}
