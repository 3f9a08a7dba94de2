//! Validation for the smaller sections: sequence, chat, and performance.

use crate::schema::AvyoConfig;

use super::helpers::check_range;

/// Longest cue any activity may hold, in seconds.
const MAX_CUE_SECONDS: f64 = 30.0;

pub(crate) fn validate_sequence(errors: &mut Vec<String>, config: &AvyoConfig) {
    let seq = &config.sequence;
    let cues = [
        ("sequence.listening", seq.listening),
        ("sequence.thinking", seq.thinking),
        ("sequence.speaking", seq.speaking),
        ("sequence.wave", seq.wave),
        ("sequence.click_think", seq.click_think),
        ("sequence.click_speak", seq.click_speak),
    ];
    for (key, seconds) in cues {
        check_range(errors, key, seconds, 0.0..=MAX_CUE_SECONDS);
    }
    check_range(errors, "sequence.wave_chance", seq.wave_chance, 0.0..=1.0);
}

pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &AvyoConfig) {
    let chat = &config.chat;
    if chat.assistant_name.trim().is_empty() {
        errors.push("chat.assistant_name must not be empty".into());
    }
    check_range(errors, "chat.reply_delay_ms", chat.reply_delay_ms, 0..=10_000);
    check_range(errors, "chat.history_limit", chat.history_limit, 10..=10_000);
}

pub(crate) fn validate_performance(errors: &mut Vec<String>, config: &AvyoConfig) {
    check_range(
        errors,
        "performance.frame_rate",
        config.performance.frame_rate,
        1..=240,
    );
}
