//! Cue and interaction definitions.

use avyo_common::ActivityState;
use std::fmt;

/// What raised a cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueSource {
    /// Listening/thinking/speaking run around a chat message.
    Exchange,
    /// Random wave accompanying a submitted message.
    MessageWave,
    /// Avatar click.
    Click,
    /// Session-start wave.
    Greeting,
}

/// One activity held over the half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    pub activity: ActivityState,
    pub start: f64,
    pub end: f64,
    pub source: CueSource,
}

impl Cue {
    pub fn is_active(&self, now: f64) -> bool {
        self.start <= now && now < self.end
    }

    pub fn is_expired(&self, now: f64) -> bool {
        now >= self.end
    }
}

/// Random reaction to the avatar being clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Wave,
    Think,
    Speak,
}

impl Interaction {
    pub const ALL: [Interaction; 3] = [Interaction::Wave, Interaction::Think, Interaction::Speak];

    pub fn activity(&self) -> ActivityState {
        match self {
            Interaction::Wave => ActivityState::Waving,
            Interaction::Think => ActivityState::Thinking,
            Interaction::Speak => ActivityState::Speaking,
        }
    }
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Interaction::Wave => "wave",
            Interaction::Think => "think",
            Interaction::Speak => "speak",
        })
    }
}
