use serde::{Deserialize, Serialize};
use std::fmt;

use super::MoodLabel;

/// Conversational activity driving the avatar, resolved once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityState {
    #[default]
    Idle,
    Listening,
    Thinking,
    Speaking,
    Waving,
}

impl ActivityState {
    /// Rank used when several activity flags are raised at once.
    pub fn priority(&self) -> u8 {
        match self {
            ActivityState::Idle => 0,
            ActivityState::Listening => 1,
            ActivityState::Thinking => 2,
            ActivityState::Speaking => 3,
            ActivityState::Waving => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityState::Idle => "idle",
            ActivityState::Listening => "listening",
            ActivityState::Thinking => "thinking",
            ActivityState::Speaking => "speaking",
            ActivityState::Waving => "waving",
        }
    }
}

impl fmt::Display for ActivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Independent activity flags as raised by the chat front end.
///
/// Several may be true at once (a wave overlaying a reply, for example);
/// [`ActivityFlags::resolve`] collapses them into a single state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityFlags {
    pub listening: bool,
    pub thinking: bool,
    pub speaking: bool,
    pub waving: bool,
}

impl ActivityFlags {
    /// Flags with exactly the given activity raised.
    pub fn only(state: ActivityState) -> Self {
        let mut flags = Self::default();
        flags.raise(state);
        flags
    }

    pub fn raise(&mut self, state: ActivityState) {
        match state {
            ActivityState::Idle => {}
            ActivityState::Listening => self.listening = true,
            ActivityState::Thinking => self.thinking = true,
            ActivityState::Speaking => self.speaking = true,
            ActivityState::Waving => self.waving = true,
        }
    }

    /// Highest-priority raised activity: waving > speaking > thinking > listening > idle.
    pub fn resolve(&self) -> ActivityState {
        if self.waving {
            ActivityState::Waving
        } else if self.speaking {
            ActivityState::Speaking
        } else if self.thinking {
            ActivityState::Thinking
        } else if self.listening {
            ActivityState::Listening
        } else {
            ActivityState::Idle
        }
    }
}

/// The bundle forwarded to the avatar every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Signal {
    pub flags: ActivityFlags,
    pub mood: MoodLabel,
}

impl Signal {
    pub fn new(flags: ActivityFlags, mood: MoodLabel) -> Self {
        Self { flags, mood }
    }

    pub fn activity(&self) -> ActivityState {
        self.flags.resolve()
    }
}
