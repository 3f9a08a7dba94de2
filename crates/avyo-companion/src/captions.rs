//! Status line shown under the avatar.

use avyo_common::{ActivityFlags, MoodLabel};

pub const LISTENING_CAPTION: &str = "I'm listening... 👂";
pub const THINKING_CAPTION: &str = "Let me think about that... 🤔";
pub const SPEAKING_CAPTION: &str = "Here's what I think! 💬";

/// Caption for the current flags, falling back to a mood line when idle.
///
/// Flags are checked listening first, so a raised listening flag wins even
/// when the avatar pose shows a higher-priority activity.
pub fn caption(flags: &ActivityFlags, mood: MoodLabel) -> &'static str {
    if flags.listening {
        LISTENING_CAPTION
    } else if flags.thinking {
        THINKING_CAPTION
    } else if flags.speaking {
        SPEAKING_CAPTION
    } else {
        match mood {
            MoodLabel::Sad => "It seems you're feeling down. How can I cheer you up today?",
            MoodLabel::Angry => "I notice you're frustrated. Let's take a deep breath together.",
            MoodLabel::Happy | MoodLabel::Neutral => {
                "How can I assist you today? Click me for a surprise!"
            }
        }
    }
}
