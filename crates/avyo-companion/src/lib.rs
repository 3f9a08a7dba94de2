//! Conversation side of the companion.
//!
//! Provides:
//! - Rule-based mood classification over single messages and histories
//! - The activity sequencer that turns chat events into timed avatar cues
//! - Chat sessions backed by a pluggable [`Responder`]
//! - Festival greetings and status captions

pub mod captions;
pub mod festival;
pub mod mood;
pub mod responder;
pub mod sequencer;
pub mod session;

pub use captions::caption;
pub use festival::{festival_avatar, festival_for, greeting, mood_avatar, Festival, Greeting};
pub use mood::{classify, classify_history, MoodLexicon, MoodScores};
pub use responder::{MockResponder, Responder};
pub use sequencer::{ActivitySequencer, Cue, CueSource, Interaction};
pub use session::{ChatMessage, ChatSession, Exchange, Sender, RESPONSE_FAILED_NOTICE};

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Message is empty")]
    EmptyMessage,
    #[error("Responder error: {0}")]
    Responder(String),
}
