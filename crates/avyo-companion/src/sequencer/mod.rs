//! Conversation activity sequencer.
//!
//! Turns chat events into timed activity cues: a submitted message plays
//! listening, thinking, then speaking back to back, and the classified
//! mood lands when thinking ends. Clicks on the avatar and the greeting
//! wave add independent cues. [`ActivitySequencer::signal_at`] samples the
//! result as the per-frame [`Signal`](avyo_common::Signal).

mod sequence;
mod types;

pub use sequence::ActivitySequencer;
pub use types::{Cue, CueSource, Interaction};

#[cfg(test)]
mod tests;
