//! Randomized eye blinking.
//!
//! A three-phase timer: waiting until a randomly drawn threshold, a short
//! closing ramp, then an opening ramp back to the mood baseline. Each
//! completed cycle resets the timer and draws a fresh threshold.

mod timer;
mod types;

pub use timer::BlinkTimer;
pub use types::{BlinkPhase, BlinkTiming};
