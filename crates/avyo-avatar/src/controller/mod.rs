//! Avatar expression controller.
//!
//! [`compose_pose`] is a pure function of elapsed time, resolved activity,
//! mood, and eye openness. [`AnimationState`] carries the only accumulated
//! state (clock and blink timer) and is threaded through [`next_frame`].

mod layers;

pub use layers::compose_pose;

use avyo_common::Signal;

use crate::blink::{BlinkTimer, BlinkTiming};
use crate::expression::mood_expression;
use crate::pose::Pose;
use crate::skin::MotionProfile;


/// Accumulated animation state owned by one avatar.
#[derive(Debug, Clone)]
pub struct AnimationState {
    elapsed: f64,
    blink: BlinkTimer,
}

impl AnimationState {
    pub fn new(timing: BlinkTiming, seed: Option<u64>) -> Self {
        Self {
            elapsed: 0.0,
            blink: BlinkTimer::new(timing, seed),
        }
    }

    /// Start the clock at an arbitrary epoch.
    pub fn starting_at(mut self, elapsed: f64) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Advance by `dt` seconds and produce the pose for the new instant.
    pub fn step(&mut self, dt: f64, signal: Signal, profile: &MotionProfile) -> Pose {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
            self.blink.advance(dt);
        }
        let baseline = mood_expression(signal.mood).eye_openness;
        let openness = self.blink.openness(baseline);
        compose_pose(self.elapsed, signal.activity(), signal.mood, openness, profile)
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn blink(&self) -> &BlinkTimer {
        &self.blink
    }
}

/// Functional frame step: consume the state, return the next state and pose.
pub fn next_frame(
    mut state: AnimationState,
    dt: f64,
    signal: Signal,
    profile: &MotionProfile,
) -> (AnimationState, Pose) {
    let pose = state.step(dt, signal, profile);
    (state, pose)
}
