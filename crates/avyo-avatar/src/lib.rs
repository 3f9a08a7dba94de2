//! Avatar animation for Avyo.
//!
//! Maps a per-frame [`Signal`](avyo_common::Signal) (activity flags plus
//! mood) to a continuous [`Pose`]:
//! - activity flags resolve to one priority-ordered activity per frame
//! - idle sway runs underneath every activity on non-harmonic phases
//! - mood selects face and accent parameters without moving joints
//! - a randomized blink timer modulates eye openness

pub mod blink;
pub mod controller;
pub mod expression;
pub mod pose;
pub mod rig;
pub mod skin;

pub use blink::{BlinkPhase, BlinkTimer, BlinkTiming};
pub use controller::{compose_pose, next_frame, AnimationState};
pub use expression::{mood_expression, Expression, MoodExpression};
pub use pose::{Joint, JointTransform, Pose};
pub use rig::{create_avatar, Avatar, NullAvatar, RiggedAvatar};
pub use skin::MotionProfile;
