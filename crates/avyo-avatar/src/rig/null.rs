//! Null avatar, used when `avatar.enabled = false`.

use avyo_common::{ActivityState, MoodLabel, Signal};

use super::types::Avatar;
use crate::expression::Expression;
use crate::pose::Pose;
use crate::skin::MotionProfile;

/// A no-op avatar holding a fixed rest pose.
pub struct NullAvatar {
    pose: Pose,
}

impl NullAvatar {
    pub fn new() -> Self {
        Self {
            pose: Pose::rest(
                MotionProfile::default().base_color,
                Expression::at_rest(MoodLabel::Neutral),
            ),
        }
    }
}

impl Default for NullAvatar {
    fn default() -> Self {
        Self::new()
    }
}

impl Avatar for NullAvatar {
    fn is_visible(&self) -> bool {
        false
    }

    fn update(&mut self, _dt: f64, _signal: Signal) {}

    fn pose(&self) -> &Pose {
        &self.pose
    }

    fn activity(&self) -> ActivityState {
        ActivityState::Idle
    }
}
