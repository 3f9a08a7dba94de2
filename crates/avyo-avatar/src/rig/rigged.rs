//! Rigged avatar: the animation controller bound to one skin.

use avyo_common::{ActivityState, MoodLabel, Signal};
use avyo_config::schema::{AvatarSkin, AvyoConfig};
use tracing::debug;

use super::types::Avatar;
use crate::blink::BlinkTiming;
use crate::controller::AnimationState;
use crate::expression::Expression;
use crate::pose::Pose;
use crate::skin::MotionProfile;

/// An animated avatar that tracks activity and mood changes.
pub struct RiggedAvatar {
    skin: AvatarSkin,
    profile: MotionProfile,
    state: AnimationState,
    pose: Pose,
    activity: ActivityState,
    mood: MoodLabel,
}

impl RiggedAvatar {
    pub fn new(skin: AvatarSkin, timing: BlinkTiming, seed: Option<u64>) -> Self {
        let profile = MotionProfile::for_skin(skin);
        Self {
            skin,
            profile,
            state: AnimationState::new(timing, seed),
            pose: Pose::rest(profile.base_color, Expression::at_rest(MoodLabel::Neutral)),
            activity: ActivityState::Idle,
            mood: MoodLabel::Neutral,
        }
    }

    /// Create from application config.
    pub fn from_config(config: &AvyoConfig) -> Self {
        let avatar = &config.avatar;
        Self::new(
            avatar.skin,
            BlinkTiming::from_config(&avatar.blink),
            avatar.seed,
        )
    }

    pub fn skin(&self) -> AvatarSkin {
        self.skin
    }

    pub fn mood(&self) -> MoodLabel {
        self.mood
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }
}

impl Avatar for RiggedAvatar {
    fn is_visible(&self) -> bool {
        true
    }

    fn update(&mut self, dt: f64, signal: Signal) {
        let activity = signal.activity();
        if activity != self.activity {
            debug!(from = %self.activity, to = %activity, "avatar activity changed");
            self.activity = activity;
        }
        if signal.mood != self.mood {
            debug!(from = %self.mood, to = %signal.mood, "avatar mood changed");
            self.mood = signal.mood;
        }
        self.pose = self.state.step(dt, signal, &self.profile);
    }

    fn pose(&self) -> &Pose {
        &self.pose
    }

    fn activity(&self) -> ActivityState {
        self.activity
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use avyo_common::ActivityFlags;

    #[test]
    fn rigged_from_default_config() {
        let config = AvyoConfig::default();
        let avatar = RiggedAvatar::from_config(&config);
        assert!(avatar.is_visible());
        assert_eq!(avatar.skin(), AvatarSkin::Cartoon);
        assert_eq!(avatar.activity(), ActivityState::Idle);
    }

    #[test]
    fn update_tracks_activity_and_mood() {
        let mut avatar = RiggedAvatar::new(AvatarSkin::Robot, BlinkTiming::default(), Some(4));
        avatar.update(
            0.016,
            Signal::new(ActivityFlags::only(ActivityState::Speaking), MoodLabel::Happy),
        );
        assert_eq!(avatar.activity(), ActivityState::Speaking);
        assert_eq!(avatar.mood(), MoodLabel::Happy);
        assert_eq!(avatar.pose().expression.mood, MoodLabel::Happy);
        assert_eq!(avatar.pose().base_color, MotionProfile::robot().base_color);
    }

    #[test]
    fn update_advances_clock() {
        let mut avatar = RiggedAvatar::new(AvatarSkin::Human, BlinkTiming::default(), Some(4));
        for _ in 0..30 {
            avatar.update(0.1, Signal::default());
        }
        assert!((avatar.state().elapsed() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn seeded_avatars_animate_identically() {
        let mut config = AvyoConfig::default();
        config.avatar.seed = Some(77);
        let mut a = RiggedAvatar::from_config(&config);
        let mut b = RiggedAvatar::from_config(&config);
        for _ in 0..900 {
            a.update(1.0 / 60.0, Signal::default());
            b.update(1.0 / 60.0, Signal::default());
            assert_eq!(a.pose(), b.pose());
        }
    }
}
