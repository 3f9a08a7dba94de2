//! Avatar skins.
//!
//! Cartoon, human, and robot variants share the controller contract; each
//! only supplies a motion profile and a body color.

use avyo_common::Color;
use avyo_config::schema::AvatarSkin;

/// Amplitudes (radians or scene units) and angular speeds (rad/s) for
/// every animation layer.
///
/// Idle speeds are deliberately non-harmonic so the sway never visibly
/// repeats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionProfile {
    pub base_color: Color,

    pub float_amplitude: f32,
    pub float_speed: f32,
    pub sway_amplitude: f32,
    pub sway_speed: f32,
    pub shift_amplitude: f32,
    pub shift_speed: f32,
    pub breath_amplitude: f32,
    pub breath_speed: f32,

    pub lean: f32,
    pub jitter_amplitude: f32,
    pub jitter_speed: f32,

    pub think_tilt: f32,
    pub think_speed: f32,
    /// Fixed rotation of the hand-to-chin arm.
    pub chin_arm_rotation: [f32; 3],
    pub chin_arm_offset: [f32; 3],

    pub bob_amplitude: f32,
    pub bob_speed: f32,
    pub mouth_amplitude: f32,
    pub mouth_speed: f32,

    pub wave_center: f32,
    pub wave_amplitude: f32,
    pub wave_speed: f32,
}

impl MotionProfile {
    pub fn for_skin(skin: AvatarSkin) -> Self {
        match skin {
            AvatarSkin::Cartoon => Self::cartoon(),
            AvatarSkin::Human => Self::human(),
            AvatarSkin::Robot => Self::robot(),
        }
    }

    /// Bouncy, exaggerated motion.
    pub fn cartoon() -> Self {
        Self {
            base_color: Color::from_rgb(0xf0, 0xe6, 0xe7),
            float_amplitude: 0.1,
            float_speed: 1.0,
            sway_amplitude: 0.1,
            sway_speed: 0.57,
            shift_amplitude: 0.03,
            shift_speed: 0.31,
            breath_amplitude: 0.02,
            breath_speed: 1.73,
            lean: 0.15,
            jitter_amplitude: 0.01,
            jitter_speed: 11.3,
            think_tilt: 0.15,
            think_speed: 0.8,
            chin_arm_rotation: [-1.2, 0.0, 0.9],
            chin_arm_offset: [-0.15, 0.25, 0.2],
            bob_amplitude: 0.05,
            bob_speed: 6.0,
            mouth_amplitude: 0.8,
            mouth_speed: 14.0,
            wave_center: 0.5,
            wave_amplitude: 0.5,
            wave_speed: 4.0,
        }
    }

    /// Subtle, naturalistic motion.
    pub fn human() -> Self {
        Self {
            base_color: Color::from_rgb(0xe0, 0xb8, 0x94),
            float_amplitude: 0.02,
            float_speed: 0.9,
            sway_amplitude: 0.05,
            sway_speed: 0.41,
            shift_amplitude: 0.02,
            shift_speed: 0.23,
            breath_amplitude: 0.015,
            breath_speed: 1.31,
            lean: 0.12,
            jitter_amplitude: 0.006,
            jitter_speed: 9.1,
            think_tilt: 0.12,
            think_speed: 0.7,
            chin_arm_rotation: [-1.35, 0.0, 0.8],
            chin_arm_offset: [-0.12, 0.3, 0.18],
            bob_amplitude: 0.03,
            bob_speed: 5.0,
            mouth_amplitude: 0.6,
            mouth_speed: 12.0,
            wave_center: 0.6,
            wave_amplitude: 0.4,
            wave_speed: 5.0,
        }
    }

    /// Stiff, higher-frequency motion with no breathing.
    pub fn robot() -> Self {
        Self {
            base_color: Color::from_rgb(0x9c, 0xa3, 0xaf),
            float_amplitude: 0.06,
            float_speed: 1.4,
            sway_amplitude: 0.08,
            sway_speed: 0.73,
            shift_amplitude: 0.01,
            shift_speed: 0.29,
            breath_amplitude: 0.0,
            breath_speed: 0.0,
            lean: 0.2,
            jitter_amplitude: 0.02,
            jitter_speed: 17.0,
            think_tilt: 0.2,
            think_speed: 1.1,
            chin_arm_rotation: [-1.1, 0.0, 1.0],
            chin_arm_offset: [-0.18, 0.22, 0.2],
            bob_amplitude: 0.07,
            bob_speed: 8.0,
            mouth_amplitude: 1.0,
            mouth_speed: 18.0,
            wave_center: 0.5,
            wave_amplitude: 0.6,
            wave_speed: 6.0,
        }
    }
}

impl Default for MotionProfile {
    fn default() -> Self {
        Self::cartoon()
    }
}
