//! Pose layers: idle sway underneath, one activity pose on top, and the
//! mood expression applied to the face.

use avyo_common::{ActivityState, MoodLabel};

use crate::expression::Expression;
use crate::pose::Pose;
use crate::skin::MotionProfile;

#[inline]
fn osc(t: f64, speed: f32) -> f32 {
    (t * f64::from(speed)).sin() as f32
}

/// Compose the full pose for instant `t`.
///
/// `eye_openness` is the blink-adjusted openness for this frame.
pub fn compose_pose(
    t: f64,
    activity: ActivityState,
    mood: MoodLabel,
    eye_openness: f32,
    profile: &MotionProfile,
) -> Pose {
    let mut expression = Expression::at_rest(mood);
    expression.eye_openness = eye_openness;

    let mut pose = Pose::rest(profile.base_color, expression);
    apply_idle(&mut pose, t, profile);

    match activity {
        ActivityState::Idle => {}
        ActivityState::Listening => apply_listening(&mut pose, t, profile),
        ActivityState::Thinking => apply_thinking(&mut pose, t, profile),
        ActivityState::Speaking => apply_speaking(&mut pose, t, profile),
        ActivityState::Waving => apply_waving(&mut pose, t, profile),
    }
    pose
}

/// Floating, yaw sway, weight shift, and breathing on separate phases.
fn apply_idle(pose: &mut Pose, t: f64, p: &MotionProfile) {
    pose.root.position[1] = osc(t, p.float_speed) * p.float_amplitude;
    pose.root.rotation[1] = osc(t, p.sway_speed) * p.sway_amplitude;
    pose.root.rotation[2] = osc(t, p.shift_speed) * p.shift_amplitude;
    pose.torso.rotation[0] = osc(t, p.breath_speed) * p.breath_amplitude;
}

/// Sustained forward lean with a small attentive jitter.
fn apply_listening(pose: &mut Pose, t: f64, p: &MotionProfile) {
    pose.torso.rotation[0] += p.lean;
    pose.head.rotation[0] = p.lean * 0.5 + osc(t, p.jitter_speed) * p.jitter_amplitude;
    pose.head.rotation[1] = osc(t, p.jitter_speed * 0.77) * p.jitter_amplitude;
}

/// Slow head tilt with one hand held at the chin.
fn apply_thinking(pose: &mut Pose, t: f64, p: &MotionProfile) {
    pose.head.rotation[2] = osc(t, p.think_speed) * p.think_tilt;
    pose.head.rotation[0] = -p.think_tilt * 0.5;
    pose.right_arm.rotation = p.chin_arm_rotation;
    pose.right_arm.position = p.chin_arm_offset;
}

/// Head bob and a mouth opening on a faster sine.
fn apply_speaking(pose: &mut Pose, t: f64, p: &MotionProfile) {
    pose.head.rotation[0] = osc(t, p.bob_speed) * p.bob_amplitude;
    pose.head.position[1] = osc(t, p.bob_speed).abs() * p.bob_amplitude * 0.2;
    pose.expression.mouth_open = 0.5 * (1.0 + osc(t, p.mouth_speed)) * p.mouth_amplitude;
}

/// Left arm swept through a fixed band.
fn apply_waving(pose: &mut Pose, t: f64, p: &MotionProfile) {
    pose.left_arm.rotation[2] = p.wave_center + osc(t, p.wave_speed) * p.wave_amplitude;
}
