//! Pose types: per-joint transform offsets for one animation frame.

use avyo_common::Color;
use serde::Serialize;

use crate::expression::Expression;

/// Euler rotation (radians) or translation triple, `[x, y, z]`.
pub type Vec3 = [f32; 3];

/// Named body parts driven by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    Root,
    Head,
    Torso,
    LeftArm,
    RightArm,
}

impl Joint {
    pub const ALL: [Joint; 5] = [
        Joint::Root,
        Joint::Head,
        Joint::Torso,
        Joint::LeftArm,
        Joint::RightArm,
    ];
}

/// Rotation and position offset of one joint relative to its rig rest position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct JointTransform {
    pub rotation: Vec3,
    pub position: Vec3,
}

impl JointTransform {
    pub const fn rotated(rotation: Vec3) -> Self {
        Self {
            rotation,
            position: [0.0; 3],
        }
    }

    /// Largest absolute component difference against `other`.
    pub fn max_delta(&self, other: &JointTransform) -> f32 {
        self.rotation
            .iter()
            .chain(self.position.iter())
            .zip(other.rotation.iter().chain(other.position.iter()))
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f32::max)
    }
}

/// Arms hang slightly outward at rest.
const ARM_REST_ANGLE: f32 = 0.3;

/// Full avatar pose for one frame, consumed by a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pose {
    pub root: JointTransform,
    pub head: JointTransform,
    pub torso: JointTransform,
    pub left_arm: JointTransform,
    pub right_arm: JointTransform,
    pub base_color: Color,
    pub expression: Expression,
}

impl Pose {
    /// Neutral standing pose with the given palette and expression.
    pub fn rest(base_color: Color, expression: Expression) -> Self {
        Self {
            root: JointTransform::default(),
            head: JointTransform::default(),
            torso: JointTransform::default(),
            left_arm: JointTransform::rotated([0.0, 0.0, ARM_REST_ANGLE]),
            right_arm: JointTransform::rotated([0.0, 0.0, -ARM_REST_ANGLE]),
            base_color,
            expression,
        }
    }

    pub fn joint(&self, joint: Joint) -> &JointTransform {
        match joint {
            Joint::Root => &self.root,
            Joint::Head => &self.head,
            Joint::Torso => &self.torso,
            Joint::LeftArm => &self.left_arm,
            Joint::RightArm => &self.right_arm,
        }
    }

    pub fn joint_mut(&mut self, joint: Joint) -> &mut JointTransform {
        match joint {
            Joint::Root => &mut self.root,
            Joint::Head => &mut self.head,
            Joint::Torso => &mut self.torso,
            Joint::LeftArm => &mut self.left_arm,
            Joint::RightArm => &mut self.right_arm,
        }
    }

    /// Largest joint component difference between two poses.
    pub fn max_joint_delta(&self, other: &Pose) -> f32 {
        Joint::ALL
            .iter()
            .map(|&j| self.joint(j).max_delta(other.joint(j)))
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avyo_common::MoodLabel;

    fn rest() -> Pose {
        Pose::rest(
            Color::from_rgb(0, 0, 0),
            Expression::at_rest(MoodLabel::Neutral),
        )
    }

    #[test]
    fn rest_pose_arms_are_mirrored() {
        let pose = rest();
        assert!((pose.left_arm.rotation[2] + pose.right_arm.rotation[2]).abs() < f32::EPSILON);
        assert_eq!(pose.root, JointTransform::default());
    }

    #[test]
    fn joint_mut_writes_through() {
        let mut pose = rest();
        pose.joint_mut(Joint::Head).rotation[0] = 0.5;
        assert!((pose.head.rotation[0] - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn max_joint_delta_finds_largest_component() {
        let a = rest();
        let mut b = rest();
        b.torso.position[1] = 0.25;
        b.head.rotation[2] = -0.1;
        assert!((a.max_joint_delta(&b) - 0.25).abs() < 1e-6);
        assert!(a.max_joint_delta(&a).abs() < f32::EPSILON);
    }

    #[test]
    fn pose_serializes_named_joints() {
        let json = serde_json::to_string(&rest()).unwrap();
        assert!(json.contains("\"left_arm\""));
        assert!(json.contains("\"expression\""));
        assert!(json.contains("\"base_color\""));
    }
}
