//! Mood expression layer.
//!
//! Mood never moves joints. It only selects shading and face parameters,
//! applied beneath whatever activity pose is active.

use avyo_common::{Color, MoodLabel};
use serde::Serialize;

/// Constant face/shading parameters for one mood.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodExpression {
    /// Resting eye openness, `0.0` closed to `1.0` fully open.
    pub eye_openness: f32,
    /// Mouth curvature, `-1.0` frown to `1.0` smile.
    pub mouth_curve: f32,
    /// Brow tilt, negative for worried, positive for furrowed.
    pub brow_tilt: f32,
    pub accent: Color,
}

const HAPPY: MoodExpression = MoodExpression {
    eye_openness: 0.9,
    mouth_curve: 1.0,
    brow_tilt: 0.0,
    accent: Color::from_rgb(0x4a, 0xde, 0x80),
};

const SAD: MoodExpression = MoodExpression {
    eye_openness: 0.7,
    mouth_curve: -0.7,
    brow_tilt: -0.3,
    accent: Color::from_rgb(0x60, 0xa5, 0xfa),
};

const ANGRY: MoodExpression = MoodExpression {
    eye_openness: 0.65,
    mouth_curve: -0.4,
    brow_tilt: 0.4,
    accent: Color::from_rgb(0xf8, 0x71, 0x71),
};

const NEUTRAL: MoodExpression = MoodExpression {
    eye_openness: 1.0,
    mouth_curve: 0.3,
    brow_tilt: 0.0,
    accent: Color::from_rgb(0x89, 0x3f, 0x45),
};

/// Expression parameter set for a mood.
pub fn mood_expression(mood: MoodLabel) -> MoodExpression {
    match mood {
        MoodLabel::Happy => HAPPY,
        MoodLabel::Sad => SAD,
        MoodLabel::Angry => ANGRY,
        MoodLabel::Neutral => NEUTRAL,
    }
}

/// Face state for one frame: mood constants plus blink and mouth motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Expression {
    pub mood: MoodLabel,
    pub eye_openness: f32,
    pub mouth_curve: f32,
    /// Mouth opening while talking, `0.0` closed.
    pub mouth_open: f32,
    pub brow_tilt: f32,
    pub accent: Color,
}

impl Expression {
    /// Eyes at the mood baseline, mouth closed.
    pub fn at_rest(mood: MoodLabel) -> Self {
        let base = mood_expression(mood);
        Self {
            mood,
            eye_openness: base.eye_openness,
            mouth_curve: base.mouth_curve,
            mouth_open: 0.0,
            brow_tilt: base.brow_tilt,
            accent: base.accent,
        }
    }
}
