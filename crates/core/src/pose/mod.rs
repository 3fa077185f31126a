//! Procedural stick-figure poses.
//!
//! A [`Pose`] is eight joint angles plus a facial expression. Angles are in
//! radians and measured from a limb hanging straight down: upper arms pivot at
//! the shoulder, upper legs at the hip, and forearms/knees are relative to
//! their parent segment.

mod catalog;

use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_6, PI};

pub use catalog::{Category, Gesture};

/// Frames in one gesture segment.
pub const CYCLE_LENGTH: u64 = 60;

pub(crate) const FRAC_PI_12: f32 = PI / 12.0;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    #[default]
    Normal,
    Happy,
    Excited,
    Surprised,
}

impl Expression {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Happy => "happy",
            Self::Excited => "excited",
            Self::Surprised => "surprised",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Pose {
    pub left_arm: f32,
    pub right_arm: f32,
    pub left_forearm: f32,
    pub right_forearm: f32,
    pub left_leg: f32,
    pub right_leg: f32,
    pub left_knee: f32,
    pub right_knee: f32,
    pub expression: Expression,
}

impl Pose {
    /// Relaxed upright stance: arms slightly out, feet apart, knees straight.
    pub fn standing(expression: Expression) -> Self {
        Self {
            left_arm: -FRAC_PI_6,
            right_arm: FRAC_PI_6,
            left_forearm: 0.0,
            right_forearm: 0.0,
            left_leg: -FRAC_PI_12,
            right_leg: FRAC_PI_12,
            left_knee: 0.0,
            right_knee: 0.0,
            expression,
        }
    }

    pub fn angles(&self) -> [f32; 8] {
        [
            self.left_arm,
            self.right_arm,
            self.left_forearm,
            self.right_forearm,
            self.left_leg,
            self.right_leg,
            self.left_knee,
            self.right_knee,
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.angles().iter().all(|a| a.is_finite())
    }
}

impl Default for Pose {
    fn default() -> Self {
        idle_pose(0)
    }
}

/// Normalized position `t ∈ [0, 1)` of `frame` within its cycle.
pub fn phase(frame: u64) -> f32 {
    (frame % CYCLE_LENGTH) as f32 / CYCLE_LENGTH as f32
}

/// Breathing pose shown when no gesture is active.
///
/// Unlike catalog gestures this is driven by the unbounded frame counter, so
/// the breathing period is independent of the 60-frame gesture cycle.
pub fn idle_pose(frame: u64) -> Pose {
    let breathe = ((frame as f64 * 0.05).sin() * 0.1) as f32;
    Pose {
        left_arm: -FRAC_PI_6 + breathe,
        right_arm: FRAC_PI_6 - breathe,
        left_forearm: 0.0,
        right_forearm: 0.0,
        left_leg: -FRAC_PI_12,
        right_leg: FRAC_PI_12,
        left_knee: FRAC_PI_12,
        right_knee: FRAC_PI_12,
        expression: Expression::Normal,
    }
}

/// Samples `gesture` at `frame_in_cycle`.
///
/// Frames past the cycle are wrapped. Names outside the catalog fall back to
/// [`idle_pose`] at the same frame value.
pub fn compute_pose(gesture: &str, frame_in_cycle: u64) -> Pose {
    match Gesture::from_name(gesture) {
        Some(g) => g.pose(phase(frame_in_cycle)),
        None => idle_pose(frame_in_cycle),
    }
}
