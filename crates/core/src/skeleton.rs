//! Forward kinematics from a [`Pose`] to 2D joint positions.
//!
//! Coordinates are in the figure's local frame with the origin at the torso
//! centre and y growing downward, which is what a canvas-style renderer
//! expects after translating to the figure's position.

use crate::pose::Pose;
use serde::{Deserialize, Serialize};

/// Segment lengths and pivot offsets of the stick figure.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Proportions {
    pub head_radius: f32,
    pub head_y: f32,
    pub neck_y: f32,
    pub shoulder_y: f32,
    pub hip_y: f32,
    pub upper_arm: f32,
    pub forearm: f32,
    pub thigh: f32,
    pub shin: f32,
}

impl Default for Proportions {
    fn default() -> Self {
        Self {
            head_radius: 30.0,
            head_y: -60.0,
            neck_y: -30.0,
            shoulder_y: -10.0,
            hip_y: 50.0,
            upper_arm: 50.0,
            forearm: 40.0,
            thigh: 60.0,
            shin: 50.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// End of a segment of `length` hanging from `self`, rotated by `angle`.
    fn extend(self, length: f32, angle: f32) -> Point {
        Point::new(self.x - length * angle.sin(), self.y + length * angle.cos())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Skeleton {
    pub head: Point,
    pub head_radius: f32,
    pub neck: Point,
    pub shoulder: Point,
    pub hip: Point,
    pub left_elbow: Point,
    pub right_elbow: Point,
    pub left_hand: Point,
    pub right_hand: Point,
    pub left_knee: Point,
    pub right_knee: Point,
    pub left_foot: Point,
    pub right_foot: Point,
}

impl Skeleton {
    pub fn from_pose(pose: &Pose, dims: &Proportions) -> Self {
        let shoulder = Point::new(0.0, dims.shoulder_y);
        let hip = Point::new(0.0, dims.hip_y);

        let left_elbow = shoulder.extend(dims.upper_arm, pose.left_arm);
        let right_elbow = shoulder.extend(dims.upper_arm, pose.right_arm);
        let left_knee = hip.extend(dims.thigh, pose.left_leg);
        let right_knee = hip.extend(dims.thigh, pose.right_leg);

        Self {
            head: Point::new(0.0, dims.head_y),
            head_radius: dims.head_radius,
            neck: Point::new(0.0, dims.neck_y),
            shoulder,
            hip,
            left_elbow,
            right_elbow,
            left_hand: left_elbow.extend(dims.forearm, pose.left_arm + pose.left_forearm),
            right_hand: right_elbow.extend(dims.forearm, pose.right_arm + pose.right_forearm),
            left_knee,
            right_knee,
            left_foot: left_knee.extend(dims.shin, pose.left_leg + pose.left_knee),
            right_foot: right_knee.extend(dims.shin, pose.right_leg + pose.right_knee),
        }
    }

    /// Line segments in draw order: torso, arms, legs.
    pub fn segments(&self) -> [(Point, Point); 9] {
        [
            (self.neck, self.hip),
            (self.shoulder, self.left_elbow),
            (self.left_elbow, self.left_hand),
            (self.shoulder, self.right_elbow),
            (self.right_elbow, self.right_hand),
            (self.hip, self.left_knee),
            (self.left_knee, self.left_foot),
            (self.hip, self.right_knee),
            (self.right_knee, self.right_foot),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{compute_pose, Expression, Gesture};
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Point, b: Point) -> bool {
        a.distance_to(b) < 1e-3
    }

    fn limp() -> Pose {
        Pose {
            left_arm: 0.0,
            right_arm: 0.0,
            left_forearm: 0.0,
            right_forearm: 0.0,
            left_leg: 0.0,
            right_leg: 0.0,
            left_knee: 0.0,
            right_knee: 0.0,
            expression: Expression::Normal,
        }
    }

    #[test]
    fn zero_angles_hang_straight_down() {
        let s = Skeleton::from_pose(&limp(), &Proportions::default());
        assert!(close(s.left_elbow, Point::new(0.0, 40.0)));
        assert!(close(s.left_hand, Point::new(0.0, 80.0)));
        assert!(close(s.right_foot, Point::new(0.0, 160.0)));
    }

    #[test]
    fn forearm_angle_is_relative_to_upper_arm() {
        let pose = Pose {
            right_arm: FRAC_PI_2,
            right_forearm: -FRAC_PI_2,
            ..limp()
        };
        let s = Skeleton::from_pose(&pose, &Proportions::default());
        // upper arm horizontal, forearm back to hanging down
        assert!(close(s.right_elbow, Point::new(-50.0, -10.0)));
        assert!(close(s.right_hand, Point::new(-50.0, 30.0)));
    }

    #[test]
    fn segment_lengths_are_preserved() {
        let dims = Proportions::default();
        for g in Gesture::ALL {
            let s = Skeleton::from_pose(&compute_pose(g.name(), 17), &dims);
            assert!((s.left_elbow.distance_to(s.left_hand) - dims.forearm).abs() < 1e-3);
            assert!((s.hip.distance_to(s.right_knee) - dims.thigh).abs() < 1e-3);
        }
        assert_eq!(Skeleton::from_pose(&limp(), &dims).segments().len(), 9);
    }
}
