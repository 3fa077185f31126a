//! Frame-clock driver around the pose engine.
//!
//! The [`Animator`] owns everything that changes between frames (the active
//! sequence, the frame counter, the running flag); pose sampling itself stays
//! a pure function of `(gesture, frame)`.

use crate::pose::{compute_pose, idle_pose, Pose, CYCLE_LENGTH};
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("gesture sequence must contain at least one gesture")]
    Empty,
}

/// Ordered gestures pantomiming one word; each plays for one full cycle.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GestureSequence(Vec<String>);

impl GestureSequence {
    pub fn new<I, S>(names: I) -> Result<Self, SequenceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(SequenceError::Empty);
        }
        Ok(Self(names))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn active_index(&self, frame: u64) -> usize {
        ((frame / CYCLE_LENGTH) % self.0.len() as u64) as usize
    }

    pub fn active_name(&self, frame: u64) -> &str {
        &self.0[self.active_index(frame)]
    }

    pub fn pose_at(&self, frame: u64) -> Pose {
        compute_pose(self.active_name(frame), frame % CYCLE_LENGTH)
    }
}

/// One sampled frame, ready for a renderer.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AnimationFrame<'a> {
    pub frame: u64,
    /// `None` while idling.
    pub gesture: Option<&'a str>,
    pub pose: Pose,
}

#[derive(Clone, Debug, Default)]
pub struct Animator {
    sequence: Option<GestureSequence>,
    frame: u64,
    running: bool,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_idle(&mut self) {
        self.sequence = None;
        self.frame = 0;
        self.running = true;
    }

    pub fn start_gesture(&mut self, sequence: GestureSequence) {
        tracing::debug!(gestures = ?sequence.names(), "starting gesture sequence");
        self.sequence = Some(sequence);
        self.frame = 0;
        self.running = true;
    }

    /// Plays `sequence`, or idles on the free-running frame when there is none.
    pub fn start(&mut self, sequence: Option<GestureSequence>) {
        match sequence {
            Some(seq) => self.start_gesture(seq),
            None => self.start_idle(),
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.sequence = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn sequence(&self) -> Option<&GestureSequence> {
        self.sequence.as_ref()
    }

    /// Samples the current frame and advances the clock; `None` once stopped.
    pub fn tick(&mut self) -> Option<AnimationFrame<'_>> {
        if !self.running {
            return None;
        }
        let frame = self.frame;
        self.frame = self.frame.wrapping_add(1);

        match &self.sequence {
            Some(seq) => {
                let name = seq.active_name(frame);
                if frame % CYCLE_LENGTH == 0 {
                    tracing::debug!(gesture = name, frame, "gesture segment");
                }
                Some(AnimationFrame {
                    frame,
                    gesture: Some(name),
                    pose: seq.pose_at(frame),
                })
            }
            None => Some(AnimationFrame {
                frame,
                gesture: None,
                pose: idle_pose(frame),
            }),
        }
    }
}
