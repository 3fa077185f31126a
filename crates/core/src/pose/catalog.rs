use super::{Expression, Pose, FRAC_PI_12};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, FRAC_PI_8, PI};
use std::fmt;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Animal,
    Sports,
    Profession,
    Emotion,
    Food,
    Generic,
}

/// Every pantomime the figure knows, keyed by its wire name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    // animals
    Hop,
    TrunkSwing,
    Stomp,
    Trumpet,
    Waddle,
    Flap,
    Scratch,
    Climb,
    TailWag,
    Paw,
    Roar,
    Swim,
    // sports
    Kick,
    Jump,
    Dribble,
    Shoot,
    Swing,
    Throw,
    Dive,
    Serve,
    Spike,
    Block,
    Jab,
    Uppercut,
    Punch,
    Glide,
    // professions
    Write,
    Point,
    Chop,
    Stir,
    Spray,
    Sing,
    Bow,
    Paint,
    Steer,
    Type,
    Think,
    Examine,
    // emotions
    Clap,
    Cry,
    Yawn,
    Stretch,
    Cheer,
    // food
    Eat,
    Bite,
    Slurp,
    Lick,
    Twirl,
    Cut,
    // generic motion
    Run,
    Sprint,
    Wave,
    Dance,
    Spin,
    Celebrate,
}

impl Gesture {
    pub const ALL: [Gesture; 55] = [
        Self::Hop,
        Self::TrunkSwing,
        Self::Stomp,
        Self::Trumpet,
        Self::Waddle,
        Self::Flap,
        Self::Scratch,
        Self::Climb,
        Self::TailWag,
        Self::Paw,
        Self::Roar,
        Self::Swim,
        Self::Kick,
        Self::Jump,
        Self::Dribble,
        Self::Shoot,
        Self::Swing,
        Self::Throw,
        Self::Dive,
        Self::Serve,
        Self::Spike,
        Self::Block,
        Self::Jab,
        Self::Uppercut,
        Self::Punch,
        Self::Glide,
        Self::Write,
        Self::Point,
        Self::Chop,
        Self::Stir,
        Self::Spray,
        Self::Sing,
        Self::Bow,
        Self::Paint,
        Self::Steer,
        Self::Type,
        Self::Think,
        Self::Examine,
        Self::Clap,
        Self::Cry,
        Self::Yawn,
        Self::Stretch,
        Self::Cheer,
        Self::Eat,
        Self::Bite,
        Self::Slurp,
        Self::Lick,
        Self::Twirl,
        Self::Cut,
        Self::Run,
        Self::Sprint,
        Self::Wave,
        Self::Dance,
        Self::Spin,
        Self::Celebrate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hop => "hop",
            Self::TrunkSwing => "trunk-swing",
            Self::Stomp => "stomp",
            Self::Trumpet => "trumpet",
            Self::Waddle => "waddle",
            Self::Flap => "flap",
            Self::Scratch => "scratch",
            Self::Climb => "climb",
            Self::TailWag => "tail-wag",
            Self::Paw => "paw",
            Self::Roar => "roar",
            Self::Swim => "swim",
            Self::Kick => "kick",
            Self::Jump => "jump",
            Self::Dribble => "dribble",
            Self::Shoot => "shoot",
            Self::Swing => "swing",
            Self::Throw => "throw",
            Self::Dive => "dive",
            Self::Serve => "serve",
            Self::Spike => "spike",
            Self::Block => "block",
            Self::Jab => "jab",
            Self::Uppercut => "uppercut",
            Self::Punch => "punch",
            Self::Glide => "glide",
            Self::Write => "write",
            Self::Point => "point",
            Self::Chop => "chop",
            Self::Stir => "stir",
            Self::Spray => "spray",
            Self::Sing => "sing",
            Self::Bow => "bow",
            Self::Paint => "paint",
            Self::Steer => "steer",
            Self::Type => "type",
            Self::Think => "think",
            Self::Examine => "examine",
            Self::Clap => "clap",
            Self::Cry => "cry",
            Self::Yawn => "yawn",
            Self::Stretch => "stretch",
            Self::Cheer => "cheer",
            Self::Eat => "eat",
            Self::Bite => "bite",
            Self::Slurp => "slurp",
            Self::Lick => "lick",
            Self::Twirl => "twirl",
            Self::Cut => "cut",
            Self::Run => "run",
            Self::Sprint => "sprint",
            Self::Wave => "wave",
            Self::Dance => "dance",
            Self::Spin => "spin",
            Self::Celebrate => "celebrate",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.name() == name)
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Hop
            | Self::TrunkSwing
            | Self::Stomp
            | Self::Trumpet
            | Self::Waddle
            | Self::Flap
            | Self::Scratch
            | Self::Climb
            | Self::TailWag
            | Self::Paw
            | Self::Roar
            | Self::Swim => Category::Animal,
            Self::Kick
            | Self::Jump
            | Self::Dribble
            | Self::Shoot
            | Self::Swing
            | Self::Throw
            | Self::Dive
            | Self::Serve
            | Self::Spike
            | Self::Block
            | Self::Jab
            | Self::Uppercut
            | Self::Punch
            | Self::Glide => Category::Sports,
            Self::Write
            | Self::Point
            | Self::Chop
            | Self::Stir
            | Self::Spray
            | Self::Sing
            | Self::Bow
            | Self::Paint
            | Self::Steer
            | Self::Type
            | Self::Think
            | Self::Examine => Category::Profession,
            Self::Clap | Self::Cry | Self::Yawn | Self::Stretch | Self::Cheer => {
                Category::Emotion
            }
            Self::Eat | Self::Bite | Self::Slurp | Self::Lick | Self::Twirl | Self::Cut => {
                Category::Food
            }
            Self::Run | Self::Sprint | Self::Wave | Self::Dance | Self::Spin | Self::Celebrate => {
                Category::Generic
            }
        }
    }

    /// Pose at normalized cycle position `t ∈ [0, 1)`.
    pub fn pose(&self, t: f32) -> Pose {
        match self {
            Self::Hop => {
                let bounce = osc(t, 4.0) * 0.5;
                Pose {
                    left_arm: -FRAC_PI_4,
                    right_arm: FRAC_PI_4,
                    left_forearm: -FRAC_PI_4,
                    right_forearm: FRAC_PI_4,
                    left_leg: -FRAC_PI_3 + bounce,
                    right_leg: FRAC_PI_3 + bounce,
                    left_knee: bounce,
                    right_knee: bounce,
                    expression: Expression::Happy,
                }
            }
            Self::TrunkSwing => {
                let trunk = osc(t, 2.0) * FRAC_PI_3;
                Pose {
                    left_arm: trunk,
                    right_arm: trunk,
                    left_forearm: 0.0,
                    right_forearm: 0.0,
                    left_leg: -FRAC_PI_8,
                    right_leg: FRAC_PI_8,
                    ..Pose::standing(Expression::Normal)
                }
            }
            Self::Stomp => {
                // left foot comes down in the first half, right foot in the second
                let lift = osc(t, 2.0);
                let (left_leg, left_knee, right_leg, right_knee) = if t < 0.5 {
                    (-FRAC_PI_4 * lift, FRAC_PI_4 * lift, FRAC_PI_12, 0.0)
                } else {
                    (-FRAC_PI_12, 0.0, -FRAC_PI_4 * lift, -FRAC_PI_4 * lift)
                };
                Pose {
                    left_arm: -FRAC_PI_4,
                    right_arm: FRAC_PI_4,
                    left_forearm: -FRAC_PI_6,
                    right_forearm: FRAC_PI_6,
                    left_leg,
                    right_leg,
                    left_knee,
                    right_knee,
                    expression: Expression::Normal,
                }
            }
            Self::Trumpet => {
                let raise = osc(t, 4.0) * 0.3;
                Pose {
                    left_arm: -(FRAC_PI_2 + FRAC_PI_4) - raise,
                    right_arm: FRAC_PI_2 + FRAC_PI_4 + raise,
                    left_forearm: -FRAC_PI_4,
                    right_forearm: FRAC_PI_4,
                    ..Pose::standing(Expression::Surprised)
                }
            }
            Self::Waddle => {
                let step = osc(t, 2.0) * FRAC_PI_6;
                Pose {
                    left_arm: -FRAC_PI_3,
                    right_arm: FRAC_PI_3,
                    left_forearm: -FRAC_PI_6,
                    right_forearm: FRAC_PI_6,
                    left_leg: step,
                    right_leg: -step,
                    left_knee: 0.0,
                    right_knee: 0.0,
                    expression: Expression::Normal,
                }
            }
            Self::Flap => {
                let wing = FRAC_PI_4 + FRAC_PI_4 * osc(t, 6.0).abs();
                Pose {
                    left_arm: -wing,
                    right_arm: wing,
                    ..Pose::standing(Expression::Happy)
                }
            }
            Self::Scratch => Pose {
                left_arm: -FRAC_PI_4,
                right_arm: PI - FRAC_PI_6,
                right_forearm: FRAC_PI_3 + osc(t, 8.0) * 0.3,
                ..Pose::standing(Expression::Normal)
            },
            Self::Climb => {
                let reach = osc(t, 2.0);
                Pose {
                    left_arm: -(FRAC_PI_2 + FRAC_PI_4) + reach * FRAC_PI_6,
                    right_arm: FRAC_PI_2 + FRAC_PI_4 + reach * FRAC_PI_6,
                    left_forearm: -FRAC_PI_4,
                    right_forearm: FRAC_PI_4,
                    left_leg: -FRAC_PI_4 * reach.max(0.0),
                    right_leg: FRAC_PI_4 * (-reach).max(0.0),
                    left_knee: FRAC_PI_3 * reach.max(0.0),
                    right_knee: -FRAC_PI_3 * (-reach).max(0.0),
                    expression: Expression::Normal,
                }
            }
            Self::TailWag => {
                let sway = osc(t, 6.0) * 0.15;
                Pose {
                    left_arm: -FRAC_PI_6 + sway,
                    right_arm: FRAC_PI_6 + sway,
                    left_leg: -FRAC_PI_12 + sway,
                    right_leg: FRAC_PI_12 + sway,
                    ..Pose::standing(Expression::Happy)
                }
            }
            Self::Paw => Pose {
                right_arm: FRAC_PI_2,
                right_forearm: osc(t, 6.0) * FRAC_PI_4,
                ..Pose::standing(Expression::Normal)
            },
            Self::Roar => {
                let (claws, expression) = if t < 0.5 {
                    (0.0, Expression::Normal)
                } else {
                    (FRAC_PI_3, Expression::Excited)
                };
                Pose {
                    left_arm: -2.0 * FRAC_PI_3,
                    right_arm: 2.0 * FRAC_PI_3,
                    left_forearm: -claws,
                    right_forearm: claws,
                    left_leg: -FRAC_PI_6,
                    right_leg: FRAC_PI_6,
                    left_knee: 0.0,
                    right_knee: 0.0,
                    expression,
                }
            }
            Self::Swim => {
                let stroke = osc(t, 2.0);
                Pose {
                    left_arm: stroke * FRAC_PI_2,
                    right_arm: -stroke * FRAC_PI_2,
                    left_forearm: 0.0,
                    right_forearm: 0.0,
                    left_leg: (t * PI * 2.0 + PI).sin() * FRAC_PI_6,
                    right_leg: stroke * FRAC_PI_6,
                    left_knee: 0.0,
                    right_knee: 0.0,
                    expression: Expression::Normal,
                }
            }
            Self::Kick => {
                let striking = t >= 0.5;
                Pose {
                    left_arm: -FRAC_PI_2,
                    right_arm: FRAC_PI_3,
                    left_forearm: 0.0,
                    right_forearm: 0.0,
                    left_leg: FRAC_PI_4,
                    right_leg: if striking { FRAC_PI_2 } else { -FRAC_PI_6 },
                    left_knee: 0.0,
                    right_knee: if striking { -FRAC_PI_4 } else { 0.0 },
                    expression: Expression::Excited,
                }
            }
            Self::Jump => {
                let crouch = if t < 0.5 { -FRAC_PI_3 } else { 0.0 };
                Pose {
                    left_arm: -FRAC_PI_2 - FRAC_PI_4,
                    right_arm: FRAC_PI_2 + FRAC_PI_4,
                    left_forearm: 0.0,
                    right_forearm: 0.0,
                    left_leg: -FRAC_PI_4,
                    right_leg: FRAC_PI_4,
                    left_knee: crouch,
                    right_knee: crouch,
                    expression: Expression::Excited,
                }
            }
            Self::Dribble => {
                let bounce = osc(t, 4.0).abs();
                Pose {
                    right_arm: FRAC_PI_6,
                    right_forearm: bounce * FRAC_PI_4,
                    left_knee: FRAC_PI_12,
                    right_knee: FRAC_PI_12,
                    ..Pose::standing(Expression::Normal)
                }
            }
            Self::Shoot => {
                if t < 0.5 {
                    Pose {
                        left_arm: -(FRAC_PI_2 + FRAC_PI_4),
                        right_arm: FRAC_PI_2 + FRAC_PI_4,
                        left_forearm: -FRAC_PI_2,
                        right_forearm: FRAC_PI_2,
                        left_knee: FRAC_PI_6,
                        right_knee: FRAC_PI_6,
                        ..Pose::standing(Expression::Normal)
                    }
                } else {
                    Pose {
                        left_arm: -(PI - FRAC_PI_8),
                        right_arm: PI - FRAC_PI_8,
                        ..Pose::standing(Expression::Excited)
                    }
                }
            }
            Self::Swing => {
                // wind up to the back, then sweep through to the front
                let arms = if t < 0.5 {
                    -FRAC_PI_2 * t * 2.0
                } else {
                    -FRAC_PI_2 + PI * (t - 0.5) * 2.0
                };
                Pose {
                    left_arm: arms,
                    right_arm: arms,
                    left_forearm: 0.0,
                    right_forearm: 0.0,
                    left_leg: -FRAC_PI_8,
                    right_leg: FRAC_PI_8,
                    ..Pose::standing(Expression::Excited)
                }
            }
            Self::Throw => {
                let (right_arm, right_forearm) = if t < 0.5 {
                    (PI * 0.75 * t * 2.0, FRAC_PI_2)
                } else {
                    (PI * 0.75 - PI * (t - 0.5) * 2.0, 0.0)
                };
                Pose {
                    left_arm: -FRAC_PI_3,
                    right_arm,
                    right_forearm,
                    left_leg: -FRAC_PI_6,
                    right_leg: FRAC_PI_8,
                    ..Pose::standing(Expression::Normal)
                }
            }
            Self::Dive => {
                let spring = if t < 0.5 { FRAC_PI_4 } else { 0.0 };
                Pose {
                    left_arm: -(PI - FRAC_PI_12),
                    right_arm: PI - FRAC_PI_12,
                    left_knee: spring,
                    right_knee: spring,
                    ..Pose::standing(if t < 0.5 {
                        Expression::Normal
                    } else {
                        Expression::Surprised
                    })
                }
            }
            Self::Serve => {
                let toss = (t * 2.0).min(1.0);
                let (right_arm, right_forearm) = if t < 0.6 {
                    (PI * 0.8, FRAC_PI_2)
                } else {
                    (PI * 0.8 - (t - 0.6) / 0.4 * PI * 0.6, 0.0)
                };
                Pose {
                    left_arm: -PI * 0.9 * toss,
                    right_arm,
                    right_forearm,
                    ..Pose::standing(Expression::Excited)
                }
            }
            Self::Spike => {
                let airborne = t >= 0.4;
                let right_arm = if airborne {
                    PI * 0.9 - (t - 0.4) / 0.6 * (PI * 0.9 - FRAC_PI_6)
                } else {
                    PI * 0.9
                };
                let crouch = if airborne { 0.0 } else { FRAC_PI_4 };
                Pose {
                    left_arm: -PI * 0.6,
                    right_arm,
                    left_knee: crouch,
                    right_knee: crouch,
                    ..Pose::standing(Expression::Excited)
                }
            }
            Self::Block => {
                let crouch = if t < 0.5 { FRAC_PI_4 * osc(t, 2.0) } else { 0.0 };
                Pose {
                    left_arm: -(PI - FRAC_PI_12),
                    right_arm: PI - FRAC_PI_12,
                    left_knee: crouch,
                    right_knee: crouch,
                    ..Pose::standing(Expression::Surprised)
                }
            }
            Self::Jab => {
                let extend = osc(t, 4.0).abs();
                Pose {
                    left_arm: -FRAC_PI_2 * extend,
                    right_arm: FRAC_PI_4,
                    left_forearm: -FRAC_PI_2 * (1.0 - extend),
                    right_forearm: PI * 0.75,
                    left_leg: -FRAC_PI_8,
                    right_leg: FRAC_PI_8,
                    ..Pose::standing(Expression::Excited)
                }
            }
            Self::Uppercut => {
                let (right_arm, right_forearm, knees) = if t < 0.5 {
                    (FRAC_PI_6, FRAC_PI_2, FRAC_PI_6)
                } else {
                    let rise = (t - 0.5) * 2.0;
                    (
                        FRAC_PI_6 + rise * (PI * 0.75 - FRAC_PI_6),
                        FRAC_PI_2 - rise * FRAC_PI_4,
                        0.0,
                    )
                };
                Pose {
                    left_arm: -FRAC_PI_4,
                    right_arm,
                    left_forearm: -PI * 0.75,
                    right_forearm,
                    left_knee: knees,
                    right_knee: knees,
                    ..Pose::standing(Expression::Excited)
                }
            }
            Self::Punch => {
                let beat = osc(t, 4.0);
                let left_out = beat.max(0.0);
                let right_out = (-beat).max(0.0);
                Pose {
                    left_arm: -FRAC_PI_2 * left_out,
                    right_arm: FRAC_PI_2 * right_out,
                    left_forearm: -FRAC_PI_2 * (1.0 - left_out),
                    right_forearm: FRAC_PI_2 * (1.0 - right_out),
                    left_leg: -FRAC_PI_8,
                    right_leg: FRAC_PI_8,
                    ..Pose::standing(Expression::Excited)
                }
            }
            Self::Glide => {
                let pole = osc(t, 2.0) * 0.2;
                Pose {
                    left_arm: -FRAC_PI_6 + pole,
                    right_arm: FRAC_PI_6 + pole,
                    left_leg: -FRAC_PI_12 + pole,
                    right_leg: FRAC_PI_12 + pole,
                    left_knee: FRAC_PI_6,
                    right_knee: FRAC_PI_6,
                    ..Pose::standing(Expression::Happy)
                }
            }
            Self::Write => Pose {
                left_arm: -FRAC_PI_6,
                right_arm: FRAC_PI_4,
                left_forearm: -FRAC_PI_3,
                right_forearm: FRAC_PI_2 + osc(t, 8.0) * 0.15,
                ..Pose::standing(Expression::Normal)
            },
            Self::Point => Pose {
                right_arm: FRAC_PI_2 + osc(t, 2.0) * 0.1,
                right_forearm: 0.0,
                ..Pose::standing(Expression::Normal)
            },
            Self::Chop => Pose {
                left_arm: -FRAC_PI_6,
                right_arm: FRAC_PI_4 + FRAC_PI_4 * osc(t, 6.0).abs(),
                left_forearm: -FRAC_PI_3,
                right_forearm: FRAC_PI_3,
                ..Pose::standing(Expression::Normal)
            },
            Self::Stir => Pose {
                right_arm: FRAC_PI_4 + osc(t, 4.0) * 0.2,
                right_forearm: FRAC_PI_3 + (t * PI * 4.0).cos() * 0.2,
                ..Pose::standing(Expression::Normal)
            },
            Self::Spray => {
                let sweep = osc(t, 2.0) * FRAC_PI_8;
                Pose {
                    left_arm: -FRAC_PI_2 + sweep,
                    right_arm: FRAC_PI_2 + sweep,
                    left_forearm: -FRAC_PI_12,
                    right_forearm: FRAC_PI_12,
                    left_leg: -FRAC_PI_8,
                    right_leg: FRAC_PI_8,
                    left_knee: FRAC_PI_12,
                    right_knee: FRAC_PI_12,
                    expression: Expression::Normal,
                }
            }
            Self::Sing => Pose {
                left_arm: -FRAC_PI_4 - osc(t, 2.0).abs() * FRAC_PI_4,
                right_arm: FRAC_PI_6,
                right_forearm: PI * 0.75,
                ..Pose::standing(Expression::Happy)
            },
            Self::Bow => {
                let dip = osc(t, 2.0).abs();
                Pose {
                    left_arm: -FRAC_PI_12,
                    right_arm: FRAC_PI_12,
                    left_forearm: -FRAC_PI_2 * dip,
                    right_forearm: FRAC_PI_2 * dip,
                    left_knee: FRAC_PI_12 * dip,
                    right_knee: FRAC_PI_12 * dip,
                    ..Pose::standing(Expression::Happy)
                }
            }
            Self::Paint => Pose {
                left_arm: -FRAC_PI_4,
                right_arm: FRAC_PI_2 + osc(t, 2.0) * FRAC_PI_4,
                left_forearm: -FRAC_PI_2,
                right_forearm: osc(t, 4.0) * FRAC_PI_8,
                ..Pose::standing(Expression::Happy)
            },
            Self::Steer => {
                let turn = osc(t, 2.0) * FRAC_PI_8;
                Pose {
                    left_arm: -FRAC_PI_3 + turn,
                    right_arm: FRAC_PI_3 + turn,
                    left_forearm: -FRAC_PI_3,
                    right_forearm: FRAC_PI_3,
                    ..Pose::standing(Expression::Normal)
                }
            }
            Self::Type => {
                let keys = osc(t, 12.0) * 0.1;
                Pose {
                    left_arm: -FRAC_PI_6,
                    right_arm: FRAC_PI_6,
                    left_forearm: -(FRAC_PI_2 + keys),
                    right_forearm: FRAC_PI_2 - keys,
                    ..Pose::standing(Expression::Normal)
                }
            }
            Self::Think => Pose {
                left_arm: -FRAC_PI_4,
                right_arm: FRAC_PI_2,
                right_forearm: -FRAC_PI_2,
                ..Pose::standing(Expression::Normal)
            },
            Self::Examine => Pose {
                left_arm: -FRAC_PI_4,
                right_arm: FRAC_PI_6,
                left_forearm: FRAC_PI_2,
                right_forearm: FRAC_PI_2 + osc(t, 2.0) * 0.3,
                ..Pose::standing(Expression::Normal)
            },
            Self::Clap => {
                let closed = t >= 0.5;
                Pose {
                    left_arm: -FRAC_PI_3,
                    right_arm: FRAC_PI_3,
                    left_forearm: if closed { -FRAC_PI_2 } else { -FRAC_PI_3 },
                    right_forearm: if closed { FRAC_PI_2 } else { FRAC_PI_3 },
                    ..Pose::standing(Expression::Happy)
                }
            }
            Self::Cry => {
                let sob = osc(t, 8.0) * 0.1;
                Pose {
                    left_arm: -FRAC_PI_6,
                    right_arm: FRAC_PI_6,
                    left_forearm: -PI * 0.75 + sob,
                    right_forearm: PI * 0.75 - sob,
                    left_knee: FRAC_PI_12,
                    right_knee: FRAC_PI_12,
                    ..Pose::standing(Expression::Normal)
                }
            }
            Self::Yawn => {
                let reach = osc(t, 1.0);
                Pose {
                    left_arm: -(FRAC_PI_6 + PI * 0.75 * reach),
                    right_arm: FRAC_PI_6 + PI * 0.75 * reach,
                    ..Pose::standing(if reach > 0.5 {
                        Expression::Surprised
                    } else {
                        Expression::Normal
                    })
                }
            }
            Self::Stretch => {
                let lean = osc(t, 2.0) * FRAC_PI_4;
                Pose {
                    left_arm: -FRAC_PI_2 - lean,
                    right_arm: FRAC_PI_2 - lean,
                    ..Pose::standing(Expression::Happy)
                }
            }
            Self::Cheer => {
                let pump = osc(t, 8.0) * 0.2;
                Pose {
                    left_arm: -PI * 0.75 - pump,
                    right_arm: PI * 0.75 + pump,
                    ..Pose::standing(Expression::Excited)
                }
            }
            Self::Eat => {
                let lift = osc(t, 4.0).abs();
                Pose {
                    right_arm: FRAC_PI_6 * lift,
                    right_forearm: PI * 0.75 * lift,
                    ..Pose::standing(Expression::Happy)
                }
            }
            Self::Bite => Pose {
                left_arm: -FRAC_PI_6,
                right_arm: FRAC_PI_6,
                left_forearm: -PI * 0.75,
                right_forearm: PI * 0.75,
                ..Pose::standing(if t < 0.5 {
                    Expression::Excited
                } else {
                    Expression::Happy
                })
            },
            Self::Slurp => Pose {
                left_arm: -FRAC_PI_12,
                right_arm: FRAC_PI_6,
                left_forearm: -FRAC_PI_2,
                right_forearm: FRAC_PI_2 + FRAC_PI_4 * osc(t, 4.0).abs(),
                ..Pose::standing(Expression::Happy)
            },
            Self::Lick => Pose {
                right_arm: FRAC_PI_6,
                right_forearm: PI * 0.75 + osc(t, 6.0) * 0.1,
                ..Pose::standing(Expression::Happy)
            },
            Self::Twirl => Pose {
                left_arm: -FRAC_PI_12,
                right_arm: FRAC_PI_6,
                left_forearm: -FRAC_PI_2,
                right_forearm: FRAC_PI_2 + osc(t, 4.0) * 0.25,
                ..Pose::standing(Expression::Happy)
            },
            Self::Cut => Pose {
                left_arm: -FRAC_PI_6,
                right_arm: FRAC_PI_6,
                left_forearm: -FRAC_PI_2,
                right_forearm: FRAC_PI_2 + osc(t, 8.0) * 0.2,
                ..Pose::standing(Expression::Normal)
            },
            Self::Run => run(t, 4.0, Expression::Normal),
            Self::Sprint => run(t, 8.0, Expression::Excited),
            Self::Wave => Pose {
                left_arm: -FRAC_PI_4,
                right_arm: -FRAC_PI_2,
                left_forearm: 0.0,
                right_forearm: osc(t, 6.0) * FRAC_PI_6,
                ..Pose::standing(Expression::Happy)
            },
            Self::Dance => {
                let groove = osc(t, 4.0);
                let step = osc(t, 2.0) * FRAC_PI_4;
                Pose {
                    left_arm: groove * FRAC_PI_3 - FRAC_PI_4,
                    right_arm: -groove * FRAC_PI_3 + FRAC_PI_4,
                    left_forearm: groove * FRAC_PI_4,
                    right_forearm: -groove * FRAC_PI_4,
                    left_leg: step,
                    right_leg: -step,
                    left_knee: 0.0,
                    right_knee: 0.0,
                    expression: Expression::Excited,
                }
            }
            Self::Spin => {
                let facing = (t * PI * 2.0).cos();
                Pose {
                    left_arm: -FRAC_PI_2 * facing,
                    right_arm: FRAC_PI_2 * facing,
                    ..Pose::standing(Expression::Excited)
                }
            }
            Self::Celebrate => {
                let shake = osc(t, 8.0) * FRAC_PI_6;
                let bob = osc(t, 4.0) * FRAC_PI_12;
                Pose {
                    left_arm: -FRAC_PI_2 - FRAC_PI_4,
                    right_arm: FRAC_PI_2 + FRAC_PI_4,
                    left_forearm: shake,
                    right_forearm: -shake,
                    left_leg: -FRAC_PI_6,
                    right_leg: FRAC_PI_6,
                    left_knee: bob,
                    right_knee: bob,
                    expression: Expression::Excited,
                }
            }
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn osc(t: f32, half_turns: f32) -> f32 {
    (t * PI * half_turns).sin()
}

/// Shared gait for `run` and `sprint`; `half_turns` sets the stride rate.
fn run(t: f32, half_turns: f32, expression: Expression) -> Pose {
    let stride = osc(t, half_turns);
    let knee = stride.abs() * FRAC_PI_4;
    Pose {
        left_arm: stride * FRAC_PI_3 - FRAC_PI_6,
        right_arm: -stride * FRAC_PI_3 + FRAC_PI_6,
        left_forearm: 0.0,
        right_forearm: 0.0,
        left_leg: stride * FRAC_PI_3,
        right_leg: -stride * FRAC_PI_3,
        left_knee: knee,
        right_knee: knee,
        expression,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_round_trip_and_are_unique() {
        let mut seen = HashSet::new();
        for g in Gesture::ALL {
            assert!(seen.insert(g.name()), "duplicate name {}", g.name());
            assert_eq!(Gesture::from_name(g.name()), Some(g));
        }
        assert!(seen.len() >= 40);
    }

    #[test]
    fn idle_is_not_a_catalog_entry() {
        assert_eq!(Gesture::from_name("idle"), None);
        assert_eq!(Gesture::from_name("Hop"), None);
    }

    #[test]
    fn every_category_is_populated() {
        for c in [
            Category::Animal,
            Category::Sports,
            Category::Profession,
            Category::Emotion,
            Category::Food,
            Category::Generic,
        ] {
            assert!(Gesture::ALL.iter().any(|g| g.category() == c), "{c:?}");
        }
    }

    #[test]
    fn same_phase_yields_same_pose() {
        for g in Gesture::ALL {
            assert_eq!(g.pose(0.37), g.pose(0.37));
        }
    }

    #[test]
    fn trunk_swing_moves_both_arms_together() {
        let p = Gesture::TrunkSwing.pose(0.25);
        assert_eq!(p.left_arm, p.right_arm);
        assert!((p.left_arm - FRAC_PI_3).abs() < 1e-5);
    }

    #[test]
    fn sprint_strides_faster_than_run() {
        // a quarter of the way into run's first stride, sprint is already at its peak
        let run = Gesture::Run.pose(1.0 / 16.0);
        let sprint = Gesture::Sprint.pose(1.0 / 16.0);
        assert!(sprint.left_leg > run.left_leg);
        assert_eq!(sprint.expression, Expression::Excited);
    }

    #[test]
    fn display_uses_wire_name() {
        assert_eq!(Gesture::TailWag.to_string(), "tail-wag");
    }
}
