//! Easing curves used by trajectories
//!
//! Each curve maps normalized progress `t` in `[0, 1]` to eased progress in
//! `[0, 1]`, with `apply(0) == 0` and `apply(1) == 1`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    Linear,
    QuadIn,
    /// Gentle deceleration; used for momentum that overshoots a bound.
    QuadOut,
    QuadInOut,
    CubicOut,
    /// Snappy settle; default for bounce-back and programmatic scrolls.
    #[default]
    QuartOut,
    /// Long tail; used for free momentum.
    QuinticOut,
}

impl Easing {
    pub const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicOut,
        Easing::QuartOut,
        Easing::QuinticOut,
    ];

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::QuartOut => 1.0 - (1.0 - t).powi(4),
            Easing::QuinticOut => 1.0 - (1.0 - t).powi(5),
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::QuadIn => write!(f, "Ease In"),
            Self::QuadOut => write!(f, "Ease Out"),
            Self::QuadInOut => write!(f, "Ease In/Out"),
            Self::CubicOut => write!(f, "Ease Out (cubic)"),
            Self::QuartOut => write!(f, "Ease Out (quartic)"),
            Self::QuinticOut => write!(f, "Ease Out (quintic)"),
        }
    }
}
