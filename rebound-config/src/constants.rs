//! Default tuning for the motion engine
//!
//! Tuning should happen here so every option group and preset picks up the
//! same values. Times are milliseconds, distances are pixels.

/// Drag handling defaults.
pub mod movement {
    /// Travel (px) before a gesture commits to one axis.
    pub const DIRECTION_LOCK_THRESHOLD: f32 = 5.0;
    /// Capacity of the gesture sample ring buffer.
    pub const SAMPLE_CAPACITY: usize = 64;
}

/// Momentum (free deceleration) defaults.
pub mod momentum {
    /// Trailing window (ms) used for velocity estimation. A release whose
    /// window spans longer than this never starts momentum.
    pub const LIMIT_TIME_MS: u64 = 300;
    /// Minimum travel (px) inside the window before momentum starts.
    pub const LIMIT_DISTANCE: f32 = 15.0;
    /// Duration (ms) of a free momentum trajectory.
    pub const SWIPE_TIME_MS: u64 = 2500;
    /// Duration (ms) of a momentum trajectory that overshoots a bound.
    pub const SWIPE_BOUNCE_TIME_MS: u64 = 500;
    /// Decay rate (1/ms). Velocity decays as `v0 * exp(-t * DECELERATION)`,
    /// so total travel is `v0 / DECELERATION`.
    pub const DECELERATION: f32 = 0.0015;
    /// Overshoot divisor applied to `viewport * speed` when momentum leaves
    /// the bounds.
    pub const OVERSHOOT_RATE: f32 = 15.0;
}

/// Flick detection defaults.
pub mod flick {
    /// A release shorter than this (ms) may count as a flick.
    pub const LIMIT_TIME_MS: u64 = 200;
    /// A flick travels less than this (px) on both axes.
    pub const LIMIT_DISTANCE: f32 = 100.0;
}

/// Boundary bounce defaults.
pub mod bounce {
    /// Duration (ms) of the bounce-back trajectory.
    pub const TIME_MS: u64 = 800;
    /// Drag deltas past a bound are divided by this factor.
    pub const RESISTANCE: f32 = 3.0;
}

/// Paging (slide) defaults.
pub mod snap {
    /// Fraction of a page (or pixels, when >= 1) a release must travel from
    /// the gesture origin before leaving the current page.
    pub const THRESHOLD: f32 = 0.1;
    /// Release speed (px/ms) above which the next page in the direction of
    /// travel is chosen.
    pub const FLICK_VELOCITY: f32 = 0.3;
    /// Bounds (ms) for the automatic snap duration derived from distance.
    pub const MIN_AUTO_DURATION_MS: u64 = 300;
    pub const MAX_AUTO_DURATION_MS: u64 = 1000;
}

/// Picker (wheel) defaults.
pub mod wheel {
    /// Rotation (degrees) between neighbouring items.
    pub const ROTATE_DEG: f32 = 25.0;
    /// Duration (ms) of the settle onto an item.
    pub const ADJUST_TIME_MS: u64 = 400;
}

/// Pull-to-refresh / pull-to-load defaults.
pub mod pull {
    /// Overflow (px) past the top edge that arms a refresh.
    pub const DOWN_THRESHOLD: f32 = 90.0;
    /// Distance (px) from the top edge the content holds at while refreshing.
    pub const DOWN_STOP: f32 = 40.0;
    /// Distance (px) from the bottom edge that triggers a load.
    pub const UP_THRESHOLD: f32 = 0.0;
}

/// Mouse wheel defaults.
pub mod mouse_wheel {
    /// Pixels moved per normalized wheel notch.
    pub const SPEED: f32 = 20.0;
    /// Quiet period (ms) after the last notch before the scroll ends.
    pub const SETTLE_TIME_MS: u64 = 400;
}
