pub mod groups;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::toggle::Toggle;

pub use groups::{
    BounceEdges, MouseWheelConfig, PullDownConfig, PullUpConfig, SnapConfig,
    WheelConfig,
};

/// Axis whose gestures are handed back to the host instead of scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Passthrough {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// How eagerly `Scroll` events are published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeMode {
    /// Never publish `Scroll`.
    Off,
    /// During a drag, at most once per momentum window.
    Throttled,
    /// Every accepted drag sample.
    Drag,
    /// Every drag sample and every animation frame.
    #[default]
    Realtime,
}

/// Raw option tree as written by users.
///
/// Every field has a default, so a config file only lists what it changes.
/// Call [`ScrollConfig::resolve`] to validate and obtain the
/// [`ScrollOptions`](crate::ScrollOptions) the engine consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    // Movement
    pub start_x: f32,
    pub start_y: f32,
    pub scroll_x: bool,
    pub scroll_y: bool,
    /// Scroll both axes at once without committing to one.
    pub free_scroll: bool,
    pub direction_lock_threshold: f32,
    pub event_passthrough: Passthrough,
    pub probe: ProbeMode,
    pub sample_capacity: usize,

    // Momentum
    pub momentum: bool,
    pub momentum_limit_time_ms: u64,
    pub momentum_limit_distance: f32,
    pub swipe_time_ms: u64,
    pub swipe_bounce_time_ms: u64,
    pub deceleration: f32,

    // Flick
    pub flick_limit_time_ms: u64,
    pub flick_limit_distance: f32,

    // Bounce
    pub bounce: Toggle<BounceEdges>,
    pub bounce_time_ms: u64,
    pub bounce_resistance: f32,

    // Features
    pub snap: Toggle<SnapConfig>,
    pub wheel: Toggle<WheelConfig>,
    pub pull_down_refresh: Toggle<PullDownConfig>,
    pub pull_up_load: Toggle<PullUpConfig>,
    pub mouse_wheel: Toggle<MouseWheelConfig>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            start_x: 0.0,
            start_y: 0.0,
            scroll_x: false,
            scroll_y: true,
            free_scroll: false,
            direction_lock_threshold:
                constants::movement::DIRECTION_LOCK_THRESHOLD,
            event_passthrough: Passthrough::None,
            probe: ProbeMode::Realtime,
            sample_capacity: constants::movement::SAMPLE_CAPACITY,
            momentum: true,
            momentum_limit_time_ms: constants::momentum::LIMIT_TIME_MS,
            momentum_limit_distance: constants::momentum::LIMIT_DISTANCE,
            swipe_time_ms: constants::momentum::SWIPE_TIME_MS,
            swipe_bounce_time_ms: constants::momentum::SWIPE_BOUNCE_TIME_MS,
            deceleration: constants::momentum::DECELERATION,
            flick_limit_time_ms: constants::flick::LIMIT_TIME_MS,
            flick_limit_distance: constants::flick::LIMIT_DISTANCE,
            bounce: Toggle::Flag(true),
            bounce_time_ms: constants::bounce::TIME_MS,
            bounce_resistance: constants::bounce::RESISTANCE,
            snap: Toggle::Flag(false),
            wheel: Toggle::Flag(false),
            pull_down_refresh: Toggle::Flag(false),
            pull_up_load: Toggle::Flag(false),
            mouse_wheel: Toggle::Flag(false),
        }
    }
}

impl ScrollConfig {
    /// Vertical list with momentum and bounce on every edge.
    pub fn vertical_list() -> Self {
        Self::default()
    }

    /// Horizontal slides that page by viewport width.
    pub fn horizontal_slides() -> Self {
        Self {
            scroll_x: true,
            scroll_y: false,
            momentum: false,
            snap: Toggle::Custom(SnapConfig {
                threshold: 0.3,
                ..SnapConfig::default()
            }),
            ..Self::default()
        }
    }

    /// Vertical picker settling on discrete items.
    pub fn picker() -> Self {
        Self {
            wheel: Toggle::Flag(true),
            ..Self::default()
        }
    }
}
