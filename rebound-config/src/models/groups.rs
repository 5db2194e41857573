//! Parameter tables for the boolean-or-table option groups.

use rebound_model::{Easing, Edge};
use serde::{Deserialize, Serialize};

use crate::constants;

/// Which edges may be dragged past their bound (rubber-band) instead of
/// hard-clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BounceEdges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Default for BounceEdges {
    fn default() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
        }
    }
}

impl BounceEdges {
    pub const NONE: BounceEdges = BounceEdges {
        top: false,
        bottom: false,
        left: false,
        right: false,
    };

    pub fn allows(&self, edge: Edge) -> bool {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }
}

/// Paging (slide) parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Wrap around at both ends. The content must carry a clone of the last
    /// page before the first and of the first page after the last.
    #[serde(rename = "loop")]
    pub loop_pages: bool,
    /// Travel from the gesture origin needed to leave the current page:
    /// a fraction of the page when below 1, pixels otherwise.
    pub threshold: f32,
    /// Page width; defaults to the viewport width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_x: Option<f32>,
    /// Page height; defaults to the viewport height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_y: Option<f32>,
    /// Fixed snap duration; derived from distance when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_ms: Option<u64>,
    pub easing: Easing,
    /// Release speed (px/ms) that counts as a flick toward the next page.
    pub flick_velocity: f32,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            loop_pages: false,
            threshold: constants::snap::THRESHOLD,
            step_x: None,
            step_y: None,
            speed_ms: None,
            easing: Easing::QuartOut,
            flick_velocity: constants::snap::FLICK_VELOCITY,
        }
    }
}

/// Picker (wheel) parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub selected_index: usize,
    /// Degrees between neighbouring items, for renderers drawing a drum.
    pub rotate: f32,
    pub adjust_time_ms: u64,
    /// Wrap item indices past either end.
    #[serde(rename = "loop")]
    pub loop_items: bool,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            selected_index: 0,
            rotate: constants::wheel::ROTATE_DEG,
            adjust_time_ms: constants::wheel::ADJUST_TIME_MS,
            loop_items: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullDownConfig {
    pub threshold: f32,
    pub stop: f32,
}

impl Default for PullDownConfig {
    fn default() -> Self {
        Self {
            threshold: constants::pull::DOWN_THRESHOLD,
            stop: constants::pull::DOWN_STOP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullUpConfig {
    pub threshold: f32,
}

impl Default for PullUpConfig {
    fn default() -> Self {
        Self {
            threshold: constants::pull::UP_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MouseWheelConfig {
    pub speed: f32,
    pub invert: bool,
    pub settle_time_ms: u64,
}

impl Default for MouseWheelConfig {
    fn default() -> Self {
        Self {
            speed: constants::mouse_wheel::SPEED,
            invert: false,
            settle_time_ms: constants::mouse_wheel::SETTLE_TIME_MS,
        }
    }
}
