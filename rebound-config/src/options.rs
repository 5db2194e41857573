//! Resolved, validated options consumed by the engine.
//!
//! Built once by [`ScrollConfig::resolve`](crate::ScrollConfig::resolve).
//! Times are `Duration`s and every boolean-or-table group has become a
//! [`Feature`].

use std::time::Duration;

use rebound_model::{Axis, Easing, Edge, Point};

use crate::models::{BounceEdges, Passthrough, ProbeMode};
use crate::toggle::Feature;

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollOptions {
    pub movement: MovementOptions,
    pub momentum: MomentumOptions,
    pub flick: FlickOptions,
    pub bounce: BounceOptions,
    pub snap: Feature<SnapOptions>,
    pub wheel: Feature<WheelOptions>,
    pub pull_down: Feature<PullDownOptions>,
    pub pull_up: Feature<PullUpOptions>,
    pub mouse_wheel: Feature<MouseWheelOptions>,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        crate::validation::resolve_unchecked(&crate::ScrollConfig::default())
    }
}

impl ScrollOptions {
    /// Whether `axis` is configured to scroll at all.
    pub fn scrolls(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.movement.scroll_x,
            Axis::Y => self.movement.scroll_y,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovementOptions {
    pub start: Point,
    pub scroll_x: bool,
    pub scroll_y: bool,
    pub free_scroll: bool,
    pub direction_lock_threshold: f32,
    pub passthrough: Passthrough,
    pub probe: ProbeMode,
    pub sample_capacity: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MomentumOptions {
    pub enabled: bool,
    /// Also the trailing window of the velocity estimator.
    pub limit_time: Duration,
    pub limit_distance: f32,
    pub swipe_time: Duration,
    pub swipe_bounce_time: Duration,
    /// Exponential decay rate in 1/ms.
    pub deceleration: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlickOptions {
    pub limit_time: Duration,
    pub limit_distance: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BounceOptions {
    /// `Disabled` hard-clamps every edge.
    pub edges: Feature<BounceEdges>,
    pub time: Duration,
    /// Divisor applied to drag deltas past a bound.
    pub resistance: f32,
}

impl BounceOptions {
    pub fn allows(&self, edge: Edge) -> bool {
        match &self.edges {
            Feature::Disabled => false,
            Feature::Enabled(edges) => edges.allows(edge),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnapOptions {
    pub looping: bool,
    pub threshold: f32,
    pub step_x: Option<f32>,
    pub step_y: Option<f32>,
    pub speed: Option<Duration>,
    pub easing: Easing,
    pub flick_velocity: f32,
}

impl SnapOptions {
    pub fn step(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::X => self.step_x,
            Axis::Y => self.step_y,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelOptions {
    pub selected_index: usize,
    pub rotate: f32,
    pub adjust_time: Duration,
    pub looping: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullDownOptions {
    pub threshold: f32,
    pub stop: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PullUpOptions {
    pub threshold: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MouseWheelOptions {
    pub speed: f32,
    pub invert: bool,
    pub settle_time: Duration,
}
