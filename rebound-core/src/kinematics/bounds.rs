//! Boundary & bounce resolution.

use std::time::Duration;

use rebound_model::{Axis, AxisBounds, Easing, Point};

use super::trajectory::Trajectory;

/// Bounds of both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollBounds {
    pub x: AxisBounds,
    pub y: AxisBounds,
}

impl ScrollBounds {
    pub fn new(x: AxisBounds, y: AxisBounds) -> Self {
        Self { x, y }
    }

    pub fn axis(&self, axis: Axis) -> AxisBounds {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn contains(&self, position: Point) -> bool {
        self.x.contains(position.x) && self.y.contains(position.y)
    }

    pub fn clamp(&self, position: Point) -> Point {
        Point::new(self.x.clamp(position.x), self.y.clamp(position.y))
    }
}

/// Whether each end of one axis may be dragged past its bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgePolicy {
    /// The edge at `max` (top or left).
    pub leading: bool,
    /// The edge at `min` (bottom or right).
    pub trailing: bool,
}

impl EdgePolicy {
    pub const HARD: EdgePolicy = EdgePolicy {
        leading: false,
        trailing: false,
    };
    pub const SOFT: EdgePolicy = EdgePolicy {
        leading: true,
        trailing: true,
    };
}

/// Position clamped into `[min, max]`.
pub fn clamp(position: f32, bounds: AxisBounds) -> f32 {
    bounds.clamp(position)
}

/// Apply a drag `delta` to `current`.
///
/// Past a bound whose edge permits overshoot the delta is divided by
/// `resistance` (rubber band); past a hard edge the result is clamped.
pub fn soft_clamp(
    current: f32,
    delta: f32,
    bounds: AxisBounds,
    policy: EdgePolicy,
    resistance: f32,
) -> f32 {
    let next = current + delta;
    if next > bounds.max {
        if policy.leading {
            current + delta / resistance
        } else {
            bounds.max
        }
    } else if next < bounds.min {
        if policy.trailing {
            current + delta / resistance
        } else {
            bounds.min
        }
    } else {
        next
    }
}

/// Nearest in-bounds position, or `None` when `position` is already inside.
pub fn bounce_target(position: Point, bounds: &ScrollBounds) -> Option<Point> {
    let target = bounds.clamp(position);
    (target != position).then_some(target)
}

/// Trajectory easing an overshot position back onto the nearest bound.
pub fn bounce_trajectory(
    overshot: Point,
    bounds: &ScrollBounds,
    bounce_time: Duration,
) -> Option<Trajectory> {
    bounce_target(overshot, bounds).map(|target| {
        Trajectory::new(overshot, target, bounce_time, Easing::QuartOut)
    })
}
