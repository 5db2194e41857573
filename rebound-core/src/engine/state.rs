use std::fmt;
use std::time::Instant;

use rebound_model::{AxisBounds, Direction, Point};

/// Where the engine is in its gesture-to-settle cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A pointer is down and driving the position.
    Dragging,
    /// Free momentum after a release.
    Decelerating,
    /// Returning onto a bound (or onto the pull-down hold).
    Bouncing,
    /// Settling onto a page or picker item.
    Snapping,
    /// Playing a programmatic scroll.
    Scrolling,
}

impl Phase {
    pub fn is_animating(self) -> bool {
        matches!(
            self,
            Phase::Decelerating
                | Phase::Bouncing
                | Phase::Snapping
                | Phase::Scrolling
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Dragging => "dragging",
            Phase::Decelerating => "decelerating",
            Phase::Bouncing => "bouncing",
            Phase::Snapping => "snapping",
            Phase::Scrolling => "scrolling",
        };
        f.write_str(name)
    }
}

/// Position and motion bookkeeping for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisState {
    pub position: f32,
    /// Natural bounds as last reported by the measurer.
    pub bounds: AxisBounds,
    /// Net direction of the last gesture, relative to where it started.
    pub direction: Direction,
    /// Direction of the most recent position change.
    pub moving_direction: Direction,
    /// Whether drags and wheel input move this axis.
    pub enabled: bool,
}

impl AxisState {
    pub fn new(position: f32, bounds: AxisBounds, enabled: bool) -> Self {
        Self {
            position,
            bounds,
            direction: Direction::None,
            moving_direction: Direction::None,
            enabled,
        }
    }
}

/// Axis a drag committed to once it travelled past the lock threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionLock {
    Undecided,
    Horizontal,
    Vertical,
    /// Travel was too diagonal to pick an axis; both axes move.
    Neither,
    /// `free_scroll`: both axes move without ever locking.
    Free,
}

/// Bookkeeping for the pointer gesture in progress.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Gesture {
    /// Pointer position when the gesture started.
    pub pointer_origin: Point,
    /// Last accepted pointer position.
    pub pointer: Point,
    /// Content position when the gesture started.
    pub origin: Point,
    pub lock: DirectionLock,
    pub moved: bool,
    pub last_at: Instant,
    /// Start of the current throttled-probe window.
    pub probe_window_at: Instant,
    /// Set by `disable()`; remaining samples of this gesture are dropped.
    pub stale: bool,
}

impl Gesture {
    pub fn new(pointer: Point, origin: Point, at: Instant) -> Self {
        Self {
            pointer_origin: pointer,
            pointer,
            origin,
            lock: DirectionLock::Undecided,
            moved: false,
            last_at: at,
            probe_window_at: at,
            stale: false,
        }
    }
}
