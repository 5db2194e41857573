//! Mouse wheel and trackpad scrolling.

use std::time::{Duration, Instant};

use rebound_contracts::{Measurer, Renderer};
use rebound_model::{Easing, Point};
use tracing::{debug, trace, warn};

use super::{Phase, ScrollEngine};
use crate::events::ScrollEvent;

/// One wheel notch, in wheel units. Positive `y` scrolls forward (content
/// moves up), positive `x` scrolls toward the right.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelDelta {
    pub x: f32,
    pub y: f32,
}

impl WheelDelta {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn vertical(y: f32) -> Self {
        Self { x: 0.0, y }
    }
}

impl<M, R> ScrollEngine<M, R>
where
    M: Measurer,
    R: Renderer,
{
    /// Feed one wheel notch. Returns `false` when the notch was ignored.
    ///
    /// `ScrollEnd` follows once no notch arrived for the settle time; it is
    /// published from [`tick`](Self::tick).
    pub fn mouse_wheel(&mut self, delta: WheelDelta, now: Instant) -> bool {
        let Some(options) = self.options.mouse_wheel.enabled() else {
            return false;
        };
        if !self.enabled || self.gesture.is_some() {
            trace!("mouse wheel ignored");
            return false;
        }
        if let Some(last) = self.wheel_session
            && now < last
        {
            warn!(
                previous = ?last,
                rejected = ?now,
                "out-of-order wheel notch dropped"
            );
            return false;
        }

        let sign = if options.invert { -1.0 } else { 1.0 };
        let speed = options.speed;
        let mut dx = delta.x * sign;
        let dy = delta.y * sign;
        if !self.y.enabled && self.x.enabled && dx == 0.0 {
            dx = dy;
        }

        if self.wheel_session.is_none() {
            self.events.emit(ScrollEvent::ScrollStart);
        }
        self.wheel_session = Some(now);

        if self.pages.is_some() {
            let step = if dx.abs() > dy.abs() { dx } else { dy };
            let outcome = if step > 0.0 {
                self.next(None, None)
            } else if step < 0.0 {
                self.prev(None, None)
            } else {
                Ok(())
            };
            if let Err(err) = outcome {
                warn!(%err, "wheel page step failed");
            }
            return true;
        }

        if let Some(wheel) = self.wheel {
            let count = wheel.count();
            let looping = self
                .options
                .wheel
                .enabled()
                .is_some_and(|options| options.looping);
            let current = self.selected_index;
            let index = match (dy > 0.0, dy < 0.0) {
                (true, _) if current + 1 < count => current + 1,
                (true, _) if looping => 0,
                (_, true) if current > 0 => current - 1,
                (_, true) if looping => count.saturating_sub(1),
                _ => current,
            };
            if index != current
                && let Err(err) = self.wheel_to(index)
            {
                warn!(%err, "wheel item step failed");
            }
            return true;
        }

        let current = self.position().round();
        let moved = Point::new(
            if self.x.enabled { current.x - dx * speed } else { current.x },
            if self.y.enabled { current.y - dy * speed } else { current.y },
        );
        let target = self.bounds().clamp(moved).round();
        debug!(%target, "wheel scroll");
        self.animate_to(
            target,
            Duration::ZERO,
            Easing::default(),
            Phase::Scrolling,
        );
        true
    }

    /// Close the wheel session once it has been quiet for the settle time.
    pub(super) fn settle_mouse_wheel(&mut self, now: Instant) {
        let (Some(last), Some(options)) =
            (self.wheel_session, self.options.mouse_wheel.enabled())
        else {
            return;
        };
        if self.playback.is_some()
            || now.saturating_duration_since(last) < options.settle_time
        {
            return;
        }
        self.wheel_session = None;
        let position = self.position();
        debug!(%position, "wheel scroll settled");
        self.events.emit(ScrollEvent::ScrollEnd(position));
    }
}
