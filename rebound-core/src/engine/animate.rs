//! Frame ticks, trajectory playback and programmatic scrolling.

use std::time::{Duration, Instant};

use rebound_contracts::{Measurer, Renderer};
use rebound_model::{Axis, Easing, Point};
use tracing::{debug, trace, warn};

use super::{Phase, ScrollEngine, ScrollSource};
use crate::error::{Result, TargetError};
use crate::events::ScrollEvent;
use crate::kinematics::bounds::bounce_trajectory;
use crate::kinematics::{Playback, Trajectory};

/// Alignment of an element inside the viewport for `scroll_to_element`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ElementOffset {
    /// Element edge aligned with the viewport edge.
    #[default]
    None,
    /// Element centred in the viewport.
    Center,
    /// Element edge this many pixels past the viewport edge.
    Pixels(f32),
}

impl<M, R> ScrollEngine<M, R>
where
    M: Measurer,
    R: Renderer,
{
    /// Advance the running animation and pending wheel scroll to `now`.
    ///
    /// Returns `true` while the engine still needs frames.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.last_frame = Some(now);

        if let Some(mut playback) = self.playback.take() {
            let (position, done) = playback.advance(now);
            trace!(%position, done, "frame");
            if !done {
                self.playback = Some(playback);
            }
            self.set_position(position);
            self.publish_scroll(ScrollSource::Frame);
            if done {
                self.finish_motion(Some(now));
            }
        }

        self.settle_mouse_wheel(now);
        self.playback.is_some() || self.wheel_session.is_some()
    }

    /// Cancel the running animation, freezing the position where it is.
    pub fn stop(&mut self) {
        if self.playback.take().is_none() {
            return;
        }
        let frozen = self.position().round();
        if frozen != self.position() {
            self.set_position(frozen);
        }
        if let Some(wheel) = &self.wheel {
            self.selected_index = wheel.index_at(frozen.y);
        }
        self.enter(Phase::Idle);
        self.events.emit(ScrollEvent::ScrollEnd(frozen));
    }

    /// Animate to an absolute position. A zero duration jumps.
    pub fn scroll_to(&mut self, target: Point, duration: Duration, easing: Easing) {
        self.animate_to(target, duration, easing, Phase::Scrolling);
    }

    /// Animate by a relative offset.
    pub fn scroll_by(&mut self, delta: Point, duration: Duration, easing: Easing) {
        let target = self.position() + delta;
        self.scroll_to(target, duration, easing);
    }

    /// Bring `element` into view.
    ///
    /// The target is clamped to the bounds. Without a `duration` the scroll
    /// takes one millisecond per pixel of the larger axis distance.
    pub fn scroll_to_element(
        &mut self,
        element: &M::Element,
        duration: Option<Duration>,
        offset_x: ElementOffset,
        offset_y: ElementOffset,
        easing: Option<Easing>,
    ) -> Result<()> {
        let Some(rect) = self.measurer.locate(element) else {
            warn!("scroll_to_element: element not found");
            return Err(TargetError::ElementNotFound.into());
        };

        let current = self.position();
        let mut target = current;
        for (axis, offset) in [(Axis::X, offset_x), (Axis::Y, offset_y)] {
            let state = self.axis(axis);
            if !state.enabled {
                continue;
            }
            let offset = match offset {
                ElementOffset::None => 0.0,
                ElementOffset::Center => ((rect.size().along(axis)
                    - self.viewport.along(axis))
                    / 2.0)
                    .round(),
                ElementOffset::Pixels(px) => px,
            };
            let bounds = state.bounds;
            let raw = bounds.max - (rect.origin().get(axis) + offset);
            target.set(axis, bounds.clamp(raw).round());
        }

        let duration = duration.unwrap_or_else(|| {
            let distance = target - current;
            let ms = distance.x.abs().max(distance.y.abs());
            Duration::from_millis(ms.round() as u64)
        });
        self.scroll_to(target, duration, easing.unwrap_or_default());
        Ok(())
    }

    /// Abandon any gesture and animation, then move to `target`.
    pub(super) fn animate_to(
        &mut self,
        target: Point,
        duration: Duration,
        easing: Easing,
        phase: Phase,
    ) {
        if self.drop_gesture().is_some() {
            debug!("programmatic scroll preempted the gesture");
        }
        self.playback = None;

        if duration.is_zero() {
            if target == self.position() {
                if self.phase != Phase::Idle {
                    self.finish_motion(None);
                }
                return;
            }
            self.set_position(target);
            self.publish_scroll(ScrollSource::Jump);
            self.finish_motion(None);
            return;
        }

        let plan = Trajectory::new(self.position(), target, duration, easing);
        self.play(plan, phase, None);
    }

    /// Start playing `plan`. With `at` unset the next tick binds the start.
    pub(super) fn play(
        &mut self,
        plan: Trajectory,
        phase: Phase,
        at: Option<Instant>,
    ) {
        if plan.is_instant() {
            self.playback = None;
            self.set_position(plan.end);
            self.enter(phase);
            self.finish_motion(at);
            return;
        }
        trace!(
            start = %plan.start,
            end = %plan.end,
            duration = ?plan.duration,
            "play"
        );
        self.playback = Some(match at {
            Some(at) => Playback::starting_at(plan, at),
            None => Playback::deferred(plan),
        });
        self.enter(phase);
    }

    /// Start a bounce back inside the effective bounds. Returns `false` when
    /// the position is already inside.
    pub(super) fn reset_position(
        &mut self,
        time: Duration,
        at: Option<Instant>,
    ) -> bool {
        let bounds = self.bounds();
        match bounce_trajectory(self.position(), &bounds, time) {
            Some(plan) => {
                self.play(plan, Phase::Bouncing, at);
                true
            }
            None => false,
        }
    }

    /// A trajectory reached its end: bounce if left out of bounds, else come
    /// to rest.
    pub(super) fn finish_motion(&mut self, at: Option<Instant>) {
        if self.reset_position(self.options.bounce.time, at) {
            return;
        }

        let clone_jump = self.pages.as_ref().and_then(|pages| {
            let real_x = pages.clone_target(Axis::X, self.page.0);
            let real_y = pages.clone_target(Axis::Y, self.page.1);
            if real_x.is_none() && real_y.is_none() {
                return None;
            }
            let page = (
                real_x.unwrap_or(self.page.0),
                real_y.unwrap_or(self.page.1),
            );
            pages.position(page.0, page.1).map(|target| (page, target))
        });
        if let Some((page, target)) = clone_jump {
            debug!(?page, "landed on loop clone; jumping to real page");
            self.page = page;
            self.set_position(target);
        }
        if let Some(wheel) = &self.wheel {
            self.selected_index = wheel.index_at(self.y.position);
        }

        self.enter(Phase::Idle);
        if self.wheel_session.is_none() {
            let position = self.position();
            self.events.emit(ScrollEvent::ScrollEnd(position));
        }
    }
}
