//! Pointer gesture handling: start, drag, release.

use std::time::{Duration, Instant};

use rebound_config::{Passthrough, ProbeMode};
use rebound_contracts::{Measurer, Renderer};
use rebound_model::{Axis, Direction, Easing, Point};
use tracing::{debug, trace, warn};

use super::state::{DirectionLock, Gesture};
use super::{Phase, ScrollEngine, ScrollSource};
use crate::events::ScrollEvent;
use crate::kinematics::bounds::soft_clamp;
use crate::kinematics::trajectory::project_momentum;
use crate::kinematics::{GestureSample, Trajectory};
use crate::snap::{SnapRelease, snap_duration};

impl<M, R> ScrollEngine<M, R>
where
    M: Measurer,
    R: Renderer,
{
    /// A pointer went down at `sample.position` (pointer coordinates).
    ///
    /// Grabbing during an animation freezes it where it is.
    pub fn touch_start(&mut self, sample: GestureSample) {
        if !self.enabled {
            trace!("touch_start dropped while disabled");
            return;
        }

        if self.playback.take().is_some() {
            let frozen = self.position().round();
            if frozen != self.position() {
                self.set_position(frozen);
            }
            debug!(%frozen, "grabbed during animation");
            self.events.emit(ScrollEvent::ScrollEnd(frozen));
        }
        self.wheel_session = None;
        if let Some(pull_down) = self.pull_down.as_mut() {
            pull_down.disarm();
        }

        let origin = self.position();
        let mut gesture = Gesture::new(sample.position, origin, sample.at);
        if self.options.movement.free_scroll {
            gesture.lock = DirectionLock::Free;
        }
        self.gesture = Some(gesture);
        self.velocity.reset();
        let anchor = GestureSample::new(origin, sample.at);
        if let Err(err) = self.velocity.record(anchor) {
            warn!(%err, "velocity sample dropped");
        }
        for axis in Axis::ALL {
            let state = self.axis_mut(axis);
            state.direction = Direction::None;
            state.moving_direction = Direction::None;
        }

        self.enter(Phase::Dragging);
        self.events.emit(ScrollEvent::BeforeScrollStart);
    }

    /// The pointer moved to `sample.position`.
    pub fn touch_move(&mut self, sample: GestureSample) {
        let Some(mut gesture) = self.gesture else {
            return;
        };
        if !self.enabled || gesture.stale {
            trace!("touch_move dropped while disabled");
            return;
        }
        if sample.at < gesture.last_at {
            warn!(
                previous = ?gesture.last_at,
                rejected = ?sample.at,
                "out-of-order move sample dropped"
            );
            return;
        }

        let movement = &self.options.movement;
        let threshold = movement.direction_lock_threshold;
        let travelled = sample.position - gesture.pointer_origin;
        let (dist_x, dist_y) = (travelled.x.abs(), travelled.y.abs());

        if gesture.lock == DirectionLock::Undecided {
            if dist_x < threshold && dist_y < threshold {
                return;
            }
            gesture.lock = if dist_x > dist_y + threshold {
                DirectionLock::Horizontal
            } else if dist_y >= dist_x + threshold {
                DirectionLock::Vertical
            } else {
                DirectionLock::Neither
            };
            trace!(lock = ?gesture.lock, "direction locked");

            let passthrough = matches!(
                (gesture.lock, movement.passthrough),
                (DirectionLock::Horizontal, Passthrough::Horizontal)
                    | (DirectionLock::Vertical, Passthrough::Vertical)
            );
            if passthrough {
                debug!(lock = ?gesture.lock, "gesture passed through to host");
                self.drop_gesture();
                self.enter(Phase::Idle);
                return;
            }
        }

        let delta = sample.position - gesture.pointer;
        let mut dx = if self.x.enabled { delta.x } else { 0.0 };
        let mut dy = if self.y.enabled { delta.y } else { 0.0 };
        match gesture.lock {
            DirectionLock::Horizontal => dy = 0.0,
            DirectionLock::Vertical => dx = 0.0,
            _ => {}
        }
        gesture.pointer = sample.position;
        gesture.last_at = sample.at;

        if !gesture.moved {
            gesture.moved = true;
            self.events.emit(ScrollEvent::ScrollStart);
        }

        let resistance = self.options.bounce.resistance;
        let current = self.position();
        let next = Point::new(
            soft_clamp(
                current.x,
                dx,
                self.effective_bounds(Axis::X),
                self.edge_policy(Axis::X),
                resistance,
            ),
            soft_clamp(
                current.y,
                dy,
                self.effective_bounds(Axis::Y),
                self.edge_policy(Axis::Y),
                resistance,
            ),
        );

        let recorded = GestureSample::new(next, sample.at);
        if let Err(err) = self.velocity.record(recorded) {
            warn!(%err, "velocity sample dropped");
        }
        self.set_position(next);

        if let Some(pull_down) = self.pull_down.as_mut() {
            pull_down.observe_drag(next.y - self.y.bounds.max);
        }

        let window = self.velocity.window();
        let probe_window_elapsed = sample
            .at
            .saturating_duration_since(gesture.probe_window_at)
            > window;
        if probe_window_elapsed {
            gesture.probe_window_at = sample.at;
        }
        self.gesture = Some(gesture);

        match self.options.movement.probe {
            ProbeMode::Throttled if !probe_window_elapsed => {}
            _ => self.publish_scroll(ScrollSource::Drag),
        }
    }

    /// The pointer was lifted at `at`.
    pub fn touch_end(&mut self, at: Instant) {
        let Some(gesture) = self.gesture else {
            return;
        };
        if !self.enabled || gesture.stale {
            trace!("touch_end dropped while disabled");
            return;
        }
        self.gesture = None;
        let at = at.max(gesture.last_at);

        let position = self.position().round();
        if position != self.position() {
            self.set_position(position);
        }
        self.events.emit(ScrollEvent::TouchEnd(position));

        let net = position - gesture.origin;
        self.x.direction = Direction::from_delta(net.x);
        self.y.direction = Direction::from_delta(net.y);

        if !gesture.moved {
            self.enter(Phase::Idle);
            self.events.emit(ScrollEvent::ScrollCancel);
            // A tap on content left past an edge still lets it bounce home.
            self.reset_position(self.options.bounce.time, Some(at));
            return;
        }

        if self.pull_down.as_mut().is_some_and(|p| p.release()) {
            debug!("pull-down refresh started");
            self.events.emit(ScrollEvent::PullingDown);
            if !self.reset_position(self.options.bounce.time, Some(at)) {
                self.finish_motion(Some(at));
            }
            return;
        }

        if self.reset_position(self.options.bounce.time, Some(at)) {
            return;
        }

        let span = self.velocity.span(position, at);
        let flick = &self.options.flick;
        if let Some(span) = span
            && span.elapsed < flick.limit_time
            && span.displacement.x.abs() < flick.limit_distance
            && span.displacement.y.abs() < flick.limit_distance
        {
            self.events.emit(ScrollEvent::Flick);
        }

        let momentum = &self.options.momentum;
        let velocity = self.velocity.estimate(at);
        let use_momentum = momentum.enabled
            && velocity != Point::ZERO
            && span.is_some_and(|span| {
                span.displacement.x.abs() > momentum.limit_distance
                    || span.displacement.y.abs() > momentum.limit_distance
            });
        trace!(%velocity, use_momentum, "release");

        let (target, duration, easing, phase) = if self.wheel.is_some() {
            self.plan_wheel_release(position, velocity, use_momentum)
        } else {
            let (mut target, mut duration, mut easing) =
                (position, Duration::ZERO, Easing::QuinticOut);
            if use_momentum {
                (target, duration, easing) = self.plan_momentum(position, velocity);
            }
            if self.pages.is_some() {
                let v = if use_momentum { Point::ZERO } else { velocity };
                (target, duration, easing) =
                    self.plan_page_release(target, v, gesture.origin);
                (target, duration, easing, Phase::Snapping)
            } else {
                (target, duration, easing, Phase::Decelerating)
            }
        };

        if target != position {
            let plan = Trajectory::new(position, target, duration, easing);
            self.play(plan, phase, Some(at));
        } else {
            self.finish_motion(Some(at));
        }
    }

    /// The platform cancelled the gesture; handled like a release.
    pub fn touch_cancel(&mut self, at: Instant) {
        self.touch_end(at);
    }

    fn plan_momentum(
        &self,
        position: Point,
        velocity: Point,
    ) -> (Point, Duration, Easing) {
        let mut target = position;
        let mut duration = Duration::ZERO;
        for axis in Axis::ALL {
            let v = velocity.get(axis);
            if !self.axis(axis).enabled || v == 0.0 {
                continue;
            }
            let policy = self.edge_policy(axis);
            let toward_edge_bounces = if v < 0.0 {
                policy.trailing
            } else {
                policy.leading
            };
            let room = toward_edge_bounces.then(|| self.viewport.along(axis));
            let plan = project_momentum(
                position.get(axis),
                v,
                self.effective_bounds(axis),
                room,
                &self.options.momentum,
            );
            target.set(axis, plan.destination);
            duration = duration.max(plan.duration);
        }

        let easing = if self.bounds().contains(target) {
            Easing::QuinticOut
        } else {
            Easing::QuadOut
        };
        (target, duration, easing)
    }

    fn plan_page_release(
        &mut self,
        resting: Point,
        velocity: Point,
        origin: Point,
    ) -> (Point, Duration, Easing) {
        let (Some(pages), Some(snap)) =
            (self.pages.as_ref(), self.options.snap.enabled())
        else {
            return (resting, Duration::ZERO, Easing::default());
        };

        let position = self.position();
        let mut target = resting;
        let mut page = self.page;
        for axis in Axis::ALL {
            if !self.axis(axis).enabled {
                continue;
            }
            let current = match axis {
                Axis::X => page.0,
                Axis::Y => page.1,
            };
            let resolved = pages.resolve(
                axis,
                SnapRelease {
                    position: resting.get(axis),
                    velocity: velocity.get(axis),
                    origin: origin.get(axis),
                    current,
                },
                snap,
            );
            target.set(axis, resolved.position);
            match axis {
                Axis::X => page.0 = resolved.index,
                Axis::Y => page.1 = resolved.index,
            }
        }

        let duration = snap_duration(target - position, snap.speed);
        let easing = snap.easing;
        debug!(?page, %target, "page resolved");
        self.page = page;
        (target, duration, easing)
    }

    fn plan_wheel_release(
        &mut self,
        position: Point,
        velocity: Point,
        use_momentum: bool,
    ) -> (Point, Duration, Easing, Phase) {
        let (Some(wheel), Some(options)) =
            (self.wheel.as_ref(), self.options.wheel.enabled())
        else {
            return (position, Duration::ZERO, Easing::default(), Phase::Idle);
        };
        let v = if use_momentum { velocity.y } else { 0.0 };
        let resolved = wheel.resolve(position.y, v, options.adjust_time);
        debug!(index = resolved.index, "wheel item resolved");
        self.selected_index = resolved.index;
        (
            position.with(Axis::Y, resolved.position),
            options.adjust_time,
            Easing::QuinticOut,
            Phase::Snapping,
        )
    }
}
