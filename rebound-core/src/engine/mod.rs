//! The motion engine state machine.
//!
//! `Idle -> Dragging -> (Decelerating | Bouncing | Snapping) -> Idle`, with
//! `Dragging` re-enterable from any animating phase. Two external drivers
//! advance it: gesture samples (`touch_*`, `mouse_wheel`) and frame ticks
//! (`tick`). Every driver carries its own [`Instant`]; the engine never
//! reads the clock.

mod animate;
mod gesture;
mod mouse_wheel;
mod paging;
pub mod state;

use std::fmt;
use std::time::Instant;

use rebound_config::{ProbeMode, ScrollConfig, ScrollOptions};
use rebound_contracts::{Measurer, Renderer};
use rebound_model::{Axis, AxisBounds, Direction, Edge, Point, Size};
use tokio::sync::broadcast;
use tracing::{debug, trace};

use crate::edge::{
    PullDownController, PullDownState, PullUpController, PullUpState,
};
use crate::error::{EngineError, Result};
use crate::events::{EventHub, EventKind, ListenerId, ScrollEvent};
use crate::kinematics::{
    EdgePolicy, Playback, ScrollBounds, Trajectory, VelocityEstimator,
};
use crate::snap::{PageLayout, WheelLayout};

pub use animate::ElementOffset;
pub use mouse_wheel::WheelDelta;
pub use state::{AxisState, DirectionLock, Phase};

use state::Gesture;

/// Where a `Scroll` event would come from; filtered by the probe mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScrollSource {
    Drag,
    Frame,
    Jump,
}

/// Turns gestures and ticks into positions and lifecycle events for one
/// scrollable surface.
pub struct ScrollEngine<M, R>
where
    M: Measurer,
    R: Renderer,
{
    options: ScrollOptions,
    measurer: M,
    renderer: R,
    events: EventHub,
    x: AxisState,
    y: AxisState,
    viewport: Size,
    phase: Phase,
    enabled: bool,
    gesture: Option<Gesture>,
    velocity: VelocityEstimator,
    playback: Option<Playback>,
    last_frame: Option<Instant>,
    pages: Option<PageLayout>,
    /// Physical page indices.
    page: (usize, usize),
    wheel: Option<WheelLayout>,
    selected_index: usize,
    pull_down: Option<PullDownController>,
    pull_up: Option<PullUpController>,
    /// Instant of the latest mouse-wheel notch while a wheel scroll is open.
    wheel_session: Option<Instant>,
}

impl<M, R> fmt::Debug for ScrollEngine<M, R>
where
    M: Measurer,
    R: Renderer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollEngine")
            .field("phase", &self.phase)
            .field("position", &self.position())
            .field("enabled", &self.enabled)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("page", &self.page)
            .field("selected_index", &self.selected_index)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl<M, R> ScrollEngine<M, R>
where
    M: Measurer,
    R: Renderer,
{
    /// Build an engine, reading the layout from `measurer` and rendering the
    /// start position once. Options out of range are rejected with
    /// [`EngineError::Config`].
    pub fn new(options: ScrollOptions, measurer: M, renderer: R) -> Result<Self> {
        options.validate()?;
        let movement = &options.movement;
        let velocity = VelocityEstimator::new(
            movement.sample_capacity,
            options.momentum.limit_time,
        );
        let pull_down =
            options.pull_down.enabled().copied().map(PullDownController::new);
        let pull_up =
            options.pull_up.enabled().copied().map(PullUpController::new);
        let start = movement.start;
        let (scroll_x, scroll_y) = (movement.scroll_x, movement.scroll_y);

        let mut engine = Self {
            measurer,
            renderer,
            events: EventHub::default(),
            x: AxisState::new(start.x, AxisBounds::default(), scroll_x),
            y: AxisState::new(start.y, AxisBounds::default(), scroll_y),
            viewport: Size::default(),
            phase: Phase::Idle,
            enabled: true,
            gesture: None,
            velocity,
            playback: None,
            last_frame: None,
            pages: None,
            page: (0, 0),
            wheel: None,
            selected_index: 0,
            pull_down,
            pull_up,
            wheel_session: None,
            options,
        };
        engine.read_layout()?;

        let mut position = start;
        if let Some(pages) = &engine.pages {
            let page = (
                pages.to_physical(Axis::X, 0),
                pages.to_physical(Axis::Y, 0),
            );
            if let Some(first) = pages.position(page.0, page.1) {
                position = first;
            }
            engine.page = page;
        }
        if let Some(wheel) = &engine.wheel
            && let Some(selected) = engine.options.wheel.enabled()
        {
            let index = selected.selected_index.min(wheel.count().saturating_sub(1));
            engine.selected_index = index;
            position.y = wheel.position_of(index);
        }

        engine.x.position = position.x;
        engine.y.position = position.y;
        engine.renderer.apply(position);
        debug!(%position, "scroll engine ready");
        Ok(engine)
    }

    /// Resolve `config` and build an engine from it.
    pub fn with_config(
        config: &ScrollConfig,
        measurer: M,
        renderer: R,
    ) -> Result<Self> {
        let options = config.resolve()?;
        Self::new(options, measurer, renderer)
    }

    // Accessors

    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Mutable access for hosts that change layout; call
    /// [`refresh`](Self::refresh) afterwards.
    pub fn measurer_mut(&mut self) -> &mut M {
        &mut self.measurer
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn position(&self) -> Point {
        Point::new(self.x.position, self.y.position)
    }

    pub fn x(&self) -> f32 {
        self.x.position
    }

    pub fn y(&self) -> f32 {
        self.y.position
    }

    pub fn axis(&self, axis: Axis) -> &AxisState {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisState {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.playback.is_some()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Bounds in effect, including the pull-down hold while refreshing.
    pub fn bounds(&self) -> ScrollBounds {
        ScrollBounds::new(
            self.effective_bounds(Axis::X),
            self.effective_bounds(Axis::Y),
        )
    }

    pub fn pull_down_state(&self) -> Option<PullDownState> {
        self.pull_down.as_ref().map(PullDownController::state)
    }

    pub fn pull_up_state(&self) -> Option<PullUpState> {
        self.pull_up.as_ref().map(PullUpController::state)
    }

    // Events

    pub fn on(
        &mut self,
        kind: EventKind,
        handler: impl FnMut(&ScrollEvent) + 'static,
    ) -> ListenerId {
        self.events.on(kind, handler)
    }

    pub fn once(
        &mut self,
        kind: EventKind,
        handler: impl FnMut(&ScrollEvent) + 'static,
    ) -> ListenerId {
        self.events.once(kind, handler)
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        self.events.off(id)
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.events.listener_count(kind)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ScrollEvent> {
        self.events.subscribe()
    }

    // Lifecycle

    /// Accept gesture input again. A drag that was in progress when the
    /// engine was disabled is settled; the next gesture starts fresh.
    pub fn enable(&mut self) {
        if self.enabled {
            return;
        }
        self.enabled = true;
        debug!("scroll engine enabled");

        if self.gesture.is_some_and(|g| g.stale) {
            let moved = self.drop_gesture().is_some_and(|g| g.moved);
            if self.phase == Phase::Dragging
                && !self.reset_position(self.options.bounce.time, None)
            {
                self.enter(Phase::Idle);
                if moved {
                    let position = self.position();
                    self.events.emit(ScrollEvent::ScrollEnd(position));
                }
            }
        }
    }

    /// Stop accepting gesture input. Samples of a drag in progress are
    /// dropped from now on; running animations continue.
    pub fn disable(&mut self) {
        if !self.enabled {
            return;
        }
        self.enabled = false;
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.stale = true;
        }
        debug!("scroll engine disabled");
    }

    /// Re-read the layout from the measurer.
    ///
    /// A running animation keeps playing unless the new bounds cut off the
    /// point it would come to rest at (its end, or the bound an overshoot
    /// bounces back to). Then it is replanned onto the clamped rest point.
    /// At rest, an out-of-range position is clamped immediately.
    pub fn refresh(&mut self) -> Result<()> {
        let previous = self.bounds();
        self.read_layout()?;
        let bounds = self.bounds();
        self.events.emit(ScrollEvent::Refresh);

        if let Some(playback) = self.playback {
            let end = playback.plan.end;
            let rest = previous.clamp(end);
            let clamped = bounds.clamp(rest);
            if clamped != rest {
                let remaining = self
                    .last_frame
                    .map_or(playback.plan.duration, |now| playback.remaining(now));
                debug!(%end, %rest, %clamped, "bounds shrank under animation; replanning");
                let plan = playback.plan.retarget(clamped);
                let replanned = Trajectory {
                    start: self.position(),
                    duration: remaining,
                    ..plan
                };
                self.playback = None;
                self.play(replanned, self.phase, None);
            }
            return Ok(());
        }

        if self.gesture.is_some() {
            return Ok(());
        }

        let current = self.position();
        let mut settled = bounds.clamp(current);
        if let Some(pages) = &self.pages
            && let Some(target) = pages.position(self.page.0, self.page.1)
        {
            settled = target;
        }
        if let Some(wheel) = &self.wheel {
            settled.y = wheel.position_of(self.selected_index);
        }
        if settled != current {
            debug!(from = %current, to = %settled, "refresh moved position");
            self.set_position(settled);
        }
        Ok(())
    }

    /// Tear the engine down. Publishes `Destroy`, drops every listener and
    /// hands the collaborators back.
    pub fn destroy(mut self) -> (M, R) {
        self.playback = None;
        self.gesture = None;
        self.events.emit(ScrollEvent::Destroy);
        self.events.clear();
        debug!("scroll engine destroyed");
        (self.measurer, self.renderer)
    }

    // Internals shared by the driver modules

    /// Forget the gesture in progress without releasing it. An armed
    /// pull-down goes with it.
    pub(super) fn drop_gesture(&mut self) -> Option<Gesture> {
        if let Some(pull_down) = self.pull_down.as_mut() {
            pull_down.disarm();
        }
        self.gesture.take()
    }

    fn read_layout(&mut self) -> Result<()> {
        let x = self.measurer.bounds(Axis::X);
        let y = self.measurer.bounds(Axis::Y);
        for (axis, bounds) in [(Axis::X, x), (Axis::Y, y)] {
            if !bounds.is_valid() {
                return Err(EngineError::InvalidBounds {
                    axis,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }
        let viewport = self.measurer.viewport();

        let wheel = match self.options.wheel.enabled() {
            Some(options) => {
                let extent = self
                    .measurer
                    .item_extent()
                    .ok_or(EngineError::MissingItemExtent)?;
                if !(extent.is_finite() && extent > 0.0) {
                    return Err(EngineError::InvalidItemExtent(extent));
                }
                Some(WheelLayout::new(
                    extent,
                    self.measurer.item_count(),
                    y,
                    options.looping,
                ))
            }
            None => None,
        };

        self.x.bounds = x;
        self.y.bounds = y;
        self.viewport = viewport;

        if let Some(snap) = self.options.snap.enabled() {
            let pages =
                PageLayout::build(&ScrollBounds::new(x, y), viewport, snap);
            let last_x = pages.axis(Axis::X).len().saturating_sub(1);
            let last_y = pages.axis(Axis::Y).len().saturating_sub(1);
            self.page = (self.page.0.min(last_x), self.page.1.min(last_y));
            self.pages = Some(pages);
        }
        if let Some(wheel) = wheel {
            self.selected_index =
                self.selected_index.min(wheel.count().saturating_sub(1));
            self.wheel = Some(wheel);
        }

        trace!(?x, ?y, ?viewport, "layout read");
        Ok(())
    }

    fn effective_bounds(&self, axis: Axis) -> AxisBounds {
        let natural = self.axis(axis).bounds;
        match (axis, &self.pull_down) {
            (Axis::Y, Some(pull_down)) => AxisBounds::new(
                natural.min,
                pull_down.hold_bound(natural.max),
            ),
            _ => natural,
        }
    }

    fn edge_policy(&self, axis: Axis) -> EdgePolicy {
        EdgePolicy {
            leading: self.options.bounce.allows(Edge::leading(axis)),
            trailing: self.options.bounce.allows(Edge::trailing(axis)),
        }
    }

    fn enter(&mut self, phase: Phase) {
        if self.phase != phase {
            debug!(from = %self.phase, to = %phase, "phase change");
            self.phase = phase;
        }
    }

    /// Move the surface and update per-axis bookkeeping.
    fn set_position(&mut self, position: Point) {
        for axis in Axis::ALL {
            let state = self.axis_mut(axis);
            let delta = position.get(axis) - state.position;
            if delta != 0.0 {
                state.moving_direction = Direction::from_delta(delta);
            }
            state.position = position.get(axis);
        }
        self.renderer.apply(position);

        if let Some(pull_up) = self.pull_up.as_mut()
            && pull_up.observe(
                self.y.position,
                self.y.bounds,
                self.y.moving_direction,
            )
        {
            self.events.emit(ScrollEvent::PullingUp);
        }
    }

    fn publish_scroll(&mut self, source: ScrollSource) {
        let publish = match (self.options.movement.probe, source) {
            (ProbeMode::Off, _) => false,
            (ProbeMode::Realtime, _) => true,
            (ProbeMode::Drag, ScrollSource::Frame) => false,
            (ProbeMode::Drag, _) => true,
            // Throttled drags are filtered by the caller.
            (ProbeMode::Throttled, ScrollSource::Frame) => false,
            (ProbeMode::Throttled, _) => true,
        };
        if publish {
            let position = self.position();
            self.events.emit(ScrollEvent::Scroll(position));
        }
    }
}
