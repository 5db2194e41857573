//! Replays a [`Script`] through a headless engine at a fixed frame rate.

use std::time::{Duration, Instant};

use rebound_config::ScrollOptions;
use rebound_contracts::{Measurer, NullRenderer};
use rebound_core::{
    EngineError, GestureSample, ScrollEngine, ScrollEvent, WheelDelta,
};
use rebound_model::{Axis, AxisBounds, Point, Size};
use thiserror::Error;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, info, warn};

use crate::report::{EventRecord, Frame, Rejection, Report, Summary};
use crate::script::{Action, Layout, Script};

/// Longest a script may keep animating after its last step.
pub const SETTLE_LIMIT: Duration = Duration::from_secs(30);

pub const MAX_FPS: u32 = 1_000;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("frame rate must be between 1 and {MAX_FPS}, got {0}")]
    InvalidFps(u32),
    #[error("engine still animating {limit:?} after the last step")]
    Stalled { limit: Duration },
}

/// Measurer backed by a script's layout block.
#[derive(Debug, Clone)]
pub struct ScriptMeasurer {
    layout: Layout,
}

impl ScriptMeasurer {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn resize(&mut self, content: Size) {
        self.layout.content = content;
    }
}

impl Measurer for ScriptMeasurer {
    type Element = ();

    fn bounds(&self, axis: Axis) -> AxisBounds {
        let Layout {
            viewport, content, ..
        } = self.layout;
        match axis {
            Axis::X => AxisBounds::from_extents(viewport.width, content.width),
            Axis::Y => {
                AxisBounds::from_extents(viewport.height, content.height)
            }
        }
    }

    fn viewport(&self) -> Size {
        self.layout.viewport
    }

    fn item_extent(&self) -> Option<f32> {
        self.layout.item_extent
    }

    fn item_count(&self) -> usize {
        self.layout.item_count
    }
}

type Engine = ScrollEngine<ScriptMeasurer, NullRenderer>;

struct Simulation {
    engine: Engine,
    events: broadcast::Receiver<ScrollEvent>,
    origin: Instant,
    frames: Vec<Frame>,
    records: Vec<EventRecord>,
    rejected: Vec<Rejection>,
}

/// Run `script` against an engine built from `options`, ticking `fps`
/// frames per second until the last animation settles.
pub fn simulate(
    options: ScrollOptions,
    script: &Script,
    fps: u32,
) -> Result<Report, SimulationError> {
    if !(1..=MAX_FPS).contains(&fps) {
        return Err(SimulationError::InvalidFps(fps));
    }
    let frame = Duration::from_secs_f64(1.0 / f64::from(fps));
    let engine = ScrollEngine::new(
        options,
        ScriptMeasurer::new(script.layout.clone()),
        NullRenderer,
    )?;
    let mut sim = Simulation {
        events: engine.subscribe(),
        engine,
        origin: Instant::now(),
        frames: Vec::new(),
        records: Vec::new(),
        rejected: Vec::new(),
    };
    sim.record_frame(Duration::ZERO);
    info!(steps = script.steps.len(), fps, "simulating script");

    let mut frame_index: u32 = 0;
    let mut busy = false;
    for step in &script.steps {
        let at = Duration::from_millis(step.at_ms);
        loop {
            let next = frame * frame_index;
            if next >= at {
                break;
            }
            if !busy {
                // Nothing needs frames; resume on the first frame at or
                // after the step.
                frame_index = frames_until(at, frame);
                break;
            }
            busy = sim.tick(next);
            frame_index += 1;
        }
        sim.apply(step.at_ms, &step.action);
        busy = true;
    }

    let deadline = Duration::from_millis(script.duration_ms()) + SETTLE_LIMIT;
    let mut settled_at = Duration::from_millis(script.duration_ms());
    while busy {
        let next = frame * frame_index;
        if next > deadline {
            return Err(SimulationError::Stalled {
                limit: SETTLE_LIMIT,
            });
        }
        busy = sim.tick(next);
        settled_at = next;
        frame_index += 1;
    }

    Ok(sim.finish(settled_at, fps))
}

/// Index of the first frame at or after `at`.
fn frames_until(at: Duration, frame: Duration) -> u32 {
    let frame = frame.as_nanos().max(1);
    u32::try_from(at.as_nanos().div_ceil(frame)).unwrap_or(u32::MAX)
}

fn millis(at: Duration) -> f64 {
    (at.as_secs_f64() * 10_000.0).round() / 10.0
}

impl Simulation {
    fn tick(&mut self, at: Duration) -> bool {
        let busy = self.engine.tick(self.origin + at);
        self.drain(at);
        self.record_frame(at);
        busy
    }

    fn apply(&mut self, at_ms: u64, action: &Action) {
        let at = Duration::from_millis(at_ms);
        let now = self.origin + at;
        debug!(at_ms, ?action, "step");

        let engine = &mut self.engine;
        let outcome: Result<(), String> = match *action {
            Action::TouchStart { x, y } => {
                engine.touch_start(GestureSample::new(Point::new(x, y), now));
                Ok(())
            }
            Action::TouchMove { x, y } => {
                engine.touch_move(GestureSample::new(Point::new(x, y), now));
                Ok(())
            }
            Action::TouchEnd => {
                engine.touch_end(now);
                Ok(())
            }
            Action::TouchCancel => {
                engine.touch_cancel(now);
                Ok(())
            }
            Action::Wheel { dx, dy } => {
                if engine.mouse_wheel(WheelDelta::new(dx, dy), now) {
                    Ok(())
                } else {
                    Err("wheel notch ignored".to_string())
                }
            }
            Action::ScrollTo {
                x,
                y,
                duration_ms,
                easing,
            } => {
                engine.scroll_to(
                    Point::new(x, y),
                    Duration::from_millis(duration_ms),
                    easing.unwrap_or_default(),
                );
                Ok(())
            }
            Action::ScrollBy {
                dx,
                dy,
                duration_ms,
                easing,
            } => {
                engine.scroll_by(
                    Point::new(dx, dy),
                    Duration::from_millis(duration_ms),
                    easing.unwrap_or_default(),
                );
                Ok(())
            }
            Action::GoToPage {
                page_x,
                page_y,
                duration_ms,
            } => engine
                .go_to_page(
                    page_x,
                    page_y,
                    duration_ms.map(Duration::from_millis),
                    None,
                )
                .map_err(|err| err.to_string()),
            Action::Next => {
                engine.next(None, None).map_err(|err| err.to_string())
            }
            Action::Prev => {
                engine.prev(None, None).map_err(|err| err.to_string())
            }
            Action::WheelTo { index } => {
                engine.wheel_to(index).map_err(|err| err.to_string())
            }
            Action::Stop => {
                engine.stop();
                Ok(())
            }
            Action::Enable => {
                engine.enable();
                Ok(())
            }
            Action::Disable => {
                engine.disable();
                Ok(())
            }
            Action::FinishPullDown => {
                if engine.finish_pull_down() {
                    Ok(())
                } else {
                    Err("no pull-down refresh in progress".to_string())
                }
            }
            Action::FinishPullUp => {
                if engine.finish_pull_up() {
                    Ok(())
                } else {
                    Err("no pull-up load in progress".to_string())
                }
            }
            Action::Resize { width, height } => {
                engine.measurer_mut().resize(Size::new(width, height));
                engine.refresh().map_err(|err| err.to_string())
            }
        };

        if let Err(reason) = outcome {
            let name = action_name(action);
            warn!(at_ms, action = name, %reason, "step rejected");
            self.rejected.push(Rejection {
                at_ms,
                action: name.to_string(),
                reason,
            });
        }
        self.drain(at);
        self.record_frame(at);
    }

    fn drain(&mut self, at: Duration) {
        loop {
            match self.events.try_recv() {
                Ok(event) => self.records.push(EventRecord {
                    at_ms: millis(at),
                    event: event.kind().to_string(),
                    position: event.position(),
                }),
                Err(TryRecvError::Lagged(missed)) => {
                    warn!(missed, "event receiver lagged; events dropped");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
    }

    fn record_frame(&mut self, at: Duration) {
        let position = self.engine.position();
        let phase = self.engine.phase().to_string();
        let unchanged = self
            .frames
            .last()
            .is_some_and(|last| last.position == position && last.phase == phase);
        if !unchanged {
            self.frames.push(Frame {
                at_ms: millis(at),
                position,
                phase,
            });
        }
    }

    fn finish(self, settled_at: Duration, fps: u32) -> Report {
        let engine = &self.engine;
        let summary = Summary {
            settled_at_ms: millis(settled_at),
            position: engine.position(),
            phase: engine.phase().to_string(),
            page: engine.current_page(),
            selected_index: engine.selected_index(),
        };
        Report {
            fps,
            frames: self.frames,
            events: self.records,
            rejected: self.rejected,
            summary,
        }
    }
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::TouchStart { .. } => "touch_start",
        Action::TouchMove { .. } => "touch_move",
        Action::TouchEnd => "touch_end",
        Action::TouchCancel => "touch_cancel",
        Action::Wheel { .. } => "wheel",
        Action::ScrollTo { .. } => "scroll_to",
        Action::ScrollBy { .. } => "scroll_by",
        Action::GoToPage { .. } => "go_to_page",
        Action::Next => "next",
        Action::Prev => "prev",
        Action::WheelTo { .. } => "wheel_to",
        Action::Stop => "stop",
        Action::Enable => "enable",
        Action::Disable => "disable",
        Action::FinishPullDown => "finish_pull_down",
        Action::FinishPullUp => "finish_pull_up",
        Action::Resize { .. } => "resize",
    }
}
