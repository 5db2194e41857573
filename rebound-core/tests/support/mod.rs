//! Shared fixtures for engine integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::time::{Duration, Instant};

use rebound_config::ScrollConfig;
use rebound_contracts::{Measurer, Renderer};
use rebound_core::{EventKind, GestureSample, ScrollEngine, ScrollEvent};
use rebound_model::{Axis, AxisBounds, Point, Rect, Size};
use tokio::sync::broadcast;

pub const VIEWPORT: Size = Size::new(320.0, 480.0);

/// Layout with fixed bounds, optional picker items and named elements.
#[derive(Debug, Clone)]
pub struct StaticMeasurer {
    pub x: AxisBounds,
    pub y: AxisBounds,
    pub viewport: Size,
    pub item_extent: Option<f32>,
    pub item_count: usize,
    pub elements: HashMap<&'static str, Rect>,
}

impl StaticMeasurer {
    pub fn new(x: AxisBounds, y: AxisBounds) -> Self {
        Self {
            x,
            y,
            viewport: VIEWPORT,
            item_extent: None,
            item_count: 0,
            elements: HashMap::new(),
        }
    }

    /// Vertical content `overflow` pixels taller than the viewport.
    pub fn vertical(overflow: f32) -> Self {
        Self::new(AxisBounds::new(0.0, 0.0), AxisBounds::new(-overflow, 0.0))
    }

    /// Horizontal content `overflow` pixels wider than the viewport.
    pub fn horizontal(overflow: f32) -> Self {
        Self::new(AxisBounds::new(-overflow, 0.0), AxisBounds::new(0.0, 0.0))
    }

    pub fn with_items(mut self, extent: f32, count: usize) -> Self {
        self.item_extent = Some(extent);
        self.item_count = count;
        self
    }

    pub fn with_element(mut self, name: &'static str, rect: Rect) -> Self {
        self.elements.insert(name, rect);
        self
    }
}

impl Measurer for StaticMeasurer {
    type Element = &'static str;

    fn bounds(&self, axis: Axis) -> AxisBounds {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn item_extent(&self) -> Option<f32> {
        self.item_extent
    }

    fn item_count(&self) -> usize {
        self.item_count
    }

    fn locate(&self, element: &&'static str) -> Option<Rect> {
        self.elements.get(element).copied()
    }
}

/// Remembers every position the engine applied.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Point>,
}

impl Renderer for RecordingRenderer {
    fn apply(&mut self, position: Point) {
        self.frames.push(position);
    }
}

pub type Engine = ScrollEngine<StaticMeasurer, RecordingRenderer>;

pub fn engine(config: ScrollConfig, measurer: StaticMeasurer) -> Engine {
    ScrollEngine::with_config(&config, measurer, RecordingRenderer::default())
        .expect("engine should build")
}

/// Deterministic time source: every instant is an offset from one origin.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn at(&self, ms: u64) -> Instant {
        self.origin + Duration::from_millis(ms)
    }

    pub fn sample(&self, x: f32, y: f32, ms: u64) -> GestureSample {
        GestureSample::new(Point::new(x, y), self.at(ms))
    }
}

/// Tick every 16 ms from `from_ms` until the engine stops asking for frames.
/// Returns the instant (ms) of the last tick.
pub fn settle(engine: &mut Engine, clock: &Clock, from_ms: u64) -> u64 {
    let mut now = from_ms;
    for _ in 0..1_000 {
        if !engine.tick(clock.at(now)) {
            return now;
        }
        now += 16;
    }
    panic!("engine did not settle within 1000 frames");
}

/// Everything published since the last drain.
pub fn drain(rx: &mut broadcast::Receiver<ScrollEvent>) -> Vec<ScrollEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

pub fn count(events: &[ScrollEvent], kind: EventKind) -> usize {
    events.iter().filter(|event| event.kind() == kind).count()
}
