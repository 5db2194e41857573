//! Release velocity from a trailing window of timestamped positions.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use rebound_model::Point;

use crate::error::{EngineError, Result};

/// A content position observed at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub position: Point,
    pub at: Instant,
}

impl GestureSample {
    pub fn new(position: Point, at: Instant) -> Self {
        Self { position, at }
    }
}

/// Displacement and elapsed time covered by the samples inside the window,
/// measured up to a release instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSpan {
    pub displacement: Point,
    pub elapsed: Duration,
}

/// Bounded history of samples for the current gesture.
///
/// Only samples newer than `now - window` take part in an estimate. A finger
/// that rests longer than the window releases with zero velocity; a shorter
/// rest still slows the estimate.
#[derive(Debug, Clone)]
pub struct VelocityEstimator {
    samples: VecDeque<GestureSample>,
    capacity: usize,
    window: Duration,
}

impl VelocityEstimator {
    pub fn new(capacity: usize, window: Duration) -> Self {
        let capacity = capacity.max(2);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            window,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    pub fn latest(&self) -> Option<&GestureSample> {
        self.samples.back()
    }

    /// Append a sample. Samples older than the newest one are rejected and
    /// leave the history unchanged.
    pub fn record(&mut self, sample: GestureSample) -> Result<()> {
        if let Some(last) = self.samples.back()
            && sample.at < last.at
        {
            return Err(EngineError::InputOutOfOrder {
                previous: last.at,
                rejected: sample.at,
            });
        }

        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
        if let Some(horizon) = sample.at.checked_sub(self.window) {
            while self
                .samples
                .front()
                .is_some_and(|oldest| oldest.at < horizon)
            {
                self.samples.pop_front();
            }
        }
        Ok(())
    }

    /// Velocity in px/ms: displacement between the oldest and newest sample
    /// still inside the window ending at `now`, over the time from the oldest
    /// sample to `now`. A pause before `now` dilutes the estimate. Zero with
    /// fewer than two samples.
    pub fn estimate(&self, now: Instant) -> Point {
        let mut in_window = self.in_window(now);
        let Some(first) = in_window.next() else {
            return Point::ZERO;
        };
        let Some(last) = in_window.last() else {
            return Point::ZERO;
        };

        let dt = now.max(last.at).saturating_duration_since(first.at);
        if dt.is_zero() {
            return Point::ZERO;
        }
        let dt_ms = dt.as_secs_f32() * 1000.0;
        let delta = last.position - first.position;
        Point::new(delta.x / dt_ms, delta.y / dt_ms)
    }

    /// Span from the oldest in-window sample to `release`, or `None` when the
    /// pointer rested longer than the window.
    pub fn span(&self, release: Point, now: Instant) -> Option<WindowSpan> {
        let oldest = self.in_window(now).next()?;
        Some(WindowSpan {
            displacement: release - oldest.position,
            elapsed: now.saturating_duration_since(oldest.at),
        })
    }

    fn in_window(
        &self,
        now: Instant,
    ) -> impl Iterator<Item = &GestureSample> + '_ {
        let horizon = now.checked_sub(self.window);
        self.samples
            .iter()
            .filter(move |s| horizon.is_none_or(|h| s.at >= h) && s.at <= now)
    }
}
