//! Paging (slide) layout and page resolution.

use std::time::Duration;

use rebound_config::SnapOptions;
use rebound_config::constants::snap::{
    MAX_AUTO_DURATION_MS, MIN_AUTO_DURATION_MS,
};
use rebound_model::{Axis, AxisBounds, Direction, PageInfo, Point, Size, SnapTarget};

use crate::kinematics::ScrollBounds;

/// Release conditions fed to the resolver for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapRelease {
    /// Where the content would come to rest without snapping.
    pub position: f32,
    /// Release velocity in px/ms; zero when momentum already projected
    /// `position`.
    pub velocity: f32,
    /// Position at the start of the gesture.
    pub origin: f32,
    /// Physical index of the page the gesture started on.
    pub current: usize,
}

/// Resting positions of the pages along one axis.
///
/// Page `i` rests at `max - i * step`, clamped to `min`; the last page is the
/// first one that reaches `min`.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisPages {
    positions: Vec<f32>,
    centres: Vec<f32>,
    step: f32,
}

impl AxisPages {
    pub fn build(bounds: AxisBounds, step: f32) -> Self {
        let count = if step > 0.0 && bounds.is_scrollable() {
            (bounds.span() / step).ceil() as usize + 1
        } else {
            1
        };

        let mut positions = Vec::with_capacity(count);
        let mut centres = Vec::with_capacity(count);
        for i in 0..count {
            let raw = bounds.max - i as f32 * step;
            positions.push(raw.max(bounds.min));
            centres.push(raw - step / 2.0);
        }

        Self {
            positions,
            centres,
            step,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn position(&self, index: usize) -> Option<f32> {
        self.positions.get(index).copied()
    }

    fn last(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// Page whose centre line `position` has crossed. Exactly on a centre
    /// line the lower index wins.
    pub fn nearest(&self, position: f32) -> usize {
        self.centres
            .iter()
            .position(|&centre| position >= centre)
            .unwrap_or(self.last())
    }

    /// First page resting strictly beyond `position` in `direction`.
    pub fn beyond(&self, position: f32, direction: Direction) -> usize {
        match direction {
            Direction::Forward => self
                .positions
                .iter()
                .position(|&p| p < position)
                .unwrap_or(self.last()),
            Direction::Backward => self
                .positions
                .iter()
                .rposition(|&p| p > position)
                .unwrap_or(0),
            Direction::None => self.nearest(position),
        }
    }

    /// Threshold in pixels: a fraction of the step below 1, pixels otherwise.
    fn threshold_px(&self, threshold: f32) -> f32 {
        if threshold < 1.0 {
            (self.step * threshold).round()
        } else {
            threshold
        }
    }

    /// Pick the page a release settles on. Pure in its inputs.
    pub fn resolve(
        &self,
        release: SnapRelease,
        options: &SnapOptions,
    ) -> SnapTarget {
        let flick = release.velocity != 0.0
            && release.velocity.abs() >= options.flick_velocity;
        let displacement = (release.position - release.origin).abs();

        let index = if flick {
            self.beyond(
                release.position,
                Direction::from_delta(release.velocity),
            )
        } else if displacement < self.threshold_px(options.threshold) {
            release.current.min(self.last())
        } else {
            self.nearest(release.position)
        };

        SnapTarget::new(index, self.positions[index])
    }
}

/// Page grid of a paging layout.
///
/// Indices here are physical. With looping enabled and at least three pages
/// on an axis, the first and last pages of that axis are clones and the
/// logical index of physical page `p` is `(p - 1) mod (len - 2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    x: AxisPages,
    y: AxisPages,
    looping: bool,
}

impl PageLayout {
    pub fn build(
        bounds: &ScrollBounds,
        viewport: Size,
        options: &SnapOptions,
    ) -> Self {
        let step_x = options.step_x.unwrap_or(viewport.width);
        let step_y = options.step_y.unwrap_or(viewport.height);
        Self {
            x: AxisPages::build(bounds.x, step_x),
            y: AxisPages::build(bounds.y, step_y),
            looping: options.looping,
        }
    }

    pub fn axis(&self, axis: Axis) -> &AxisPages {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    pub fn loops(&self, axis: Axis) -> bool {
        self.looping && self.axis(axis).len() >= 3
    }

    /// Number of pages callers can address on `axis`.
    pub fn logical_count(&self, axis: Axis) -> usize {
        let len = self.axis(axis).len();
        if self.loops(axis) { len - 2 } else { len }
    }

    pub fn to_logical(&self, axis: Axis, physical: usize) -> usize {
        if self.loops(axis) {
            let count = self.logical_count(axis) as isize;
            (physical as isize - 1).rem_euclid(count) as usize
        } else {
            physical
        }
    }

    pub fn to_physical(&self, axis: Axis, logical: usize) -> usize {
        if self.loops(axis) { logical + 1 } else { logical }
    }

    /// Real page a clone stands in for, when `physical` is a clone.
    pub fn clone_target(&self, axis: Axis, physical: usize) -> Option<usize> {
        if !self.loops(axis) {
            return None;
        }
        let len = self.axis(axis).len();
        if physical == 0 {
            Some(len - 2)
        } else if physical == len - 1 {
            Some(1)
        } else {
            None
        }
    }

    /// Resting position of a physical page pair.
    pub fn position(&self, page_x: usize, page_y: usize) -> Option<Point> {
        Some(Point::new(self.x.position(page_x)?, self.y.position(page_y)?))
    }

    /// Host-facing description of a physical page pair.
    pub fn page_info(&self, page_x: usize, page_y: usize) -> PageInfo {
        let page_x = page_x.min(self.x.last());
        let page_y = page_y.min(self.y.last());
        PageInfo {
            x: self.x.positions[page_x],
            y: self.y.positions[page_y],
            page_x: self.to_logical(Axis::X, page_x),
            page_y: self.to_logical(Axis::Y, page_y),
        }
    }

    pub fn resolve(
        &self,
        axis: Axis,
        release: SnapRelease,
        options: &SnapOptions,
    ) -> SnapTarget {
        self.axis(axis).resolve(release, options)
    }
}

/// Duration of a snap covering `distance`: the configured speed, else the
/// larger axis distance in ms bounded to `[300, 1000]`.
pub fn snap_duration(distance: Point, speed: Option<Duration>) -> Duration {
    if let Some(speed) = speed {
        return speed;
    }
    let cap = MAX_AUTO_DURATION_MS as f32;
    let ms = distance
        .x
        .abs()
        .min(cap)
        .max(distance.y.abs().min(cap))
        .max(MIN_AUTO_DURATION_MS as f32);
    Duration::from_millis(ms.round() as u64)
}
