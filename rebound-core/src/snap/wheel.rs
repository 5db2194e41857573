//! Picker (wheel) item resolution.

use std::time::Duration;

use rebound_model::{AxisBounds, SnapTarget};

/// Uniformly sized items stacked along the y axis, item `i` resting at
/// `max - i * extent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    extent: f32,
    count: usize,
    bounds: AxisBounds,
    looping: bool,
}

impl WheelLayout {
    /// `extent` must be positive.
    pub fn new(
        extent: f32,
        count: usize,
        bounds: AxisBounds,
        looping: bool,
    ) -> Self {
        Self {
            extent,
            count,
            bounds,
            looping,
        }
    }

    pub fn extent(&self) -> f32 {
        self.extent
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn position_of(&self, index: usize) -> f32 {
        self.bounds
            .clamp(self.bounds.max - index as f32 * self.extent)
    }

    /// Index of the item nearest to `position`.
    pub fn index_at(&self, position: f32) -> usize {
        self.normalize(self.raw_index(position))
    }

    fn raw_index(&self, position: f32) -> isize {
        (-(position - self.bounds.max) / self.extent).round() as isize
    }

    fn normalize(&self, raw: isize) -> usize {
        if self.count == 0 {
            return 0;
        }
        if self.looping {
            raw.rem_euclid(self.count as isize) as usize
        } else {
            raw.clamp(0, self.count as isize - 1) as usize
        }
    }

    /// Item a release settles on. The release is projected
    /// `velocity * adjust_time` further before rounding, so fast flicks skip
    /// several items.
    pub fn resolve(
        &self,
        position: f32,
        velocity: f32,
        adjust_time: Duration,
    ) -> SnapTarget {
        let projected =
            position + velocity * adjust_time.as_secs_f32() * 1000.0;
        let index = self.normalize(self.raw_index(projected));
        SnapTarget::new(index, self.position_of(index))
    }

    /// Base drum rotation in degrees at `position`; item `i` sits at
    /// `base + i * rotate`.
    pub fn rotation(&self, position: f32, rotate: f32) -> f32 {
        (position - self.bounds.max) / self.extent * rotate
    }
}
