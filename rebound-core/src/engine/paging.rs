//! Page, picker and edge-controller commands.

use std::time::Duration;

use rebound_contracts::{Measurer, Renderer};
use rebound_model::{Axis, Easing, PageInfo};
use tracing::{debug, warn};

use super::{Phase, ScrollEngine};
use crate::error::{EngineError, Result, TargetError};
use crate::snap::snap_duration;

impl<M, R> ScrollEngine<M, R>
where
    M: Measurer,
    R: Renderer,
{
    /// Animate to the logical page `(page_x, page_y)`.
    ///
    /// Without a `duration` the configured snap speed applies, else the
    /// distance-based default.
    pub fn go_to_page(
        &mut self,
        page_x: usize,
        page_y: usize,
        duration: Option<Duration>,
        easing: Option<Easing>,
    ) -> Result<()> {
        let Some(pages) = &self.pages else {
            return Err(EngineError::FeatureDisabled("snap"));
        };
        for (axis, requested) in [(Axis::X, page_x), (Axis::Y, page_y)] {
            let count = pages.logical_count(axis);
            if requested >= count {
                warn!(%axis, requested, count, "go_to_page out of range");
                return Err(TargetError::PageOutOfRange {
                    axis,
                    requested,
                    count,
                }
                .into());
            }
        }
        let physical = (
            pages.to_physical(Axis::X, page_x),
            pages.to_physical(Axis::Y, page_y),
        );
        self.go_to_physical(physical, duration, easing);
        Ok(())
    }

    /// Step one page forward. Past the last column the next row starts.
    pub fn next(
        &mut self,
        duration: Option<Duration>,
        easing: Option<Easing>,
    ) -> Result<()> {
        let Some(pages) = &self.pages else {
            return Err(EngineError::FeatureDisabled("snap"));
        };
        let (columns, rows) =
            (pages.axis(Axis::X).len(), pages.axis(Axis::Y).len());
        let (mut x, mut y) = self.page;
        x += 1;
        if x >= columns {
            if y + 1 >= rows {
                debug!("next: already on the last page");
                return Ok(());
            }
            x = 0;
            y += 1;
        }
        self.go_to_physical((x, y), duration, easing);
        Ok(())
    }

    /// Step one page back. Before the first column the previous row ends.
    pub fn prev(
        &mut self,
        duration: Option<Duration>,
        easing: Option<Easing>,
    ) -> Result<()> {
        let Some(pages) = &self.pages else {
            return Err(EngineError::FeatureDisabled("snap"));
        };
        let columns = pages.axis(Axis::X).len();
        let (x, y) = self.page;
        let page = match (x.checked_sub(1), y.checked_sub(1)) {
            (Some(x), _) => (x, y),
            (None, Some(y)) => (columns.saturating_sub(1), y),
            (None, None) => {
                debug!("prev: already on the first page");
                return Ok(());
            }
        };
        self.go_to_physical(page, duration, easing);
        Ok(())
    }

    /// Current page in logical indices with its resting position, or `None`
    /// outside paging mode.
    pub fn current_page(&self) -> Option<PageInfo> {
        self.pages
            .as_ref()
            .map(|pages| pages.page_info(self.page.0, self.page.1))
    }

    /// Animate the picker to item `index` over the wheel adjust time.
    pub fn wheel_to(&mut self, index: usize) -> Result<()> {
        let (Some(wheel), Some(options)) =
            (self.wheel, self.options.wheel.enabled())
        else {
            return Err(EngineError::FeatureDisabled("wheel"));
        };
        if index >= wheel.count() {
            warn!(index, count = wheel.count(), "wheel_to out of range");
            return Err(TargetError::ItemOutOfRange {
                requested: index,
                count: wheel.count(),
            }
            .into());
        }
        let adjust_time = options.adjust_time;
        let target = self.position().with(Axis::Y, wheel.position_of(index));
        self.selected_index = index;
        self.animate_to(
            target,
            adjust_time,
            Easing::QuinticOut,
            Phase::Snapping,
        );
        Ok(())
    }

    /// Picker item the wheel rests on (or is settling onto).
    pub fn selected_index(&self) -> Option<usize> {
        self.wheel.map(|_| self.selected_index)
    }

    /// Base drum rotation in degrees for the current position.
    pub fn wheel_rotation(&self) -> Option<f32> {
        let wheel = self.wheel?;
        let options = self.options.wheel.enabled()?;
        Some(wheel.rotation(self.y.position, options.rotate))
    }

    /// The host finished refreshing: drop the hold and return to the natural
    /// top bound. Returns `false` when no refresh was in progress.
    pub fn finish_pull_down(&mut self) -> bool {
        let Some(pull_down) = self.pull_down.as_mut() else {
            return false;
        };
        if !pull_down.finish() {
            return false;
        }
        debug!("pull-down refresh finished");

        if self.gesture.is_some() {
            // The release bounces onto the natural bound.
            return true;
        }
        let was_animating = self.playback.take().is_some();
        let bounced = self.reset_position(self.options.bounce.time, None);
        if !bounced && was_animating {
            self.finish_motion(None);
        }
        true
    }

    /// The host finished loading: watch the bottom edge again. Returns
    /// `false` when no load was in progress.
    pub fn finish_pull_up(&mut self) -> bool {
        let finished = self
            .pull_up
            .as_mut()
            .is_some_and(|pull_up| pull_up.finish());
        if finished {
            debug!("pull-up load finished");
        }
        finished
    }

    fn go_to_physical(
        &mut self,
        page: (usize, usize),
        duration: Option<Duration>,
        easing: Option<Easing>,
    ) {
        let (Some(pages), Some(snap)) =
            (self.pages.as_ref(), self.options.snap.enabled())
        else {
            return;
        };
        let Some(target) = pages.position(page.0, page.1) else {
            return;
        };
        let distance = target - self.position();
        let duration =
            duration.unwrap_or_else(|| snap_duration(distance, snap.speed));
        let easing = easing.unwrap_or(snap.easing);
        debug!(?page, %target, "go to page");
        self.page = page;
        self.animate_to(target, duration, easing, Phase::Snapping);
    }
}
