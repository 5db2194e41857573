use rebound_config::PullUpOptions;
use rebound_model::{AxisBounds, Direction};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PullUpState {
    #[default]
    Watching,
    /// `PullingUp` was published; waiting for the host to finish loading.
    Waiting,
}

/// Watches the y position approach the bottom edge.
#[derive(Debug, Clone)]
pub struct PullUpController {
    options: PullUpOptions,
    state: PullUpState,
}

impl PullUpController {
    pub fn new(options: PullUpOptions) -> Self {
        Self {
            options,
            state: PullUpState::Watching,
        }
    }

    pub fn state(&self) -> PullUpState {
        self.state
    }

    /// Feed every y position change. Returns `true` once per cycle, when
    /// moving forward brings the content within `threshold` of `min`.
    pub fn observe(
        &mut self,
        position: f32,
        bounds: AxisBounds,
        moving: Direction,
    ) -> bool {
        if self.state == PullUpState::Watching
            && moving == Direction::Forward
            && position <= bounds.min + self.options.threshold
        {
            debug!(position, "pull-up triggered");
            self.state = PullUpState::Waiting;
            return true;
        }
        false
    }

    /// Re-arm after the host finished loading. Returns `true` if a load was
    /// in progress.
    pub fn finish(&mut self) -> bool {
        let was_waiting = self.state == PullUpState::Waiting;
        self.state = PullUpState::Watching;
        was_waiting
    }
}
